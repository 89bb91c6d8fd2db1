use std::io::{self, BufRead};

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;

/// One answer from the person at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The current prompt was abandoned (Ctrl-C).
    Interrupted,
    /// No more input will arrive.
    Eof,
}

/// Where the menu shell gets its answers from.
pub trait InputSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Line>;
}

/// Line editor with history, for interactive terminals.
pub struct EditorInput {
    editor: Editor<(), DefaultHistory>,
}

impl EditorInput {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: Editor::new()?,
        })
    }
}

impl InputSource for EditorInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Line> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = self.editor.add_history_entry(trimmed);
                }
                Ok(Line::Text(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Line::Interrupted),
            Err(ReadlineError::Eof) => Ok(Line::Eof),
            Err(ReadlineError::Io(e)) => Err(e),
            Err(e) => Err(io::Error::new(io::ErrorKind::Other, e.to_string())),
        }
    }
}

/// Plain buffered lines, for piped stdin and tests. Prompts are not echoed.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> InputSource for LineInput<R> {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Line> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(Line::Eof);
        }
        let line = buf.trim_end_matches(['\n', '\r']).to_string();
        Ok(Line::Text(line))
    }
}
