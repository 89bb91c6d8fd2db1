use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use crate::codec::RecordKind;
use crate::error::StoreError;
use crate::store::SnapshotStore;

/// Keeps snapshot texts in memory. Handy for tests and for running without
/// a data directory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    texts: RefCell<HashMap<RecordKind, String>>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose writes always fail, for exercising save-failure paths.
    pub fn read_only() -> Self {
        Self {
            texts: RefCell::default(),
            read_only: true,
        }
    }

    pub fn with_text(self, kind: RecordKind, text: &str) -> Self {
        self.texts.borrow_mut().insert(kind, text.to_string());
        self
    }

    pub fn text(&self, kind: RecordKind) -> Option<String> {
        self.texts.borrow().get(&kind).cloned()
    }
}

impl SnapshotStore for MemoryStore {
    fn read_text(&self, kind: RecordKind) -> Result<Option<String>, StoreError> {
        Ok(self.text(kind))
    }

    fn write_text(&self, kind: RecordKind, text: &str) -> Result<(), StoreError> {
        if self.read_only {
            return Err(StoreError::Write {
                path: PathBuf::from(format!("memory:{}", kind.default_file_name())),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"),
            });
        }
        self.texts.borrow_mut().insert(kind, text.to_string());
        Ok(())
    }
}
