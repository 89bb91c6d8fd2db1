//! Interactive front end for the hospital registry: configuration, the
//! line-oriented input sources and the menu shell.
pub mod config;
pub mod input;
pub mod report;
pub mod shell;

pub use config::{ConfigError, HmsConfig};
pub use input::{EditorInput, InputSource, Line, LineInput};
pub use report::write_report;
pub use shell::Shell;
