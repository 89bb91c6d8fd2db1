//! Snapshot persistence for patients and doctors.
//!
//! Each collection lives in one comma-delimited text file with a header row.
//! Saving rewrites the whole file; there is no append log and no locking, so a
//! store must have a single writer. Loading skips malformed rows with a
//! warning instead of failing.
//!
//! What is persisted:
//! - patients: id, name, age, contact, admission status, room type
//! - doctors: id, name, department, outstanding appointment count
//!
//! Medical history, pending tests and appointment queues are not persisted.
pub mod codec;
pub mod error;
pub mod file;
pub mod memory;
pub mod store;

pub use codec::{parse_snapshot, render_snapshot, Record, RecordKind, Snapshot, MAX_LOADED_ID};
pub use error::{RowError, StoreError};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use store::SnapshotStore;
