use crate::codec::{parse_snapshot, render_snapshot, Record, RecordKind, Snapshot};
use crate::error::StoreError;

/// Backing medium for the two snapshot files.
///
/// Implementors only move whole texts in and out; rendering and parsing are
/// shared through the provided `save` and `load`.
pub trait SnapshotStore {
    /// Current text of a collection, or `None` when nothing was ever saved.
    fn read_text(&self, kind: RecordKind) -> Result<Option<String>, StoreError>;

    /// Replace the whole text of a collection.
    fn write_text(&self, kind: RecordKind, text: &str) -> Result<(), StoreError>;

    fn save<T: Record>(&self, records: &[T]) -> Result<(), StoreError> {
        self.write_text(T::KIND, &render_snapshot(records))?;
        log::debug!("saved {} {} record(s)", records.len(), T::KIND);
        Ok(())
    }

    fn load<T: Record>(&self) -> Result<Snapshot<T>, StoreError> {
        match self.read_text(T::KIND)? {
            Some(text) => Ok(parse_snapshot(&text)),
            None => {
                log::info!("no saved {} data, starting empty", T::KIND);
                Ok(Snapshot::default())
            }
        }
    }
}
