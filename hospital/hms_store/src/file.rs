use std::fs::{create_dir_all, read, write};
use std::io;
use std::path::{Path, PathBuf};

use crate::codec::RecordKind;
use crate::error::StoreError;
use crate::store::SnapshotStore;

/// Stores each collection as a delimited text file inside one directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    patient_file: String,
    doctor_file: String,
}

impl FileStore {
    /// Store using the default file names (`patients.csv`, `doctors.csv`).
    /// The directory is created on first save, not here.
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            patient_file: RecordKind::Patients.default_file_name().to_string(),
            doctor_file: RecordKind::Doctors.default_file_name().to_string(),
        }
    }

    pub fn with_file_names(mut self, patient_file: &str, doctor_file: &str) -> Self {
        self.patient_file = patient_file.to_string();
        self.doctor_file = doctor_file.to_string();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: RecordKind) -> PathBuf {
        match kind {
            RecordKind::Patients => self.dir.join(&self.patient_file),
            RecordKind::Doctors => self.dir.join(&self.doctor_file),
        }
    }
}

impl SnapshotStore for FileStore {
    fn read_text(&self, kind: RecordKind) -> Result<Option<String>, StoreError> {
        let path = self.path_for(kind);
        match read(&path) {
            Ok(bytes) => Ok(Some(decode_text(&path, bytes))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn write_text(&self, kind: RecordKind, text: &str) -> Result<(), StoreError> {
        create_dir_all(&self.dir).map_err(|source| StoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;
        let path = self.path_for(kind);
        write(&path, text).map_err(|source| StoreError::Write { path, source })
    }
}

// Bytes that are not UTF-8 only damage the row they sit in; the rest of the
// file still loads.
fn decode_text(path: &Path, bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::warn!(
                "'{}' is not valid UTF-8, replacing invalid bytes",
                path.display()
            );
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
