use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use hms_store::FileStore;
use serde::Deserialize;

pub const DEFAULT_CONFIG_FILE: &str = "hms.toml";

/// Settings read from `hms.toml`. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HmsConfig {
    /// Directory holding the patient and doctor files.
    pub data_dir: PathBuf,
    pub patient_file: String,
    pub doctor_file: String,
    /// Default log filter when neither `-v` nor `RUST_LOG` is given.
    pub log_level: String,
}

impl Default for HmsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            patient_file: "patients.csv".to_string(),
            doctor_file: "doctors.csv".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config '{}': {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl HmsConfig {
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Read the config at `path`. A missing file yields the defaults unless
    /// the caller named the file explicitly.
    pub fn load(path: &Path, explicit: bool) -> Result<Self, ConfigError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !explicit => {
                log::debug!("no config at '{}', using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn file_store(&self) -> FileStore {
        FileStore::new(&self.data_dir).with_file_names(&self.patient_file, &self.doctor_file)
    }
}

/// Commented starting point written by `hms init`.
pub fn generate_config() -> String {
    let defaults = HmsConfig::default();
    let mut out = String::new();
    out.push_str("# Hospital record manager settings\n\n");
    out.push_str("# Directory holding the patient and doctor files\n");
    out.push_str(&format!("data_dir = \"{}\"\n", defaults.data_dir.display()));
    out.push_str(&format!("patient_file = \"{}\"\n", defaults.patient_file));
    out.push_str(&format!("doctor_file = \"{}\"\n", defaults.doctor_file));
    out.push_str("\n# error, warn, info, debug or trace (RUST_LOG and -v take precedence)\n");
    out.push_str(&format!("log_level = \"{}\"\n", defaults.log_level));
    out
}
