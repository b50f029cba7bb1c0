//! File locations for a Roster session.

use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};

use crate::backup::generate_backup_name;

/// Default data file name.
pub const DEFAULT_DATA_FILE: &str = "students.dat";
/// Default prefix for backup file names.
pub const DEFAULT_BACKUP_PREFIX: &str = "students_backup";
/// Default extension for backup file names.
pub const DEFAULT_BACKUP_EXTENSION: &str = "dat";

/// Where a session reads and writes its data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersistenceConfig {
    /// The data file loaded at open and rewritten at close.
    pub data_file: PathBuf,
    /// Backup name prefix. May include a directory.
    pub backup_prefix: String,
    /// Backup name extension, without the dot.
    pub backup_extension: String,
}

impl Default for PersistenceConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            backup_prefix: DEFAULT_BACKUP_PREFIX.to_string(),
            backup_extension: DEFAULT_BACKUP_EXTENSION.to_string(),
        }
    }
}

impl PersistenceConfig {
    /// Creates a config for `data_file` with the default backup naming.
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
            ..Self::default()
        }
    }

    /// Places the default data file and its backups inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            data_file: dir.join(DEFAULT_DATA_FILE),
            backup_prefix: dir.join(DEFAULT_BACKUP_PREFIX).to_string_lossy().into_owned(),
            backup_extension: DEFAULT_BACKUP_EXTENSION.to_string(),
        }
    }

    pub fn with_backup_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.backup_prefix = prefix.into();
        self
    }

    pub fn with_backup_extension(mut self, extension: impl Into<String>) -> Self {
        self.backup_extension = extension.into();
        self
    }

    /// Returns the backup path that would be used at `now`.
    pub fn backup_path(&self, now: NaiveDateTime) -> PathBuf {
        PathBuf::from(generate_backup_name(
            &self.backup_prefix,
            &self.backup_extension,
            now,
        ))
    }
}
