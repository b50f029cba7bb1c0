//! Timestamped backups and the exit-time backup-then-save protocol.

use crate::error::PersistError;
use crate::file::{file_exists, save};
use chrono::{Local, NaiveDateTime};
use roster_storage::RecordStore;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Timestamp layout inside backup names. Second granularity.
pub const BACKUP_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Formats `prefix_YYYYMMDD_HHMMSS.extension`.
///
/// Two calls within the same second produce the same name.
pub fn generate_backup_name(prefix: &str, extension: &str, now: NaiveDateTime) -> String {
    format!("{}_{}.{}", prefix, now.format(BACKUP_TIMESTAMP_FORMAT), extension)
}

/// What happened to the existing data file before saving.
#[derive(Debug)]
pub enum BackupStatus {
    /// No data file existed.
    Skipped,
    /// The data file was renamed to this path.
    Created(PathBuf),
    /// The rename failed; the save still ran.
    Failed(PersistError),
}

impl BackupStatus {
    /// Returns the backup path if one was created.
    pub fn path(&self) -> Option<&Path> {
        match self {
            BackupStatus::Created(path) => Some(path),
            _ => None,
        }
    }
}

/// Outcome of `backup_then_save`.
#[derive(Debug)]
pub struct ExitReport {
    pub backup: BackupStatus,
    pub save: Result<(), PersistError>,
}

impl ExitReport {
    /// Returns true if the old data file was moved to a backup.
    pub fn backed_up(&self) -> bool {
        matches!(self.backup, BackupStatus::Created(_))
    }

    /// Returns true if the store was written to the data file.
    pub fn saved(&self) -> bool {
        self.save.is_ok()
    }

    /// Returns the save result, dropping the backup status.
    pub fn into_result(self) -> Result<(), PersistError> {
        self.save
    }
}

/// Moves the existing data file aside and writes the store in its place.
///
/// Uses local wall-clock time for the backup name.
pub fn backup_then_save(
    main_path: impl AsRef<Path>,
    store: &RecordStore,
    backup_prefix: &str,
    backup_extension: &str,
) -> ExitReport {
    backup_then_save_at(
        main_path,
        store,
        backup_prefix,
        backup_extension,
        Local::now().naive_local(),
    )
}

/// Like `backup_then_save`, with an explicit timestamp for the backup name.
pub fn backup_then_save_at(
    main_path: impl AsRef<Path>,
    store: &RecordStore,
    backup_prefix: &str,
    backup_extension: &str,
    now: NaiveDateTime,
) -> ExitReport {
    let main_path = main_path.as_ref();

    let backup = if file_exists(main_path) {
        let target = PathBuf::from(generate_backup_name(backup_prefix, backup_extension, now));
        match fs::rename(main_path, &target) {
            Ok(()) => {
                info!(backup = %target.display(), "created backup");
                BackupStatus::Created(target)
            }
            Err(source) => {
                warn!(path = %main_path.display(), error = %source, "failed to create backup file");
                BackupStatus::Failed(PersistError::Rename {
                    from: main_path.to_path_buf(),
                    to: target,
                    source,
                })
            }
        }
    } else {
        BackupStatus::Skipped
    };

    let save = save(main_path, store);
    if let Err(err) = &save {
        error!(error = %err, "failed to save student data");
    }

    ExitReport { backup, save }
}
