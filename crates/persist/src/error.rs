//! Error types for Roster persistence and sessions.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistError>;

/// Errors raised while reading, writing or renaming the data file.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("Could not open {} : {source}", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("Failed to read {} : {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to write {} : {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("Failed to rename {} to {} : {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl PersistError {
    /// Returns the kind of the underlying I/O error.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            PersistError::Open { source, .. }
            | PersistError::Read { source, .. }
            | PersistError::Write { source, .. }
            | PersistError::Rename { source, .. } => source.kind(),
        }
    }
}

/// Errors returned by `Session` operations.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Record(#[from] roster_core::Error),

    #[error(transparent)]
    Persist(#[from] PersistError),
}
