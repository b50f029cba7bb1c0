//! Roster Persist - Flat-file persistence for the Roster record store.
//!
//! This crate provides:
//!
//! - `codec`: One-line text encoding of a record (`id,name,age,course,grades`)
//! - `file`: Whole-file `save`, `load` and `file_exists`
//! - `backup`: Timestamped backup names and the exit-time `backup_then_save`
//! - `config`: `PersistenceConfig`, the data file and backup naming
//! - `session`: `Session`, the load, edit, backup-and-save lifecycle
//!
//! # Example
//!
//! ```rust
//! use roster_persist::{PersistenceConfig, Session};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let config = PersistenceConfig::in_dir(dir.path());
//!
//! let mut session = Session::open(config.clone()).unwrap();
//! session.add("S1", "Alice", 20, "Physics", "A").unwrap();
//! session.add("S2", "Bob", 22, "Maths", "B").unwrap();
//! assert!(session.close().saved());
//!
//! let session = Session::open(config).unwrap();
//! assert_eq!(session.store().ids(), vec!["S1", "S2"]);
//! ```

pub mod backup;
pub mod codec;
pub mod config;
mod error;
pub mod file;
mod logging;
pub mod session;

pub use backup::{
    backup_then_save, backup_then_save_at, generate_backup_name, BackupStatus, ExitReport,
};
pub use codec::{decode_line, encode_line, parse_age};
pub use config::PersistenceConfig;
pub use error::{PersistError, Result, SessionError};
pub use file::{file_exists, load, save};
pub use logging::setup_logging;
pub use session::Session;
