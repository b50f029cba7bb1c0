//! A single operator session over one data file.
//!
//! `Session::open` loads the store, the CRUD methods mutate it in memory with
//! the same input checks an interactive front end applies, and
//! `Session::close` runs backup-then-save. Nothing touches the disk between
//! open and close.

use crate::backup::{backup_then_save, backup_then_save_at, ExitReport};
use crate::config::PersistenceConfig;
use crate::error::{PersistError, SessionError};
use crate::file::load;
use chrono::NaiveDateTime;
use roster_core::{Error, Field, RecordUpdate, StudentRecord, AGE_RANGE};
use roster_storage::RecordStore;
use tracing::{debug, info};

type Result<T> = std::result::Result<T, SessionError>;

/// Checks the part of `value` that survives truncation.
fn check_text(field: Field, value: &str) -> roster_core::Result<()> {
    let kept = field.truncate(value);
    if kept.trim().is_empty() {
        return Err(Error::invalid_field(field, "must not be blank"));
    }
    if kept.contains(['\n', '\r']) {
        return Err(Error::invalid_field(field, "must not contain line breaks"));
    }
    Ok(())
}

fn check_age(age: i32) -> roster_core::Result<()> {
    if !AGE_RANGE.contains(&age) {
        return Err(Error::invalid_age(age));
    }
    Ok(())
}

fn check_update(update: &RecordUpdate) -> roster_core::Result<()> {
    if let Some(name) = update.get_name() {
        check_text(Field::Name, name)?;
    }
    if let Some(age) = update.get_age() {
        check_age(age)?;
    }
    if let Some(course) = update.get_course() {
        check_text(Field::Course, course)?;
    }
    if let Some(grades) = update.get_grades() {
        check_text(Field::Grades, grades)?;
    }
    Ok(())
}

/// An open session: a loaded store plus where to write it back.
#[derive(Debug)]
pub struct Session {
    config: PersistenceConfig,
    store: RecordStore,
}

impl Session {
    /// Loads the configured data file. A missing file opens an empty session.
    pub fn open(config: PersistenceConfig) -> std::result::Result<Self, PersistError> {
        let store = load(&config.data_file)?;
        info!(path = %config.data_file.display(), records = store.len(), "session opened");
        Ok(Self { config, store })
    }

    /// Wraps an existing store without reading the disk.
    pub fn with_store(config: PersistenceConfig, store: RecordStore) -> Self {
        Self { config, store }
    }

    pub fn config(&self) -> &PersistenceConfig {
        &self.config
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Adds a student after validating every field.
    ///
    /// Text must not be blank or hold a line break once cut to capacity, age
    /// must be in `AGE_RANGE`, and the truncated id must be new. The store is
    /// unchanged on error.
    pub fn add(&mut self, id: &str, name: &str, age: i32, course: &str, grades: &str) -> Result<()> {
        check_text(Field::Id, id)?;
        check_text(Field::Name, name)?;
        check_age(age)?;
        check_text(Field::Course, course)?;
        check_text(Field::Grades, grades)?;

        let record = StudentRecord::new(id, name, age, course, grades)?;
        self.store.insert(record)?;
        debug!(id, "student added");
        Ok(())
    }

    /// Applies a validated partial update and returns the updated record.
    pub fn modify(&mut self, id: &str, update: &RecordUpdate) -> Result<&StudentRecord> {
        check_update(update)?;
        match self.store.find_by_id_mut(id) {
            Some(record) => {
                record.apply(update);
                debug!(id, "student modified");
                Ok(&*record)
            }
            None => Err(Error::not_found(id).into()),
        }
    }

    /// Removes a student and returns the removed record.
    pub fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        let removed = self
            .store
            .delete_by_id(id)
            .ok_or_else(|| Error::not_found(id))?;
        debug!(id, "student deleted");
        Ok(removed)
    }

    pub fn find_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.store.find_by_id(id)
    }

    /// Name substring search, in insertion order.
    pub fn search_by_name(&self, needle: &str) -> Vec<&StudentRecord> {
        self.store.find_by_name(needle)
    }

    /// All students in insertion order.
    pub fn list(&self) -> &[StudentRecord] {
        self.store.records()
    }

    /// Backs up the data file and writes the store, ending the session.
    pub fn close(self) -> ExitReport {
        let report = backup_then_save(
            &self.config.data_file,
            &self.store,
            &self.config.backup_prefix,
            &self.config.backup_extension,
        );
        info!(backed_up = report.backed_up(), saved = report.saved(), "session closed");
        report
    }

    /// Like `close`, with an explicit timestamp for the backup name.
    pub fn close_at(self, now: NaiveDateTime) -> ExitReport {
        let report = backup_then_save_at(
            &self.config.data_file,
            &self.store,
            &self.config.backup_prefix,
            &self.config.backup_extension,
            now,
        );
        info!(backed_up = report.backed_up(), saved = report.saved(), "session closed");
        report
    }
}
