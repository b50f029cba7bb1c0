//! Student record structure.
//!
//! This module defines the `StudentRecord` struct, the only entity Roster stores.

use crate::error::{Error, Result};
use crate::field::Field;
use crate::update::RecordUpdate;
use alloc::string::String;

/// Copies `value` into a fresh buffer sized to the field capacity.
fn bounded(field: Field, value: &str) -> Result<String> {
    let kept = field.truncate(value);
    let mut buf = String::new();
    buf.try_reserve_exact(kept.len())
        .map_err(|_| Error::allocation_failed(field))?;
    buf.push_str(kept);
    Ok(buf)
}

/// Overwrites `slot` with `value` cut to the field capacity.
fn overwrite(slot: &mut String, field: Field, value: &str) {
    slot.clear();
    slot.push_str(field.truncate(value));
}

/// A single student.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudentRecord {
    /// Unique identifier. Never changed after construction.
    id: String,
    name: String,
    age: i32,
    course: String,
    grades: String,
}

impl StudentRecord {
    /// Creates a record, cutting each text field to its capacity.
    ///
    /// Fails only if a field buffer cannot be allocated.
    pub fn new(id: &str, name: &str, age: i32, course: &str, grades: &str) -> Result<Self> {
        Ok(Self {
            id: bounded(Field::Id, id)?,
            name: bounded(Field::Name, name)?,
            age,
            course: bounded(Field::Course, course)?,
            grades: bounded(Field::Grades, grades)?,
        })
    }

    /// Returns the student id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the student name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the age.
    #[inline]
    pub fn age(&self) -> i32 {
        self.age
    }

    /// Returns the course.
    #[inline]
    pub fn course(&self) -> &str {
        &self.course
    }

    /// Returns the grades string.
    #[inline]
    pub fn grades(&self) -> &str {
        &self.grades
    }

    /// Sets the name, cutting it to capacity.
    pub fn set_name(&mut self, name: &str) {
        overwrite(&mut self.name, Field::Name, name);
    }

    /// Sets the age.
    #[inline]
    pub fn set_age(&mut self, age: i32) {
        self.age = age;
    }

    /// Sets the course, cutting it to capacity.
    pub fn set_course(&mut self, course: &str) {
        overwrite(&mut self.course, Field::Course, course);
    }

    /// Sets the grades, cutting them to capacity.
    pub fn set_grades(&mut self, grades: &str) {
        overwrite(&mut self.grades, Field::Grades, grades);
    }

    /// Applies every field present in `update`. The id is left alone.
    pub fn apply(&mut self, update: &RecordUpdate) {
        if let Some(name) = update.get_name() {
            self.set_name(name);
        }
        if let Some(age) = update.get_age() {
            self.set_age(age);
        }
        if let Some(course) = update.get_course() {
            self.set_course(course);
        }
        if let Some(grades) = update.get_grades() {
            self.set_grades(grades);
        }
    }

    /// Returns true if the name contains `needle` (case-sensitive).
    #[inline]
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
    }
}
