//! Partial record updates.

use alloc::string::String;

/// A partial update to a student record.
///
/// Each mutable field is optional; absent fields are left untouched. The id
/// cannot be part of an update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    name: Option<String>,
    age: Option<i32>,
    course: Option<String>,
    grades: Option<String>,
}

impl RecordUpdate {
    /// Creates an update that changes nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a new name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a new age.
    pub fn age(mut self, age: i32) -> Self {
        self.age = Some(age);
        self
    }

    /// Sets a new course.
    pub fn course(mut self, course: impl Into<String>) -> Self {
        self.course = Some(course.into());
        self
    }

    /// Sets new grades.
    pub fn grades(mut self, grades: impl Into<String>) -> Self {
        self.grades = Some(grades.into());
        self
    }

    pub fn get_name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn get_age(&self) -> Option<i32> {
        self.age
    }

    pub fn get_course(&self) -> Option<&str> {
        self.course.as_deref()
    }

    pub fn get_grades(&self) -> Option<&str> {
        self.grades.as_deref()
    }

    /// Returns true if the update carries no field.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.course.is_none() && self.grades.is_none()
    }
}
