//! Roster Core - Core types for the Roster student record store.
//!
//! This crate provides the foundational types shared by the store and the
//! persistence layer:
//!
//! - `Field`: The text fields of a record and their fixed capacities
//! - `StudentRecord`: A single student with id, name, age, course and grades
//! - `RecordUpdate`: A partial update where every mutable field is optional
//! - `Error`: Error types for record operations
//!
//! # Example
//!
//! ```rust
//! use roster_core::{RecordUpdate, StudentRecord, NAME_MAX_CHARS};
//!
//! let mut record = StudentRecord::new("S1", "Alice", 20, "Physics", "A").unwrap();
//! assert_eq!(record.id(), "S1");
//!
//! // Text fields are silently cut to their capacity.
//! let long_name = "x".repeat(NAME_MAX_CHARS + 5);
//! record.apply(&RecordUpdate::new().name(long_name).age(21));
//! assert_eq!(record.name().chars().count(), NAME_MAX_CHARS);
//! assert_eq!(record.age(), 21);
//! ```

#![no_std]

extern crate alloc;

mod error;
mod field;
mod record;
mod update;

pub use error::{Error, Result};
pub use field::{
    truncate_chars, Field, AGE_RANGE, COURSE_MAX_CHARS, GRADES_MAX_CHARS, ID_MAX_CHARS,
    NAME_MAX_CHARS,
};
pub use record::StudentRecord;
pub use update::RecordUpdate;
