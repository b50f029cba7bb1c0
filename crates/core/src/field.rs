//! Field definitions for student records.
//!
//! Every text field of a record has a fixed capacity. Values longer than the
//! capacity are cut silently when they enter a record.

use core::fmt;
use core::ops::RangeInclusive;

/// Maximum characters kept for a student id.
pub const ID_MAX_CHARS: usize = 9;
/// Maximum characters kept for a student name.
pub const NAME_MAX_CHARS: usize = 49;
/// Maximum characters kept for a course name.
pub const COURSE_MAX_CHARS: usize = 29;
/// Maximum characters kept for a grades string.
pub const GRADES_MAX_CHARS: usize = 19;

/// Ages accepted at the input boundary. The store itself stores any `i32`.
pub const AGE_RANGE: RangeInclusive<i32> = 1..=120;

/// A field of a student record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Unique identifier, fixed after creation
    Id,
    /// Full name
    Name,
    /// Age in years
    Age,
    /// Enrolled course or program
    Course,
    /// Opaque grades string
    Grades,
}

impl Field {
    /// All fields in on-disk column order.
    pub const ALL: [Field; 5] = [Field::Id, Field::Name, Field::Age, Field::Course, Field::Grades];

    /// Returns the lowercase field name.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Age => "age",
            Field::Course => "course",
            Field::Grades => "grades",
        }
    }

    /// Returns the character capacity of a text field, or None for age.
    pub fn max_chars(&self) -> Option<usize> {
        match self {
            Field::Id => Some(ID_MAX_CHARS),
            Field::Name => Some(NAME_MAX_CHARS),
            Field::Age => None,
            Field::Course => Some(COURSE_MAX_CHARS),
            Field::Grades => Some(GRADES_MAX_CHARS),
        }
    }

    /// Returns whether this field holds text.
    pub fn is_text(&self) -> bool {
        !matches!(self, Field::Age)
    }

    /// Cuts `value` to this field's capacity. Age values pass through.
    pub fn truncate<'a>(&self, value: &'a str) -> &'a str {
        match self.max_chars() {
            Some(max) => truncate_chars(value, max),
            None => value,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns the longest prefix of `value` holding at most `max_chars` characters.
///
/// Cuts on a character boundary, so multi-byte characters are never split.
#[inline]
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}
