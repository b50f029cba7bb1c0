//! Error types for Roster record operations.

use crate::field::Field;
use alloc::string::String;
use core::fmt;

/// Result type alias for Roster operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types for Roster record operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A field buffer could not be allocated.
    AllocationFailed {
        field: Field,
    },
    /// A record with this id is already stored.
    DuplicateId {
        id: String,
    },
    /// No record with this id.
    NotFound {
        id: String,
    },
    /// A text field was rejected at the input boundary.
    InvalidField {
        field: Field,
        message: String,
    },
    /// Age outside the accepted range.
    InvalidAge {
        age: i32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::AllocationFailed { field } => {
                write!(f, "Memory allocation failed for field: {}", field)
            }
            Error::DuplicateId { id } => {
                write!(f, "A student with ID {} already exists", id)
            }
            Error::NotFound { id } => {
                write!(f, "No student found with ID {}", id)
            }
            Error::InvalidField { field, message } => {
                write!(f, "Invalid {}: {}", field, message)
            }
            Error::InvalidAge { age } => {
                write!(f, "Invalid age {}: expected a value between 1 and 120", age)
            }
        }
    }
}

impl core::error::Error for Error {}

impl Error {
    /// Creates an allocation failure error.
    pub fn allocation_failed(field: Field) -> Self {
        Error::AllocationFailed { field }
    }

    /// Creates a duplicate id error.
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Error::DuplicateId { id: id.into() }
    }

    /// Creates a not found error.
    pub fn not_found(id: impl Into<String>) -> Self {
        Error::NotFound { id: id.into() }
    }

    /// Creates an invalid field error.
    pub fn invalid_field(field: Field, message: impl Into<String>) -> Self {
        Error::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Creates an invalid age error.
    pub fn invalid_age(age: i32) -> Self {
        Error::InvalidAge { age }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn test_error_display() {
        let err = Error::duplicate_id("S1");
        assert!(err.to_string().contains("S1"));

        let err = Error::not_found("S9");
        assert!(err.to_string().contains("S9"));

        let err = Error::invalid_age(130);
        assert!(err.to_string().contains("130"));

        let err = Error::allocation_failed(Field::Name);
        assert!(err.to_string().contains("name"));
    }

    #[test]
    fn test_error_constructors() {
        let err = Error::invalid_field(Field::Course, "must not be blank");
        match err {
            Error::InvalidField { field, message } => {
                assert_eq!(field, Field::Course);
                assert_eq!(message, "must not be blank");
            }
            _ => panic!("Wrong error type"),
        }
    }
}
