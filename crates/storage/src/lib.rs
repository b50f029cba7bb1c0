//! Roster Storage - In-memory record store for Roster.
//!
//! This crate provides `RecordStore`, the ordered collection of student
//! records for one session: append, checked insert, delete, partial update,
//! lookup by id, name substring search and enumeration. All lookups are
//! linear scans in insertion order.
//!
//! # Example
//!
//! ```rust
//! use roster_core::{RecordUpdate, StudentRecord};
//! use roster_storage::RecordStore;
//!
//! let mut store = RecordStore::new();
//! store.insert(StudentRecord::new("S1", "Alice", 20, "Physics", "A").unwrap()).unwrap();
//! store.insert(StudentRecord::new("S2", "Bob", 22, "Maths", "B").unwrap()).unwrap();
//!
//! assert!(store.update_by_id("S2", &RecordUpdate::new().age(23)));
//! assert_eq!(store.find_by_id("S2").unwrap().age(), 23);
//!
//! store.delete_by_id("S1");
//! assert_eq!(store.ids(), vec!["S2"]);
//! ```

#![no_std]

extern crate alloc;

pub mod record_store;

pub use record_store::RecordStore;
