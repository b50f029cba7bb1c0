//! Record storage for Roster.
//!
//! This module provides the `RecordStore` struct which owns the ordered
//! collection of student records for one session. Lookups are linear scans in
//! insertion order.

use alloc::vec::Vec;
use core::slice;
use roster_core::{Error, RecordUpdate, Result, StudentRecord};

/// Ordered, owning collection of student records.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Creates an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record at the tail.
    ///
    /// Does not check id uniqueness; callers consult `contains_id` first or
    /// use `insert`.
    pub fn append(&mut self, record: StudentRecord) {
        self.records.push(record);
    }

    /// Appends a record after checking that its id is not already stored.
    pub fn insert(&mut self, record: StudentRecord) -> Result<()> {
        if self.contains_id(record.id()) {
            return Err(Error::duplicate_id(record.id()));
        }
        self.append(record);
        Ok(())
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }

    /// Removes the first record with `id` and returns it.
    ///
    /// Returns None and leaves the store untouched if no record matches.
    pub fn delete_by_id(&mut self, id: &str) -> Option<StudentRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Applies a partial update to the record with `id`.
    ///
    /// Returns false without mutating anything if no record matches.
    pub fn update_by_id(&mut self, id: &str, update: &RecordUpdate) -> bool {
        match self.find_by_id_mut(id) {
            Some(record) => {
                record.apply(update);
                true
            }
            None => false,
        }
    }

    /// Gets the first record with `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Gets a mutable reference to the first record with `id`.
    ///
    /// Setters on the record cannot change its id.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut StudentRecord> {
        self.records.iter_mut().find(|r| r.id() == id)
    }

    /// Returns every record whose name contains `needle`, in insertion order.
    /// An empty needle matches all records.
    pub fn find_by_name(&self, needle: &str) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|r| r.name_contains(needle))
            .collect()
    }

    /// Checks if a record with `id` is stored.
    #[inline]
    pub fn contains_id(&self, id: &str) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Returns an iterator over all records in insertion order.
    pub fn iter(&self) -> slice::Iter<'_, StudentRecord> {
        self.records.iter()
    }

    /// Returns all records in insertion order.
    #[inline]
    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Returns all record ids in insertion order.
    pub fn ids(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.id()).collect()
    }

    /// Releases every record. Safe to call on an empty store.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a StudentRecord;
    type IntoIter = slice::Iter<'a, StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for RecordStore {
    type Item = StudentRecord;
    type IntoIter = alloc::vec::IntoIter<StudentRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl FromIterator<StudentRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = StudentRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl Extend<StudentRecord> for RecordStore {
    fn extend<I: IntoIterator<Item = StudentRecord>>(&mut self, iter: I) {
        self.records.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec;

    fn record(id: &str, name: &str) -> StudentRecord {
        StudentRecord::new(id, name, 20, "Physics", "A").unwrap()
    }

    fn test_store() -> RecordStore {
        let mut store = RecordStore::new();
        store.append(record("S1", "Alice Smith"));
        store.append(record("S2", "Bob Jones"));
        store.append(record("S3", "Carol Smithers"));
        store
    }

    #[test]
    fn test_record_store_append() {
        let mut store = RecordStore::new();
        assert!(store.is_empty());
        store.append(record("S1", "Alice"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.ids(), vec!["S1"]);
    }

    #[test]
    fn test_record_store_insertion_order() {
        let store = test_store();
        assert_eq!(store.ids(), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_record_store_insert_rejects_duplicate() {
        let mut store = test_store();
        let result = store.insert(record("S2", "Impostor"));
        assert_eq!(result, Err(Error::duplicate_id("S2")));
        assert_eq!(store.len(), 3);
        assert_eq!(store.find_by_id("S2").unwrap().name(), "Bob Jones");
    }

    #[test]
    fn test_record_store_create_then_find() {
        let mut store = RecordStore::new();
        let long_name = "a".repeat(80);
        store
            .insert(StudentRecord::new("S123456789X", &long_name, 44, "Maths", "B").unwrap())
            .unwrap();

        let found = store.find_by_id("S12345678").unwrap();
        assert_eq!(found.name(), "a".repeat(49));
        assert_eq!(found.age(), 44);
        assert!(store.find_by_id("S123456789X").is_none());
    }

    #[test]
    fn test_record_store_contains_id() {
        let mut store = RecordStore::new();
        assert!(!store.contains_id("S1"));
        store.append(record("S1", "Alice"));
        assert!(store.contains_id("S1"));
        store.delete_by_id("S1");
        assert!(!store.contains_id("S1"));
    }

    #[test]
    fn test_record_store_delete_head() {
        let mut store = test_store();
        let removed = store.delete_by_id("S1").unwrap();
        assert_eq!(removed.id(), "S1");
        assert_eq!(store.ids(), vec!["S2", "S3"]);
    }

    #[test]
    fn test_record_store_delete_middle() {
        let mut store = test_store();
        store.delete_by_id("S2").unwrap();
        assert_eq!(store.ids(), vec!["S1", "S3"]);
    }

    #[test]
    fn test_record_store_delete_tail() {
        let mut store = test_store();
        store.delete_by_id("S3").unwrap();
        assert_eq!(store.ids(), vec!["S1", "S2"]);
    }

    #[test]
    fn test_record_store_delete_missing() {
        let mut store = test_store();
        let before = store.clone();
        assert!(store.delete_by_id("S9").is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_record_store_delete_from_empty() {
        let mut store = RecordStore::new();
        assert!(store.delete_by_id("S1").is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_store_update_partial() {
        let mut store = test_store();
        assert!(store.update_by_id("S2", &RecordUpdate::new().age(42)));

        let updated = store.find_by_id("S2").unwrap();
        assert_eq!(updated.id(), "S2");
        assert_eq!(updated.name(), "Bob Jones");
        assert_eq!(updated.age(), 42);
        assert_eq!(updated.course(), "Physics");
        assert_eq!(updated.grades(), "A");
    }

    #[test]
    fn test_record_store_update_all_fields() {
        let mut store = test_store();
        let update = RecordUpdate::new()
            .name("Robert Jones")
            .age(30)
            .course("Chemistry")
            .grades("B+");
        assert!(store.update_by_id("S2", &update));

        let updated = store.find_by_id("S2").unwrap();
        assert_eq!(updated.id(), "S2");
        assert_eq!(updated.name(), "Robert Jones");
        assert_eq!(updated.age(), 30);
        assert_eq!(updated.course(), "Chemistry");
        assert_eq!(updated.grades(), "B+");
        // Update never reorders.
        assert_eq!(store.ids(), vec!["S1", "S2", "S3"]);
    }

    #[test]
    fn test_record_store_update_missing() {
        let mut store = test_store();
        let before = store.clone();
        assert!(!store.update_by_id("S9", &RecordUpdate::new().name("Nobody")));
        assert_eq!(store, before);
    }

    #[test]
    fn test_record_store_update_truncates() {
        let mut store = test_store();
        assert!(store.update_by_id("S1", &RecordUpdate::new().grades("G".repeat(25))));
        assert_eq!(store.find_by_id("S1").unwrap().grades(), "G".repeat(19));
    }

    #[test]
    fn test_record_store_find_by_name_multiple() {
        let store = test_store();
        let ids: Vec<&str> = store.find_by_name("Smith").into_iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["S1", "S3"]);
    }

    #[test]
    fn test_record_store_find_by_name_empty_needle() {
        let store = test_store();
        assert_eq!(store.find_by_name("").len(), 3);
    }

    #[test]
    fn test_record_store_find_by_name_no_match() {
        let store = test_store();
        assert!(store.find_by_name("xyz-no-match").is_empty());
        // Case-sensitive.
        assert!(store.find_by_name("smith").is_empty());
    }

    #[test]
    fn test_record_store_find_first_duplicate() {
        // Duplicates can only enter through `append`; lookups return the first.
        let mut store = RecordStore::new();
        store.append(record("S1", "First"));
        store.append(record("S1", "Second"));
        assert_eq!(store.find_by_id("S1").unwrap().name(), "First");
        store.delete_by_id("S1");
        assert_eq!(store.find_by_id("S1").unwrap().name(), "Second");
    }

    #[test]
    fn test_record_store_clear() {
        let mut store = test_store();
        store.clear();
        assert!(store.is_empty());
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_record_store_iter() {
        let store = test_store();
        let names: Vec<&str> = store.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Alice Smith", "Bob Jones", "Carol Smithers"]);
        assert_eq!((&store).into_iter().count(), store.records().len());
    }

    #[test]
    fn test_record_store_from_iter() {
        let store: RecordStore = (1..=4)
            .map(|i| record(&format!("S{}", i), "Name"))
            .collect();
        assert_eq!(store.ids(), vec!["S1", "S2", "S3", "S4"]);

        let mut extended = RecordStore::with_capacity(8);
        extended.extend(store);
        assert_eq!(extended.len(), 4);
    }
}
