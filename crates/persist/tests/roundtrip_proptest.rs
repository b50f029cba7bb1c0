//! Property-based save/load round trips.

use proptest::prelude::*;
use roster_core::StudentRecord;
use roster_persist::{decode_line, encode_line, load, save};
use roster_storage::RecordStore;
use tempfile::tempdir;

/// Non-empty text without the delimiter or line breaks.
fn field(max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[A-Za-z0-9 .+éü-]{{1,{}}}", max)).unwrap()
}

fn record() -> impl Strategy<Value = StudentRecord> {
    (field(12), field(60), any::<i32>(), field(35), field(25)).prop_map(
        |(id, name, age, course, grades)| {
            StudentRecord::new(&id, &name, age, &course, &grades).unwrap()
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Test that a single line decodes back to the record that produced it.
    #[test]
    fn line_round_trip(record in record()) {
        prop_assert_eq!(decode_line(&encode_line(&record)), Some(record));
    }

    /// Test that load(save(store)) reproduces every record in order.
    #[test]
    fn file_round_trip(records in prop::collection::vec(record(), 0..40)) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("students.dat");
        let store: RecordStore = records.into_iter().collect();

        save(&path, &store).unwrap();
        let loaded = load(&path).unwrap();
        prop_assert_eq!(loaded, store);
    }
}
