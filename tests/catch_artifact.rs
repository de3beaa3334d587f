// tests/catch_artifact.rs
//
// The catch-rate artifact, built from a captured API record instead of
// a live fetch.

use std::fs;

use dexgen::file;
use dexgen::specs::catch_rates::{CatchRateTable, SpeciesRecord};

#[test]
fn fetched_record_lands_in_the_artifact() {
    let record: SpeciesRecord =
        serde_json::from_str(r#"{"capture_rate": 45, "name": "bulbasaur", "order": 1}"#).unwrap();

    let mut table = CatchRateTable::new();
    table.insert(1, record.capture_rate);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catchrates.json");
    file::write_catch_rates(&path, &table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(text, "{\n  \"1\": 45\n}\n");
}

#[test]
fn not_found_ids_leave_gaps() {
    let mut table = CatchRateTable::new();
    table.insert(1, 45);
    // id 2 returned 404 and was never inserted
    table.insert(3, 45);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catchrates.json");
    file::write_catch_rates(&path, &table).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"1\": 45"));
    assert!(!text.contains("\"2\""));
    assert!(text.contains("\"3\": 45"));
}
