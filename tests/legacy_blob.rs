//! Loading blobs written by the older roster variants: null-padded seed
//! arrays, the `address` field name, and records without ids.

use std::fs;
use std::path::Path;

use platform_store::StoreSettings;
use roster::{EMPLOYEES_SLOT, Roster, SlotStore};
use roster_tests::draft;

fn open_with_blob(dir: &Path, blob: &str) -> Roster<SlotStore> {
    let settings = StoreSettings::with_root(dir);
    let slot = settings.slot(EMPLOYEES_SLOT);
    fs::create_dir_all(dir).unwrap();
    fs::write(slot.path(), blob).unwrap();
    Roster::open(SlotStore::new(slot))
}

#[test]
fn null_padded_seed_array_loads_its_actual_records() {
    let dir = tempfile::tempdir().unwrap();
    let roster = open_with_blob(
        dir.path(),
        r#"[null, null, {"name":"Ana","last_name":"Diaz"}, null]"#,
    );
    assert_eq!(roster.len(), 1);
    assert_eq!(roster.records()[0].name, "Ana");
}

#[test]
fn address_variant_records_load_with_canonical_description() {
    let dir = tempfile::tempdir().unwrap();
    let roster = open_with_blob(
        dir.path(),
        r#"[{"name":"Ana","last_name":"Diaz","address":"Calle Falsa 123"}]"#,
    );
    assert_eq!(roster.records()[0].description, "Calle Falsa 123");
}

#[test]
fn records_without_ids_get_minted_ones() {
    let dir = tempfile::tempdir().unwrap();
    let roster = open_with_blob(
        dir.path(),
        r#"[{"name":"Ana","last_name":"Diaz"},{"name":"Bruno","last_name":"Silva"}]"#,
    );
    assert!(!roster.records()[0].id.is_nil());
    assert_ne!(roster.records()[0].id, roster.records()[1].id);
}

#[test]
fn unparsable_blob_is_an_empty_roster() {
    let dir = tempfile::tempdir().unwrap();
    let roster = open_with_blob(dir.path(), "{definitely not json");
    assert!(roster.is_empty());
}

#[test]
fn next_persist_rewrites_the_slot_in_canonical_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut roster = open_with_blob(
        dir.path(),
        r#"[null, {"name":"Ana","last_name":"Diaz","address":"Calle Falsa 123"}]"#,
    );
    roster.add(draft("Bruno", "Silva")).unwrap();

    let raw = fs::read_to_string(roster.store().path()).unwrap();
    let rewritten: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let entries = rewritten.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        assert!(entry.get("id").is_some());
        assert!(entry.get("description").is_some());
        assert!(entry.get("address").is_none());
    }
}
