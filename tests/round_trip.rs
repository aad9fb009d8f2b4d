//! Restart scenarios: every mutation must survive a reopen of the slot.

use std::path::Path;

use platform_store::StoreSettings;
use roster::{EMPLOYEES_SLOT, Roster, SlotStore};
use roster_tests::{ana, draft};

fn open(dir: &Path) -> Roster<SlotStore> {
    let settings = StoreSettings::with_root(dir);
    Roster::open(SlotStore::new(settings.slot(EMPLOYEES_SLOT)))
}

#[test]
fn fresh_state_dir_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    assert!(open(dir.path()).is_empty());
}

#[test]
fn restart_reproduces_the_persisted_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let before = {
        let mut roster = open(dir.path());
        roster.add(ana()).unwrap();
        roster.add(draft("Bruno", "Silva")).unwrap();
        roster.records().to_vec()
    };
    let reopened = open(dir.path());
    assert_eq!(reopened.records(), before.as_slice());
}

#[test]
fn committed_edit_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut roster = open(dir.path());
        roster.add(ana()).unwrap();
        let mut buffer = roster.begin_edit(0).unwrap();
        buffer.position = "Manager".into();
        roster.commit_edit(buffer).unwrap();
    }
    let reopened = open(dir.path());
    assert_eq!(reopened.records()[0].position, "Manager");
}

#[test]
fn deletion_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut roster = open(dir.path());
        roster.add(ana()).unwrap();
        roster.add(draft("Bruno", "Silva")).unwrap();
        roster.add(draft("Carla", "Moreno")).unwrap();
        roster.remove(1).unwrap();
    }
    let reopened = open(dir.path());
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.records()[0].name, "Ana");
    assert_eq!(reopened.records()[1].name, "Carla");
}

#[test]
fn rejected_add_is_not_persisted() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut roster = open(dir.path());
        roster.add(ana()).unwrap();
        roster.add(draft("", "Nameless")).unwrap_err();
    }
    assert_eq!(open(dir.path()).len(), 1);
}
