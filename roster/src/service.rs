use entity::{Employee, EmployeeDraft};
use tracing::debug;

use crate::repo::RecordStore;
use crate::session::SessionState;
use crate::{RosterError, RosterResult, search};

/// The roster service. Owns the in-memory record sequence, mirrors it to the
/// injected store after every mutation, and tracks the edit/selection
/// session. Single-threaded by design; every operation runs to completion.
pub struct Roster<S> {
    store: S,
    records: Vec<Employee>,
    session: SessionState,
}

impl<S: RecordStore> Roster<S> {
    /// Load the sequence once and take ownership of the store.
    pub fn open(mut store: S) -> Self {
        let records = store.load();
        debug!(total = records.len(), "roster loaded");
        Self {
            store,
            records,
            session: SessionState::default(),
        }
    }

    /// The full sequence, in insertion order.
    pub fn records(&self) -> &[Employee] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Validate and append a new record. A draft missing a required field
    /// leaves the sequence untouched.
    pub fn add(&mut self, draft: EmployeeDraft) -> RosterResult<&Employee> {
        draft.validate()?;
        self.records.push(Employee::from_draft(draft));
        self.persist()?;
        let index = self.records.len() - 1;
        debug!(index, "record appended");
        Ok(&self.records[index])
    }

    /// Start editing the record at `index`; returns its fields as the draft
    /// buffer. An already-active session is silently replaced.
    pub fn begin_edit(&mut self, index: usize) -> RosterResult<EmployeeDraft> {
        let record = self.get(index)?;
        let draft = EmployeeDraft::from(record);
        self.session.begin_edit(index);
        Ok(draft)
    }

    pub fn active_edit(&self) -> Option<usize> {
        self.session.active_edit()
    }

    pub fn cancel_edit(&mut self) {
        self.session.clear_edit();
    }

    /// Replace the record under the active edit session with the draft,
    /// keeping the record's id, then clear the session.
    pub fn commit_edit(&mut self, draft: EmployeeDraft) -> RosterResult<&Employee> {
        let index = self.session.active_edit().ok_or(RosterError::NoActiveEdit)?;
        draft.validate()?;
        if index >= self.records.len() {
            self.session.clear_edit();
            return Err(RosterError::OutOfBounds {
                index,
                len: self.records.len(),
            });
        }
        self.records[index].apply_draft(draft);
        self.session.clear_edit();
        self.persist()?;
        debug!(index, "record updated");
        Ok(&self.records[index])
    }

    /// Remove exactly one record by position. Later records shift down; the
    /// edit and selection cursors are fixed up accordingly.
    pub fn remove(&mut self, index: usize) -> RosterResult<Employee> {
        self.get(index)?;
        let removed = self.records.remove(index);
        self.session.on_removed(index);
        self.persist()?;
        debug!(index, remaining = self.records.len(), "record removed");
        Ok(removed)
    }

    /// Pure filter over the in-memory sequence; order preserved, empty
    /// query returns everything.
    pub fn search(&self, query: &str) -> Vec<&Employee> {
        self.records
            .iter()
            .filter(|record| search::matches(record, query))
            .collect()
    }

    /// Select a record for the read-only detail view.
    pub fn select(&mut self, index: usize) -> RosterResult<&Employee> {
        self.get(index)?;
        self.session.select(index);
        Ok(&self.records[index])
    }

    pub fn selected(&self) -> Option<&Employee> {
        self.session.selected().and_then(|index| self.records.get(index))
    }

    pub fn clear_selection(&mut self) {
        self.session.clear_selection();
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn get(&self, index: usize) -> RosterResult<&Employee> {
        self.records.get(index).ok_or(RosterError::OutOfBounds {
            index,
            len: self.records.len(),
        })
    }

    fn persist(&mut self) -> RosterResult<()> {
        self.store.persist(&self.records)?;
        Ok(())
    }
}
