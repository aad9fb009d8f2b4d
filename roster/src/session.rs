/// Transient form state: which record is being edited, and which is selected
/// for the read-only detail view. At most one of each, by position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    editing: Option<usize>,
    selected: Option<usize>,
}

impl SessionState {
    /// Start editing `index`. Any in-progress edit session is replaced; the
    /// underlying record is untouched until a commit.
    pub fn begin_edit(&mut self, index: usize) {
        self.editing = Some(index);
    }

    pub fn active_edit(&self) -> Option<usize> {
        self.editing
    }

    pub fn clear_edit(&mut self) -> Option<usize> {
        self.editing.take()
    }

    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Fix both cursors after the element at `removed` left the sequence:
    /// a cursor on the removed element is invalidated, a cursor past it
    /// shifts down so it keeps addressing the same record.
    pub fn on_removed(&mut self, removed: usize) {
        self.editing = shift(self.editing, removed);
        self.selected = shift(self.selected, removed);
    }
}

fn shift(cursor: Option<usize>, removed: usize) -> Option<usize> {
    match cursor {
        Some(at) if at == removed => None,
        Some(at) if at > removed => Some(at - 1),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_edit_replaces_active_session() {
        let mut session = SessionState::default();
        session.begin_edit(0);
        session.begin_edit(2);
        assert_eq!(session.active_edit(), Some(2));
    }

    #[test]
    fn removing_the_edited_record_invalidates_the_session() {
        let mut session = SessionState::default();
        session.begin_edit(1);
        session.on_removed(1);
        assert_eq!(session.active_edit(), None);
    }

    #[test]
    fn removing_an_earlier_record_shifts_the_session_down() {
        let mut session = SessionState::default();
        session.begin_edit(2);
        session.on_removed(0);
        assert_eq!(session.active_edit(), Some(1));
    }

    #[test]
    fn removing_a_later_record_leaves_the_session_alone() {
        let mut session = SessionState::default();
        session.begin_edit(1);
        session.on_removed(2);
        assert_eq!(session.active_edit(), Some(1));
    }

    #[test]
    fn selection_gets_the_same_fixup() {
        let mut session = SessionState::default();
        session.select(3);
        session.on_removed(1);
        assert_eq!(session.selected(), Some(2));
        session.on_removed(2);
        assert_eq!(session.selected(), None);
    }
}
