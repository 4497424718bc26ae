//! Dynamically added email rows

use super::field::FormField;
use crate::interaction::Confirm;
use indexmap::IndexMap;
use std::fmt;

/// Label shown above every email input
pub const EMAIL_LABEL: &str = "Please enter your email...";
/// Placeholder shown while an email input is empty
pub const EMAIL_PLACEHOLDER: &str = "Type your email here...";
/// Question asked before a row is removed
pub const REMOVE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this email?";

/// Identifier of an email row. Sequential, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "email-{}", self.0)
    }
}

/// One email input row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailEntry {
    pub id: EntryId,
    pub field: FormField,
}

impl EmailEntry {
    fn new(id: EntryId) -> Self {
        Self {
            id,
            field: FormField::text(EMAIL_LABEL, EMAIL_PLACEHOLDER),
        }
    }

    pub fn value(&self) -> &str {
        self.field.as_text()
    }
}

/// What happened to a removal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed,
    /// The user answered "no"; nothing changed
    Declined,
    /// No row with that id exists (already removed)
    NotFound,
}

/// Ordered collection of email rows plus the id counter
#[derive(Debug, Clone, Default)]
pub struct EmailRows {
    entries: IndexMap<EntryId, EmailEntry>,
    next_id: u64,
    remove_message: Option<String>,
}

impl EmailRows {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom confirmation question for removals
    pub fn with_remove_message(mut self, message: impl Into<String>) -> Self {
        self.remove_message = Some(message.into());
        self
    }

    /// Append an empty row with a fresh id
    pub fn add_row(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, EmailEntry::new(id));
        id
    }

    /// Remove the row `id` once the user confirms.
    ///
    /// Unknown ids are a no-op and never prompt.
    pub fn remove_row(&mut self, id: EntryId, confirm: &mut dyn Confirm) -> RemoveOutcome {
        if !self.entries.contains_key(&id) {
            return RemoveOutcome::NotFound;
        }

        let message = self
            .remove_message
            .as_deref()
            .unwrap_or(REMOVE_CONFIRM_MESSAGE);
        if !confirm.confirm(message) {
            return RemoveOutcome::Declined;
        }

        // shift_remove keeps the relative order of the remaining rows
        self.entries.shift_remove(&id);
        RemoveOutcome::Removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &EmailEntry> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl DoubleEndedIterator<Item = EntryId> + '_ {
        self.entries.keys().copied()
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: EntryId) -> Option<&EmailEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: EntryId) -> Option<&mut EmailEntry> {
        self.entries.get_mut(&id)
    }

    /// Position of `id` in display order
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.get_index_of(&id)
    }

    pub fn first_id(&self) -> Option<EntryId> {
        self.ids().next()
    }

    pub fn last_id(&self) -> Option<EntryId> {
        self.ids().next_back()
    }

    /// Id of the row displayed after `id`
    pub fn next_id_after(&self, id: EntryId) -> Option<EntryId> {
        let index = self.position(id)?;
        self.entries.get_index(index + 1).map(|(id, _)| *id)
    }

    /// Id of the row displayed before `id`
    pub fn prev_id_before(&self, id: EntryId) -> Option<EntryId> {
        let index = self.position(id)?;
        let prev = index.checked_sub(1)?;
        self.entries.get_index(prev).map(|(id, _)| *id)
    }

    /// Id at display position `index`
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.entries.get_index(index).map(|(id, _)| *id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::MockConfirm;
    use crate::state::Validity;

    /// Deterministic confirmation stub that records every question
    struct Answer {
        reply: bool,
        asked: Vec<String>,
    }

    impl Answer {
        fn yes() -> Self {
            Self {
                reply: true,
                asked: Vec::new(),
            }
        }

        fn no() -> Self {
            Self {
                reply: false,
                asked: Vec::new(),
            }
        }
    }

    impl Confirm for Answer {
        fn confirm(&mut self, message: &str) -> bool {
            self.asked.push(message.to_string());
            self.reply
        }
    }

    fn rows_with(n: usize) -> (EmailRows, Vec<EntryId>) {
        let mut rows = EmailRows::new();
        let ids = (0..n).map(|_| rows.add_row()).collect();
        (rows, ids)
    }

    mod add_row {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_appends_empty_rows_in_order() {
            let (rows, ids) = rows_with(3);
            assert_eq!(rows.len(), 3);
            assert_eq!(rows.ids().collect::<Vec<_>>(), ids);
            assert!(rows.iter().all(|e| e.value().is_empty()));
            assert!(rows
                .iter()
                .all(|e| e.field.validity == Validity::Unchecked));
        }

        #[test]
        fn test_ids_are_sequential() {
            let (_, ids) = rows_with(3);
            let names: Vec<_> = ids.iter().map(ToString::to_string).collect();
            assert_eq!(names, vec!["email-0", "email-1", "email-2"]);
        }

        #[test]
        fn test_new_row_uses_email_label() {
            let mut rows = EmailRows::new();
            let id = rows.add_row();
            let entry = rows.get(id).unwrap();
            assert_eq!(entry.field.label, EMAIL_LABEL);
            assert_eq!(entry.field.placeholder, EMAIL_PLACEHOLDER);
        }

        #[test]
        fn test_ids_are_never_reused_after_emptying() {
            let (mut rows, ids) = rows_with(2);
            for id in &ids {
                rows.remove_row(*id, &mut Answer::yes());
            }
            assert!(rows.is_empty());

            let fresh = rows.add_row();
            assert!(!ids.contains(&fresh));
            assert_eq!(fresh.to_string(), "email-2");
        }

        #[test]
        fn test_display_format() {
            let mut rows = EmailRows::new();
            let id = rows.add_row();
            assert_eq!(id.to_string(), "email-0");
        }
    }

    mod remove_row {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_confirmed_removal_keeps_relative_order() {
            let (mut rows, ids) = rows_with(4);
            let outcome = rows.remove_row(ids[1], &mut Answer::yes());

            assert_eq!(outcome, RemoveOutcome::Removed);
            assert_eq!(rows.len(), 3);
            assert_eq!(
                rows.ids().collect::<Vec<_>>(),
                vec![ids[0], ids[2], ids[3]]
            );
        }

        #[test]
        fn test_declined_removal_leaves_rows_unchanged() {
            let (mut rows, ids) = rows_with(3);
            rows.get_mut(ids[0]).unwrap().field.value = "a@b.io".into();
            let before: Vec<_> = rows.iter().cloned().collect();

            let outcome = rows.remove_row(ids[0], &mut Answer::no());

            assert_eq!(outcome, RemoveOutcome::Declined);
            assert_eq!(rows.iter().cloned().collect::<Vec<_>>(), before);
        }

        #[test]
        fn test_declining_twice_is_still_a_noop() {
            let (mut rows, ids) = rows_with(2);
            let mut answer = Answer::no();
            rows.remove_row(ids[1], &mut answer);
            rows.remove_row(ids[1], &mut answer);
            assert_eq!(rows.len(), 2);
            assert_eq!(answer.asked.len(), 2);
        }

        #[test]
        fn test_asks_the_default_question() {
            let (mut rows, ids) = rows_with(1);
            let mut answer = Answer::no();
            rows.remove_row(ids[0], &mut answer);
            assert_eq!(answer.asked, vec![REMOVE_CONFIRM_MESSAGE.to_string()]);
        }

        #[test]
        fn test_asks_the_configured_question() {
            let mut rows = EmailRows::new().with_remove_message("Drop it?");
            let id = rows.add_row();
            let mut answer = Answer::no();
            rows.remove_row(id, &mut answer);
            assert_eq!(answer.asked, vec!["Drop it?".to_string()]);
        }

        #[test]
        fn test_unknown_id_is_silent_noop() {
            let (mut rows, ids) = rows_with(2);
            rows.remove_row(ids[0], &mut Answer::yes());

            let mut confirm = MockConfirm::new();
            confirm.expect_confirm().never();

            let outcome = rows.remove_row(ids[0], &mut confirm);
            assert_eq!(outcome, RemoveOutcome::NotFound);
            assert_eq!(rows.len(), 1);
        }

        #[test]
        fn test_prompts_exactly_once_per_request() {
            let (mut rows, ids) = rows_with(2);
            let mut confirm = MockConfirm::new();
            confirm.expect_confirm().times(1).return_const(true);

            assert_eq!(rows.remove_row(ids[1], &mut confirm), RemoveOutcome::Removed);
            assert_eq!(rows.ids().collect::<Vec<_>>(), vec![ids[0]]);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_and_prev_follow_display_order() {
            let (mut rows, ids) = rows_with(3);
            rows.remove_row(ids[1], &mut Answer::yes());

            assert_eq!(rows.next_id_after(ids[0]), Some(ids[2]));
            assert_eq!(rows.prev_id_before(ids[2]), Some(ids[0]));
            assert_eq!(rows.prev_id_before(ids[0]), None);
            assert_eq!(rows.next_id_after(ids[2]), None);
        }

        #[test]
        fn test_unknown_id_has_no_neighbours() {
            let (mut rows, ids) = rows_with(2);
            rows.remove_row(ids[0], &mut Answer::yes());
            assert_eq!(rows.next_id_after(ids[0]), None);
            assert_eq!(rows.prev_id_before(ids[0]), None);
            assert_eq!(rows.position(ids[0]), None);
        }

        #[test]
        fn test_first_last_and_index_lookup() {
            let (rows, ids) = rows_with(3);
            assert_eq!(rows.first_id(), Some(ids[0]));
            assert_eq!(rows.last_id(), Some(ids[2]));
            assert_eq!(rows.id_at(1), Some(ids[1]));
            assert_eq!(rows.id_at(3), None);
            assert!(EmailRows::new().first_id().is_none());
        }
    }
}
