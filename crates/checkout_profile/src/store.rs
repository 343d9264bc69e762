//! Field state store.
//!
//! Owns the `ProfileState` of one editing session. Every dispatched action
//! goes through [`reduce`], then the required-field rule runs synchronously
//! on the result. The rule also runs once on construction so empty initial
//! fields start out invalid (but not yet blurred, so nothing is shown).

use strum::IntoEnumIterator;
use tracing::debug;

use crate::field::ProfileField;
use crate::reducer::{ProfileAction, reduce};
use crate::state::ProfileState;
use crate::validation::required::check_required;

#[derive(Debug, Clone)]
pub struct ProfileStore {
    state: ProfileState,
}

impl ProfileStore {
    pub fn new(initial: ProfileState) -> Self {
        let mut store = Self { state: initial };
        store.revalidate();
        store
    }

    pub fn state(&self) -> &ProfileState {
        &self.state
    }

    pub fn into_state(self) -> ProfileState {
        self.state
    }

    pub fn dispatch(&mut self, action: ProfileAction) -> &ProfileState {
        debug!(?action, "profile dispatch");
        self.state = reduce(&self.state, &action);
        self.revalidate();
        &self.state
    }

    /// Blur every field so all pending errors become visible.
    pub fn blur_all(&mut self) {
        for field in ProfileField::iter() {
            self.dispatch(ProfileAction::blur(field));
        }
    }

    fn revalidate(&mut self) {
        for action in check_required(&self.state) {
            debug!(?action, "required field");
            self.state = reduce(&self.state, &action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::FieldError;
    use crate::field::Validity;
    use crate::state::ProfileSnapshot;

    fn store_with(snapshot: ProfileSnapshot) -> ProfileStore {
        ProfileStore::new(ProfileState::from_snapshot(&snapshot, "cpf"))
    }

    #[test]
    fn empty_initial_fields_are_invalid_but_hidden() {
        let store = store_with(ProfileSnapshot {
            first_name: Some("Ana".into()),
            ..Default::default()
        });
        let s = store.state();
        assert!(s.first_name.is_valid());
        assert_eq!(s.last_name.error(), Some(FieldError::RequiredField));
        assert_eq!(s.last_name.visible_error(), None);
        assert!(!s.is_valid());
    }

    #[test]
    fn keep_update_to_empty_triggers_required() {
        let mut store = store_with(ProfileSnapshot {
            first_name: Some("Ana".into()),
            ..Default::default()
        });
        store.dispatch(ProfileAction::update(ProfileField::FirstName, ""));
        assert_eq!(
            store.state().first_name.error(),
            Some(FieldError::RequiredField)
        );
    }

    #[test]
    fn dedicated_error_wins_over_required() {
        let mut store = store_with(ProfileSnapshot {
            phone: Some("+5511987654321".into()),
            ..Default::default()
        });
        store.dispatch(ProfileAction::update_with(
            ProfileField::Phone,
            "",
            Validity::Invalid(FieldError::InvalidPhone),
        ));
        assert_eq!(store.state().phone.error(), Some(FieldError::InvalidPhone));
    }

    #[test]
    fn blur_all_marks_every_field() {
        let mut store = store_with(ProfileSnapshot::default());
        store.blur_all();
        assert!(store.state().iter().all(|(_, f)| f.blur));
        assert_eq!(
            store.state().document.visible_error(),
            Some(FieldError::RequiredField)
        );
    }
}
