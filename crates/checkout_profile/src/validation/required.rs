use crate::errors::FieldError;
use crate::field::{FieldState, ProfileField, Validity};
use crate::reducer::ProfileAction;
use crate::state::ProfileState;

/// Validity of a plain text field after an edit.
pub fn text_validity(value: &str) -> Validity {
    if value.is_empty() {
        Validity::Invalid(FieldError::RequiredField)
    } else {
        Validity::Valid
    }
}

/// `set_error` for an empty field that is still marked valid.
///
/// Fields already flagged invalid are left alone, so an error set by a
/// dedicated validator (document, phone) is never replaced, and re-running
/// the rule on its own output produces nothing.
pub fn required_action(field: ProfileField, state: &FieldState) -> Option<ProfileAction> {
    if state.value.is_empty() && state.is_valid() {
        Some(ProfileAction::set_error(field, FieldError::RequiredField))
    } else {
        None
    }
}

pub fn check_required(state: &ProfileState) -> Vec<ProfileAction> {
    state
        .iter()
        .filter_map(|(field, f)| required_action(field, f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reducer::reduce;
    use crate::state::ProfileSnapshot;

    #[test]
    fn flags_only_empty_valid_fields() {
        let snap = ProfileSnapshot {
            first_name: Some("Ana".into()),
            ..Default::default()
        };
        let state = ProfileState::from_snapshot(&snap, "cpf");
        let actions = check_required(&state);
        let fields: Vec<_> = actions.iter().filter_map(|a| a.field()).collect();
        assert_eq!(
            fields,
            [
                ProfileField::LastName,
                ProfileField::Phone,
                ProfileField::Document
            ]
        );
    }

    #[test]
    fn existing_error_is_not_overwritten() {
        let mut state = ProfileState::from_snapshot(&ProfileSnapshot::default(), "cpf");
        state.phone.validity = Validity::Invalid(FieldError::InvalidPhone);
        assert!(required_action(ProfileField::Phone, &state.phone).is_none());
    }

    #[test]
    fn rule_settles_after_one_pass() {
        let mut state = ProfileState::from_snapshot(&ProfileSnapshot::default(), "cpf");
        for a in check_required(&state) {
            state = reduce(&state, &a);
        }
        assert!(check_required(&state).is_empty());
        assert_eq!(state.first_name.error(), Some(FieldError::RequiredField));
    }

    #[test]
    fn text_validity_rule() {
        assert_eq!(text_validity("a"), Validity::Valid);
        assert_eq!(
            text_validity(""),
            Validity::Invalid(FieldError::RequiredField)
        );
    }
}
