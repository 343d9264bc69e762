//! Profile reducer.
//!
//! `reduce` turns `(state, action)` into the next state. It is pure: the input
//! state is borrowed and never touched, and the same pair always produces the
//! same result.
//!
//! Actions:
//!   * `update`    – replace a field's value, optionally its validity; resets `blur`
//!   * `set_error` – replace a field's validity only
//!   * `blur`      – mark a field as blurred
//!   * `unknown`   – any unrecognised `type` tag when deserialising; ignored
//!
//! Policy:
//!   - Never panics.
//!   - `update` without explicit validity keeps the previous one. Typing alone
//!     must not mark a field valid.

use serde::{Deserialize, Serialize};

use crate::errors::FieldError;
use crate::field::{ProfileField, Validity};
use crate::state::ProfileState;

/// Validity carried by an `update`: keep what the field had, or replace it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidityUpdate {
    #[default]
    Keep,
    Set(Validity),
}

impl ValidityUpdate {
    fn resolve(self, previous: Validity) -> Validity {
        match self {
            ValidityUpdate::Keep => previous,
            ValidityUpdate::Set(v) => v,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProfileAction {
    Update {
        field: ProfileField,
        value: String,
        #[serde(default)]
        validity: ValidityUpdate,
    },
    SetError {
        field: ProfileField,
        validity: Validity,
    },
    Blur {
        field: ProfileField,
    },
    #[serde(other)]
    Unknown,
}

impl ProfileAction {
    /// `update` that keeps the field's current validity.
    pub fn update(field: ProfileField, value: impl Into<String>) -> Self {
        ProfileAction::Update {
            field,
            value: value.into(),
            validity: ValidityUpdate::Keep,
        }
    }

    pub fn update_with(field: ProfileField, value: impl Into<String>, validity: Validity) -> Self {
        ProfileAction::Update {
            field,
            value: value.into(),
            validity: ValidityUpdate::Set(validity),
        }
    }

    pub fn set_error(field: ProfileField, error: FieldError) -> Self {
        ProfileAction::SetError {
            field,
            validity: Validity::Invalid(error),
        }
    }

    pub fn set_validity(field: ProfileField, validity: Validity) -> Self {
        ProfileAction::SetError { field, validity }
    }

    pub fn blur(field: ProfileField) -> Self {
        ProfileAction::Blur { field }
    }

    pub fn field(&self) -> Option<ProfileField> {
        match self {
            ProfileAction::Update { field, .. }
            | ProfileAction::SetError { field, .. }
            | ProfileAction::Blur { field } => Some(*field),
            ProfileAction::Unknown => None,
        }
    }
}

pub fn reduce(state: &ProfileState, action: &ProfileAction) -> ProfileState {
    let mut next = state.clone();
    match action {
        ProfileAction::Update {
            field,
            value,
            validity,
        } => {
            let f = next.field_mut(*field);
            f.value = value.clone();
            f.validity = validity.resolve(f.validity);
            f.blur = false;
        }
        ProfileAction::SetError { field, validity } => {
            next.field_mut(*field).validity = *validity;
        }
        ProfileAction::Blur { field } => {
            next.field_mut(*field).blur = true;
        }
        ProfileAction::Unknown => {}
    }
    next
}
