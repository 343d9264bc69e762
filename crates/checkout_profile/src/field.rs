//! Field keys and per-field editing state.
//!
//! - `ProfileField`: the five fixed keys of the identity form
//! - `Validity`:     valid, or invalid together with the error that explains it
//! - `FieldState`:   value + validity + blur flag for one field
//!
//! `Validity` is a sum type on purpose: an invalid field cannot exist without
//! its error, and a valid one cannot carry a stale error.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter};

use crate::errors::FieldError;

/// Fixed set of form fields. Iteration order is the on-screen order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display, AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ProfileField {
    FirstName,
    LastName,
    Phone,
    DocumentType,
    Document,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validity {
    #[default]
    Valid,
    Invalid(FieldError),
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }

    pub fn error(&self) -> Option<FieldError> {
        match self {
            Validity::Valid => None,
            Validity::Invalid(e) => Some(*e),
        }
    }
}

impl From<Result<(), FieldError>> for Validity {
    fn from(r: Result<(), FieldError>) -> Self {
        match r {
            Ok(()) => Validity::Valid,
            Err(e) => Validity::Invalid(e),
        }
    }
}

/// Editing state of one field.
///
/// `blur` is true once the field lost focus after its last edit. Errors are
/// only shown while it is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldState<T = String> {
    pub value: T,
    pub validity: Validity,
    pub blur: bool,
}

impl<T> FieldState<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            validity: Validity::Valid,
            blur: false,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validity.is_valid()
    }

    pub fn error(&self) -> Option<FieldError> {
        self.validity.error()
    }

    /// Error the user should currently see.
    pub fn visible_error(&self) -> Option<FieldError> {
        if self.blur { self.error() } else { None }
    }
}

impl<T: Default> Default for FieldState<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn error_hidden_until_blur() {
        let mut f = FieldState::new(String::new());
        f.validity = Validity::Invalid(FieldError::RequiredField);
        assert_eq!(f.visible_error(), None);
        f.blur = true;
        assert_eq!(f.visible_error(), Some(FieldError::RequiredField));
    }

    #[test]
    fn valid_field_never_shows_error() {
        let mut f = FieldState::new("Ana".to_string());
        f.blur = true;
        assert!(f.is_valid());
        assert_eq!(f.visible_error(), None);
    }

    #[test]
    fn field_names_match_wire_keys() {
        let names: Vec<String> = ProfileField::iter().map(|f| f.to_string()).collect();
        assert_eq!(
            names,
            ["firstName", "lastName", "phone", "documentType", "document"]
        );
        assert_eq!(
            serde_json::to_string(&ProfileField::DocumentType).unwrap(),
            "\"documentType\""
        );
    }
}
