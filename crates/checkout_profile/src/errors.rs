use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Field-level problems. These never travel as `Err`; they live inside
/// [`crate::field::Validity::Invalid`] and block submission.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldError {
    #[error("field is required")]
    RequiredField,

    #[error("invalid document number")]
    InvalidDocument,

    #[error("invalid phone number")]
    InvalidPhone,
}

impl FieldError {
    /// Message id handed to the (external) translation layer.
    pub fn message_id(&self) -> &'static str {
        match self {
            FieldError::RequiredField => "store/checkout-profile-field-required-message",
            FieldError::InvalidDocument => "store/checkout-profile-invalid-document-message",
            FieldError::InvalidPhone => "store/checkout-profile-invalid-phone-message",
        }
    }
}

/// Errors of the submission path.
///
/// `Transport` is what a remote collaborator returns when the call itself
/// blew up; `SubmitFailed` is the aggregate the user sees as a banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("submission failed (profile ok: {profile_ok}, preferences ok: {preferences_ok})")]
    SubmitFailed {
        profile_ok: bool,
        preferences_ok: bool,
    },
}

impl SubmitError {
    pub fn transport(msg: impl Into<String>) -> Self {
        SubmitError::Transport(msg.into())
    }

    /// Message id of the retry banner.
    pub fn message_id(&self) -> &'static str {
        "store/checkout-profile-submit-failed-message"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_errors_have_distinct_message_ids() {
        let ids = [
            FieldError::RequiredField.message_id(),
            FieldError::InvalidDocument.message_id(),
            FieldError::InvalidPhone.message_id(),
        ];
        assert_ne!(ids[0], ids[1]);
        assert_ne!(ids[1], ids[2]);
        assert_ne!(ids[0], ids[2]);
    }

    #[test]
    fn submit_failed_display_names_both_calls() {
        let err = SubmitError::SubmitFailed {
            profile_ok: true,
            preferences_ok: false,
        };
        assert_eq!(
            err.to_string(),
            "submission failed (profile ok: true, preferences ok: false)"
        );
    }
}
