//! Profile state shape and the snapshots it is built from.
//!
//! `ProfileState` holds exactly the five form fields. The side toggles
//! (`persist_info`, `opt_in_newsletter`) and the read-only email are kept by
//! the form session, not here.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::field::{FieldState, ProfileField};

/// Client profile as known by the order form. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileSnapshot {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub document_type: Option<String>,
    pub document: Option<String>,
    pub email: Option<String>,
}

/// Subset of the order form the profile step reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderFormSnapshot {
    pub id: String,
    pub client_profile_data: Option<ProfileSnapshot>,
    pub user_profile_id: Option<String>,
    pub can_edit_data: bool,
    pub logged_in: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesSnapshot {
    pub opt_in_newsletter: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileState {
    pub first_name: FieldState,
    pub last_name: FieldState,
    pub phone: FieldState,
    pub document_type: FieldState,
    pub document: FieldState,
}

/// Flattened field -> value mapping sent to the profile service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileValues {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub document_type: String,
    pub document: String,
}

impl ProfileState {
    /// Build the initial state. Every field starts valid and un-blurred;
    /// missing values become empty strings, except `documentType` which
    /// falls back to `default_document_type`.
    pub fn from_snapshot(snapshot: &ProfileSnapshot, default_document_type: &str) -> Self {
        let value = |v: &Option<String>| FieldState::new(v.clone().unwrap_or_default());
        Self {
            first_name: value(&snapshot.first_name),
            last_name: value(&snapshot.last_name),
            phone: value(&snapshot.phone),
            document_type: FieldState::new(
                snapshot
                    .document_type
                    .clone()
                    .filter(|t| !t.is_empty())
                    .unwrap_or_else(|| default_document_type.to_string()),
            ),
            document: value(&snapshot.document),
        }
    }

    pub fn field(&self, field: ProfileField) -> &FieldState {
        match field {
            ProfileField::FirstName => &self.first_name,
            ProfileField::LastName => &self.last_name,
            ProfileField::Phone => &self.phone,
            ProfileField::DocumentType => &self.document_type,
            ProfileField::Document => &self.document,
        }
    }

    pub(crate) fn field_mut(&mut self, field: ProfileField) -> &mut FieldState {
        match field {
            ProfileField::FirstName => &mut self.first_name,
            ProfileField::LastName => &mut self.last_name,
            ProfileField::Phone => &mut self.phone,
            ProfileField::DocumentType => &mut self.document_type,
            ProfileField::Document => &mut self.document,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProfileField, &FieldState)> {
        ProfileField::iter().map(move |f| (f, self.field(f)))
    }

    /// True iff every field reports valid.
    pub fn is_valid(&self) -> bool {
        self.iter().all(|(_, f)| f.is_valid())
    }

    pub fn invalid_fields(&self) -> Vec<ProfileField> {
        self.iter()
            .filter(|(_, f)| !f.is_valid())
            .map(|(k, _)| k)
            .collect()
    }

    pub fn values(&self) -> ProfileValues {
        ProfileValues {
            first_name: self.first_name.value.clone(),
            last_name: self.last_name.value.clone(),
            phone: self.phone.value.clone(),
            document_type: self.document_type.value.clone(),
            document: self.document.value.clone(),
        }
    }
}
