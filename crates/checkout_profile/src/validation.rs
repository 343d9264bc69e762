//! Field validators.
//!
//! - `required`: generic non-empty rule, run after every dispatch
//! - `document`: CPF checksum and input mask
//! - `phone`:    phone validity collaborator, country table, focus rule

pub mod document;
pub mod phone;
pub mod required;

pub use document::{DocumentType, is_valid_document, mask_document, unmask_document};
pub use phone::{
    CountryRulesValidator, PhoneCheck, PhoneCountry, PhoneFocus, PhoneValidator, national_number,
};
pub use required::text_validity;
