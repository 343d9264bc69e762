//! Brazilian tax id (CPF) validation and input masking.
//!
//! A CPF is 9 payload digits followed by 2 check digits. Each check digit is
//! `(weighted sum * 10) mod 11 mod 10`; the trailing `mod 10` folds a
//! remainder of 10 into 0. Weights count down to 2 from 10 (first digit) and
//! from 11 (second digit, computed over payload + first check digit).
//!
//! The mask (`DDD.DDD.DDD-DD`) is applied while typing; the checksum always
//! runs on the unmasked digits.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

use crate::errors::FieldError;
use crate::field::Validity;

pub const CPF_DIGITS: usize = 11;
const PAYLOAD_DIGITS: usize = 9;

/// Document types offered by the type selector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    EnumIter,
    EnumString,
    Display,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DocumentType {
    #[default]
    Cpf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentOption {
    pub value: DocumentType,
    pub label: &'static str,
}

impl DocumentType {
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
        }
    }

    /// Options for the type dropdown, in display order.
    pub fn options() -> Vec<DocumentOption> {
        DocumentType::iter()
            .map(|value| DocumentOption {
                value,
                label: value.label(),
            })
            .collect()
    }
}

fn digits(raw: &str) -> Vec<u32> {
    raw.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Strip everything but ASCII digits.
pub fn unmask_document(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Format the digits of `raw` as `DDD.DDD.DDD-DD`, progressively while
/// typing. Digits beyond the eleventh are dropped.
pub fn mask_document(raw: &str) -> String {
    let mut out = String::with_capacity(CPF_DIGITS + 3);
    for (i, c) in unmask_document(raw).chars().take(CPF_DIGITS).enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

fn check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    (sum * 10) % 11 % 10
}

/// CPF checksum over the digits of `raw` (punctuation ignored).
///
/// Fewer than 11 digits is invalid. A number made of one repeated digit
/// (`111.111.111-11`) satisfies the arithmetic but is never issued, and is
/// rejected as well.
pub fn is_valid_document(raw: &str) -> bool {
    let d = digits(raw);
    if d.len() < CPF_DIGITS {
        return false;
    }
    let d = &d[..CPF_DIGITS];
    if d.iter().all(|x| *x == d[0]) {
        return false;
    }

    let first = check_digit(&d[..PAYLOAD_DIGITS]);
    if first != d[PAYLOAD_DIGITS] {
        return false;
    }
    let second = check_digit(&d[..PAYLOAD_DIGITS + 1]);
    second == d[PAYLOAD_DIGITS + 1]
}

/// Validity of the document field for the current (masked or raw) input.
pub fn validate_document_input(raw: &str) -> Validity {
    if unmask_document(raw).is_empty() {
        Validity::Invalid(FieldError::RequiredField)
    } else if is_valid_document(raw) {
        Validity::Valid
    } else {
        Validity::Invalid(FieldError::InvalidDocument)
    }
}
