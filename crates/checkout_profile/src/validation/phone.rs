//! Phone number validity.
//!
//! The real check is an external collaborator behind [`PhoneValidator`].
//! [`CountryRulesValidator`] is the built-in implementation: it knows the
//! national number lengths of the countries in the calling-code table.

use serde::{Deserialize, Serialize};

/// Result of a phone check: normalized value plus verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCheck {
    pub value: String,
    pub is_valid: bool,
}

/// One entry of the calling-code selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCountry {
    // aliases: `config` may hand keys back lowercased
    #[serde(rename = "countryISO3", alias = "countryiso3")]
    pub country_iso3: String,
    #[serde(alias = "countrycode")]
    pub country_code: String,
}

impl PhoneCountry {
    pub fn new(iso3: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            country_iso3: iso3.into(),
            country_code: code.into(),
        }
    }
}

/// Calling codes offered by default, sorted by ISO3 code.
pub fn default_countries() -> Vec<PhoneCountry> {
    let mut countries = vec![PhoneCountry::new("BRA", "55"), PhoneCountry::new("ARG", "54")];
    countries.sort_by(|a, b| a.country_iso3.cmp(&b.country_iso3));
    countries
}

pub trait PhoneValidator: Send + Sync {
    fn check(&self, value: &str, country: &PhoneCountry) -> PhoneCheck;
}

/// Length-based validator keyed by ISO3 code.
#[derive(Debug, Clone, Default)]
pub struct CountryRulesValidator;

impl CountryRulesValidator {
    /// Accepted national number lengths (area code included).
    fn national_lengths(iso3: &str) -> (usize, usize) {
        match iso3 {
            "BRA" => (10, 11),
            "ARG" => (10, 10),
            // E.164 bounds for anything else
            _ => (4, 15),
        }
    }
}

/// National digits of `value`. A leading `+` followed by the country's
/// calling code is stripped.
pub fn national_number(value: &str, country: &PhoneCountry) -> String {
    let digits: String = value.chars().filter(|c| c.is_ascii_digit()).collect();
    if value.trim_start().starts_with('+') {
        if let Some(rest) = digits.strip_prefix(country.country_code.as_str()) {
            return rest.to_string();
        }
    }
    digits
}

impl PhoneValidator for CountryRulesValidator {
    fn check(&self, value: &str, country: &PhoneCountry) -> PhoneCheck {
        let national = national_number(value, country);
        if national.is_empty() {
            return PhoneCheck {
                value: String::new(),
                is_valid: false,
            };
        }
        let (min, max) = Self::national_lengths(&country.country_iso3);
        PhoneCheck {
            is_valid: (min..=max).contains(&national.len()),
            value: format!("+{}{}", country.country_code, national),
        }
    }
}

/// Where focus went when the phone input lost it.
///
/// The calling-code selector and its option list count as part of the phone
/// field, so moving there must not reveal the phone error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneFocus {
    Nothing,
    PhoneInput,
    CountrySelector,
    CountryOption,
    Elsewhere,
}

impl PhoneFocus {
    pub fn leaves_phone_group(self) -> bool {
        matches!(self, PhoneFocus::Nothing | PhoneFocus::Elsewhere)
    }
}
