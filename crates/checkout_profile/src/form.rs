//! Profile form session.
//!
//! `ProfileForm` is the single writer of one editing session: it turns user
//! input into store actions, keeps the side toggles, and drives the
//! `Editing -> Submitting -> Editing` cycle. It never awaits anything;
//! remote work and navigation leave as [`Effect`]s, results come back as
//! [`FormEvent`]s.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::FormConfig;
use crate::effects::{Effect, FormEvent, Route};
use crate::errors::FieldError;
use crate::field::{FieldState, ProfileField, Validity};
use crate::reducer::ProfileAction;
use crate::services::{PreferencesUpdate, ProfileUpdate};
use crate::state::{OrderFormSnapshot, PreferencesSnapshot, ProfileState};
use crate::store::ProfileStore;
use crate::submit::{SubmitOutcome, SubmitPhase, SubmitRequest, SubmitTicket};
use crate::validation::document::{mask_document, validate_document_input};
use crate::validation::phone::{
    CountryRulesValidator, PhoneCountry, PhoneFocus, PhoneValidator, national_number,
};
use crate::validation::required::text_validity;

pub struct ProfileForm {
    store: ProfileStore,
    email: Option<String>,
    user_profile_id: Option<String>,
    persist_info: bool,
    opt_in_newsletter: bool,
    phone_countries: Vec<PhoneCountry>,
    phone_country: PhoneCountry,
    phone_validator: Box<dyn PhoneValidator>,
    phase: SubmitPhase,
    submit_failed: bool,
    next_ticket: u64,
}

/// Serializable snapshot of what the form currently shows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub profile: ProfileState,
    pub email: Option<String>,
    pub phone_country: PhoneCountry,
    pub persist_info: bool,
    pub can_persist_info: bool,
    pub opt_in_newsletter: bool,
    pub loading: bool,
    pub submit_failed: bool,
    pub visible_errors: Vec<VisibleError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibleError {
    pub field: ProfileField,
    pub error: FieldError,
    pub message_id: &'static str,
}

impl ProfileForm {
    pub fn new(
        config: &FormConfig,
        order: &OrderFormSnapshot,
        preferences: PreferencesSnapshot,
    ) -> Self {
        let profile = order.client_profile_data.clone().unwrap_or_default();
        let initial =
            ProfileState::from_snapshot(&profile, config.default_document_type.as_ref());
        Self {
            store: ProfileStore::new(initial),
            email: profile.email,
            user_profile_id: order.user_profile_id.clone(),
            persist_info: false,
            opt_in_newsletter: preferences.opt_in_newsletter,
            phone_countries: config.phone_countries.clone(),
            phone_country: config.default_country(),
            phone_validator: Box::new(CountryRulesValidator),
            phase: SubmitPhase::Editing,
            submit_failed: false,
            next_ticket: 0,
        }
    }

    pub fn with_phone_validator(mut self, validator: impl PhoneValidator + 'static) -> Self {
        self.phone_validator = Box::new(validator);
        self
    }

    pub fn state(&self) -> &ProfileState {
        self.store.state()
    }

    pub fn field(&self, field: ProfileField) -> &FieldState {
        self.store.state().field(field)
    }

    pub fn visible_error(&self, field: ProfileField) -> Option<FieldError> {
        self.field(field).visible_error()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn loading(&self) -> bool {
        self.phase.is_submitting()
    }

    pub fn submit_failed(&self) -> bool {
        self.submit_failed
    }

    pub fn persist_info(&self) -> bool {
        self.persist_info
    }

    pub fn opt_in_newsletter(&self) -> bool {
        self.opt_in_newsletter
    }

    /// "Save my info" is only offered to shoppers without a stored profile.
    pub fn can_persist_info(&self) -> bool {
        self.user_profile_id.is_none()
    }

    pub fn phone_country(&self) -> &PhoneCountry {
        &self.phone_country
    }

    pub fn set_persist_info(&mut self, checked: bool) {
        self.persist_info = checked;
    }

    pub fn set_opt_in_newsletter(&mut self, checked: bool) {
        self.opt_in_newsletter = checked;
    }

    /// Dispatch a raw store action, bypassing the per-field input rules.
    pub fn dispatch(&mut self, action: ProfileAction) {
        self.store.dispatch(action);
    }

    /// User edited `field`. Each field applies its own rule.
    pub fn change(&mut self, field: ProfileField, value: &str) {
        match field {
            ProfileField::Phone => self.change_phone(value),
            ProfileField::Document => {
                let masked = mask_document(value);
                let validity = validate_document_input(&masked);
                self.store
                    .dispatch(ProfileAction::update_with(field, masked, validity));
            }
            ProfileField::FirstName | ProfileField::LastName | ProfileField::DocumentType => {
                self.store
                    .dispatch(ProfileAction::update_with(field, value, text_validity(value)));
            }
        }
    }

    pub fn change_phone(&mut self, raw: &str) {
        let check = self.phone_validator.check(raw, &self.phone_country);
        let validity = if check.is_valid {
            Validity::Valid
        } else {
            Validity::Invalid(FieldError::InvalidPhone)
        };
        self.store.dispatch(ProfileAction::update_with(
            ProfileField::Phone,
            check.value,
            validity,
        ));
    }

    /// Switch the calling code and re-check the national number under it.
    /// Returns `false` for a code that is not in the table.
    pub fn set_phone_country(&mut self, iso3: &str) -> bool {
        let Some(country) = self
            .phone_countries
            .iter()
            .find(|c| c.country_iso3 == iso3)
            .cloned()
        else {
            warn!(iso3, "unknown phone country");
            return false;
        };
        let national = national_number(&self.state().phone.value, &self.phone_country);
        self.phone_country = country;
        self.change_phone(&national);
        true
    }

    pub fn blur(&mut self, field: ProfileField) {
        self.store.dispatch(ProfileAction::blur(field));
    }

    /// Phone input lost focus to `focus`. Moving into the calling-code
    /// selector still counts as being inside the phone field.
    pub fn phone_blur(&mut self, focus: PhoneFocus) {
        if focus.leaves_phone_group() {
            self.blur(ProfileField::Phone);
        } else {
            debug!(?focus, "phone blur suppressed");
        }
    }

    pub fn edit_email(&self) -> Effect {
        Effect::Navigate(Route::Identification)
    }

    pub fn submit_request(&self) -> SubmitRequest {
        SubmitRequest {
            profile: ProfileUpdate {
                values: self.state().values(),
                email: self.email.clone(),
                persist_info: self.persist_info,
            },
            preferences: PreferencesUpdate {
                opt_in_newsletter: self.opt_in_newsletter,
            },
        }
    }

    /// Submit attempt.
    ///
    /// - already submitting: ignored
    /// - any field invalid: every field is blurred, nothing is sent
    /// - otherwise: phase becomes `Submitting` and the request is returned
    ///   as `Effect::Submit`
    pub fn submit(&mut self) -> Option<Effect> {
        if let SubmitPhase::Submitting(ticket) = self.phase {
            debug!(ticket = ticket.0, "submit ignored; already submitting");
            return None;
        }
        self.submit_failed = false;

        if !self.state().is_valid() {
            info!(invalid = ?self.state().invalid_fields(), "submit rejected");
            self.store.blur_all();
            return None;
        }

        self.next_ticket += 1;
        let ticket = SubmitTicket(self.next_ticket);
        self.phase = SubmitPhase::Submitting(ticket);
        info!(ticket = ticket.0, "submit accepted");
        Some(Effect::Submit {
            ticket,
            request: self.submit_request(),
        })
    }

    /// Feed back the result of asynchronous work. Results for a ticket that
    /// is not pending are dropped.
    pub fn apply(&mut self, event: FormEvent) -> Option<Effect> {
        match event {
            FormEvent::SubmitFinished { ticket, outcome } => {
                if self.phase != SubmitPhase::Submitting(ticket) {
                    warn!(ticket = ticket.0, "stale submit result ignored");
                    return None;
                }
                self.phase = SubmitPhase::Editing;
                match outcome {
                    SubmitOutcome::Succeeded => {
                        self.submit_failed = false;
                        Some(Effect::Navigate(Route::NextStep))
                    }
                    SubmitOutcome::Failed(err) => {
                        warn!(error = %err, "submit failed");
                        self.submit_failed = true;
                        None
                    }
                }
            }
        }
    }

    pub fn view(&self) -> FormView {
        let visible_errors = self
            .state()
            .iter()
            .filter_map(|(field, f)| {
                f.visible_error().map(|error| VisibleError {
                    field,
                    error,
                    message_id: error.message_id(),
                })
            })
            .collect();
        FormView {
            profile: self.state().clone(),
            email: self.email.clone(),
            phone_country: self.phone_country.clone(),
            persist_info: self.persist_info,
            can_persist_info: self.can_persist_info(),
            opt_in_newsletter: self.opt_in_newsletter,
            loading: self.loading(),
            submit_failed: self.submit_failed,
            visible_errors,
        }
    }
}
