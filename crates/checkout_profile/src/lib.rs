//! Checkout profile step: field state store, validators and submission flow
//! of the identity form (name, phone, tax id).

pub mod config;
pub mod effects;
pub mod errors;
pub mod executor;
pub mod field;
pub mod form;
pub mod logging;
pub mod reducer;
pub mod services;
pub mod state;
pub mod store;
pub mod submit;
pub mod summary;
pub mod validation;

pub use config::FormConfig;
pub use effects::{Effect, FormEvent, Route};
pub use errors::{FieldError, SubmitError};
pub use executor::SubmitExecutor;
pub use field::{FieldState, ProfileField, Validity};
pub use form::{FormView, ProfileForm};
pub use reducer::{ProfileAction, ValidityUpdate, reduce};
pub use state::{OrderFormSnapshot, PreferencesSnapshot, ProfileSnapshot, ProfileState};
pub use store::ProfileStore;
pub use submit::{SubmitOutcome, SubmitPhase, SubmitRequest, SubmitTicket, run_submission};
