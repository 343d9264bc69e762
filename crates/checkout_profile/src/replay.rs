use std::path::Path;
use std::sync::Arc;

use checkout_profile::services::{LoopbackScript, LoopbackServices};
use checkout_profile::validation::PhoneFocus;
use checkout_profile::{
    Effect, FormConfig, FormView, OrderFormSnapshot, PreferencesSnapshot, ProfileAction,
    ProfileField, ProfileForm, SubmitExecutor,
};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayScript {
    #[serde(default)]
    pub order_form: OrderFormSnapshot,
    #[serde(default)]
    pub preferences: PreferencesSnapshot,
    #[serde(default)]
    pub remote: LoopbackScript,
    pub steps: Vec<Step>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    Change { field: ProfileField, value: String },
    Blur { field: ProfileField },
    PhoneBlur { focus: PhoneFocus },
    PhoneCountry { iso3: String },
    PersistInfo { checked: bool },
    OptInNewsletter { checked: bool },
    Dispatch { action: ProfileAction },
    EditEmail,
    Submit,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplayReport {
    pub form: FormView,
    pub effects: Vec<String>,
}

pub async fn run(script_path: &Path, config: &FormConfig) -> Result<ReplayReport> {
    let text = std::fs::read_to_string(script_path)?;
    let script: ReplayScript = serde_json::from_str(&text)?;

    let services = Arc::new(LoopbackServices::new(script.remote.clone()));
    let (executor, mut events) = SubmitExecutor::with_channel(services.clone(), services);

    let mut form = ProfileForm::new(config, &script.order_form, script.preferences);
    let mut effects = Vec::new();

    for step in script.steps {
        match step {
            Step::Change { field, value } => form.change(field, &value),
            Step::Blur { field } => form.blur(field),
            Step::PhoneBlur { focus } => form.phone_blur(focus),
            Step::PhoneCountry { iso3 } => {
                if !form.set_phone_country(&iso3) {
                    return Err(eyre!("unknown phone country {iso3}"));
                }
            }
            Step::PersistInfo { checked } => form.set_persist_info(checked),
            Step::OptInNewsletter { checked } => form.set_opt_in_newsletter(checked),
            Step::Dispatch { action } => form.dispatch(action),
            Step::EditEmail => effects.push(form.edit_email().to_string()),
            Step::Submit => {
                let Some(effect) = form.submit() else {
                    info!("submit did not leave the form");
                    continue;
                };
                effects.push(effect.to_string());
                if let Effect::Submit { ticket, request } = effect {
                    executor.spawn(ticket, request);
                    let event = events
                        .recv()
                        .await
                        .ok_or_else(|| eyre!("submit executor stopped"))?;
                    if let Some(next) = form.apply(event) {
                        effects.push(next.to_string());
                    }
                }
            }
        }
    }

    Ok(ReplayReport {
        form: form.view(),
        effects,
    })
}
