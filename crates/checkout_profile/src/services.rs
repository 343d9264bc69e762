//! Remote collaborators used on submit.
//!
//! Both calls are opaque: they report `success` or fail outright with a
//! [`SubmitError::Transport`]. [`LoopbackServices`] is an in-memory
//! implementation with scripted behaviour, used by the CLI replay and tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::SubmitError;
use crate::state::ProfileValues;

/// Payload of the "set profile" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(flatten)]
    pub values: ProfileValues,
    pub email: Option<String>,
    pub persist_info: bool,
}

/// Payload of the "set preferences" call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub opt_in_newsletter: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub success: bool,
}

#[async_trait]
pub trait ProfileService: Send + Sync {
    async fn set_profile(&self, update: ProfileUpdate) -> Result<UpdateResponse, SubmitError>;
}

#[async_trait]
pub trait PreferencesService: Send + Sync {
    async fn set_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<UpdateResponse, SubmitError>;
}

/// Scripted reply of a loopback call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteBehavior {
    #[default]
    Succeed,
    /// Call completes with `success: false`.
    Reject,
    /// Call fails at the transport level.
    Fail(String),
}

impl RemoteBehavior {
    fn reply(&self) -> Result<UpdateResponse, SubmitError> {
        match self {
            RemoteBehavior::Succeed => Ok(UpdateResponse { success: true }),
            RemoteBehavior::Reject => Ok(UpdateResponse { success: false }),
            RemoteBehavior::Fail(msg) => Err(SubmitError::transport(msg.clone())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoopbackScript {
    pub profile: RemoteBehavior,
    pub preferences: RemoteBehavior,
    pub profile_delay_ms: u64,
    pub preferences_delay_ms: u64,
}

/// In-memory profile + preferences backend. Records every payload it saw.
#[derive(Debug, Default)]
pub struct LoopbackServices {
    script: LoopbackScript,
    profiles: Mutex<Vec<ProfileUpdate>>,
    preferences: Mutex<Vec<PreferencesUpdate>>,
}

impl LoopbackServices {
    pub fn new(script: LoopbackScript) -> Self {
        Self {
            script,
            ..Default::default()
        }
    }

    pub fn profile_calls(&self) -> Vec<ProfileUpdate> {
        self.profiles.lock().map(|v| v.clone()).unwrap_or_default()
    }

    pub fn preferences_calls(&self) -> Vec<PreferencesUpdate> {
        self.preferences.lock().map(|v| v.clone()).unwrap_or_default()
    }

    async fn delay(ms: u64) {
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}

#[async_trait]
impl ProfileService for LoopbackServices {
    async fn set_profile(&self, update: ProfileUpdate) -> Result<UpdateResponse, SubmitError> {
        Self::delay(self.script.profile_delay_ms).await;
        if let Ok(mut calls) = self.profiles.lock() {
            calls.push(update);
        }
        self.script.profile.reply()
    }
}

#[async_trait]
impl PreferencesService for LoopbackServices {
    async fn set_preferences(
        &self,
        update: PreferencesUpdate,
    ) -> Result<UpdateResponse, SubmitError> {
        Self::delay(self.script.preferences_delay_ms).await;
        if let Ok(mut calls) = self.preferences.lock() {
            calls.push(update);
        }
        self.script.preferences.reply()
    }
}
