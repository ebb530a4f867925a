//! Inbound request envelope sent by the voice platform.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::intent::SlotName;

/// One platform invocation.
#[derive(Debug, Clone, Deserialize)]
pub struct SkillEvent {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub session: Option<Session>,
    #[serde(default)]
    pub context: Option<Context>,
    pub request: Request,
}

impl SkillEvent {
    /// The user this invocation is for. Session first, then device context.
    pub fn user_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|s| s.user.user_id.as_str())
            .or_else(|| self.context.as_ref().map(|c| c.system.user.user_id.as_str()))
            .filter(|id| !id.is_empty())
    }

    /// The application this invocation is addressed to.
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .map(|s| s.application.application_id.as_str())
            .or_else(|| {
                self.context
                    .as_ref()
                    .map(|c| c.system.application.application_id.as_str())
            })
            .filter(|id| !id.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub application: Application,
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    #[serde(rename = "System")]
    pub system: SystemContext,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SystemContext {
    pub application: Application,
    pub user: User,
}

/// The request body, tagged on `type`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    LaunchRequest(RequestMeta),
    IntentRequest(IntentRequest),
    SessionEndedRequest(SessionEndedRequest),
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    #[serde(default)]
    pub request_id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub dialog_state: Option<String>,
    pub intent: IntentPayload,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEndedRequest {
    #[serde(default)]
    pub request_id: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// The intent as the platform sends it. Echoed back on dialog directives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub slots: BTreeMap<String, Slot>,
}

impl IntentPayload {
    /// The captured value of a slot. Empty strings count as no value.
    pub fn slot_value(&self, slot: SlotName) -> Option<&str> {
        self.slots
            .get(slot.as_str())
            .and_then(|s| s.value.as_deref())
            .filter(|v| !v.is_empty())
    }

    /// The confirmation status of a slot (`None` when the slot is absent).
    pub fn slot_status(&self, slot: SlotName) -> ConfirmationStatus {
        self.slots
            .get(slot.as_str())
            .map(|s| s.confirmation_status)
            .unwrap_or_default()
    }
}

/// A slot and its current state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
}

/// Whether the user has confirmed a slot value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfirmationStatus {
    /// Not asked yet. The platform spells this `UNCONFIRMED` on some payloads.
    #[default]
    #[serde(alias = "UNCONFIRMED")]
    None,
    Confirmed,
    Denied,
}
