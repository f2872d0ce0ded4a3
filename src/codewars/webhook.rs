//! Payload codewars posts to user webhooks.
//!
//! Only the shape is modelled here, receiving and verifying the hook is up to
//! whoever hosts the endpoint.

use serde::{Deserialize, Serialize};

use crate::codewars::user::{Language, User};
use crate::codewars::CodewarsApiError;

/// Sent on honor changes and rank upgrades
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct UserWebhook {
    pub action: String,
    pub user: User,
    /// Only filled for language rank upgrades
    pub language: Language,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookAction<'a> {
    HonorChanged,
    RankUpgraded,
    Other(&'a str),
}

impl UserWebhook {
    pub fn from_slice(payload: &[u8]) -> Result<UserWebhook, CodewarsApiError> {
        serde_json::from_slice(payload).map_err(|source| CodewarsApiError::Decoding {
            source,
            subject: "UserWebhook",
        })
    }

    pub fn kind(&self) -> WebhookAction<'_> {
        match self.action.as_str() {
            "honor_changed" => WebhookAction::HonorChanged,
            "rank_upgraded" => WebhookAction::RankUpgraded,
            other => WebhookAction::Other(other),
        }
    }
}
