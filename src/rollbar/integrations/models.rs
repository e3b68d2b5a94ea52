//! Integration settings models
//!
//! Each integration is a singleton per project, so there is no id: the
//! settings type alone selects the endpoint.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RollbarError};
use crate::rollbar::notifications::NotificationChannel;

/// Settings of one integration kind
pub trait IntegrationSettings: Serialize + DeserializeOwned {
    /// Integration these settings belong to
    const CHANNEL: NotificationChannel;

    /// Reject settings the API would refuse
    fn sanity_check(&self) -> Result<()> {
        Ok(())
    }
}

fn require(enabled: bool, value: Option<&str>, field: &str) -> Result<()> {
    if enabled && value.map_or(true, |v| v.trim().is_empty()) {
        return Err(RollbarError::Validation(format!(
            "{} is required when the integration is enabled",
            field
        )));
    }
    Ok(())
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct EmailIntegration {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_request_params: Option<bool>,
}

impl IntegrationSettings for EmailIntegration {
    const CHANNEL: NotificationChannel = NotificationChannel::Email;
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SlackIntegration {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_message_buttons: Option<bool>,
}

impl IntegrationSettings for SlackIntegration {
    const CHANNEL: NotificationChannel = NotificationChannel::Slack;

    fn sanity_check(&self) -> Result<()> {
        require(self.enabled, self.channel.as_deref(), "channel")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct PagerDutyIntegration {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_key: Option<String>,
}

impl IntegrationSettings for PagerDutyIntegration {
    const CHANNEL: NotificationChannel = NotificationChannel::PagerDuty;

    fn sanity_check(&self) -> Result<()> {
        require(self.enabled, self.service_key.as_deref(), "service_key")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WebhookIntegration {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl IntegrationSettings for WebhookIntegration {
    const CHANNEL: NotificationChannel = NotificationChannel::Webhook;

    fn sanity_check(&self) -> Result<()> {
        require(self.enabled, self.url.as_deref(), "url")
    }
}
