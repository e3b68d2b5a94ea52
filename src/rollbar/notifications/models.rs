//! Notification rule data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RollbarError};

/// Delivery channel a notification rule belongs to
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationChannel {
    Email,
    Slack,
    PagerDuty,
    Webhook,
}

impl NotificationChannel {
    pub const ALL: [NotificationChannel; 4] = [
        NotificationChannel::Email,
        NotificationChannel::Slack,
        NotificationChannel::PagerDuty,
        NotificationChannel::Webhook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationChannel::Email => "email",
            NotificationChannel::Slack => "slack",
            NotificationChannel::PagerDuty => "pagerduty",
            NotificationChannel::Webhook => "webhook",
        }
    }
}

impl fmt::Display for NotificationChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationChannel {
    type Err = RollbarError;

    fn from_str(s: &str) -> Result<Self> {
        NotificationChannel::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| RollbarError::Validation(format!("invalid channel '{}'", s)))
    }
}

/// Notification rule from the Rollbar API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Notification {
    pub id: i64,
    #[serde(default)]
    pub action: Option<String>,
    #[serde(default)]
    pub trigger: String,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub filters: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub config: Option<serde_json::Map<String, serde_json::Value>>,
    #[serde(default)]
    pub status: Option<String>,
}

impl Notification {
    pub fn filters(&self) -> &[serde_json::Value] {
        self.filters.as_deref().unwrap_or(&[])
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("")
    }
}

/// Trigger, filters and channel config of a rule
#[derive(Serialize, Debug, Clone, Default)]
pub struct NotificationArgs {
    pub trigger: String,
    pub filters: Vec<serde_json::Value>,
    pub config: serde_json::Map<String, serde_json::Value>,
}

impl NotificationArgs {
    pub fn sanity_check(&self) -> Result<()> {
        if self.trigger.trim().is_empty() {
            return Err(RollbarError::Validation(
                "notification trigger must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}
