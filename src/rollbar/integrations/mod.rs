//! Integrations module - per-project notification channel settings

mod api;
mod commands;
mod models;

pub use commands::run_integration_command;
pub use models::{
    EmailIntegration, IntegrationSettings, PagerDutyIntegration, SlackIntegration,
    WebhookIntegration,
};
