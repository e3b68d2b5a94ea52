//! Notification rule output formatter

use serde::Serialize;

use super::common::{output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::Notification;

#[derive(Serialize)]
struct NotificationRow {
    id: i64,
    trigger: String,
    status: String,
    filters: Vec<serde_json::Value>,
    config: serde_json::Map<String, serde_json::Value>,
}

impl From<&Notification> for NotificationRow {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            trigger: notification.trigger.clone(),
            status: notification.status().to_string(),
            filters: notification.filters().to_vec(),
            config: notification.config.clone().unwrap_or_default(),
        }
    }
}

impl Tabular for NotificationRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "TRIGGER", "STATUS", "FILTERS", "CONFIG"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.trigger.clone(),
            self.status.clone(),
            serde_json::Value::from(self.filters.clone()).to_string(),
            serde_json::Value::from(self.config.clone()).to_string(),
        ]
    }
}

/// Output notification rules in the specified format
pub fn output_notifications(
    notifications: &[Notification],
    format: OutputFormat,
    no_header: bool,
) {
    let rows: Vec<NotificationRow> = notifications.iter().map(NotificationRow::from).collect();
    output_rows(&rows, format, no_header);
}
