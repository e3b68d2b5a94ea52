//! Notification rule API operations

use log::info;

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::client::Endpoint;
use crate::rollbar::RollbarClient;

use super::models::{Notification, NotificationArgs, NotificationChannel};

const RESOURCE: &str = "notification";

fn rule_endpoint(
    method: reqwest::Method,
    channel: NotificationChannel,
    notification_id: i64,
) -> Endpoint {
    Endpoint::new(method, api::NOTIFICATION_RULE, RESOURCE)
        .param("channel", channel)
        .param("notificationID", notification_id)
}

impl RollbarClient {
    /// List all notification rules of a channel
    pub async fn list_notifications(
        &self,
        channel: NotificationChannel,
    ) -> Result<Vec<Notification>> {
        self.call(Endpoint::get(api::NOTIFICATION_RULES, RESOURCE).param("channel", channel))
            .await
    }

    /// Create a notification rule
    ///
    /// The API takes and returns an array of rules; one rule is sent and the
    /// first element of the answer is the created rule.
    pub async fn create_notification(
        &self,
        channel: NotificationChannel,
        args: &NotificationArgs,
    ) -> Result<Notification> {
        args.sanity_check()?;

        let endpoint = Endpoint::post(api::NOTIFICATION_RULES, RESOURCE)
            .param("channel", channel)
            .json(&[args])?;
        let created: Vec<Notification> = self.call(endpoint).await?;
        let notification = created.into_iter().next().ok_or_else(|| {
            RollbarError::Unexpected("notification create returned no rules".to_string())
        })?;
        info!(
            "Created {} notification {} on '{}'",
            channel, notification.id, notification.trigger
        );
        Ok(notification)
    }

    /// Get a notification rule
    pub async fn read_notification(
        &self,
        channel: NotificationChannel,
        notification_id: i64,
    ) -> Result<Notification> {
        self.call(rule_endpoint(reqwest::Method::GET, channel, notification_id))
            .await
    }

    /// Replace a notification rule's trigger, filters and config
    pub async fn update_notification(
        &self,
        channel: NotificationChannel,
        notification_id: i64,
        args: &NotificationArgs,
    ) -> Result<Notification> {
        args.sanity_check()?;
        let endpoint = rule_endpoint(reqwest::Method::PUT, channel, notification_id).json(args)?;
        let notification = self.call(endpoint).await?;
        info!("Updated {} notification {}", channel, notification_id);
        Ok(notification)
    }

    /// Delete a notification rule
    pub async fn delete_notification(
        &self,
        channel: NotificationChannel,
        notification_id: i64,
    ) -> Result<()> {
        self.call_empty(rule_endpoint(reqwest::Method::DELETE, channel, notification_id))
            .await?;
        info!("Deleted {} notification {}", channel, notification_id);
        Ok(())
    }
}
