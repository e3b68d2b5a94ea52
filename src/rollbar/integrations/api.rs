//! Integration API operations

use log::info;

use crate::config::api;
use crate::error::Result;
use crate::rollbar::client::Endpoint;
use crate::rollbar::RollbarClient;

use super::models::IntegrationSettings;

const RESOURCE: &str = "integration";

impl RollbarClient {
    /// Get the current settings of an integration
    pub async fn read_integration<S>(&self) -> Result<S>
    where
        S: IntegrationSettings,
    {
        self.call(Endpoint::get(api::INTEGRATION, RESOURCE).param("integration", S::CHANNEL))
            .await
    }

    /// Replace the settings of an integration
    pub async fn update_integration<S>(&self, settings: &S) -> Result<()>
    where
        S: IntegrationSettings,
    {
        settings.sanity_check()?;
        let endpoint = Endpoint::put(api::INTEGRATION, RESOURCE)
            .param("integration", S::CHANNEL)
            .json(settings)?;
        self.call_empty(endpoint).await?;
        info!("Updated {} integration", S::CHANNEL);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollbarError;
    use crate::rollbar::integrations::{SlackIntegration, WebhookIntegration};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_read_slack_integration() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/notifications/slack"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": {
                    "enabled": true,
                    "service_account_id": 1234,
                    "channel": "#alerts",
                    "show_message_buttons": true
                }
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let slack: SlackIntegration = client.read_integration().await.unwrap();
        assert!(slack.enabled);
        assert_eq!(slack.channel.as_deref(), Some("#alerts"));
        assert_eq!(slack.service_account_id, Some(1234));
    }

    #[tokio::test]
    async fn test_update_webhook_integration() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/api/1/notifications/webhook"))
            .and(body_json(serde_json::json!({
                "enabled": true,
                "url": "https://hooks.example.com/rollbar"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"err": 0})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let hook = WebhookIntegration {
            enabled: true,
            url: Some("https://hooks.example.com/rollbar".to_string()),
        };
        client.update_integration(&hook).await.unwrap();
    }

    #[tokio::test]
    async fn test_update_invalid_settings_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let hook = WebhookIntegration {
            enabled: true,
            url: None,
        };
        assert!(matches!(
            client.update_integration(&hook).await,
            Err(RollbarError::Validation(_))
        ));
    }
}
