//! Service link API operations

use log::info;

use crate::config::api;
use crate::error::Result;
use crate::rollbar::client::Endpoint;
use crate::rollbar::RollbarClient;

use super::models::{ServiceLink, ServiceLinkArgs};

const RESOURCE: &str = "service_link";

impl RollbarClient {
    /// List all service links
    pub async fn list_service_links(&self) -> Result<Vec<ServiceLink>> {
        self.call(Endpoint::get(api::SERVICE_LINKS, RESOURCE)).await
    }

    /// Create a service link
    pub async fn create_service_link(&self, args: &ServiceLinkArgs) -> Result<ServiceLink> {
        args.sanity_check()?;
        let endpoint = Endpoint::post(api::SERVICE_LINKS, RESOURCE).json(args)?;
        let link: ServiceLink = self.call(endpoint).await?;
        info!("Created service link '{}' (id {})", link.name, link.id);
        Ok(link)
    }

    /// Get a service link by ID
    pub async fn read_service_link(&self, id: i64) -> Result<ServiceLink> {
        self.call(Endpoint::get(api::SERVICE_LINK, RESOURCE).param("id", id))
            .await
    }

    /// Replace a service link's name and template
    pub async fn update_service_link(&self, id: i64, args: &ServiceLinkArgs) -> Result<ServiceLink> {
        args.sanity_check()?;
        let endpoint = Endpoint::put(api::SERVICE_LINK, RESOURCE)
            .param("id", id)
            .json(args)?;
        let link = self.call(endpoint).await?;
        info!("Updated service link {}", id);
        Ok(link)
    }

    /// Delete a service link
    pub async fn delete_service_link(&self, id: i64) -> Result<()> {
        self.call_empty(Endpoint::delete(api::SERVICE_LINK, RESOURCE).param("id", id))
            .await?;
        info!("Deleted service link {}", id);
        Ok(())
    }
}
