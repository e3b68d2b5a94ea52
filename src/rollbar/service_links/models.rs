//! Service link data models

use serde::{Deserialize, Serialize};

use crate::error::{Result, RollbarError};
use crate::rollbar::traits::RollbarResource;

/// Service link from the Rollbar API
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ServiceLink {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub template: String,
}

impl RollbarResource for ServiceLink {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Name and URL template of a service link
#[derive(Serialize, Debug, Clone)]
pub struct ServiceLinkArgs {
    pub name: String,
    pub template: String,
}

impl ServiceLinkArgs {
    pub fn sanity_check(&self) -> Result<()> {
        if self.name.trim().is_empty() || self.template.trim().is_empty() {
            return Err(RollbarError::Validation(
                "service link needs a name and a template".to_string(),
            ));
        }
        Ok(())
    }
}
