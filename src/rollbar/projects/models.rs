//! Project data models

use serde::{Deserialize, Serialize};

use crate::rollbar::traits::RollbarResource;

/// Project data from the Rollbar API
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub account_id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub date_created: Option<i64>,
    #[serde(default)]
    pub date_modified: Option<i64>,
}

impl Project {
    /// Get project name
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Get project status
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("unknown")
    }

    /// Deleted projects linger in listings with a blank name
    pub fn is_deleted(&self) -> bool {
        self.name().trim().is_empty()
    }
}

impl RollbarResource for Project {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        self.name()
    }
}

/// Request payload for creating a project
#[derive(Serialize, Debug)]
pub struct CreateProjectRequest<'a> {
    pub name: &'a str,
}

/// Mutable project fields; unset fields are left untouched
#[derive(Serialize, Debug, Default, Clone)]
pub struct ProjectUpdateArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_data: Option<ProjectSettings>,
}

/// Project settings payload
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq)]
pub struct ProjectSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_format: Option<String>,
}

impl ProjectUpdateArgs {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.settings_data.is_none()
    }
}
