//! Team data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RollbarError};
use crate::rollbar::invitations::Invitation;
use crate::rollbar::traits::RollbarResource;

/// Teams Rollbar creates in every account; never managed by users
pub const SYSTEM_TEAM_NAMES: &[&str] = &["Everyone", "Owners"];

/// Team access level
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TeamAccessLevel {
    #[default]
    Standard,
    Light,
    View,
    #[serde(other)]
    Unknown,
}

impl TeamAccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamAccessLevel::Standard => "standard",
            TeamAccessLevel::Light => "light",
            TeamAccessLevel::View => "view",
            TeamAccessLevel::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TeamAccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TeamAccessLevel {
    type Err = RollbarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "standard" => Ok(TeamAccessLevel::Standard),
            "light" => Ok(TeamAccessLevel::Light),
            "view" => Ok(TeamAccessLevel::View),
            _ => Err(RollbarError::Validation(format!(
                "invalid access level '{}'",
                s
            ))),
        }
    }
}

/// Team data from the Rollbar API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Team {
    pub id: i64,
    #[serde(default)]
    pub account_id: i64,
    pub name: String,
    #[serde(default)]
    pub access_level: TeamAccessLevel,
}

impl Team {
    /// True for the account-wide "Everyone" and "Owners" teams
    pub fn is_system(&self) -> bool {
        SYSTEM_TEAM_NAMES.contains(&self.name.as_str())
    }
}

impl RollbarResource for Team {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Request payload for creating a team
#[derive(Serialize, Debug)]
pub struct CreateTeamRequest<'a> {
    pub name: &'a str,
    pub access_level: TeamAccessLevel,
}

/// Team-user membership row
#[derive(Deserialize, Debug, Clone)]
pub struct TeamUser {
    pub team_id: i64,
    pub user_id: i64,
}

/// Team-project assignment row
#[derive(Deserialize, Debug, Clone)]
pub struct TeamProject {
    pub team_id: i64,
    pub project_id: i64,
}

/// Outcome of adding someone to a team by email
#[derive(Debug, Clone)]
pub enum TeamMembership {
    /// An existing user was assigned to the team
    Assigned { user_id: i64 },
    /// No user has that email yet, so an invitation was sent
    Invited(Invitation),
}
