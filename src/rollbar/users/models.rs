//! User data models

use serde::{Deserialize, Serialize};

use crate::rollbar::teams::Team;
use crate::rollbar::traits::RollbarResource;

/// User data from the Rollbar API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub email_enabled: Option<bool>,
}

impl RollbarResource for User {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.username
    }
}

/// `result` payload of the user listing
#[derive(Deserialize, Debug)]
pub struct UserList {
    #[serde(default)]
    pub users: Vec<User>,
}

/// `result` payload of a user's team listing
#[derive(Deserialize, Debug)]
pub struct UserTeamList {
    #[serde(default)]
    pub teams: Vec<Team>,
}
