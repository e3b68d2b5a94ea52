//! User API operations

use log::debug;

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::client::Endpoint;
use crate::rollbar::teams::Team;
use crate::rollbar::RollbarClient;

use super::models::{User, UserList, UserTeamList};

const RESOURCE: &str = "user";

impl RollbarClient {
    /// List all users in the account
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let list: UserList = self.call(Endpoint::get(api::USERS, RESOURCE)).await?;
        Ok(list.users)
    }

    /// Get a user by ID
    pub async fn read_user(&self, user_id: i64) -> Result<User> {
        self.call(Endpoint::get(api::USER, RESOURCE).param("userID", user_id))
            .await
    }

    /// Find the first user whose email exactly matches
    pub async fn find_user_by_email(&self, email: &str) -> Result<User> {
        if email.trim().is_empty() {
            return Err(RollbarError::Validation(
                "email must not be blank".to_string(),
            ));
        }

        let user = self
            .list_users()
            .await?
            .into_iter()
            .find(|u| u.email == email)
            .ok_or(RollbarError::NotFound)?;
        debug!("Email {} belongs to user {}", email, user.id);
        Ok(user)
    }

    /// List every team a user belongs to
    pub async fn list_user_teams(&self, user_id: i64) -> Result<Vec<Team>> {
        let list: UserTeamList = self
            .call(Endpoint::get(api::USER_TEAMS, RESOURCE).param("userID", user_id))
            .await?;
        Ok(list.teams)
    }

    /// List a user's teams, leaving out the "Everyone" and "Owners" system teams
    pub async fn list_user_custom_teams(&self, user_id: i64) -> Result<Vec<Team>> {
        let mut teams = self.list_user_teams(user_id).await?;
        teams.retain(|t| !t.is_system());
        Ok(teams)
    }
}
