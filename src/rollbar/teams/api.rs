//! Team API operations

use log::{debug, info, warn};

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::client::Endpoint;
use crate::rollbar::traits::find_by_name;
use crate::rollbar::RollbarClient;

use super::models::{
    CreateTeamRequest, Team, TeamAccessLevel, TeamMembership, TeamProject, TeamUser,
};

const RESOURCE: &str = "team";

fn check_team_id(team_id: i64) -> Result<()> {
    if team_id <= 0 {
        return Err(RollbarError::Validation(format!(
            "invalid team id {}",
            team_id
        )));
    }
    Ok(())
}

impl RollbarClient {
    /// List all teams in the account, system teams included
    pub async fn list_teams(&self) -> Result<Vec<Team>> {
        self.call(Endpoint::get(api::TEAMS, RESOURCE)).await
    }

    /// List teams excluding the "Everyone" and "Owners" system teams
    pub async fn list_custom_teams(&self) -> Result<Vec<Team>> {
        let mut teams = self.list_teams().await?;
        teams.retain(|t| !t.is_system());
        Ok(teams)
    }

    /// Create a team
    pub async fn create_team(&self, name: &str, access_level: TeamAccessLevel) -> Result<Team> {
        if name.trim().is_empty() {
            return Err(RollbarError::Validation(
                "team name must not be blank".to_string(),
            ));
        }
        if access_level == TeamAccessLevel::Unknown {
            return Err(RollbarError::Validation("invalid access level".to_string()));
        }

        let endpoint = Endpoint::post(api::TEAMS, RESOURCE).json(&CreateTeamRequest {
            name,
            access_level,
        })?;
        let team: Team = self.call(endpoint).await?;
        info!("Created team '{}' (id {})", team.name, team.id);
        Ok(team)
    }

    /// Get a team by ID
    pub async fn read_team(&self, team_id: i64) -> Result<Team> {
        check_team_id(team_id)?;
        self.call(Endpoint::get(api::TEAM, RESOURCE).param("teamID", team_id))
            .await
    }

    /// Find a team by exact name
    pub async fn find_team_by_name(&self, name: &str) -> Result<Team> {
        let teams = self.list_teams().await?;
        find_by_name(&teams, name)
            .cloned()
            .ok_or(RollbarError::NotFound)
    }

    /// Delete a team
    pub async fn delete_team(&self, team_id: i64) -> Result<()> {
        check_team_id(team_id)?;
        self.call_empty(Endpoint::delete(api::TEAM, RESOURCE).param("teamID", team_id))
            .await?;
        info!("Deleted team {}", team_id);
        Ok(())
    }

    /// List the IDs of users on a team
    pub async fn list_team_user_ids(&self, team_id: i64) -> Result<Vec<i64>> {
        check_team_id(team_id)?;
        let rows: Vec<TeamUser> = self
            .call(Endpoint::get(api::TEAM_USERS, RESOURCE).param("teamID", team_id))
            .await?;
        Ok(rows.into_iter().map(|r| r.user_id).collect())
    }

    /// Check whether a user belongs to a team
    pub async fn is_user_team_member(&self, team_id: i64, user_id: i64) -> Result<bool> {
        check_team_id(team_id)?;
        self.exists(team_user_endpoint(reqwest::Method::GET, team_id, user_id))
            .await
    }

    /// Add a user to a team
    pub async fn assign_user_to_team(&self, team_id: i64, user_id: i64) -> Result<()> {
        check_team_id(team_id)?;
        self.call_empty(team_user_endpoint(reqwest::Method::PUT, team_id, user_id))
            .await?;
        info!("Assigned user {} to team {}", user_id, team_id);
        Ok(())
    }

    /// Remove a user from a team
    pub async fn remove_user_from_team(&self, team_id: i64, user_id: i64) -> Result<()> {
        check_team_id(team_id)?;
        self.call_empty(team_user_endpoint(reqwest::Method::DELETE, team_id, user_id))
            .await?;
        info!("Removed user {} from team {}", user_id, team_id);
        Ok(())
    }

    /// List the IDs of projects a team can access
    pub async fn list_team_project_ids(&self, team_id: i64) -> Result<Vec<i64>> {
        check_team_id(team_id)?;
        let rows: Vec<TeamProject> = self
            .call(Endpoint::get(api::TEAM_PROJECTS, RESOURCE).param("teamID", team_id))
            .await?;
        Ok(rows.into_iter().map(|r| r.project_id).collect())
    }

    /// Check whether a team is assigned to a project
    pub async fn is_team_assigned_to_project(&self, team_id: i64, project_id: i64) -> Result<bool> {
        check_team_id(team_id)?;
        self.exists(team_project_endpoint(reqwest::Method::GET, team_id, project_id))
            .await
    }

    /// Give a team access to a project
    pub async fn assign_team_to_project(&self, team_id: i64, project_id: i64) -> Result<()> {
        check_team_id(team_id)?;
        self.call_empty(team_project_endpoint(reqwest::Method::PUT, team_id, project_id))
            .await?;
        info!("Assigned team {} to project {}", team_id, project_id);
        Ok(())
    }

    /// Revoke a team's access to a project
    pub async fn remove_team_from_project(&self, team_id: i64, project_id: i64) -> Result<()> {
        check_team_id(team_id)?;
        self.call_empty(team_project_endpoint(
            reqwest::Method::DELETE,
            team_id,
            project_id,
        ))
        .await?;
        info!("Removed team {} from project {}", team_id, project_id);
        Ok(())
    }

    /// Put the person behind `email` on a team
    ///
    /// An existing user is assigned directly; otherwise an invitation is sent.
    pub async fn add_team_member_by_email(
        &self,
        team_id: i64,
        email: &str,
    ) -> Result<TeamMembership> {
        check_team_id(team_id)?;
        match self.find_user_by_email(email).await {
            Ok(user) => {
                self.assign_user_to_team(team_id, user.id).await?;
                Ok(TeamMembership::Assigned { user_id: user.id })
            }
            Err(RollbarError::NotFound) => {
                debug!("No user with email {}, inviting to team {}", email, team_id);
                let invitation = self.create_invitation(team_id, email).await?;
                Ok(TeamMembership::Invited(invitation))
            }
            Err(e) => Err(e),
        }
    }

    /// Take the person behind `email` off a team
    ///
    /// Removes the user if one exists, otherwise cancels any pending
    /// invitations for that address on the team.
    pub async fn remove_team_member_by_email(&self, team_id: i64, email: &str) -> Result<()> {
        check_team_id(team_id)?;
        match self.find_user_by_email(email).await {
            Ok(user) => self.remove_user_from_team(team_id, user.id).await,
            Err(RollbarError::NotFound) => {
                let pending: Vec<_> = self
                    .list_pending_invitations(team_id)
                    .await?
                    .into_iter()
                    .filter(|inv| inv.to_email.eq_ignore_ascii_case(email))
                    .collect();
                if pending.is_empty() {
                    warn!("{} is neither a member nor invited to team {}", email, team_id);
                }
                for invitation in pending {
                    self.cancel_invitation(invitation.id).await?;
                }
                Ok(())
            }
            Err(e) => Err(e),
        }
    }
}

fn team_user_endpoint(method: reqwest::Method, team_id: i64, user_id: i64) -> Endpoint {
    Endpoint::new(method, api::TEAM_USER, RESOURCE)
        .param("teamID", team_id)
        .param("userID", user_id)
}

fn team_project_endpoint(method: reqwest::Method, team_id: i64, project_id: i64) -> Endpoint {
    Endpoint::new(method, api::TEAM_PROJECT, RESOURCE)
        .param("teamID", team_id)
        .param("projectID", project_id)
}
