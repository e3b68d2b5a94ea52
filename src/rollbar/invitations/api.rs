//! Invitation API operations

use log::{debug, info, warn};

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::client::Endpoint;
use crate::rollbar::RollbarClient;

use super::models::{CreateInvitationRequest, Invitation};

const RESOURCE: &str = "invitation";

/// Body fragment the API returns (with HTTP 422) when canceling twice
const ALREADY_CANCELED: &str = "already canceled";

fn check_id(kind: &str, id: i64) -> Result<()> {
    if id <= 0 {
        return Err(RollbarError::Validation(format!("invalid {} id {}", kind, id)));
    }
    Ok(())
}

impl RollbarClient {
    /// List all invitations of a team, walking every page
    pub async fn list_invitations(&self, team_id: i64) -> Result<Vec<Invitation>> {
        check_id("team", team_id)?;
        let invitations: Vec<Invitation> = self
            .fetch_all_pages(Endpoint::get(api::TEAM_INVITES, RESOURCE).param("teamID", team_id))
            .await?;
        debug!("Team {} has {} invitations", team_id, invitations.len());
        Ok(invitations)
    }

    /// List a team's invitations that are still pending
    pub async fn list_pending_invitations(&self, team_id: i64) -> Result<Vec<Invitation>> {
        let mut invitations = self.list_invitations(team_id).await?;
        invitations.retain(Invitation::is_pending);
        Ok(invitations)
    }

    /// Invite an email address to a team
    pub async fn create_invitation(&self, team_id: i64, email: &str) -> Result<Invitation> {
        check_id("team", team_id)?;
        if email.trim().is_empty() {
            return Err(RollbarError::Validation(
                "email must not be blank".to_string(),
            ));
        }

        let endpoint = Endpoint::post(api::TEAM_INVITES, RESOURCE)
            .param("teamID", team_id)
            .json(&CreateInvitationRequest { email })?;
        let invitation: Invitation = self.call(endpoint).await?;
        info!("Invited {} to team {} (invitation {})", email, team_id, invitation.id);
        Ok(invitation)
    }

    /// Get an invitation by ID
    pub async fn read_invitation(&self, invitation_id: i64) -> Result<Invitation> {
        check_id("invitation", invitation_id)?;
        self.call(Endpoint::get(api::INVITE, RESOURCE).param("inviteID", invitation_id))
            .await
    }

    /// Cancel an invitation
    ///
    /// Canceling an invitation that is already canceled succeeds: the API
    /// answers 422 "Invite already canceled", and the desired state holds.
    pub async fn cancel_invitation(&self, invitation_id: i64) -> Result<()> {
        check_id("invitation", invitation_id)?;
        let endpoint = Endpoint::delete(api::INVITE, RESOURCE).param("inviteID", invitation_id);

        match self.call_empty(endpoint).await {
            Ok(()) => {
                info!("Canceled invitation {}", invitation_id);
                Ok(())
            }
            Err(RollbarError::Api {
                status: 422,
                ref message,
                ..
            }) if message.to_lowercase().contains(ALREADY_CANCELED) => {
                warn!("Invitation {} was already canceled", invitation_id);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// Find every invitation sent to `email`, across all teams
    pub async fn find_invitations(&self, email: &str) -> Result<Vec<Invitation>> {
        if email.trim().is_empty() {
            return Err(RollbarError::Validation(
                "email must not be blank".to_string(),
            ));
        }

        let mut found = Vec::new();
        for team in self.list_teams().await? {
            let invitations = self.list_invitations(team.id).await?;
            found.extend(
                invitations
                    .into_iter()
                    .filter(|inv| inv.to_email.eq_ignore_ascii_case(email)),
            );
        }
        Ok(found)
    }

    /// Find pending invitations sent to `email`, across all teams
    pub async fn find_pending_invitations(&self, email: &str) -> Result<Vec<Invitation>> {
        let mut invitations = self.find_invitations(email).await?;
        invitations.retain(Invitation::is_pending);
        Ok(invitations)
    }
}
