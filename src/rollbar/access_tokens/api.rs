//! Project access token API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::client::Endpoint;
use crate::rollbar::RollbarClient;

use super::models::{
    ProjectAccessToken, ProjectAccessTokenCreateArgs, ProjectAccessTokenUpdateArgs,
};

const RESOURCE: &str = "project_access_token";

impl RollbarClient {
    /// List all access tokens of a project
    pub async fn list_project_access_tokens(
        &self,
        project_id: i64,
    ) -> Result<Vec<ProjectAccessToken>> {
        let endpoint =
            Endpoint::get(api::PROJECT_ACCESS_TOKENS, RESOURCE).param("projectID", project_id);
        let tokens: Vec<ProjectAccessToken> = self.call(endpoint).await?;
        debug!("Project {} has {} access tokens", project_id, tokens.len());
        Ok(tokens)
    }

    /// Get a project access token by its token value
    pub async fn read_project_access_token(
        &self,
        project_id: i64,
        access_token: &str,
    ) -> Result<ProjectAccessToken> {
        self.list_project_access_tokens(project_id)
            .await?
            .into_iter()
            .find(|t| t.access_token == access_token)
            .ok_or(RollbarError::NotFound)
    }

    /// Get the first project access token with the given name
    ///
    /// The API cannot filter by name, so the full list is scanned.
    pub async fn find_project_access_token_by_name(
        &self,
        project_id: i64,
        name: &str,
    ) -> Result<ProjectAccessToken> {
        self.list_project_access_tokens(project_id)
            .await?
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or(RollbarError::NotFound)
    }

    /// Create a project access token
    pub async fn create_project_access_token(
        &self,
        args: &ProjectAccessTokenCreateArgs,
    ) -> Result<ProjectAccessToken> {
        args.sanity_check()?;

        let endpoint = Endpoint::post(api::PROJECT_ACCESS_TOKENS, RESOURCE)
            .param("projectID", args.project_id)
            .json(args)?;
        let token: ProjectAccessToken = self.call(endpoint).await?;
        info!(
            "Created access token '{}' for project {}",
            token.name(),
            args.project_id
        );
        Ok(token)
    }

    /// Update the rate limit window of a project access token
    pub async fn update_project_access_token(
        &self,
        args: &ProjectAccessTokenUpdateArgs,
    ) -> Result<()> {
        args.sanity_check()?;

        let endpoint = Endpoint::patch(api::PROJECT_ACCESS_TOKEN, RESOURCE)
            .param("projectID", args.project_id)
            .param("accessToken", &args.access_token)
            .json(args)?;
        self.call_empty(endpoint).await?;
        info!("Updated access token of project {}", args.project_id);
        Ok(())
    }

    /// Delete a project access token
    pub async fn delete_project_access_token(
        &self,
        project_id: i64,
        access_token: &str,
    ) -> Result<()> {
        if project_id <= 0 || access_token.trim().is_empty() {
            return Err(RollbarError::Validation(
                "deleting a token needs a project id and a token value".to_string(),
            ));
        }

        let endpoint = Endpoint::delete(api::PROJECT_ACCESS_TOKEN, RESOURCE)
            .param("projectID", project_id)
            .param("accessToken", access_token);
        self.call_empty(endpoint).await
    }
}
