//! Project API operations

use log::{debug, info};

use crate::config::api;
use crate::error::{Result, RollbarError};
use crate::rollbar::access_tokens::DEFAULT_TOKEN_NAMES;
use crate::rollbar::client::Endpoint;
use crate::rollbar::traits::find_by_name;
use crate::rollbar::RollbarClient;

use super::models::{CreateProjectRequest, Project, ProjectUpdateArgs};

const RESOURCE: &str = "project";

fn check_project_id(project_id: i64) -> Result<()> {
    if project_id <= 0 {
        return Err(RollbarError::Validation(format!(
            "invalid project id {}",
            project_id
        )));
    }
    Ok(())
}

impl RollbarClient {
    /// List all live projects in the account
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let projects: Vec<Project> = self.call(Endpoint::get(api::PROJECTS, RESOURCE)).await?;
        let total = projects.len();
        let live: Vec<Project> = projects.into_iter().filter(|p| !p.is_deleted()).collect();
        debug!(
            "Listed {} projects ({} deleted skipped)",
            live.len(),
            total - live.len()
        );
        Ok(live)
    }

    /// Create a project and remove the access tokens Rollbar provisions with it
    ///
    /// A new project comes with `read`, `write`, `post_client_item` and
    /// `post_server_item` tokens. Only explicitly declared tokens should
    /// exist, so these are deleted straight away.
    pub async fn create_project(&self, name: &str) -> Result<Project> {
        if name.trim().is_empty() {
            return Err(RollbarError::Validation(
                "project name must not be blank".to_string(),
            ));
        }

        let endpoint = Endpoint::post(api::PROJECTS, RESOURCE).json(&CreateProjectRequest { name })?;
        let project: Project = self.call(endpoint).await?;
        info!("Created project '{}' (id {})", name, project.id);

        self.delete_default_access_tokens(project.id).await?;
        Ok(project)
    }

    /// Delete the auto-provisioned tokens of a freshly created project
    ///
    /// Every token must carry one of the default names; any other name means
    /// the project is not in the expected state and nothing is deleted.
    pub async fn delete_default_access_tokens(&self, project_id: i64) -> Result<()> {
        let tokens = self.list_project_access_tokens(project_id).await?;

        if let Some(token) = tokens
            .iter()
            .find(|t| !DEFAULT_TOKEN_NAMES.contains(&t.name()))
        {
            return Err(RollbarError::Unexpected(format!(
                "project {} has unexpected access token '{}'",
                project_id,
                token.name()
            )));
        }

        for token in &tokens {
            self.delete_project_access_token(project_id, &token.access_token)
                .await?;
            debug!(
                "Deleted default access token '{}' of project {}",
                token.name(),
                project_id
            );
        }
        Ok(())
    }

    /// Get a project by ID
    pub async fn read_project(&self, project_id: i64) -> Result<Project> {
        check_project_id(project_id)?;
        let endpoint = Endpoint::get(api::PROJECT, RESOURCE).param("projectID", project_id);
        let project: Project = self.call(endpoint).await?;

        if project.is_deleted() {
            debug!("Project {} has a blank name, treating as deleted", project_id);
            return Err(RollbarError::NotFound);
        }
        Ok(project)
    }

    /// Find a project by exact name
    pub async fn find_project_by_name(&self, name: &str) -> Result<Project> {
        let projects = self.list_projects().await?;
        find_by_name(&projects, name)
            .cloned()
            .ok_or(RollbarError::NotFound)
    }

    /// Update a project's name or settings
    pub async fn update_project(&self, project_id: i64, args: &ProjectUpdateArgs) -> Result<Project> {
        check_project_id(project_id)?;
        if args.is_empty() {
            return Err(RollbarError::Validation(
                "project update has no fields set".to_string(),
            ));
        }
        if args.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(RollbarError::Validation(
                "project name must not be blank".to_string(),
            ));
        }

        let endpoint = Endpoint::patch(api::PROJECT, RESOURCE)
            .param("projectID", project_id)
            .json(args)?;
        let project = self.call(endpoint).await?;
        info!("Updated project {}", project_id);
        Ok(project)
    }

    /// Delete a project
    pub async fn delete_project(&self, project_id: i64) -> Result<()> {
        check_project_id(project_id)?;
        let endpoint = Endpoint::delete(api::PROJECT, RESOURCE).param("projectID", project_id);
        self.call_empty(endpoint).await?;
        info!("Deleted project {}", project_id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn project_json(id: i64, name: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "account_id": 317418,
            "name": name,
            "status": "enabled",
            "date_created": 1489139046,
            "date_modified": 1549293583
        })
    }

    fn token_json(project_id: i64, token: &str, name: &str) -> serde_json::Value {
        serde_json::json!({
            "project_id": project_id,
            "access_token": token,
            "name": name,
            "status": "enabled",
            "scopes": [name]
        })
    }

    async fn mount_project_creation(mock_server: &MockServer, token_names: &[&str]) {
        Mock::given(method("POST"))
            .and(path("/api/1/projects"))
            .and(body_json(serde_json::json!({"name": "web"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": project_json(42, Some("web"))
            })))
            .expect(1)
            .mount(mock_server)
            .await;

        let tokens: Vec<_> = token_names
            .iter()
            .enumerate()
            .map(|(i, name)| token_json(42, &format!("tok{}", i), name))
            .collect();
        Mock::given(method("GET"))
            .and(path("/api/1/project/42/access_tokens"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": tokens
            })))
            .mount(mock_server)
            .await;
    }

    #[tokio::test]
    async fn test_list_projects_skips_deleted() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": [
                    project_json(1, Some("alpha")),
                    project_json(2, None),
                    project_json(3, Some("gamma"))
                ]
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let projects = client.list_projects().await.unwrap();

        let names: Vec<&str> = projects.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["alpha", "gamma"]);
    }

    #[tokio::test]
    async fn test_create_project_deletes_default_tokens() {
        let mock_server = MockServer::start().await;
        mount_project_creation(
            &mock_server,
            &["read", "write", "post_client_item", "post_server_item"],
        )
        .await;

        for i in 0..4 {
            Mock::given(method("DELETE"))
                .and(path(format!("/api/1/project/42/access_token/tok{}", i)))
                .respond_with(
                    ResponseTemplate::new(200).set_body_json(serde_json::json!({"err": 0})),
                )
                .expect(1)
                .mount(&mock_server)
                .await;
        }

        let client = RollbarClient::test_client(&mock_server.uri());
        let project = client.create_project("web").await.unwrap();

        assert_eq!(project.id, 42);
        assert_eq!(project.name(), "web");
    }

    #[tokio::test]
    async fn test_create_project_fails_on_unexpected_token() {
        let mock_server = MockServer::start().await;
        mount_project_creation(&mock_server, &["read", "write", "deploy-bot"]).await;

        Mock::given(method("DELETE"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        match client.create_project("web").await {
            Err(RollbarError::Unexpected(msg)) => assert!(msg.contains("deploy-bot")),
            other => panic!("Expected Unexpected error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_create_project_blank_name_sends_nothing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        assert!(matches!(
            client.create_project("  ").await,
            Err(RollbarError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_create_then_read_project() {
        let mock_server = MockServer::start().await;
        mount_project_creation(&mock_server, &[]).await;

        Mock::given(method("GET"))
            .and(path("/api/1/project/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": project_json(42, Some("web"))
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let created = client.create_project("web").await.unwrap();
        let read = client.read_project(created.id).await.unwrap();

        assert_eq!(read.name(), created.name());
    }

    #[tokio::test]
    async fn test_read_project_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/project/7"))
            .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
                "err": 1,
                "message": "Project not found"
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        assert!(matches!(
            client.read_project(7).await,
            Err(RollbarError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_read_deleted_project_is_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/project/7"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": project_json(7, None)
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        assert!(client.read_project(7).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_unauthorized_on_every_call() {
        let mock_server = MockServer::start().await;

        Mock::given(wiremock::matchers::any())
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
                "err": 1,
                "message": "invalid access token"
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        assert!(matches!(
            client.list_projects().await,
            Err(RollbarError::Unauthorized)
        ));
        assert!(matches!(
            client.read_project(1).await,
            Err(RollbarError::Unauthorized)
        ));
        assert!(matches!(
            client.create_project("web").await,
            Err(RollbarError::Unauthorized)
        ));
        assert!(matches!(
            client.delete_project(1).await,
            Err(RollbarError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn test_find_project_by_name() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/projects"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": [project_json(1, Some("alpha")), project_json(3, Some("gamma"))]
            })))
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        assert_eq!(client.find_project_by_name("gamma").await.unwrap().id, 3);
        assert!(client
            .find_project_by_name("delta")
            .await
            .unwrap_err()
            .is_not_found());
    }

    #[tokio::test]
    async fn test_update_project() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/api/1/project/42"))
            .and(body_json(serde_json::json!({"name": "web-2"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "err": 0,
                "result": project_json(42, Some("web-2"))
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        let args = ProjectUpdateArgs {
            name: Some("web-2".to_string()),
            settings_data: None,
        };
        let project = client.update_project(42, &args).await.unwrap();
        assert_eq!(project.name(), "web-2");

        assert!(matches!(
            client.update_project(42, &ProjectUpdateArgs::default()).await,
            Err(RollbarError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_delete_project() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/api/1/project/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"err": 0})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = RollbarClient::test_client(&mock_server.uri());
        client.delete_project(42).await.unwrap();
        assert!(matches!(
            client.delete_project(0).await,
            Err(RollbarError::Validation(_))
        ));
    }
}
