/// Configuration constants for the Rollbar API
pub mod api {
    /// Default Rollbar API host
    pub const DEFAULT_URL: &str = "https://api.rollbar.com";

    /// Base path for Rollbar API v1
    pub const BASE_PATH: &str = "/api/1";

    /// Header carrying the account or project access token
    pub const TOKEN_HEADER: &str = "X-Rollbar-Access-Token";

    /// Diagnostic header naming the resource type behind a call
    pub const RESOURCE_HEADER: &str = "X-Rollbar-Resource";

    /// Upper bound on pages fetched by a single paginated listing
    pub const DEFAULT_MAX_PAGES: u32 = 1000;

    pub const PROJECTS: &str = "/projects";
    pub const PROJECT: &str = "/project/{projectID}";
    pub const PROJECT_ACCESS_TOKENS: &str = "/project/{projectID}/access_tokens";
    pub const PROJECT_ACCESS_TOKEN: &str = "/project/{projectID}/access_token/{accessToken}";

    pub const TEAMS: &str = "/teams";
    pub const TEAM: &str = "/team/{teamID}";
    pub const TEAM_USERS: &str = "/team/{teamID}/users";
    pub const TEAM_USER: &str = "/team/{teamID}/user/{userID}";
    pub const TEAM_PROJECTS: &str = "/team/{teamID}/projects";
    pub const TEAM_PROJECT: &str = "/team/{teamID}/project/{projectID}";
    pub const TEAM_INVITES: &str = "/team/{teamID}/invites";

    pub const USERS: &str = "/users";
    pub const USER: &str = "/user/{userID}";
    pub const USER_TEAMS: &str = "/user/{userID}/teams";

    pub const INVITE: &str = "/invite/{inviteID}";

    pub const NOTIFICATION_RULES: &str = "/notifications/{channel}/rules";
    pub const NOTIFICATION_RULE: &str = "/notifications/{channel}/rule/{notificationID}";
    pub const INTEGRATION: &str = "/notifications/{integration}";

    pub const SERVICE_LINKS: &str = "/service_links";
    pub const SERVICE_LINK: &str = "/service_links/{id}";
}

/// Configuration constants for credentials
pub mod credentials {
    /// Credentials file, relative to the user config directory
    pub const FILE_PATH: &str = "rollbarctl/credentials.json";

    /// Environment variables for the account token (checked in order)
    pub const TOKEN_ENV_VARS: &[&str] = &["ROLLBAR_API_KEY", "ROLLBAR_TOKEN"];

    /// Environment variable for the project token
    pub const PROJECT_TOKEN_ENV_VAR: &str = "ROLLBAR_PROJECT_API_KEY";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
