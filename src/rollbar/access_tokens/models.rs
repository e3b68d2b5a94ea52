//! Project access token data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, RollbarError};

/// Names of the tokens Rollbar provisions with every new project
pub const DEFAULT_TOKEN_NAMES: &[&str] = &["read", "write", "post_client_item", "post_server_item"];

/// Permission granted to a project access token
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    Read,
    Write,
    PostServerItem,
    PostClientItem,
    /// A value this client does not know; never accepted in requests
    #[serde(other)]
    Unknown,
}

impl Scope {
    pub const ALL: [Scope; 4] = [
        Scope::Read,
        Scope::Write,
        Scope::PostServerItem,
        Scope::PostClientItem,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Read => "read",
            Scope::Write => "write",
            Scope::PostServerItem => "post_server_item",
            Scope::PostClientItem => "post_client_item",
            Scope::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = RollbarError;

    fn from_str(s: &str) -> Result<Self> {
        Scope::ALL
            .into_iter()
            .find(|scope| scope.as_str() == s)
            .ok_or_else(|| RollbarError::Validation(format!("invalid scope '{}'", s)))
    }
}

/// Whether a token is usable
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum TokenStatus {
    Enabled,
    Disabled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl TokenStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenStatus::Enabled => "enabled",
            TokenStatus::Disabled => "disabled",
            TokenStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TokenStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenStatus {
    type Err = RollbarError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "enabled" => Ok(TokenStatus::Enabled),
            "disabled" => Ok(TokenStatus::Disabled),
            _ => Err(RollbarError::Validation(format!("invalid status '{}'", s))),
        }
    }
}

/// Project access token from the Rollbar API
///
/// The opaque `access_token` value is both the secret and the identifier.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectAccessToken {
    pub project_id: i64,
    pub access_token: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub status: TokenStatus,
    #[serde(default)]
    pub scopes: Vec<Scope>,
    #[serde(default)]
    pub rate_limit_window_size: Option<i64>,
    #[serde(default)]
    pub rate_limit_window_count: Option<i64>,
    #[serde(default)]
    pub cur_rate_limit_window_count: Option<i64>,
    #[serde(default)]
    pub cur_rate_limit_window_start: Option<i64>,
    #[serde(default)]
    pub date_created: Option<i64>,
    #[serde(default)]
    pub date_modified: Option<i64>,
}

impl ProjectAccessToken {
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Scopes joined for display
    pub fn scopes_display(&self) -> String {
        self.scopes
            .iter()
            .map(Scope::as_str)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Arguments for creating a project access token
#[derive(Serialize, Debug, Clone)]
pub struct ProjectAccessTokenCreateArgs {
    #[serde(skip)]
    pub project_id: i64,
    pub name: String,
    pub scopes: Vec<Scope>,
    pub status: TokenStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_window_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_window_count: Option<i64>,
}

impl ProjectAccessTokenCreateArgs {
    /// Reject arguments the API would refuse, before any request is made
    pub fn sanity_check(&self) -> Result<()> {
        if self.project_id <= 0 {
            return Err(RollbarError::Validation(format!(
                "invalid project id {}",
                self.project_id
            )));
        }
        if self.name.trim().is_empty() {
            return Err(RollbarError::Validation(
                "token name must not be blank".to_string(),
            ));
        }
        if self.scopes.is_empty() {
            return Err(RollbarError::Validation(
                "token needs at least one scope".to_string(),
            ));
        }
        if self.scopes.contains(&Scope::Unknown) {
            return Err(RollbarError::Validation("invalid scope".to_string()));
        }
        if self.status == TokenStatus::Unknown {
            return Err(RollbarError::Validation("invalid status".to_string()));
        }
        check_rate_limit(self.rate_limit_window_size, self.rate_limit_window_count)
    }
}

/// Arguments for updating a token's rate limit window
#[derive(Serialize, Debug, Clone)]
pub struct ProjectAccessTokenUpdateArgs {
    #[serde(skip)]
    pub project_id: i64,
    #[serde(skip)]
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_window_size: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate_limit_window_count: Option<i64>,
}

impl ProjectAccessTokenUpdateArgs {
    /// True when the update would change nothing
    pub fn is_empty(&self) -> bool {
        self.rate_limit_window_size.is_none() && self.rate_limit_window_count.is_none()
    }

    pub fn sanity_check(&self) -> Result<()> {
        if self.project_id <= 0 {
            return Err(RollbarError::Validation(format!(
                "invalid project id {}",
                self.project_id
            )));
        }
        if self.access_token.trim().is_empty() {
            return Err(RollbarError::Validation(
                "access token must not be blank".to_string(),
            ));
        }
        if self.is_empty() {
            return Err(RollbarError::Validation(
                "update needs a rate limit window size or count".to_string(),
            ));
        }
        check_rate_limit(self.rate_limit_window_size, self.rate_limit_window_count)
    }
}

fn check_rate_limit(size: Option<i64>, count: Option<i64>) -> Result<()> {
    if size.is_some_and(|s| s < 0) || count.is_some_and(|c| c < 0) {
        return Err(RollbarError::Validation(
            "rate limit window values must not be negative".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_args() -> ProjectAccessTokenCreateArgs {
        ProjectAccessTokenCreateArgs {
            project_id: 42,
            name: "ci-deploys".to_string(),
            scopes: vec![Scope::Read, Scope::PostServerItem],
            status: TokenStatus::Enabled,
            rate_limit_window_size: None,
            rate_limit_window_count: None,
        }
    }

    #[test]
    fn test_scope_from_str_accepts_known_values() {
        for s in ["read", "write", "post_server_item", "post_client_item"] {
            let scope: Scope = s.parse().unwrap();
            assert_eq!(scope.as_str(), s);
        }
    }

    #[test]
    fn test_scope_from_str_rejects_other_values() {
        for s in ["", "READ", "admin", "unknown", "post_item"] {
            assert!(matches!(
                s.parse::<Scope>(),
                Err(RollbarError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("enabled".parse::<TokenStatus>().unwrap(), TokenStatus::Enabled);
        assert_eq!(
            "disabled".parse::<TokenStatus>().unwrap(),
            TokenStatus::Disabled
        );
        assert!("paused".parse::<TokenStatus>().is_err());
    }

    #[test]
    fn test_sanity_check_accepts_each_known_scope() {
        for scope in Scope::ALL {
            let args = ProjectAccessTokenCreateArgs {
                scopes: vec![scope],
                ..valid_args()
            };
            assert!(args.sanity_check().is_ok());
        }
    }

    #[test]
    fn test_sanity_check_rejects_bad_args() {
        let cases = [
            ProjectAccessTokenCreateArgs {
                name: String::new(),
                ..valid_args()
            },
            ProjectAccessTokenCreateArgs {
                project_id: 0,
                ..valid_args()
            },
            ProjectAccessTokenCreateArgs {
                project_id: -3,
                ..valid_args()
            },
            ProjectAccessTokenCreateArgs {
                scopes: vec![],
                ..valid_args()
            },
            ProjectAccessTokenCreateArgs {
                scopes: vec![Scope::Read, Scope::Unknown],
                ..valid_args()
            },
            ProjectAccessTokenCreateArgs {
                status: TokenStatus::Unknown,
                ..valid_args()
            },
            ProjectAccessTokenCreateArgs {
                rate_limit_window_size: Some(-1),
                ..valid_args()
            },
        ];
        for args in cases {
            assert!(matches!(
                args.sanity_check(),
                Err(RollbarError::Validation(_))
            ));
        }
    }

    #[test]
    fn test_create_args_serialization() {
        let json = serde_json::to_value(valid_args()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "ci-deploys",
                "scopes": ["read", "post_server_item"],
                "status": "enabled"
            })
        );
    }

    #[test]
    fn test_deserialize_token_with_unknown_scope() {
        let json = r#"{
            "project_id": 42,
            "access_token": "abc123",
            "name": "legacy",
            "status": "enabled",
            "scopes": ["read", "manage"],
            "rate_limit_window_size": 60,
            "rate_limit_window_count": 500
        }"#;
        let token: ProjectAccessToken = serde_json::from_str(json).unwrap();
        assert_eq!(token.scopes, vec![Scope::Read, Scope::Unknown]);
        assert_eq!(token.status, TokenStatus::Enabled);
        assert_eq!(token.rate_limit_window_count, Some(500));
        assert_eq!(token.scopes_display(), "read,unknown");
    }

    #[test]
    fn test_update_args_sanity_check() {
        let args = ProjectAccessTokenUpdateArgs {
            project_id: 42,
            access_token: "abc".to_string(),
            rate_limit_window_size: Some(60),
            rate_limit_window_count: Some(100),
        };
        assert!(args.sanity_check().is_ok());

        let blank = ProjectAccessTokenUpdateArgs {
            access_token: " ".to_string(),
            ..args
        };
        assert!(blank.sanity_check().is_err());
    }
}
