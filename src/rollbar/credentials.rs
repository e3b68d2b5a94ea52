//! Rollbar token resolution from multiple sources

use log::debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::credentials;
use crate::error::{Result, RollbarError};

/// Credentials file structure, keyed by API URL
#[derive(Deserialize, Debug)]
struct RollbarCredentials {
    credentials: HashMap<String, RollbarCredential>,
}

/// Single credential entry
#[derive(Deserialize, Debug, Default)]
struct RollbarCredential {
    #[serde(default)]
    api_key: Option<String>,
    #[serde(default)]
    project_api_key: Option<String>,
}

/// Which of the two Rollbar tokens is being resolved
#[derive(Debug, Clone, Copy)]
enum TokenKind {
    Account,
    Project,
}

impl TokenKind {
    fn flag(self) -> &'static str {
        match self {
            TokenKind::Account => "--api-key",
            TokenKind::Project => "--project-api-key",
        }
    }

    fn env_vars(self) -> &'static [&'static str] {
        match self {
            TokenKind::Account => credentials::TOKEN_ENV_VARS,
            TokenKind::Project => std::slice::from_ref(&credentials::PROJECT_TOKEN_ENV_VAR),
        }
    }

    fn pick(self, cred: &RollbarCredential) -> Option<&str> {
        match self {
            TokenKind::Account => cred.api_key.as_deref(),
            TokenKind::Project => cred.project_api_key.as_deref(),
        }
    }
}

/// Token resolution with fallback logic
pub struct TokenResolver {
    api_url: String,
    credentials_path: Option<PathBuf>,
}

impl TokenResolver {
    /// Create a new token resolver for the given API URL
    pub fn new(api_url: &str) -> Self {
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            credentials_path: dirs::config_dir().map(|p| p.join(credentials::FILE_PATH)),
        }
    }

    /// Read the credentials file from another location
    pub fn with_credentials_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.credentials_path = Some(path.into());
        self
    }

    /// Resolve the account access token:
    /// 1. CLI argument (if provided)
    /// 2. Environment variables (ROLLBAR_API_KEY, ROLLBAR_TOKEN - in order)
    /// 3. Credentials file (<config dir>/rollbarctl/credentials.json)
    pub fn resolve(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve_kind(TokenKind::Account, cli_token)
    }

    /// Resolve the project access token, same order as [`TokenResolver::resolve`]
    pub fn resolve_project(&self, cli_token: Option<&str>) -> Result<String> {
        self.resolve_kind(TokenKind::Project, cli_token)
    }

    fn resolve_kind(&self, kind: TokenKind, cli_token: Option<&str>) -> Result<String> {
        if let Some(token) = cli_token.filter(|t| !t.trim().is_empty()) {
            debug!("Using {:?} token from CLI argument", kind);
            return Ok(token.to_string());
        }

        for env_var in kind.env_vars() {
            if let Ok(token) = std::env::var(env_var) {
                if !token.trim().is_empty() {
                    debug!("Using {:?} token from {} environment variable", kind, env_var);
                    return Ok(token);
                }
            }
        }

        debug!(
            "No {:?} token in environment variables {:?}, trying credentials file",
            kind,
            kind.env_vars()
        );
        self.read_from_credentials_file(kind)
    }

    fn read_from_credentials_file(&self, kind: TokenKind) -> Result<String> {
        let path = self
            .credentials_path
            .as_deref()
            .ok_or_else(|| RollbarError::TokenNotFound(self.token_not_found_message(kind, None)))?;

        debug!("Looking for credentials file at: {}", path.display());

        let content = fs::read_to_string(path).map_err(|_| {
            RollbarError::TokenNotFound(self.token_not_found_message(kind, Some(path)))
        })?;

        let creds: RollbarCredentials = serde_json::from_str(&content).map_err(|e| {
            RollbarError::Credentials(format!(
                "Could not parse credentials file {}: {}",
                path.display(),
                e
            ))
        })?;

        creds
            .credentials
            .get(&self.api_url)
            .and_then(|cred| kind.pick(cred))
            .filter(|t| !t.trim().is_empty())
            .map(|token| {
                debug!(
                    "Using {:?} token from credentials file {} for {}",
                    kind,
                    path.display(),
                    self.api_url
                );
                token.to_string()
            })
            .ok_or_else(|| {
                RollbarError::TokenNotFound(self.token_not_found_message(kind, Some(path)))
            })
    }

    fn token_not_found_message(&self, kind: TokenKind, path: Option<&Path>) -> String {
        let env_vars = kind.env_vars().join(", ");
        let creds_info = path
            .map(|p| format!(" or in credentials file {}", p.display()))
            .unwrap_or_default();

        format!(
            "No {} token found for '{}'. Please provide one using:\n\
             \n\
             1. CLI argument:      rollbarctl {} <TOKEN>\n\
             2. Environment var:   {}\n\
             3. Credentials file:  {{\"credentials\": {{\"{}\": {{...}}}}}}\n\
             \n\
             Checked: env vars [{}]{}",
            match kind {
                TokenKind::Account => "account access",
                TokenKind::Project => "project access",
            },
            self.api_url,
            kind.flag(),
            env_vars,
            self.api_url,
            env_vars,
            creds_info
        )
    }
}
