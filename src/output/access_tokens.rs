//! Project access token output formatter

use serde::Serialize;

use super::common::{format_timestamp, output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::ProjectAccessToken;

#[derive(Serialize)]
struct AccessTokenRow {
    project_id: i64,
    name: String,
    access_token: String,
    status: String,
    scopes: Vec<String>,
    rate_limit: String,
    created: String,
}

impl From<&ProjectAccessToken> for AccessTokenRow {
    fn from(token: &ProjectAccessToken) -> Self {
        let rate_limit = match (token.rate_limit_window_count, token.rate_limit_window_size) {
            (Some(count), Some(size)) => format!("{}/{}s", count, size),
            _ => String::new(),
        };
        Self {
            project_id: token.project_id,
            name: token.name().to_string(),
            access_token: token.access_token.clone(),
            status: token.status.to_string(),
            scopes: token.scopes.iter().map(|s| s.to_string()).collect(),
            rate_limit,
            created: format_timestamp(token.date_created),
        }
    }
}

impl Tabular for AccessTokenRow {
    fn headers() -> &'static [&'static str] {
        &["NAME", "TOKEN", "STATUS", "SCOPES", "RATE LIMIT", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.access_token.clone(),
            self.status.clone(),
            self.scopes.join(","),
            self.rate_limit.clone(),
            self.created.clone(),
        ]
    }
}

/// Output project access tokens in the specified format
pub fn output_access_tokens(tokens: &[ProjectAccessToken], format: OutputFormat, no_header: bool) {
    let rows: Vec<AccessTokenRow> = tokens.iter().map(AccessTokenRow::from).collect();
    output_rows(&rows, format, no_header);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_row() {
        let token: ProjectAccessToken = serde_json::from_value(serde_json::json!({
            "project_id": 4,
            "access_token": "abc123",
            "name": "deploy",
            "status": "enabled",
            "scopes": ["read", "post_server_item"],
            "rate_limit_window_size": 60,
            "rate_limit_window_count": 500
        }))
        .unwrap();
        let row = AccessTokenRow::from(&token);
        assert_eq!(
            row.row(),
            vec!["deploy", "abc123", "enabled", "read,post_server_item", "500/60s", ""]
        );
    }
}
