//! User output formatter

use serde::Serialize;

use super::common::{output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::User;

#[derive(Serialize)]
struct UserRow {
    id: i64,
    username: String,
    email: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

impl Tabular for UserRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "USERNAME", "EMAIL"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            self.email.clone(),
        ]
    }
}

/// Output users in the specified format
pub fn output_users(users: &[User], format: OutputFormat, no_header: bool) {
    let rows: Vec<UserRow> = users.iter().map(UserRow::from).collect();
    output_rows(&rows, format, no_header);
}
