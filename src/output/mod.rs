//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON, YAML

mod access_tokens;
mod common;
mod integrations;
mod invitations;
mod notifications;
mod projects;
mod service_links;
mod teams;
mod users;

pub use access_tokens::output_access_tokens;
pub use common::{escape_csv, format_timestamp, output_rows, print_json, print_yaml, Tabular};
pub use integrations::output_integration;
pub use invitations::output_invitations;
pub use notifications::output_notifications;
pub use projects::output_projects;
pub use service_links::output_service_links;
pub use teams::output_teams;
pub use users::output_users;
