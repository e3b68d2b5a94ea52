//! rollbarctl - Manage a Rollbar account from the command line
//!
//! A typed async client for the Rollbar REST API v1 and a CLI built on it.
//!
//! # Features
//!
//! - Projects, teams, users, invitations and project access tokens
//! - Notification rules, integrations and service links
//! - Multiple output formats (table, CSV, JSON, YAML)
//! - Automatic pagination with an upper page bound
//!
//! # Example
//!
//! ```bash
//! # List projects
//! rollbarctl get project
//!
//! # Create a team and add someone to it by email
//! rollbarctl create team backend --access-level standard
//! rollbarctl create member --team backend --email dev@example.com
//!
//! # Show the access tokens of a project as JSON
//! rollbarctl get token --project backend -o json
//!
//! # Notification rules need the project token
//! ROLLBAR_PROJECT_API_KEY=... rollbarctl get notification --channel slack
//! ```
//!
//! # Library use
//!
//! ```no_run
//! # async fn demo() -> rollbarctl::Result<()> {
//! use rollbarctl::RollbarClient;
//!
//! let client = RollbarClient::new("account-access-token");
//! for team in client.list_custom_teams().await? {
//!     println!("{} {}", team.id, team.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod rollbar;
pub mod ui;

pub use cli::{Cli, Command, CreateResource, DeleteResource, GetResource, OutputFormat};
pub use error::{Result, RollbarError};
pub use rollbar::{
    Endpoint, Invitation, Notification, NotificationChannel, Project, ProjectAccessToken,
    RollbarClient, RollbarResource, Scope, ServiceLink, Team, TeamAccessLevel, TeamMembership,
    TokenResolver, TokenStatus, User,
};
