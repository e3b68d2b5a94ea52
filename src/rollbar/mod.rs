//! Rollbar API client module
//!
//! Typed accessors for the Rollbar REST API v1, one submodule per resource.

pub mod access_tokens;
pub mod client;
mod credentials;
pub mod helpers;
pub mod integrations;
pub mod invitations;
mod models;
pub mod notifications;
pub mod projects;
pub mod service_links;
pub mod teams;
pub mod traits;
pub mod users;

pub use access_tokens::{ProjectAccessToken, Scope, TokenStatus};
pub use client::{Endpoint, RollbarClient};
pub use credentials::TokenResolver;
pub use invitations::Invitation;
pub use notifications::{Notification, NotificationChannel};
pub use projects::Project;
pub use service_links::ServiceLink;
pub use teams::{Team, TeamAccessLevel, TeamMembership};
pub use traits::RollbarResource;
pub use users::User;
