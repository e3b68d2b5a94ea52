//! Access tokens module - project-scoped API credentials

mod api;
mod commands;
mod models;

pub use commands::{run_create_token_command, run_delete_token_command, run_token_command};
pub use models::{
    ProjectAccessToken, ProjectAccessTokenCreateArgs, ProjectAccessTokenUpdateArgs, Scope,
    TokenStatus, DEFAULT_TOKEN_NAMES,
};
