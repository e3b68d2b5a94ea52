//! Users module - account users and their teams

mod api;
mod commands;
mod models;

pub use commands::run_user_command;
pub use models::{User, UserList, UserTeamList};
