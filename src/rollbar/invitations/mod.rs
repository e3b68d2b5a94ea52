//! Invitations module - team invitations sent by email

mod api;
mod commands;
mod models;

pub use commands::{run_create_invite_command, run_delete_invite_command, run_invite_command};
pub use models::{CreateInvitationRequest, Invitation, STATUS_PENDING};
