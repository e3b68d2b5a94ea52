//! Teams module - teams, their members and project assignments

mod api;
mod commands;
mod models;

pub use commands::{
    resolve_team, run_create_member_command, run_create_team_command,
    run_delete_member_command, run_delete_team_command, run_team_command,
};
pub use models::{
    CreateTeamRequest, Team, TeamAccessLevel, TeamMembership, TeamProject, TeamUser,
    SYSTEM_TEAM_NAMES,
};
