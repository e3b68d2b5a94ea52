//! Delete command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::parse_id;
use crate::rollbar::NotificationChannel;

/// Resource types for the 'delete' command
#[derive(Subcommand, Debug)]
pub enum DeleteResource {
    /// Delete a project
    #[command(visible_alias = "prj")]
    Project(DeleteProjectArgs),

    /// Delete a team
    Team(DeleteTeamArgs),

    /// Cancel an invitation
    #[command(visible_alias = "invitation")]
    Invite(DeleteInviteArgs),

    /// Delete a project access token
    #[command(visible_alias = "access-token")]
    Token(DeleteTokenArgs),

    /// Remove someone from a team by email (cancels pending invitations too)
    #[command(visible_alias = "team-member")]
    Member(DeleteMemberArgs),

    /// Delete a service link (project token)
    ServiceLink(DeleteServiceLinkArgs),

    /// Delete a notification rule (project token)
    Notification(DeleteNotificationArgs),
}

/// Arguments for 'delete project' subcommand
#[derive(Parser, Debug)]
pub struct DeleteProjectArgs {
    /// Project ID or name
    pub project: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete team' subcommand
#[derive(Parser, Debug)]
pub struct DeleteTeamArgs {
    /// Team ID or name
    pub team: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete invite' subcommand
#[derive(Parser, Debug)]
pub struct DeleteInviteArgs {
    /// Invitation ID
    #[arg(value_parser = parse_id)]
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete token' subcommand
#[derive(Parser, Debug)]
pub struct DeleteTokenArgs {
    /// Access token value
    pub token: String,

    /// Project ID or name
    #[arg(long)]
    pub project: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete member' subcommand
#[derive(Parser, Debug)]
pub struct DeleteMemberArgs {
    /// Team ID or name
    #[arg(long)]
    pub team: String,

    /// Email address of the person to remove
    #[arg(long)]
    pub email: String,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete service-link' subcommand
#[derive(Parser, Debug)]
pub struct DeleteServiceLinkArgs {
    /// Service link ID
    #[arg(value_parser = parse_id)]
    pub id: i64,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}

/// Arguments for 'delete notification' subcommand
#[derive(Parser, Debug)]
pub struct DeleteNotificationArgs {
    /// Notification rule ID
    #[arg(value_parser = parse_id)]
    pub id: i64,

    /// Channel: email, slack, pagerduty, webhook
    #[arg(long)]
    pub channel: NotificationChannel,

    /// Skip confirmation prompt
    #[arg(short = 'y', long, default_value_t = false)]
    pub yes: bool,
}
