//! Create command resource definitions and arguments

use clap::{Parser, Subcommand};

use super::common::OutputFormat;
use crate::rollbar::{NotificationChannel, Scope, TeamAccessLevel, TokenStatus};

/// Resource types for the 'create' command
#[derive(Subcommand, Debug)]
pub enum CreateResource {
    /// Create a project (its default access tokens are removed)
    #[command(visible_alias = "prj")]
    Project(CreateProjectArgs),

    /// Create a team
    Team(CreateTeamArgs),

    /// Create a project access token
    #[command(visible_alias = "access-token")]
    Token(CreateTokenArgs),

    /// Invite an email address to a team
    #[command(visible_alias = "invitation")]
    Invite(CreateInviteArgs),

    /// Add someone to a team by email (assigns existing users, invites others)
    #[command(visible_alias = "team-member")]
    Member(CreateMemberArgs),

    /// Create a service link (project token)
    ServiceLink(CreateServiceLinkArgs),

    /// Create a notification rule (project token)
    Notification(CreateNotificationArgs),
}

/// Arguments for 'create project' subcommand
#[derive(Parser, Debug)]
pub struct CreateProjectArgs {
    /// Project name
    pub name: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create team' subcommand
#[derive(Parser, Debug)]
pub struct CreateTeamArgs {
    /// Team name
    pub name: String,

    /// Access level: standard, light, view
    #[arg(long, default_value = "standard")]
    pub access_level: TeamAccessLevel,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create token' subcommand
#[derive(Parser, Debug)]
pub struct CreateTokenArgs {
    /// Project ID or name
    #[arg(long)]
    pub project: String,

    /// Token name
    #[arg(long)]
    pub name: String,

    /// Scopes: read, write, post_server_item, post_client_item (comma separated or repeated)
    #[arg(long = "scope", required = true, value_delimiter = ',')]
    pub scopes: Vec<Scope>,

    /// Token status: enabled, disabled
    #[arg(long, default_value = "enabled")]
    pub status: TokenStatus,

    /// Rate limit window in seconds
    #[arg(long)]
    pub rate_limit_window_size: Option<i64>,

    /// Calls allowed per rate limit window
    #[arg(long)]
    pub rate_limit_window_count: Option<i64>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create invite' subcommand
#[derive(Parser, Debug)]
pub struct CreateInviteArgs {
    /// Team ID or name
    #[arg(long)]
    pub team: String,

    /// Email address to invite
    #[arg(long)]
    pub email: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create member' subcommand
#[derive(Parser, Debug)]
pub struct CreateMemberArgs {
    /// Team ID or name
    #[arg(long)]
    pub team: String,

    /// Email address of the person to add
    #[arg(long)]
    pub email: String,
}

/// Arguments for 'create service-link' subcommand
#[derive(Parser, Debug)]
pub struct CreateServiceLinkArgs {
    /// Link name shown on items
    #[arg(long)]
    pub name: String,

    /// URL template, e.g. "https://logs.example.com/?q={{ item.uuid }}"
    #[arg(long)]
    pub template: String,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'create notification' subcommand
#[derive(Parser, Debug)]
pub struct CreateNotificationArgs {
    /// Channel: email, slack, pagerduty, webhook
    #[arg(long)]
    pub channel: NotificationChannel,

    /// Trigger, e.g. new_item, occurrence_rate, reactivated_item
    #[arg(long)]
    pub trigger: String,

    /// Filters as a JSON array
    #[arg(long)]
    pub filters: Option<String>,

    /// Channel config as a JSON object
    #[arg(long)]
    pub config: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
