//! Get command resource definitions and arguments

use clap::{ArgGroup, Parser, Subcommand};

use super::common::{parse_id, OutputFormat};
use crate::rollbar::NotificationChannel;

/// Resource types for the 'get' command
#[derive(Subcommand, Debug)]
pub enum GetResource {
    /// Get projects in the account
    #[command(visible_alias = "projects", visible_alias = "prj")]
    Project(GetProjectArgs),

    /// Get teams in the account
    #[command(visible_alias = "teams")]
    Team(GetTeamArgs),

    /// Get users in the account
    #[command(visible_alias = "users")]
    User(GetUserArgs),

    /// Get team invitations
    #[command(
        visible_alias = "invites",
        visible_alias = "invitation",
        visible_alias = "invitations"
    )]
    Invite(GetInviteArgs),

    /// Get project access tokens
    #[command(
        visible_alias = "tokens",
        visible_alias = "access-token",
        visible_alias = "access-tokens"
    )]
    Token(GetTokenArgs),

    /// Get notification rules of a channel (project token)
    #[command(visible_alias = "notifications")]
    Notification(GetNotificationArgs),

    /// Get service links (project token)
    #[command(visible_alias = "service-links")]
    ServiceLink(GetServiceLinkArgs),

    /// Get integration settings (project token)
    #[command(visible_alias = "integrations")]
    Integration(GetIntegrationArgs),
}

/// Arguments for 'get project' subcommand
#[derive(Parser, Debug)]
pub struct GetProjectArgs {
    /// Project ID or name (if specified, shows only that project)
    pub name: Option<String>,

    /// Filter projects by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get team' subcommand
#[derive(Parser, Debug)]
pub struct GetTeamArgs {
    /// Team ID or name (if specified, shows only that team)
    pub name: Option<String>,

    /// Hide the system teams (Everyone, Owners)
    #[arg(long, default_value_t = false)]
    pub custom: bool,

    /// Filter teams by name (substring match)
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get user' subcommand
#[derive(Parser, Debug)]
pub struct GetUserArgs {
    /// User ID (if specified, shows only that user)
    #[arg(value_parser = parse_id)]
    pub id: Option<i64>,

    /// Look the user up by exact email address
    #[arg(long, conflicts_with = "id")]
    pub email: Option<String>,

    /// Show the teams of the selected user instead of the user
    #[arg(long, default_value_t = false)]
    pub teams: bool,

    /// With --teams, hide the system teams (Everyone, Owners)
    #[arg(long, default_value_t = false, requires = "teams")]
    pub custom: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

impl GetUserArgs {
    /// True when a single user was selected by ID or email
    pub fn has_selector(&self) -> bool {
        self.id.is_some() || self.email.is_some()
    }
}

/// Arguments for 'get invite' subcommand
#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("target").required(true).args(["id", "team", "email"])))]
pub struct GetInviteArgs {
    /// Invitation ID
    #[arg(value_parser = parse_id)]
    pub id: Option<i64>,

    /// List invitations of a team (ID or name)
    #[arg(long)]
    pub team: Option<String>,

    /// Find invitations sent to an email address, across all teams
    #[arg(long)]
    pub email: Option<String>,

    /// Only show pending invitations
    #[arg(long, default_value_t = false)]
    pub pending: bool,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get token' subcommand
#[derive(Parser, Debug)]
pub struct GetTokenArgs {
    /// Project ID or name
    #[arg(long)]
    pub project: String,

    /// Show only the first token with this name
    #[arg(long)]
    pub name: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get notification' subcommand
#[derive(Parser, Debug)]
pub struct GetNotificationArgs {
    /// Notification rule ID (if specified, shows only that rule)
    #[arg(value_parser = parse_id)]
    pub id: Option<i64>,

    /// Channel: email, slack, pagerduty, webhook
    #[arg(long)]
    pub channel: NotificationChannel,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get service-link' subcommand
#[derive(Parser, Debug)]
pub struct GetServiceLinkArgs {
    /// Service link ID (if specified, shows only that link)
    #[arg(value_parser = parse_id)]
    pub id: Option<i64>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Arguments for 'get integration' subcommand
#[derive(Parser, Debug)]
pub struct GetIntegrationArgs {
    /// Integration: email, slack, pagerduty, webhook
    pub kind: NotificationChannel,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}
