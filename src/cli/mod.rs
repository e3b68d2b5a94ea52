//! CLI argument parsing

mod common;
mod create;
mod delete;
mod get;

use clap::{Parser, Subcommand};

use crate::config::{api, defaults};

pub use common::OutputFormat;
pub use create::{
    CreateInviteArgs, CreateMemberArgs, CreateNotificationArgs, CreateProjectArgs,
    CreateResource, CreateServiceLinkArgs, CreateTeamArgs, CreateTokenArgs,
};
pub use delete::{
    DeleteInviteArgs, DeleteMemberArgs, DeleteNotificationArgs, DeleteProjectArgs,
    DeleteResource, DeleteServiceLinkArgs, DeleteTeamArgs, DeleteTokenArgs,
};
pub use get::{
    GetIntegrationArgs, GetInviteArgs, GetNotificationArgs, GetProjectArgs, GetResource,
    GetServiceLinkArgs, GetTeamArgs, GetTokenArgs, GetUserArgs,
};

/// Rollbar account management CLI
#[derive(Parser, Debug)]
#[command(name = "rollbarctl")]
#[command(version)]
#[command(
    about = "Manage Rollbar projects, teams, users, access tokens and notifications",
    long_about = None
)]
pub struct Cli {
    /// Account access token (overrides env vars and credentials file)
    #[arg(long, global = true, hide_env_values = true, env = "ROLLBAR_API_KEY")]
    pub api_key: Option<String>,

    /// Project access token, used for notifications, integrations and service links
    #[arg(long, global = true, hide_env_values = true, env = "ROLLBAR_PROJECT_API_KEY")]
    pub project_api_key: Option<String>,

    /// Rollbar API URL
    #[arg(long, global = true, env = "ROLLBAR_API_URL", default_value = api::DEFAULT_URL)]
    pub api_url: String,

    /// Maximum number of pages a single listing may fetch
    #[arg(long, global = true, default_value_t = api::DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, global = true, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Omit the header row in table and CSV output
    #[arg(long, global = true, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode: no spinners, no prompts
    #[arg(short = 'b', long, global = true, default_value_t = false)]
    pub batch: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show resources
    #[command(visible_alias = "list")]
    Get {
        #[command(subcommand)]
        resource: GetResource,
    },

    /// Create resources
    Create {
        #[command(subcommand)]
        resource: CreateResource,
    },

    /// Delete resources
    #[command(visible_alias = "rm")]
    Delete {
        #[command(subcommand)]
        resource: DeleteResource,
    },
}

impl Command {
    /// True for commands that talk to the API with the project token
    pub fn needs_project_token(&self) -> bool {
        matches!(
            self,
            Command::Get {
                resource: GetResource::Notification(_)
                    | GetResource::ServiceLink(_)
                    | GetResource::Integration(_)
            } | Command::Create {
                resource: CreateResource::Notification(_) | CreateResource::ServiceLink(_)
            } | Command::Delete {
                resource: DeleteResource::Notification(_) | DeleteResource::ServiceLink(_)
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rollbar::{NotificationChannel, Scope, TeamAccessLevel, TokenStatus};

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["rollbarctl", "get", "project"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.max_pages, api::DEFAULT_MAX_PAGES);
        assert!(!cli.no_header);
        assert!(!cli.batch);
        match cli.command {
            Command::Get {
                resource: GetResource::Project(args),
            } => {
                assert!(args.name.is_none());
                assert_eq!(args.output, OutputFormat::Table);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from([
            "rollbarctl",
            "get",
            "teams",
            "--custom",
            "--max-pages",
            "5",
            "--no-header",
            "-o",
            "csv",
        ]);
        assert_eq!(cli.max_pages, 5);
        assert!(cli.no_header);
        match cli.command {
            Command::Get {
                resource: GetResource::Team(args),
            } => {
                assert!(args.custom);
                assert_eq!(args.output, OutputFormat::Csv);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_create_token_scopes() {
        let cli = Cli::parse_from([
            "rollbarctl",
            "create",
            "token",
            "--project",
            "backend",
            "--name",
            "deploy",
            "--scope",
            "read,post_server_item",
            "--scope",
            "write",
        ]);
        match cli.command {
            Command::Create {
                resource: CreateResource::Token(args),
            } => {
                assert_eq!(
                    args.scopes,
                    vec![Scope::Read, Scope::PostServerItem, Scope::Write]
                );
                assert_eq!(args.status, TokenStatus::Enabled);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_create_token_rejects_unknown_scope() {
        let result = Cli::try_parse_from([
            "rollbarctl",
            "create",
            "token",
            "--project",
            "1",
            "--name",
            "x",
            "--scope",
            "admin",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_create_team_access_level() {
        let cli = Cli::parse_from(["rollbarctl", "create", "team", "ops", "--access-level", "view"]);
        match cli.command {
            Command::Create {
                resource: CreateResource::Team(args),
            } => assert_eq!(args.access_level, TeamAccessLevel::View),
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_get_invite_requires_target() {
        assert!(Cli::try_parse_from(["rollbarctl", "get", "invite"]).is_err());
        assert!(Cli::try_parse_from(["rollbarctl", "get", "invite", "--team", "ops"]).is_ok());
    }

    #[test]
    fn test_get_user_email_conflicts_with_id() {
        let result =
            Cli::try_parse_from(["rollbarctl", "get", "user", "7", "--email", "a@example.com"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_delete_notification_channel() {
        let cli = Cli::parse_from([
            "rollbarctl",
            "delete",
            "notification",
            "42",
            "--channel",
            "pagerduty",
            "-y",
        ]);
        match &cli.command {
            Command::Delete {
                resource: DeleteResource::Notification(args),
            } => {
                assert_eq!(args.id, 42);
                assert_eq!(args.channel, NotificationChannel::PagerDuty);
                assert!(args.yes);
            }
            other => panic!("Unexpected command {:?}", other),
        }
        assert!(cli.command.needs_project_token());
    }

    #[test]
    fn test_needs_project_token() {
        let cli = Cli::parse_from(["rollbarctl", "get", "integration", "slack"]);
        assert!(cli.command.needs_project_token());

        let cli = Cli::parse_from(["rollbarctl", "delete", "project", "backend"]);
        assert!(!cli.command.needs_project_token());
    }
}
