//! rollbarctl - Main entry point

use clap::Parser;
use log::{debug, info};

use rollbarctl::rollbar::helpers::CommandResult;
use rollbarctl::rollbar::{
    access_tokens, integrations, invitations, notifications, projects, service_links, teams,
    users,
};
use rollbarctl::{
    Cli, Command, CreateResource, DeleteResource, GetResource, RollbarClient, RollbarError,
    TokenResolver,
};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting rollbarctl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "api_url={}, max_pages={}, batch={}",
        cli.api_url, cli.max_pages, cli.batch
    );

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {}", e);
        if e
            .downcast_ref::<RollbarError>()
            .is_some_and(RollbarError::is_rate_limited)
        {
            eprintln!("Rollbar is rate limiting this token; requests are not retried, try again later");
        }
        std::process::exit(1);
    }
}

/// Build a client carrying the token the selected command needs
fn build_client(cli: &Cli) -> CommandResult<RollbarClient> {
    if !cli.api_url.starts_with("http://") && !cli.api_url.starts_with("https://") {
        return Err(RollbarError::Config(format!(
            "API URL '{}' must start with http:// or https://",
            cli.api_url
        ))
        .into());
    }

    let resolver = TokenResolver::new(&cli.api_url);
    let token = if cli.command.needs_project_token() {
        resolver.resolve_project(cli.project_api_key.as_deref())?
    } else {
        resolver.resolve(cli.api_key.as_deref())?
    };

    Ok(RollbarClient::new(token)
        .with_base_url(&cli.api_url)
        .with_max_pages(cli.max_pages))
}

async fn run(cli: &Cli) -> CommandResult {
    let client = build_client(cli)?;

    match &cli.command {
        Command::Get { resource } => match resource {
            GetResource::Project(_) => projects::run_project_command(&client, cli).await,
            GetResource::Team(_) => teams::run_team_command(&client, cli).await,
            GetResource::User(_) => users::run_user_command(&client, cli).await,
            GetResource::Invite(_) => invitations::run_invite_command(&client, cli).await,
            GetResource::Token(_) => access_tokens::run_token_command(&client, cli).await,
            GetResource::Notification(_) => {
                notifications::run_notification_command(&client, cli).await
            }
            GetResource::ServiceLink(_) => {
                service_links::run_service_link_command(&client, cli).await
            }
            GetResource::Integration(_) => {
                integrations::run_integration_command(&client, cli).await
            }
        },
        Command::Create { resource } => match resource {
            CreateResource::Project(_) => projects::run_create_project_command(&client, cli).await,
            CreateResource::Team(_) => teams::run_create_team_command(&client, cli).await,
            CreateResource::Token(_) => {
                access_tokens::run_create_token_command(&client, cli).await
            }
            CreateResource::Invite(_) => {
                invitations::run_create_invite_command(&client, cli).await
            }
            CreateResource::Member(_) => teams::run_create_member_command(&client, cli).await,
            CreateResource::ServiceLink(_) => {
                service_links::run_create_service_link_command(&client, cli).await
            }
            CreateResource::Notification(_) => {
                notifications::run_create_notification_command(&client, cli).await
            }
        },
        Command::Delete { resource } => match resource {
            DeleteResource::Project(_) => projects::run_delete_project_command(&client, cli).await,
            DeleteResource::Team(_) => teams::run_delete_team_command(&client, cli).await,
            DeleteResource::Invite(_) => {
                invitations::run_delete_invite_command(&client, cli).await
            }
            DeleteResource::Token(_) => {
                access_tokens::run_delete_token_command(&client, cli).await
            }
            DeleteResource::Member(_) => teams::run_delete_member_command(&client, cli).await,
            DeleteResource::ServiceLink(_) => {
                service_links::run_delete_service_link_command(&client, cli).await
            }
            DeleteResource::Notification(_) => {
                notifications::run_delete_notification_command(&client, cli).await
            }
        },
    }
}
