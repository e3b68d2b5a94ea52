//! Integration command handlers

use indicatif::ProgressBar;

use crate::cli::{Cli, Command, GetResource, OutputFormat};
use crate::output::output_integration;
use crate::rollbar::helpers::CommandResult;
use crate::rollbar::{NotificationChannel, RollbarClient};
use crate::ui::{create_spinner, finish_spinner};

use super::models::{
    EmailIntegration, IntegrationSettings, PagerDutyIntegration, SlackIntegration,
    WebhookIntegration,
};

/// Run the get integration command
pub async fn run_integration_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Integration(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching {} integration...", args.kind),
        cli.batch,
    );

    match args.kind {
        NotificationChannel::Email => {
            show_integration::<EmailIntegration>(client, spinner, args.output, cli.no_header).await
        }
        NotificationChannel::Slack => {
            show_integration::<SlackIntegration>(client, spinner, args.output, cli.no_header).await
        }
        NotificationChannel::PagerDuty => {
            show_integration::<PagerDutyIntegration>(client, spinner, args.output, cli.no_header)
                .await
        }
        NotificationChannel::Webhook => {
            show_integration::<WebhookIntegration>(client, spinner, args.output, cli.no_header)
                .await
        }
    }
}

async fn show_integration<S>(
    client: &RollbarClient,
    spinner: Option<ProgressBar>,
    format: OutputFormat,
    no_header: bool,
) -> CommandResult
where
    S: IntegrationSettings,
{
    let result = client.read_integration::<S>().await;
    finish_spinner(spinner);
    output_integration(&result?, format, no_header);
    Ok(())
}
