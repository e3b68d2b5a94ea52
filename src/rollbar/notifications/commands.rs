//! Notification rule command handlers

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::error::{Result, RollbarError};
use crate::output::output_notifications;
use crate::rollbar::helpers::{describe_not_found, CommandResult};
use crate::rollbar::RollbarClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::NotificationArgs;

/// Build rule arguments from the raw `--filters` and `--config` JSON
fn notification_args(
    trigger: &str,
    filters: Option<&str>,
    config: Option<&str>,
) -> Result<NotificationArgs> {
    let filters = match filters {
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            RollbarError::Validation(format!("--filters must be a JSON array: {}", e))
        })?,
        None => Vec::new(),
    };
    let config = match config {
        Some(raw) => serde_json::from_str(raw).map_err(|e| {
            RollbarError::Validation(format!("--config must be a JSON object: {}", e))
        })?,
        None => serde_json::Map::new(),
    };
    Ok(NotificationArgs {
        trigger: trigger.to_string(),
        filters,
        config,
    })
}

/// Run the notification list/get command
pub async fn run_notification_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Notification(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = args.id {
        let spinner = create_spinner(
            &format!("Fetching {} notification {}...", args.channel, id),
            cli.batch,
        );
        let result = client.read_notification(args.channel, id).await;
        finish_spinner(spinner);

        let notification = describe_not_found(result, "Notification", &id.to_string())?;
        output_notifications(&[notification], args.output, cli.no_header);
        return Ok(());
    }

    let spinner = create_spinner(
        &format!("Fetching {} notifications...", args.channel),
        cli.batch,
    );
    let result = client.list_notifications(args.channel).await;
    finish_spinner(spinner);
    let notifications = result?;

    if notifications.is_empty() {
        eprintln!("No {} notifications found", args.channel);
        return Ok(());
    }

    output_notifications(&notifications, args.output, cli.no_header);
    Ok(())
}

/// Run the create notification command
pub async fn run_create_notification_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::Notification(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let rule = notification_args(&args.trigger, args.filters.as_deref(), args.config.as_deref())?;

    let spinner = create_spinner(
        &format!("Creating {} notification...", args.channel),
        cli.batch,
    );
    let result = client.create_notification(args.channel, &rule).await;
    finish_spinner(spinner);

    let notification = result?;
    output_notifications(&[notification], args.output, cli.no_header);
    Ok(())
}

/// Run the delete notification command
pub async fn run_delete_notification_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::Notification(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Delete {} notification {}?", args.channel, args.id);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client.delete_notification(args.channel, args.id).await?;
    println!("{} notification {} deleted", args.channel, args.id);
    Ok(())
}
