//! Service link command handlers

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::output::output_service_links;
use crate::rollbar::helpers::{describe_not_found, CommandResult};
use crate::rollbar::RollbarClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::ServiceLinkArgs;

/// Run the service link list/get command
pub async fn run_service_link_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::ServiceLink(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner("Fetching service links...", cli.batch);
    let links = match args.id {
        Some(id) => {
            let result = client.read_service_link(id).await;
            finish_spinner(spinner);
            vec![describe_not_found(result, "Service link", &id.to_string())?]
        }
        None => {
            let result = client.list_service_links().await;
            finish_spinner(spinner);
            result?
        }
    };

    if links.is_empty() {
        eprintln!("No service links found");
        return Ok(());
    }

    output_service_links(&links, args.output, cli.no_header);
    Ok(())
}

/// Run the create service link command
pub async fn run_create_service_link_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::ServiceLink(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let link_args = ServiceLinkArgs {
        name: args.name.clone(),
        template: args.template.clone(),
    };

    let spinner = create_spinner(
        &format!("Creating service link '{}'...", args.name),
        cli.batch,
    );
    let result = client.create_service_link(&link_args).await;
    finish_spinner(spinner);

    let link = result?;
    output_service_links(&[link], args.output, cli.no_header);
    Ok(())
}

/// Run the delete service link command
pub async fn run_delete_service_link_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::ServiceLink(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let link = describe_not_found(
        client.read_service_link(args.id).await,
        "Service link",
        &args.id.to_string(),
    )?;

    let prompt = format!("Delete service link '{}' ({})?", link.name, link.id);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client.delete_service_link(link.id).await?;
    println!("Service link '{}' ({}) deleted", link.name, link.id);
    Ok(())
}
