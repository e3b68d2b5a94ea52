//! Project access token command handlers

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::output::output_access_tokens;
use crate::rollbar::helpers::{describe_not_found, CommandResult};
use crate::rollbar::projects::resolve_project;
use crate::rollbar::RollbarClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::ProjectAccessTokenCreateArgs;

/// Run the token list/get command
pub async fn run_token_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Token(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(
        &format!("Fetching access tokens of project '{}'...", args.project),
        cli.batch,
    );
    let project = match resolve_project(client, &args.project).await {
        Ok(project) => project,
        Err(e) => {
            finish_spinner(spinner);
            return describe_not_found(Err(e), "Project", &args.project);
        }
    };

    if let Some(name) = &args.name {
        let result = client
            .find_project_access_token_by_name(project.id, name)
            .await;
        finish_spinner(spinner);

        let token = describe_not_found(result, "Access token", name)?;
        output_access_tokens(&[token], args.output, cli.no_header);
        return Ok(());
    }

    let result = client.list_project_access_tokens(project.id).await;
    finish_spinner(spinner);
    let tokens = result?;

    if tokens.is_empty() {
        eprintln!("Project '{}' has no access tokens", project.name());
        return Ok(());
    }

    output_access_tokens(&tokens, args.output, cli.no_header);
    Ok(())
}

/// Run the create token command
pub async fn run_create_token_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::Token(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let project = describe_not_found(
        resolve_project(client, &args.project).await,
        "Project",
        &args.project,
    )?;

    let create_args = ProjectAccessTokenCreateArgs {
        project_id: project.id,
        name: args.name.clone(),
        scopes: args.scopes.clone(),
        status: args.status,
        rate_limit_window_size: args.rate_limit_window_size,
        rate_limit_window_count: args.rate_limit_window_count,
    };

    let spinner = create_spinner(
        &format!("Creating access token '{}'...", args.name),
        cli.batch,
    );
    let result = client.create_project_access_token(&create_args).await;
    finish_spinner(spinner);

    let token = result?;
    output_access_tokens(&[token], args.output, cli.no_header);
    Ok(())
}

/// Run the delete token command
pub async fn run_delete_token_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::Token(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let project = describe_not_found(
        resolve_project(client, &args.project).await,
        "Project",
        &args.project,
    )?;
    let token = describe_not_found(
        client
            .read_project_access_token(project.id, &args.token)
            .await,
        "Access token",
        &args.token,
    )?;

    let prompt = format!(
        "Delete access token '{}' of project '{}'?",
        token.name(),
        project.name()
    );
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client
        .delete_project_access_token(project.id, &token.access_token)
        .await?;
    println!(
        "Access token '{}' deleted from project '{}'",
        token.name(),
        project.name()
    );
    Ok(())
}
