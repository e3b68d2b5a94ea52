//! Project command handlers

use log::debug;

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::error::Result;
use crate::output::output_projects;
use crate::rollbar::helpers::{describe_not_found, filter_by_name, CommandResult, Identifier};
use crate::rollbar::RollbarClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::Project;

/// Look a project up by numeric ID or by name
pub async fn resolve_project(client: &RollbarClient, id_or_name: &str) -> Result<Project> {
    match Identifier::parse(id_or_name) {
        Identifier::Id(id) => client.read_project(id).await,
        Identifier::Name(name) => client.find_project_by_name(name).await,
    }
}

/// Run the project list/get command
pub async fn run_project_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(name) = &args.name {
        let spinner = create_spinner(&format!("Fetching project '{}'...", name), cli.batch);
        let result = resolve_project(client, name).await;
        finish_spinner(spinner);

        let project = describe_not_found(result, "Project", name)?;
        output_projects(&[project], args.output, cli.no_header);
        return Ok(());
    }

    let spinner = create_spinner("Fetching projects...", cli.batch);
    let result = client.list_projects().await;
    finish_spinner(spinner);
    let mut projects = result?;

    filter_by_name(&mut projects, args.filter.as_deref(), Project::name);
    debug!("{} projects after filtering", projects.len());

    if projects.is_empty() {
        if args.filter.is_some() {
            eprintln!("No projects found matching filter");
        } else {
            eprintln!("No projects found");
        }
        return Ok(());
    }

    output_projects(&projects, args.output, cli.no_header);
    Ok(())
}

/// Run the create project command
pub async fn run_create_project_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(&format!("Creating project '{}'...", args.name), cli.batch);
    let result = client.create_project(&args.name).await;
    finish_spinner(spinner);

    let project = result?;
    output_projects(&[project], args.output, cli.no_header);
    Ok(())
}

/// Run the delete project command
pub async fn run_delete_project_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::Project(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let project = describe_not_found(
        resolve_project(client, &args.project).await,
        "Project",
        &args.project,
    )?;

    let prompt = format!("Delete project '{}' ({})?", project.name(), project.id);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client.delete_project(project.id).await?;
    println!("Project '{}' ({}) deleted", project.name(), project.id);
    Ok(())
}
