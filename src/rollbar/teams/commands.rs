//! Team command handlers

use log::debug;

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::error::Result;
use crate::output::output_teams;
use crate::rollbar::helpers::{describe_not_found, filter_by_name, CommandResult, Identifier};
use crate::rollbar::RollbarClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

use super::models::{Team, TeamMembership};

/// Look a team up by numeric ID or by name
pub async fn resolve_team(client: &RollbarClient, id_or_name: &str) -> Result<Team> {
    match Identifier::parse(id_or_name) {
        Identifier::Id(id) => client.read_team(id).await,
        Identifier::Name(name) => client.find_team_by_name(name).await,
    }
}

/// Run the team list/get command
pub async fn run_team_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Team(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(name) = &args.name {
        let spinner = create_spinner(&format!("Fetching team '{}'...", name), cli.batch);
        let result = resolve_team(client, name).await;
        finish_spinner(spinner);

        let team = describe_not_found(result, "Team", name)?;
        output_teams(&[team], args.output, cli.no_header);
        return Ok(());
    }

    let spinner = create_spinner("Fetching teams...", cli.batch);
    let result = if args.custom {
        client.list_custom_teams().await
    } else {
        client.list_teams().await
    };
    finish_spinner(spinner);
    let mut teams = result?;

    filter_by_name(&mut teams, args.filter.as_deref(), |t| t.name.as_str());
    debug!("{} teams after filtering", teams.len());

    if teams.is_empty() {
        eprintln!("No teams found");
        return Ok(());
    }

    output_teams(&teams, args.output, cli.no_header);
    Ok(())
}

/// Run the create team command
pub async fn run_create_team_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::Team(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let spinner = create_spinner(&format!("Creating team '{}'...", args.name), cli.batch);
    let result = client.create_team(&args.name, args.access_level).await;
    finish_spinner(spinner);

    let team = result?;
    output_teams(&[team], args.output, cli.no_header);
    Ok(())
}

/// Run the delete team command
pub async fn run_delete_team_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::Team(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let team = describe_not_found(resolve_team(client, &args.team).await, "Team", &args.team)?;
    if team.is_system() {
        return Err(format!("Team '{}' is a system team and cannot be deleted", team.name).into());
    }

    let prompt = format!("Delete team '{}' ({})?", team.name, team.id);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client.delete_team(team.id).await?;
    println!("Team '{}' ({}) deleted", team.name, team.id);
    Ok(())
}

/// Run the create member command: assign an existing user or send an invitation
pub async fn run_create_member_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::Member(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let team = describe_not_found(resolve_team(client, &args.team).await, "Team", &args.team)?;

    let spinner = create_spinner(
        &format!("Adding {} to team '{}'...", args.email, team.name),
        cli.batch,
    );
    let result = client.add_team_member_by_email(team.id, &args.email).await;
    finish_spinner(spinner);

    match result? {
        TeamMembership::Assigned { user_id } => {
            println!(
                "User {} ({}) assigned to team '{}'",
                args.email, user_id, team.name
            );
        }
        TeamMembership::Invited(invitation) => {
            println!(
                "{} invited to team '{}' (invitation {})",
                invitation.to_email, team.name, invitation.id
            );
        }
    }
    Ok(())
}

/// Run the delete member command
pub async fn run_delete_member_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::Member(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let team = describe_not_found(resolve_team(client, &args.team).await, "Team", &args.team)?;

    let prompt = format!("Remove {} from team '{}'?", args.email, team.name);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client
        .remove_team_member_by_email(team.id, &args.email)
        .await?;
    println!("{} removed from team '{}'", args.email, team.name);
    Ok(())
}
