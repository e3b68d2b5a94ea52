//! Invitation command handlers

use log::debug;

use crate::cli::{Cli, Command, CreateResource, DeleteResource, GetResource};
use crate::output::output_invitations;
use crate::rollbar::helpers::{describe_not_found, CommandResult};
use crate::rollbar::teams::resolve_team;
use crate::rollbar::RollbarClient;
use crate::ui::{confirm_action, create_spinner, finish_spinner};

/// Run the invitation list/get command
pub async fn run_invite_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::Invite(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if let Some(id) = args.id {
        let spinner = create_spinner(&format!("Fetching invitation {}...", id), cli.batch);
        let result = client.read_invitation(id).await;
        finish_spinner(spinner);

        let invitation = describe_not_found(result, "Invitation", &id.to_string())?;
        output_invitations(&[invitation], args.output, cli.no_header);
        return Ok(());
    }

    let spinner = create_spinner("Fetching invitations...", cli.batch);
    let result = if let Some(team) = &args.team {
        match resolve_team(client, team).await {
            Ok(team) if args.pending => client.list_pending_invitations(team.id).await,
            Ok(team) => client.list_invitations(team.id).await,
            Err(e) => {
                finish_spinner(spinner);
                return describe_not_found(Err(e), "Team", team);
            }
        }
    } else if let Some(email) = &args.email {
        debug!("Searching invitations for {} across all teams", email);
        if args.pending {
            client.find_pending_invitations(email).await
        } else {
            client.find_invitations(email).await
        }
    } else {
        unreachable!("clap requires an ID, --team or --email")
    };
    finish_spinner(spinner);
    let invitations = result?;

    if invitations.is_empty() {
        eprintln!("No invitations found");
        return Ok(());
    }

    output_invitations(&invitations, args.output, cli.no_header);
    Ok(())
}

/// Run the create invite command
pub async fn run_create_invite_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Create {
        resource: CreateResource::Invite(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let team = describe_not_found(resolve_team(client, &args.team).await, "Team", &args.team)?;

    let spinner = create_spinner(
        &format!("Inviting {} to team '{}'...", args.email, team.name),
        cli.batch,
    );
    let result = client.create_invitation(team.id, &args.email).await;
    finish_spinner(spinner);

    let invitation = result?;
    output_invitations(&[invitation], args.output, cli.no_header);
    Ok(())
}

/// Run the delete invite command (cancels the invitation)
pub async fn run_delete_invite_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Delete {
        resource: DeleteResource::Invite(args),
    } = &cli.command
    else {
        unreachable!()
    };

    let prompt = format!("Cancel invitation {}?", args.id);
    if !confirm_action(&prompt, args.yes, cli.batch)? {
        eprintln!("Aborted");
        return Ok(());
    }

    client.cancel_invitation(args.id).await?;
    println!("Invitation {} canceled", args.id);
    Ok(())
}
