//! User command handlers

use crate::cli::{Cli, Command, GetResource, GetUserArgs};
use crate::error::Result;
use crate::output::{output_teams, output_users};
use crate::rollbar::helpers::{describe_not_found, CommandResult};
use crate::rollbar::RollbarClient;
use crate::ui::{create_spinner, finish_spinner};

use super::models::User;

/// Fetch the user selected by ID or email, if any
async fn selected_user(client: &RollbarClient, args: &GetUserArgs) -> CommandResult<Option<User>> {
    let (result, key): (Result<User>, String) = match (args.id, &args.email) {
        (Some(id), _) => (client.read_user(id).await, id.to_string()),
        (None, Some(email)) => (client.find_user_by_email(email).await, email.clone()),
        (None, None) => return Ok(None),
    };
    describe_not_found(result, "User", &key).map(Some)
}

/// Run the user list/get command
pub async fn run_user_command(client: &RollbarClient, cli: &Cli) -> CommandResult {
    let Command::Get {
        resource: GetResource::User(args),
    } = &cli.command
    else {
        unreachable!()
    };

    if args.teams && !args.has_selector() {
        return Err("--teams needs a user ID or --email".into());
    }

    let spinner = create_spinner("Fetching users...", cli.batch);
    let user = match selected_user(client, args).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            let result = client.list_users().await;
            finish_spinner(spinner);
            let users = result?;
            if users.is_empty() {
                eprintln!("No users found");
                return Ok(());
            }
            output_users(&users, args.output, cli.no_header);
            return Ok(());
        }
        Err(e) => {
            finish_spinner(spinner);
            return Err(e);
        }
    };

    if args.teams {
        let result = if args.custom {
            client.list_user_custom_teams(user.id).await
        } else {
            client.list_user_teams(user.id).await
        };
        finish_spinner(spinner);
        let teams = result?;
        if teams.is_empty() {
            eprintln!("User '{}' is not on any team", user.username);
            return Ok(());
        }
        output_teams(&teams, args.output, cli.no_header);
        return Ok(());
    }

    finish_spinner(spinner);
    output_users(&[user], args.output, cli.no_header);
    Ok(())
}
