//! User confirmation prompts for destructive operations

use dialoguer::Confirm;

/// Ask before deleting something
///
/// `--yes` skips the prompt. In batch mode nobody can answer, so the
/// operation is declined unless `--yes` was given.
pub fn confirm_action(prompt: &str, yes: bool, batch: bool) -> std::io::Result<bool> {
    if yes {
        return Ok(true);
    }
    if batch {
        eprintln!("Refusing to '{}' in batch mode without --yes", prompt);
        return Ok(false);
    }
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(std::io::Error::other)
}
