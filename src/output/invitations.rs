//! Invitation output formatter

use serde::Serialize;

use super::common::{format_timestamp, output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::Invitation;

#[derive(Serialize)]
struct InvitationRow {
    id: i64,
    team_id: i64,
    email: String,
    status: String,
    created: String,
    redeemed: String,
}

impl From<&Invitation> for InvitationRow {
    fn from(invitation: &Invitation) -> Self {
        Self {
            id: invitation.id,
            team_id: invitation.team_id,
            email: invitation.to_email.clone(),
            status: invitation.status.clone(),
            created: format_timestamp(invitation.date_created),
            redeemed: format_timestamp(invitation.date_redeemed),
        }
    }
}

impl Tabular for InvitationRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "TEAM", "EMAIL", "STATUS", "CREATED", "REDEEMED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.team_id.to_string(),
            self.email.clone(),
            self.status.clone(),
            self.created.clone(),
            self.redeemed.clone(),
        ]
    }
}

/// Output invitations in the specified format
pub fn output_invitations(invitations: &[Invitation], format: OutputFormat, no_header: bool) {
    let rows: Vec<InvitationRow> = invitations.iter().map(InvitationRow::from).collect();
    output_rows(&rows, format, no_header);
}
