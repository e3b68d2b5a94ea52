//! Invitation data models

use serde::{Deserialize, Serialize};

/// Status of an invitation that still awaits an answer
pub const STATUS_PENDING: &str = "pending";

/// Invitation data from the Rollbar API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Invitation {
    pub id: i64,
    #[serde(default)]
    pub from_user_id: Option<i64>,
    pub team_id: i64,
    pub to_email: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub date_created: Option<i64>,
    #[serde(default)]
    pub date_redeemed: Option<i64>,
}

impl Invitation {
    pub fn is_pending(&self) -> bool {
        self.status == STATUS_PENDING
    }
}

/// Request payload for inviting an email to a team
#[derive(Serialize, Debug)]
pub struct CreateInvitationRequest<'a> {
    pub email: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_invitation() {
        let json = r#"{
            "id": 153,
            "from_user_id": 7,
            "team_id": 3,
            "to_email": "new@example.com",
            "status": "pending",
            "date_created": 1592342423,
            "date_redeemed": null
        }"#;

        let inv: Invitation = serde_json::from_str(json).unwrap();
        assert_eq!(inv.id, 153);
        assert_eq!(inv.from_user_id, Some(7));
        assert!(inv.is_pending());
        assert!(inv.date_redeemed.is_none());
    }

    #[test]
    fn test_accepted_invitation_not_pending() {
        let inv: Invitation = serde_json::from_value(serde_json::json!({
            "id": 1, "team_id": 3, "to_email": "a@example.com", "status": "accepted"
        }))
        .unwrap();
        assert!(!inv.is_pending());
    }
}
