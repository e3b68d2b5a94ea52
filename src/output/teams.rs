//! Team output formatter

use serde::Serialize;

use super::common::{output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::Team;

/// Serializable team for structured output
#[derive(Serialize)]
struct TeamRow {
    id: i64,
    name: String,
    access_level: String,
    system: bool,
}

impl From<&Team> for TeamRow {
    fn from(team: &Team) -> Self {
        Self {
            id: team.id,
            name: team.name.clone(),
            access_level: team.access_level.to_string(),
            system: team.is_system(),
        }
    }
}

impl Tabular for TeamRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "ACCESS LEVEL", "SYSTEM"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.access_level.clone(),
            if self.system { "Yes" } else { "No" }.to_string(),
        ]
    }
}

/// Output teams in the specified format
pub fn output_teams(teams: &[Team], format: OutputFormat, no_header: bool) {
    let rows: Vec<TeamRow> = teams.iter().map(TeamRow::from).collect();
    output_rows(&rows, format, no_header);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_team(id: i64, name: &str, access_level: &str) -> Team {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "account_id": 1,
            "name": name,
            "access_level": access_level
        }))
        .unwrap()
    }

    #[test]
    fn test_team_row() {
        let row = TeamRow::from(&create_test_team(7, "Owners", "standard"));
        assert_eq!(row.row(), vec!["7", "Owners", "standard", "Yes"]);
    }

    #[test]
    fn test_team_rows_yaml() {
        let teams = [create_test_team(8, "devs", "light")];
        let rows: Vec<TeamRow> = teams.iter().map(TeamRow::from).collect();
        let yaml = serde_yml::to_string(&rows).unwrap();

        assert!(yaml.contains("id: 8"));
        assert!(yaml.contains("name: devs"));
        assert!(yaml.contains("access_level: light"));
        assert!(yaml.contains("system: false"));
    }
}
