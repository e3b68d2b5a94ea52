//! Project output formatter

use serde::Serialize;

use super::common::{format_timestamp, output_rows, Tabular};
use crate::cli::OutputFormat;
use crate::rollbar::Project;

/// Serializable project for structured output
#[derive(Serialize)]
struct ProjectRow {
    id: i64,
    name: String,
    status: String,
    account_id: i64,
    created: String,
}

impl From<&Project> for ProjectRow {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name().to_string(),
            status: project.status().to_string(),
            account_id: project.account_id,
            created: format_timestamp(project.date_created),
        }
    }
}

impl Tabular for ProjectRow {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "STATUS", "ACCOUNT", "CREATED"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.status.clone(),
            self.account_id.to_string(),
            self.created.clone(),
        ]
    }
}

/// Output projects in the specified format
pub fn output_projects(projects: &[Project], format: OutputFormat, no_header: bool) {
    let rows: Vec<ProjectRow> = projects.iter().map(ProjectRow::from).collect();
    output_rows(&rows, format, no_header);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_row() {
        let project: Project = serde_json::from_value(serde_json::json!({
            "id": 12,
            "account_id": 3,
            "name": "backend",
            "status": "enabled",
            "date_created": 0
        }))
        .unwrap();
        let row = ProjectRow::from(&project);
        assert_eq!(
            row.row(),
            vec!["12", "backend", "enabled", "3", "1970-01-01 00:00:00"]
        );
        assert_eq!(ProjectRow::headers().len(), row.row().len());
    }
}
