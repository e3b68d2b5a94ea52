//! Projects module - create, read, rename and delete projects

mod api;
mod commands;
mod models;

pub use commands::{
    resolve_project, run_create_project_command, run_delete_project_command, run_project_command,
};
pub use models::{CreateProjectRequest, Project, ProjectSettings, ProjectUpdateArgs};
