//! Service links module - templated links shown on items

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_service_link_command, run_delete_service_link_command, run_service_link_command,
};
pub use models::{ServiceLink, ServiceLinkArgs};
