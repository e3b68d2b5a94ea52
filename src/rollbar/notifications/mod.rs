//! Notifications module - per-channel notification rules

mod api;
mod commands;
mod models;

pub use commands::{
    run_create_notification_command, run_delete_notification_command, run_notification_command,
};
pub use models::{Notification, NotificationArgs, NotificationChannel};
