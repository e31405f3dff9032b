use crate::error::ValidationError;

/// Severity of a user-facing notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
    Info,
}

/// Message produced by a state change, shown to the user as a toast
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn application_added(name: &str) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: format!("Aplicación \"{}\" agregada.", name),
        }
    }

    pub fn application_deleted(name: &str) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: format!("Aplicación \"{}\" eliminada.", name),
        }
    }

    pub fn validation_failed(error: &ValidationError) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: error.to_string(),
        }
    }
}
