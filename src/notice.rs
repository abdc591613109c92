// User-facing notifications for store outcomes

use crate::error::StoreError;
use crate::filter::Filter;
use crate::store::Toggled;
use colored::Colorize;
use serde::Serialize;
use std::fmt;

pub const TASK_ADDED: &str = "Task added successfully!";
pub const TASK_UPDATED: &str = "Task updated successfully!";
pub const TASK_DELETED: &str = "Task deleted successfully!";
pub const NO_CHANGES: &str = "No changes made ❌";
pub const EMPTY_TITLE: &str = "Title cannot be empty";
pub const NOT_FOUND: &str = "Task not found";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// A one-line notification shown after an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    pub fn added() -> Self {
        Self::success(TASK_ADDED)
    }

    pub fn updated() -> Self {
        Self::success(TASK_UPDATED)
    }

    pub fn deleted() -> Self {
        Self::success(TASK_DELETED)
    }

    pub fn filtered(filter: Filter) -> Self {
        Self::info(format!("Showing {} tasks", filter))
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }

    /// Render with a severity-coloured marker
    pub fn render(&self, color: bool) -> String {
        let marker = match self.severity {
            Severity::Success => "✔",
            Severity::Error => "✖",
            Severity::Info => "ℹ",
        };
        if !color {
            return format!("{} {}", marker, self.message);
        }
        let marker = match self.severity {
            Severity::Success => marker.green().bold(),
            Severity::Error => marker.red().bold(),
            Severity::Info => marker.blue().bold(),
        };
        format!("{} {}", marker, self.message)
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<&StoreError> for Notice {
    fn from(err: &StoreError) -> Self {
        match err {
            StoreError::EmptyTitle => Notice::error(EMPTY_TITLE),
            StoreError::NotFound(_) => Notice::error(NOT_FOUND),
            StoreError::NoChange(_) => Notice::error(NO_CHANGES),
            StoreError::InvalidFilter(value) => Notice::error(format!("Unknown filter: {}", value)),
            StoreError::NoMessages => Notice::error(err.to_string()),
        }
    }
}

impl From<StoreError> for Notice {
    fn from(err: StoreError) -> Self {
        Notice::from(&err)
    }
}

impl From<Toggled> for Notice {
    fn from(toggled: Toggled) -> Self {
        Notice::info(toggled.message)
    }
}
