// Presentation adapter: row-addressed actions with notices

use crate::config::{DEFAULT_TIMESTAMP_FORMAT, is_valid_timestamp_format};
use crate::error::StoreError;
use crate::models::{Task, TaskId, TaskStatus};
use crate::notice::{NOT_FOUND, Notice};
use crate::store::TaskStore;
use chrono::Local;
use tracing::{debug, warn};

/// Error type for row-addressed actions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("no task in row {0}")]
    NoSuchRow(usize),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<SessionError> for Notice {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::NoSuchRow(_) => Notice::error(NOT_FOUND),
            SessionError::Store(err) => Notice::from(err),
        }
    }
}

/// Drives a `TaskStore` the way a user interface does
///
/// Tasks are addressed by 1-based row number in the current visible list.
/// Every action yields exactly one `Notice`.
#[derive(Debug)]
pub struct Session {
    store: TaskStore,
    timestamp_format: String,
}

impl Session {
    pub fn new(store: TaskStore) -> Self {
        Self {
            store,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    /// Use `format` for timestamps; formats chrono cannot render are ignored
    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        let format = format.into();
        if is_valid_timestamp_format(&format) {
            self.timestamp_format = format;
        } else {
            warn!(%format, "Invalid timestamp format, keeping {}", self.timestamp_format);
        }
        self
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn add(&mut self, title: &str, status: TaskStatus) -> Notice {
        match self.store.add(title, status) {
            Ok(_) => Notice::added(),
            Err(err) => Notice::from(err),
        }
    }

    /// Edit a row; fields left as `None` keep their current values
    pub fn edit(&mut self, row: usize, title: Option<&str>, status: Option<TaskStatus>) -> Notice {
        let task = match self.task_at(row) {
            Ok(task) => task.clone(),
            Err(err) => return Notice::from(err),
        };
        let title = title.unwrap_or(task.title.as_str());
        let status = status.unwrap_or(task.status);

        match self.store.update(task.id, title, status) {
            Ok(_) => Notice::updated(),
            Err(err) => Notice::from(err),
        }
    }

    pub fn delete(&mut self, row: usize) -> Notice {
        let result = self
            .id_at(row)
            .and_then(|id| self.store.delete(id).map_err(SessionError::from));
        match result {
            Ok(_) => Notice::deleted(),
            Err(err) => Notice::from(err),
        }
    }

    pub fn toggle(&mut self, row: usize) -> Notice {
        let result = self
            .id_at(row)
            .and_then(|id| self.store.toggle_status(id).map_err(SessionError::from));
        match result {
            Ok(toggled) => Notice::from(toggled),
            Err(err) => Notice::from(err),
        }
    }

    pub fn filter(&mut self, value: &str) -> Notice {
        match self.store.set_filter_str(value) {
            Ok(filter) => Notice::filtered(filter),
            Err(err) => Notice::from(err),
        }
    }

    /// Visible tasks rendered one per line as `N. [x] title (timestamp)`
    pub fn rows(&self) -> Vec<String> {
        self.store
            .visible_tasks()
            .iter()
            .enumerate()
            .map(|(i, task)| self.render_row(i + 1, task))
            .collect()
    }

    /// Local-time display string for a task's creation time
    pub fn timestamp(&self, task: &Task) -> String {
        task.created_at
            .with_timezone(&Local)
            .format(&self.timestamp_format)
            .to_string()
    }

    fn render_row(&self, row: usize, task: &Task) -> String {
        let check = if task.is_complete() { "x" } else { " " };
        format!("{}. [{}] {} ({})", row, check, task.title, self.timestamp(task))
    }

    fn task_at(&self, row: usize) -> Result<&Task, SessionError> {
        let visible = self.store.visible_tasks();
        match row.checked_sub(1).and_then(|i| visible.get(i).copied()) {
            Some(task) => Ok(task),
            None => {
                debug!(row, visible = visible.len(), "row out of range");
                Err(SessionError::NoSuchRow(row))
            }
        }
    }

    fn id_at(&self, row: usize) -> Result<TaskId, SessionError> {
        self.task_at(row).map(|task| task.id)
    }
}
