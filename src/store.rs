// In-memory task store: task lifecycle and the active filter

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::filter::Filter;
use crate::models::{Task, TaskId, TaskStatus};
use crate::motivate::Motivator;
use tracing::{debug, info};

/// Result of a successful status toggle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub id: TaskId,
    pub status: TaskStatus,
    /// Motivational message drawn for this toggle
    pub message: String,
}

/// Owns the task list and the active filter
///
/// Tasks keep insertion order. Updates and toggles modify a task in place,
/// so its position never changes; deletes remove it; adds append.
pub struct TaskStore {
    tasks: Vec<Task>,
    filter: Filter,
    clock: Box<dyn Clock>,
    motivator: Motivator,
}

impl TaskStore {
    /// Create an empty store using the system clock and an entropy-seeded motivator
    pub fn new() -> Self {
        Self::with_parts(Box::new(SystemClock), Motivator::default())
    }

    /// Create an empty store with an explicit clock and motivator
    pub fn with_parts(clock: Box<dyn Clock>, motivator: Motivator) -> Self {
        Self {
            tasks: Vec::new(),
            filter: Filter::default(),
            clock,
            motivator,
        }
    }

    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn with_motivator(mut self, motivator: Motivator) -> Self {
        self.motivator = motivator;
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filter = filter;
        self
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Append a new task
    ///
    /// The title is stored trimmed. Returns the new task's id.
    pub fn add(&mut self, title: &str, status: TaskStatus) -> Result<TaskId, StoreError> {
        let title = validate_title(title)?;

        let task = Task {
            id: TaskId::generate(),
            title: title.to_string(),
            status,
            created_at: self.clock.now(),
        };
        let id = task.id;

        debug!(%id, title = %task.title, status = %status, "add: appending task");
        self.tasks.push(task);
        info!(%id, count = self.tasks.len(), "Task added");

        Ok(id)
    }

    /// Append a new incomplete task
    pub fn add_incomplete(&mut self, title: &str) -> Result<TaskId, StoreError> {
        self.add(title, TaskStatus::default())
    }

    /// Replace the title and status of an existing task
    ///
    /// Fails with `NoChange` when both values equal the current ones. The
    /// task's `created_at` is left untouched.
    pub fn update(&mut self, id: TaskId, title: &str, status: TaskStatus) -> Result<&Task, StoreError> {
        let index = self.position(id)?;
        let title = validate_title(title)?;

        let task = &mut self.tasks[index];
        if task.title == title && task.status == status {
            debug!(%id, "update: no changes");
            return Err(StoreError::NoChange(id));
        }

        task.title = title.to_string();
        task.status = status;
        info!(%id, status = %status, "Task updated");

        Ok(&self.tasks[index])
    }

    /// Remove a task, returning it
    pub fn delete(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let index = self.position(id)?;
        let task = self.tasks.remove(index);
        info!(%id, count = self.tasks.len(), "Task deleted");
        Ok(task)
    }

    /// Flip a task between incomplete and complete
    ///
    /// A motivational message is drawn only when the task exists.
    pub fn toggle_status(&mut self, id: TaskId) -> Result<Toggled, StoreError> {
        let index = self.position(id)?;

        let task = &mut self.tasks[index];
        task.status = task.status.toggled();
        let status = task.status;

        let message = self.motivator.pick();
        info!(%id, status = %status, "Task toggled");

        Ok(Toggled { id, status, message })
    }

    /// Set the active filter
    pub fn set_filter(&mut self, filter: Filter) -> Filter {
        debug!(from = %self.filter, to = %filter, "set_filter");
        self.filter = filter;
        filter
    }

    /// Parse and set the active filter; unknown values leave it unchanged
    pub fn set_filter_str(&mut self, value: &str) -> Result<Filter, StoreError> {
        let filter: Filter = value.parse()?;
        Ok(self.set_filter(filter))
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Tasks matching the active filter, in insertion order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|task| self.filter.matches(task)).collect()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn active_filter(&self) -> Filter {
        self.filter
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Number of (incomplete, complete) tasks
    pub fn counts(&self) -> (usize, usize) {
        let complete = self.tasks.iter().filter(|task| task.is_complete()).count();
        (self.tasks.len() - complete, complete)
    }

    fn position(&self, id: TaskId) -> Result<usize, StoreError> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore")
            .field("tasks", &self.tasks)
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

fn validate_title(title: &str) -> Result<&str, StoreError> {
    let title = title.trim();
    if title.is_empty() {
        return Err(StoreError::EmptyTitle);
    }
    Ok(title)
}
