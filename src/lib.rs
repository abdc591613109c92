// Tasklist - In-memory task list with filtering and notifications

pub mod clock;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod motivate;
pub mod notice;
pub mod session;
pub mod shell;
pub mod store;

// Re-export main types for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Config;
pub use error::StoreError;
pub use filter::Filter;
pub use models::{Task, TaskId, TaskStatus};
pub use motivate::{DEFAULT_MESSAGES, Motivator};
pub use notice::{Notice, Severity};
pub use session::{Session, SessionError};
pub use store::{TaskStore, Toggled};
