// Time sources for task creation timestamps

use chrono::{DateTime, Duration, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Source of the current wall-clock time
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Real wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for tests and demos.
///
/// Clones share the same underlying time, so a test can keep one handle
/// while the store owns another. Each reading advances the time by `step`
/// (zero by default).
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Rc<Cell<DateTime<Utc>>>,
    step: Duration,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Rc::new(Cell::new(start)),
            step: Duration::zero(),
        }
    }

    /// Advance automatically by `step` after every reading
    pub fn with_step(mut self, step: Duration) -> Self {
        self.step = step;
        self
    }

    pub fn set(&self, time: DateTime<Utc>) {
        self.current.set(time);
    }

    pub fn advance(&self, by: Duration) {
        self.current.set(self.current.get() + by);
    }

    /// Current time without consuming a step
    pub fn peek(&self) -> DateTime<Utc> {
        self.current.get()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let now = self.current.get();
        self.current.set(now + self.step);
        now
    }
}
