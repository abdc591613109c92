// Motivational messages shown when a task is toggled

use crate::error::StoreError;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

/// Messages used when no custom list is configured
pub const DEFAULT_MESSAGES: [&str; 3] = [
    "You're on fire! 🔥 Keep it up!",
    "One task at a time! ",
    "Small steps lead to big results! ",
];

/// Draws one message uniformly at random from a fixed list
pub struct Motivator {
    messages: Vec<String>,
    rng: Box<dyn RngCore>,
}

impl Motivator {
    /// Create a motivator over `messages` using `rng` for selection
    pub fn new<R>(messages: Vec<String>, rng: R) -> Result<Self, StoreError>
    where
        R: RngCore + 'static,
    {
        if messages.is_empty() {
            return Err(StoreError::NoMessages);
        }
        Ok(Self {
            messages,
            rng: Box::new(rng),
        })
    }

    /// Default messages with a reproducible RNG
    pub fn seeded(seed: u64) -> Self {
        Self {
            messages: default_messages(),
            rng: Box::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick a message; every entry is equally likely
    pub fn pick(&mut self) -> String {
        let index = self.rng.gen_range(0..self.messages.len());
        self.messages[index].clone()
    }
}

impl Default for Motivator {
    fn default() -> Self {
        Self {
            messages: default_messages(),
            rng: Box::new(StdRng::from_entropy()),
        }
    }
}

impl std::fmt::Debug for Motivator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Motivator").field("messages", &self.messages).finish_non_exhaustive()
    }
}

fn default_messages() -> Vec<String> {
    DEFAULT_MESSAGES.iter().map(|m| m.to_string()).collect()
}
