// YAML configuration for the tasklist shell

use crate::filter::Filter;
use crate::motivate::Motivator;
use chrono::format::{Item, StrftimeItems};
use eyre::{Context, Result, eyre};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shell configuration
///
/// Every field is optional in the file; missing fields take the defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replaces the built-in motivational messages
    pub messages: Option<Vec<String>>,
    pub default_filter: Filter,
    /// chrono strftime format for task timestamps (local time)
    pub timestamp_format: String,
    pub log_level: String,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages: None,
            default_filter: Filter::All,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            log_level: "warn".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// `<config_dir>/tasklist/tasklist.yml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tasklist").join("tasklist.yml"))
    }

    /// Load configuration
    ///
    /// An explicit `path` must exist. Without one, the default path is used
    /// if present, otherwise the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Load and validate a specific config file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_yaml(&content).with_context(|| format!("Invalid config file {}", path.display()))?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        // An empty document parses as null rather than an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).context("Failed to parse YAML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if let Some(messages) = &self.messages {
            if messages.is_empty() {
                return Err(eyre!("messages must contain at least one entry"));
            }
            if messages.iter().any(|m| m.trim().is_empty()) {
                return Err(eyre!("messages cannot contain blank entries"));
            }
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(eyre!("timestamp_format cannot be empty"));
        }
        if !is_valid_timestamp_format(&self.timestamp_format) {
            return Err(eyre!("Invalid timestamp_format: {}", self.timestamp_format));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level
    pub fn level(&self) -> Result<tracing::Level> {
        self.log_level
            .parse()
            .map_err(|_| eyre!("Invalid log level: {} (expected trace, debug, info, warn or error)", self.log_level))
    }

    /// Build the motivator, seeded when `seed` is given
    pub fn motivator(&self, seed: Option<u64>) -> Result<Motivator> {
        let motivator = match (&self.messages, seed) {
            (None, Some(seed)) => Motivator::seeded(seed),
            (None, None) => Motivator::default(),
            (Some(messages), Some(seed)) => Motivator::new(messages.clone(), StdRng::seed_from_u64(seed))?,
            (Some(messages), None) => Motivator::new(messages.clone(), StdRng::from_entropy())?,
        };
        Ok(motivator)
    }
}

/// Whether chrono can render `format` without error
pub fn is_valid_timestamp_format(format: &str) -> bool {
    StrftimeItems::new(format).all(|item| !matches!(item, Item::Error))
}
