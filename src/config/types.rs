//! Configuration types for the worktime engine.
//!
//! This module contains the strongly-typed configuration structure that
//! is deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};

/// The hour at which a full working day starts when no other value is configured.
pub const DEFAULT_WORKING_DAY_STARTING_HOUR: u32 = 8;

/// The leave type name fragment that marks sickness when no other value is configured.
pub const DEFAULT_SICKNESS_MATCH: &str = "sick";

fn default_working_day_starting_hour() -> u32 {
    DEFAULT_WORKING_DAY_STARTING_HOUR
}

fn default_sickness_match() -> String {
    DEFAULT_SICKNESS_MATCH.to_string()
}

/// Engine configuration.
///
/// # Example
///
/// ```
/// use worktime_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.working_day_starting_hour, 8);
/// assert_eq!(config.sickness_match, "sick");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Hour of the day (0-23) at which full-day leave pairs start.
    #[serde(default = "default_working_day_starting_hour")]
    pub working_day_starting_hour: u32,
    /// Case-insensitive fragment of a leave type name that marks it as sickness.
    #[serde(default = "default_sickness_match")]
    pub sickness_match: String,
    /// Explicit sickness flags per leave type id, taking precedence over the name match.
    #[serde(default)]
    pub sickness_overrides: HashMap<String, bool>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            working_day_starting_hour: DEFAULT_WORKING_DAY_STARTING_HOUR,
            sickness_match: DEFAULT_SICKNESS_MATCH.to_string(),
            sickness_overrides: HashMap::new(),
        }
    }
}

impl EngineConfig {
    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> EngineResult<()> {
        if self.working_day_starting_hour > 23 {
            return Err(EngineError::InvalidConfig {
                field: "working_day_starting_hour".to_string(),
                message: format!(
                    "must be an hour between 0 and 23, got {}",
                    self.working_day_starting_hour
                ),
            });
        }

        if self.sickness_match.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "sickness_match".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
