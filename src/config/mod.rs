//! Configuration loading and management for the worktime engine.
//!
//! This module provides functionality to load the engine configuration from
//! a YAML file: the working day starting hour used by full-day leave
//! expansion and the rules deciding which leave types count as sickness.
//!
//! # Example
//!
//! ```no_run
//! use worktime_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Sickness match: {}", config.config().sickness_match);
//! ```

mod loader;
mod sickness;
mod types;

pub use loader::ConfigLoader;
pub use sickness::SicknessRegistry;
pub use types::{DEFAULT_SICKNESS_MATCH, DEFAULT_WORKING_DAY_STARTING_HOUR, EngineConfig};
