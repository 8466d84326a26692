//! Configuration loading and management for the Attendance Engine.
//!
//! This module loads the partition rules and the default weekday schedule
//! from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Loaded program: {}", config.metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, EngineFile, PartitionRules, ProgramMetadata};
