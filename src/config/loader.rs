//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::WeekdaySchedule;

use super::types::{EngineConfig, EngineFile, PartitionRules, ProgramMetadata};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── engine.yaml    # Program metadata and partition rules
/// └── schedule.yaml  # Default weekday schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use attendance_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Max periods: {}", loader.rules().max_periods);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing, contains invalid YAML,
    /// or holds partition rules the partitioner cannot apply.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine_file = Self::load_yaml::<EngineFile>(&path.join("engine.yaml"))?;
        Self::validate_rules(&engine_file.partition)?;

        let default_schedule = Self::load_yaml::<WeekdaySchedule>(&path.join("schedule.yaml"))?;

        let config = EngineConfig::new(
            engine_file.metadata,
            engine_file.partition,
            default_schedule,
        );

        Ok(Self { config })
    }

    /// Wraps an already built configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Rejects rules that would produce impossible dates or no periods.
    fn validate_rules(rules: &PartitionRules) -> EngineResult<()> {
        if !(1..=28).contains(&rules.early_start_cutoff_day) {
            return Err(EngineError::InvalidConfig {
                field: "partition.early_start_cutoff_day".to_string(),
                message: "must be between 1 and 28".to_string(),
            });
        }
        // The day after the boundary opens the next period, so it must exist in every month.
        if !(1..=27).contains(&rules.mid_month_boundary_day) {
            return Err(EngineError::InvalidConfig {
                field: "partition.mid_month_boundary_day".to_string(),
                message: "must be between 1 and 27".to_string(),
            });
        }
        if rules.max_periods == 0 {
            return Err(EngineError::InvalidConfig {
                field: "partition.max_periods".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the underlying engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the program metadata.
    pub fn metadata(&self) -> &ProgramMetadata {
        self.config.metadata()
    }

    /// Returns the partition rules.
    pub fn rules(&self) -> &PartitionRules {
        self.config.partition()
    }

    /// Returns the default weekday schedule.
    pub fn default_schedule(&self) -> &WeekdaySchedule {
        self.config.default_schedule()
    }
}
