//! Configuration types for the attendance engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::WeekdaySchedule;

/// Metadata about the report program the configuration belongs to.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgramMetadata {
    /// Human-readable program name.
    pub name: String,
    /// Version or effective date of the rules.
    pub version: String,
}

/// Rules that drive the period partitioner.
///
/// A start day-of-month at or before `early_start_cutoff_day` selects
/// calendar-month periods; later start days select periods that run from
/// the day after `mid_month_boundary_day` to `mid_month_boundary_day` of the
/// next month. No more than `max_periods` periods are ever produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRules {
    /// Last start day-of-month that still uses calendar-month periods.
    pub early_start_cutoff_day: u32,
    /// Day-of-month that closes a mid-month period.
    pub mid_month_boundary_day: u32,
    /// Hard cap on the number of periods.
    pub max_periods: u8,
}

impl Default for PartitionRules {
    fn default() -> Self {
        Self {
            early_start_cutoff_day: 10,
            mid_month_boundary_day: 15,
            max_periods: 7,
        }
    }
}

/// Structure of `engine.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineFile {
    /// Program metadata (flattened into the top level of the file).
    #[serde(flatten)]
    pub metadata: ProgramMetadata,
    /// Partition rules.
    pub partition: PartitionRules,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    metadata: ProgramMetadata,
    partition: PartitionRules,
    default_schedule: WeekdaySchedule,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    pub fn new(
        metadata: ProgramMetadata,
        partition: PartitionRules,
        default_schedule: WeekdaySchedule,
    ) -> Self {
        Self {
            metadata,
            partition,
            default_schedule,
        }
    }

    /// Returns the program metadata.
    pub fn metadata(&self) -> &ProgramMetadata {
        &self.metadata
    }

    /// Returns the partition rules.
    pub fn partition(&self) -> &PartitionRules {
        &self.partition
    }

    /// Returns the schedule used when a request does not provide one.
    pub fn default_schedule(&self) -> &WeekdaySchedule {
        &self.default_schedule
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(
            ProgramMetadata {
                name: "Reportes de Prácticas Profesionales".to_string(),
                version: "2025-01".to_string(),
            },
            PartitionRules::default(),
            WeekdaySchedule::default(),
        )
    }
}
