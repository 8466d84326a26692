//! Attendance Engine for service and internship reports
//!
//! This crate partitions a service date range into reporting periods,
//! expands each period into a business-day attendance calendar driven by a
//! weekday schedule and exception dates, aggregates worked hours and
//! assembles the per-period reports consumed by document generators.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod import;
pub mod locale;
pub mod models;
pub mod wizard;
