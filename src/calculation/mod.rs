//! Calculation logic for the Attendance Engine.
//!
//! This module contains the pure, infallible computations behind the
//! reports: calendar utilities, period partitioning, attendance synthesis,
//! hour aggregation and report assembly.

mod assembler;
mod attendance;
mod calendar;
mod hours;
mod partition;

pub use assembler::{assemble_report, assemble_reports, exceptions_in_period, period_labels};
pub use attendance::synthesize_attendance;
pub use calendar::{
    BusinessDays, add_one_month, business_days_in_range, duration_hours, first_day_of_month,
    is_business_day, last_day_of_month, with_day_clamped,
};
pub use hours::{cumulative_hours, period_hours, total_hours};
pub use partition::{Regime, partition_input, partition_periods};
