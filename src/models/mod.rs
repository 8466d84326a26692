//! Core data models for the Attendance Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod exception;
mod input;
mod period;
mod report;
mod schedule;

pub use attendance::AttendanceDay;
pub use exception::{ExceptionDate, find_exception};
pub use input::CoreInput;
pub use period::Period;
pub use report::{IdentitySnapshot, LeadPersonnel, PeriodLabels, Report, StudentInfo};
pub use schedule::{BusinessDay, SlotField, TimeSlot, WeekdaySchedule};
