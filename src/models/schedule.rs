//! Weekday schedule model and related types.
//!
//! This module defines the [`BusinessDay`], [`TimeSlot`] and
//! [`WeekdaySchedule`] types describing when a service provider attends on
//! each day Monday through Friday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// A day of the working week. Weekends are excluded by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessDay {
    /// Monday (ISO weekday 1).
    Monday,
    /// Tuesday (ISO weekday 2).
    Tuesday,
    /// Wednesday (ISO weekday 3).
    Wednesday,
    /// Thursday (ISO weekday 4).
    Thursday,
    /// Friday (ISO weekday 5).
    Friday,
}

impl BusinessDay {
    /// All business days in week order.
    pub const ALL: [BusinessDay; 5] = [
        BusinessDay::Monday,
        BusinessDay::Tuesday,
        BusinessDay::Wednesday,
        BusinessDay::Thursday,
        BusinessDay::Friday,
    ];

    /// Maps an ISO weekday number (1 = Monday) to a business day.
    ///
    /// The number is clamped into `1..=5`, so Saturday and Sunday map to
    /// Friday and anything below 1 maps to Monday.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::models::BusinessDay;
    ///
    /// assert_eq!(BusinessDay::from_iso_number(3), BusinessDay::Wednesday);
    /// assert_eq!(BusinessDay::from_iso_number(7), BusinessDay::Friday);
    /// assert_eq!(BusinessDay::from_iso_number(0), BusinessDay::Monday);
    /// ```
    pub fn from_iso_number(iso_weekday: u32) -> Self {
        let index = iso_weekday.clamp(1, 5) as usize - 1;
        Self::ALL[index]
    }

    /// Returns the business day for a date, or `None` on weekends.
    pub fn from_date(date: NaiveDate) -> Option<Self> {
        match date.weekday() {
            Weekday::Mon => Some(BusinessDay::Monday),
            Weekday::Tue => Some(BusinessDay::Tuesday),
            Weekday::Wed => Some(BusinessDay::Wednesday),
            Weekday::Thu => Some(BusinessDay::Thursday),
            Weekday::Fri => Some(BusinessDay::Friday),
            Weekday::Sat | Weekday::Sun => None,
        }
    }

    /// The Spanish label shown next to the schedule row.
    pub fn label(&self) -> &'static str {
        match self {
            BusinessDay::Monday => "Lunes",
            BusinessDay::Tuesday => "Martes",
            BusinessDay::Wednesday => "Miércoles",
            BusinessDay::Thursday => "Jueves",
            BusinessDay::Friday => "Viernes",
        }
    }
}

impl std::fmt::Display for BusinessDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessDay::Monday => write!(f, "monday"),
            BusinessDay::Tuesday => write!(f, "tuesday"),
            BusinessDay::Wednesday => write!(f, "wednesday"),
            BusinessDay::Thursday => write!(f, "thursday"),
            BusinessDay::Friday => write!(f, "friday"),
        }
    }
}

/// Selects one side of a [`TimeSlot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotField {
    /// The entrance time.
    Entrance,
    /// The exit time.
    Exit,
}

/// Entrance and exit wall-clock times for one weekday.
///
/// Times are kept as the text the user entered (`"HH:MM"`). A value that
/// does not parse still appears on the attendance sheet and simply yields
/// zero worked hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The entrance time, e.g. `"07:00"`.
    pub entrance: String,
    /// The exit time, e.g. `"11:00"`.
    pub exit: String,
}

impl TimeSlot {
    /// Creates a time slot from entrance and exit text.
    pub fn new(entrance: impl Into<String>, exit: impl Into<String>) -> Self {
        Self {
            entrance: entrance.into(),
            exit: exit.into(),
        }
    }

    /// Returns the value of one side of the slot.
    pub fn get(&self, field: SlotField) -> &str {
        match field {
            SlotField::Entrance => &self.entrance,
            SlotField::Exit => &self.exit,
        }
    }

    /// Replaces one side of the slot.
    pub fn set(&mut self, field: SlotField, value: impl Into<String>) {
        match field {
            SlotField::Entrance => self.entrance = value.into(),
            SlotField::Exit => self.exit = value.into(),
        }
    }

    /// True when both entrance and exit hold non-blank text.
    pub fn is_filled(&self) -> bool {
        !self.entrance.trim().is_empty() && !self.exit.trim().is_empty()
    }
}

/// The attendance schedule for each business day of the week.
///
/// Serialized as a map keyed by lowercase weekday name:
///
/// ```
/// use attendance_engine::models::{BusinessDay, WeekdaySchedule};
///
/// let json = r#"{
///     "monday": {"entrance": "08:00", "exit": "12:00"},
///     "tuesday": {"entrance": "08:00", "exit": "12:00"},
///     "wednesday": {"entrance": "08:00", "exit": "12:00"},
///     "thursday": {"entrance": "08:00", "exit": "12:00"},
///     "friday": {"entrance": "09:00", "exit": "13:00"}
/// }"#;
/// let schedule: WeekdaySchedule = serde_json::from_str(json).unwrap();
/// assert_eq!(schedule.slot(BusinessDay::Friday).entrance, "09:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySchedule {
    /// Monday's times.
    pub monday: TimeSlot,
    /// Tuesday's times.
    pub tuesday: TimeSlot,
    /// Wednesday's times.
    pub wednesday: TimeSlot,
    /// Thursday's times.
    pub thursday: TimeSlot,
    /// Friday's times.
    pub friday: TimeSlot,
}

impl Default for WeekdaySchedule {
    fn default() -> Self {
        Self {
            monday: TimeSlot::new("07:00", "11:00"),
            tuesday: TimeSlot::new("12:00", "16:00"),
            wednesday: TimeSlot::new("10:00", "14:00"),
            thursday: TimeSlot::new("07:00", "11:00"),
            friday: TimeSlot::new("16:00", "20:00"),
        }
    }
}

impl WeekdaySchedule {
    /// Creates a schedule with the same times every day.
    pub fn uniform(entrance: &str, exit: &str) -> Self {
        let slot = TimeSlot::new(entrance, exit);
        Self {
            monday: slot.clone(),
            tuesday: slot.clone(),
            wednesday: slot.clone(),
            thursday: slot.clone(),
            friday: slot,
        }
    }

    /// Returns the slot for a business day.
    pub fn slot(&self, day: BusinessDay) -> &TimeSlot {
        match day {
            BusinessDay::Monday => &self.monday,
            BusinessDay::Tuesday => &self.tuesday,
            BusinessDay::Wednesday => &self.wednesday,
            BusinessDay::Thursday => &self.thursday,
            BusinessDay::Friday => &self.friday,
        }
    }

    /// Returns a mutable reference to the slot for a business day.
    pub fn slot_mut(&mut self, day: BusinessDay) -> &mut TimeSlot {
        match day {
            BusinessDay::Monday => &mut self.monday,
            BusinessDay::Tuesday => &mut self.tuesday,
            BusinessDay::Wednesday => &mut self.wednesday,
            BusinessDay::Thursday => &mut self.thursday,
            BusinessDay::Friday => &mut self.friday,
        }
    }

    /// Returns the slot that applies to a date.
    ///
    /// The date's ISO weekday is clamped into Monday..Friday, so a weekend
    /// date (which the synthesizer never asks for) resolves to Friday.
    pub fn slot_for_date(&self, date: NaiveDate) -> &TimeSlot {
        self.slot(BusinessDay::from_iso_number(date.weekday().number_from_monday()))
    }

    /// Iterates over `(day, slot)` pairs in week order.
    pub fn iter(&self) -> impl Iterator<Item = (BusinessDay, &TimeSlot)> {
        BusinessDay::ALL.into_iter().map(move |day| (day, self.slot(day)))
    }

    /// True when every day has both times filled in.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, slot)| slot.is_filled())
    }

    /// Copies Monday's value for `field` to every day.
    ///
    /// Does nothing when Monday's value is blank.
    pub fn apply_to_all_days(&mut self, field: SlotField) {
        let reference = self.monday.get(field).to_string();
        if reference.is_empty() {
            return;
        }
        for day in BusinessDay::ALL {
            self.slot_mut(day).set(field, reference.clone());
        }
    }
}
