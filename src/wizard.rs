//! Multi-step report wizard.
//!
//! The [`Wizard`] holds the form state behind report generation and walks
//! it through five steps:
//!
//! 1. [`WizardStep::Information`]: student, lead personnel and service dates
//! 2. [`WizardStep::Schedule`]: entrance and exit times per weekday
//! 3. [`WizardStep::Exceptions`]: holidays and other non-working dates
//! 4. [`WizardStep::AttendancePreview`]: generated reports
//! 5. [`WizardStep::MonthlyPreview`]: selection and export
//!
//! Reports are generated only when moving from step 3 to step 4. Edits made
//! afterwards do not touch the generated reports; [`Wizard::reports_are_stale`]
//! tells callers when they no longer match the inputs.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculation::assemble_reports;
use crate::config::{EngineConfig, PartitionRules};
use crate::error::{EngineError, EngineResult};
use crate::import::parse_exception_csv;
use crate::models::{
    BusinessDay, CoreInput, ExceptionDate, IdentitySnapshot, Report, SlotField, WeekdaySchedule,
};

/// A step of the report wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Step 1: identity and service dates.
    #[default]
    Information,
    /// Step 2: weekday schedule.
    Schedule,
    /// Step 3: exception dates.
    Exceptions,
    /// Step 4: generated reports.
    AttendancePreview,
    /// Step 5: selection and export.
    MonthlyPreview,
}

impl WizardStep {
    /// The 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::Information => 1,
            WizardStep::Schedule => 2,
            WizardStep::Exceptions => 3,
            WizardStep::AttendancePreview => 4,
            WizardStep::MonthlyPreview => 5,
        }
    }

    /// The step after this one, if any.
    pub fn next(&self) -> Option<Self> {
        match self {
            WizardStep::Information => Some(WizardStep::Schedule),
            WizardStep::Schedule => Some(WizardStep::Exceptions),
            WizardStep::Exceptions => Some(WizardStep::AttendancePreview),
            WizardStep::AttendancePreview => Some(WizardStep::MonthlyPreview),
            WizardStep::MonthlyPreview => None,
        }
    }

    /// The step before this one, if any.
    pub fn prev(&self) -> Option<Self> {
        match self {
            WizardStep::Information => None,
            WizardStep::Schedule => Some(WizardStep::Information),
            WizardStep::Exceptions => Some(WizardStep::Schedule),
            WizardStep::AttendancePreview => Some(WizardStep::Exceptions),
            WizardStep::MonthlyPreview => Some(WizardStep::AttendancePreview),
        }
    }

    /// Guidance shown to the user on this step.
    pub fn help_text(&self) -> &'static str {
        match self {
            WizardStep::Information => {
                "Complete la información básica del prestador de servicio social."
            }
            WizardStep::Schedule => {
                "Configure los horarios de entrada y salida para cada día de la semana."
            }
            WizardStep::Exceptions => {
                "Agregue fechas especiales como días festivos o vacaciones (opcional)."
            }
            WizardStep::AttendancePreview => {
                "Revise la configuración y genere los reportes PDF. Máximo 7 reportes por generación."
            }
            WizardStep::MonthlyPreview => {
                "Seleccione los reportes que desea descargar en un archivo ZIP."
            }
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Step{}", self.number())
    }
}

/// The plain, serializable form inputs of a wizard.
///
/// Generated reports and the selection are derived state and are not part
/// of the snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WizardSnapshot {
    /// The step the wizard was on.
    #[serde(default)]
    pub step: WizardStep,
    /// Identity fields.
    #[serde(default)]
    pub identity: IdentitySnapshot,
    /// Service dates, schedule and exceptions.
    #[serde(default)]
    pub input: CoreInput,
}

/// A file to produce for one selected report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportFile {
    /// The report the file is rendered from.
    pub report_id: String,
    /// The file name inside the archive.
    pub file_name: String,
}

/// The archive and file names for exporting the selected reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    /// The archive file name.
    pub archive_name: String,
    /// One entry per selected report, in period order.
    pub files: Vec<ExportFile>,
}

/// Replaces every run of whitespace with a single underscore.
fn file_safe_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push('_');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}

/// State behind the report generation wizard.
///
/// # Example
///
/// ```
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::wizard::{Wizard, WizardStep};
/// use chrono::NaiveDate;
///
/// let mut wizard = Wizard::new(&EngineConfig::default());
/// wizard.identity_mut().student.name = "Ana López".to_string();
/// wizard.identity_mut().student.enrollment_id = "2021630001".to_string();
/// wizard.identity_mut().student.career = "ISC".to_string();
/// wizard.set_service_dates(
///     NaiveDate::from_ymd_opt(2024, 11, 4),
///     NaiveDate::from_ymd_opt(2024, 11, 30),
/// );
///
/// wizard.next_step()?; // Schedule
/// wizard.next_step()?; // Exceptions
/// assert_eq!(wizard.next_step()?, WizardStep::AttendancePreview);
/// assert_eq!(wizard.reports().len(), 1);
/// # Ok::<(), attendance_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Wizard {
    rules: PartitionRules,
    default_schedule: WeekdaySchedule,
    step: WizardStep,
    identity: IdentitySnapshot,
    input: CoreInput,
    reports: Vec<Report>,
    selected: BTreeSet<String>,
    previewed: Option<String>,
    generated_from: Option<(IdentitySnapshot, CoreInput)>,
}

impl Wizard {
    /// Creates a wizard with blank identity fields and the configured
    /// default schedule.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            rules: *config.partition(),
            default_schedule: config.default_schedule().clone(),
            step: WizardStep::Information,
            identity: IdentitySnapshot::default(),
            input: CoreInput {
                weekday_schedule: config.default_schedule().clone(),
                ..CoreInput::default()
            },
            reports: Vec::new(),
            selected: BTreeSet::new(),
            previewed: None,
            generated_from: None,
        }
    }

    /// Restores a wizard from a snapshot. Reports are not regenerated.
    pub fn from_snapshot(config: &EngineConfig, snapshot: WizardSnapshot) -> Self {
        let mut wizard = Self::new(config);
        wizard.step = snapshot.step;
        wizard.identity = snapshot.identity;
        wizard.input = snapshot.input;
        wizard
    }

    /// Captures the form inputs.
    pub fn snapshot(&self) -> WizardSnapshot {
        WizardSnapshot {
            step: self.step,
            identity: self.identity.clone(),
            input: self.input.clone(),
        }
    }

    /// Resets every input to its default and drops generated reports.
    pub fn clear(&mut self) {
        self.step = WizardStep::Information;
        self.identity = IdentitySnapshot::default();
        self.input = CoreInput {
            weekday_schedule: self.default_schedule.clone(),
            ..CoreInput::default()
        };
        self.reports.clear();
        self.selected.clear();
        self.previewed = None;
        self.generated_from = None;
    }

    /// The current step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// The identity fields.
    pub fn identity(&self) -> &IdentitySnapshot {
        &self.identity
    }

    /// Mutable access to the identity fields.
    pub fn identity_mut(&mut self) -> &mut IdentitySnapshot {
        &mut self.identity
    }

    /// The engine inputs.
    pub fn input(&self) -> &CoreInput {
        &self.input
    }

    /// Sets the service start and end dates.
    pub fn set_service_dates(&mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) {
        self.input.service_start = start;
        self.input.service_end = end;
    }

    /// The generated reports, in period order.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    // ==========================================================================
    // Navigation
    // ==========================================================================

    /// Checks whether the current step holds everything the next one needs.
    pub fn can_proceed(&self) -> bool {
        match self.step {
            WizardStep::Information => {
                let student = &self.identity.student;
                !student.enrollment_id.trim().is_empty()
                    && !student.name.trim().is_empty()
                    && !student.career.trim().is_empty()
                    && self.input.service_range().is_some()
            }
            WizardStep::Schedule => self.input.weekday_schedule.is_complete(),
            WizardStep::Exceptions => true,
            WizardStep::AttendancePreview => !self.reports.is_empty(),
            WizardStep::MonthlyPreview => false,
        }
    }

    /// Advances to the next step.
    ///
    /// Moving from [`WizardStep::Exceptions`] to
    /// [`WizardStep::AttendancePreview`] regenerates every report.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::StepIncomplete`] when [`Wizard::can_proceed`]
    /// is false.
    pub fn next_step(&mut self) -> EngineResult<WizardStep> {
        let next = match self.step.next() {
            Some(next) if self.can_proceed() => next,
            _ => {
                return Err(EngineError::StepIncomplete {
                    step: self.step.number(),
                    message: self.missing_requirement().to_string(),
                });
            }
        };

        if next == WizardStep::AttendancePreview {
            self.generate();
        }

        debug!(from = %self.step, to = %next, "Wizard advanced");
        self.step = next;
        Ok(next)
    }

    /// Moves back one step. Never recomputes.
    pub fn prev_step(&mut self) -> WizardStep {
        if let Some(prev) = self.step.prev() {
            self.step = prev;
        }
        self.step
    }

    /// Describes what blocks the current step.
    fn missing_requirement(&self) -> &'static str {
        match self.step {
            WizardStep::Information => {
                "name, enrollment id, career and both service dates are required"
            }
            WizardStep::Schedule => "every weekday needs an entrance and an exit time",
            WizardStep::Exceptions => "no further requirement",
            WizardStep::AttendancePreview => "no reports were generated",
            WizardStep::MonthlyPreview => "this is the last step",
        }
    }

    // ==========================================================================
    // Generation
    // ==========================================================================

    /// Rebuilds every report from the current inputs and clears the
    /// selection and the previewed report.
    pub fn generate(&mut self) -> &[Report] {
        self.reports = assemble_reports(&self.input, &self.identity, &self.rules);
        self.selected.clear();
        self.previewed = None;
        self.generated_from = Some((self.identity.clone(), self.input.clone()));

        info!(report_count = self.reports.len(), "Generated reports");
        &self.reports
    }

    /// True when reports exist and the inputs changed since they were built.
    pub fn reports_are_stale(&self) -> bool {
        match &self.generated_from {
            Some((identity, input)) => *identity != self.identity || *input != self.input,
            None => false,
        }
    }

    /// Makes a report the previewed one and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReportNotFound`] for an unknown id.
    pub fn preview_report(&mut self, id: &str) -> EngineResult<&Report> {
        let position = self.report_position(id)?;
        self.previewed = Some(id.to_string());
        Ok(&self.reports[position])
    }

    /// The previewed report, if any.
    pub fn previewed_report(&self) -> Option<&Report> {
        let id = self.previewed.as_deref()?;
        self.reports.iter().find(|report| report.id == id)
    }

    fn report_position(&self, id: &str) -> EngineResult<usize> {
        self.reports
            .iter()
            .position(|report| report.id == id)
            .ok_or_else(|| EngineError::ReportNotFound { id: id.to_string() })
    }

    // ==========================================================================
    // Schedule editing
    // ==========================================================================

    /// Replaces one time of one weekday.
    pub fn set_time(&mut self, day: BusinessDay, field: SlotField, value: impl Into<String>) {
        self.input.weekday_schedule.slot_mut(day).set(field, value);
    }

    /// Copies Monday's value of `field` to every weekday.
    pub fn apply_to_all_days(&mut self, field: SlotField) {
        self.input.weekday_schedule.apply_to_all_days(field);
    }

    // ==========================================================================
    // Exceptions
    // ==========================================================================

    /// Registers an exception date.
    ///
    /// Returns `Ok(false)` and changes nothing when the date is missing or
    /// the label is blank.
    ///
    /// # Errors
    ///
    /// - [`EngineError::DuplicateExceptionDate`] when the date is already an
    ///   exception.
    /// - [`EngineError::DateAlreadyInAttendance`] when the date is listed on
    ///   the previewed report's attendance sheet.
    pub fn add_exception(&mut self, date: Option<NaiveDate>, label: &str) -> EngineResult<bool> {
        let Some(date) = date else {
            return Ok(false);
        };
        if label.trim().is_empty() {
            return Ok(false);
        }

        if self.input.exceptions.iter().any(|e| e.date == date) {
            return Err(EngineError::DuplicateExceptionDate { date });
        }
        if let Some(report) = self.previewed_report() {
            if report.attendance.iter().any(|day| day.date == date) {
                return Err(EngineError::DateAlreadyInAttendance { date });
            }
        }

        self.input.exceptions.push(ExceptionDate::new(date, label));
        Ok(true)
    }

    /// Removes the exception at `index`, returning it.
    pub fn remove_exception(&mut self, index: usize) -> Option<ExceptionDate> {
        if index < self.input.exceptions.len() {
            Some(self.input.exceptions.remove(index))
        } else {
            None
        }
    }

    /// Replaces the exception list with the entries of a CSV/TSV file.
    ///
    /// Returns the number of imported exceptions. Generated reports are left
    /// as they are.
    pub fn import_exceptions_csv(&mut self, text: &str) -> EngineResult<usize> {
        let exceptions = parse_exception_csv(text)?;
        let count = exceptions.len();
        self.input.exceptions = exceptions;
        Ok(count)
    }

    // ==========================================================================
    // Selection and export
    // ==========================================================================

    /// Flips the selection of a report. Returns whether it is now selected.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ReportNotFound`] for an unknown id.
    pub fn toggle_selection(&mut self, id: &str) -> EngineResult<bool> {
        self.report_position(id)?;
        if self.selected.remove(id) {
            Ok(false)
        } else {
            self.selected.insert(id.to_string());
            Ok(true)
        }
    }

    /// Selects every generated report.
    pub fn select_all(&mut self) {
        self.selected = self.reports.iter().map(|report| report.id.clone()).collect();
    }

    /// Clears the selection.
    pub fn deselect_all(&mut self) {
        self.selected.clear();
    }

    /// Checks whether a report is selected.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Names the archive and files for the selected reports.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NothingSelected`] when no report is selected.
    pub fn export_plan(&self) -> EngineResult<ExportPlan> {
        if self.selected.is_empty() {
            return Err(EngineError::NothingSelected);
        }

        let name = file_safe_name(&self.identity.student.name);
        let files = self
            .reports
            .iter()
            .filter(|report| self.selected.contains(&report.id))
            .map(|report| ExportFile {
                report_id: report.id.clone(),
                file_name: format!("Reporte_{}_{}.pdf", report.period.index, name),
            })
            .collect();

        Ok(ExportPlan {
            archive_name: format!("Reportes_PracticasProfesionales_{}.zip", name),
            files,
        })
    }
}
