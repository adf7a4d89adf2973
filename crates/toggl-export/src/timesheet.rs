use crate::hours::{format_hours, round_to_quarter_hour};
use crate::{ExportError, ExportResult, SummaryReport};

use log::trace;

/// Category column value; every exported entry is booked as production work
pub const CATEGORY: &str = "Production";

/// One CSV line
#[derive(Debug, Clone, PartialEq)]
pub struct TimesheetRow {
    pub user_name: String,
    pub project: String,
    pub entry_name: String,
    /// Rounded to a quarter hour, never zero
    pub hours: f64,
}

impl TimesheetRow {
    /// Columns in output order: user, project, category, entry, hours
    pub fn to_record(&self) -> [String; 5] {
        [
            self.user_name.clone(),
            self.project.clone(),
            CATEGORY.to_string(),
            self.entry_name.clone(),
            format_hours(self.hours),
        ]
    }
}

/// Rows for every time entry in the report, plus their running total
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timesheet {
    pub rows: Vec<TimesheetRow>,
    /// Sum of the rounded row hours, not re-rounded
    pub total_hours: f64,
}

impl Timesheet {
    /// Build one row per time entry, projects and entries in response order.
    ///
    /// Fails on the first project or entry that has no title object.
    pub fn from_report(report: &SummaryReport, user_name: &str) -> ExportResult<Self> {
        let mut timesheet = Timesheet {
            rows: Vec::with_capacity(report.time_entry_count()),
            total_hours: 0.0,
        };

        for (project_index, project_entry) in report.project_entries().iter().enumerate() {
            for (entry_index, time_entry) in project_entry.time_entries().iter().enumerate() {
                let project = project_entry.project_name().ok_or_else(|| {
                    ExportError::missing_title("project", project_index, entry_index)
                })?;
                let entry_name = time_entry.name().ok_or_else(|| {
                    ExportError::missing_title("time entry", project_index, entry_index)
                })?;

                let hours = round_to_quarter_hour(time_entry.duration_ms());
                trace!(
                    "{} / {}: {}ms -> {}h",
                    project,
                    entry_name,
                    time_entry.duration_ms(),
                    hours
                );

                timesheet.total_hours += hours;
                timesheet.rows.push(TimesheetRow {
                    user_name: user_name.to_string(),
                    project: project.to_string(),
                    entry_name: entry_name.to_string(),
                    hours,
                });
            }
        }

        Ok(timesheet)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
