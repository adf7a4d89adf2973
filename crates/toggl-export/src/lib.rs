//! toggl-export library
//!
//! Fetches a Toggl Reports API summary, rounds every time entry to the
//! nearest quarter hour and writes the result as a headerless CSV.

pub mod cli;
pub(crate) mod client;
pub mod csv_writer;
pub(crate) mod error;
pub mod export;
pub mod hours;
pub mod logger;
pub(crate) mod report;
pub mod timesheet;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use client::{CliClientResult, Client, ClientError, DateRange, SUMMARY_URL, USER_AGENT};
pub use csv_writer::DEFAULT_OUTPUT_PATH;
pub use error::{ExportError, Result as ExportResult};
pub use export::{ExportOptions, report_failure, run, total_line};
pub use report::{ProjectEntry, ProjectTitle, SummaryReport, TimeEntry, TimeEntryTitle};
pub use timesheet::{CATEGORY, Timesheet, TimesheetRow};
