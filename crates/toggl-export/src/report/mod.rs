//! Reports API summary payload.
//!
//! Shape: `{"data": [{"title": {"project": ..}, "items": [{"title": {"time_entry": ..}, "time": ..}]}]}`.
//! Only the fields the export reads are modelled; everything else is ignored.

mod project_entry;
mod summary_report;
mod time_entry;

pub use project_entry::{ProjectEntry, ProjectTitle};
pub use summary_report::SummaryReport;
pub use time_entry::{TimeEntry, TimeEntryTitle};
