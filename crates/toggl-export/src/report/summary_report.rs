use crate::{ExportError, ExportResult, ProjectEntry};

use log::debug;
use serde::Deserialize;

/// Decoded summary report: projects in response order
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SummaryReport {
    #[serde(rename = "data", default)]
    project_entries: Option<Vec<ProjectEntry>>,
}

impl SummaryReport {
    /// Decode a raw response body.
    ///
    /// The top-level object must be well formed. A missing or `null` `data`
    /// array decodes as a report with no projects.
    #[track_caller]
    pub fn decode(body: &[u8]) -> ExportResult<Self> {
        let report: Self = serde_json::from_slice(body).map_err(ExportError::from_json)?;
        debug!(
            "Decoded summary report: {} projects, {} time entries",
            report.project_entries().len(),
            report.time_entry_count()
        );
        Ok(report)
    }

    pub fn project_entries(&self) -> &[ProjectEntry] {
        self.project_entries.as_deref().unwrap_or(&[])
    }

    /// Total number of time entries across all projects
    pub fn time_entry_count(&self) -> usize {
        self.project_entries()
            .iter()
            .map(|project| project.time_entries().len())
            .sum()
    }
}
