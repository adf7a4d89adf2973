use crate::TimeEntry;

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectTitle {
    #[serde(default)]
    pub project: Option<String>,
}

/// One project and the time entries logged against it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectEntry {
    #[serde(default)]
    pub title: Option<ProjectTitle>,
    #[serde(rename = "items", default)]
    time_entries: Option<Vec<TimeEntry>>,
}

impl ProjectEntry {
    /// Project name, `None` when the response carried no title object.
    ///
    /// A title object with a missing or `null` name reads as an empty name.
    pub fn project_name(&self) -> Option<&str> {
        self.title
            .as_ref()
            .map(|title| title.project.as_deref().unwrap_or_default())
    }

    pub fn time_entries(&self) -> &[TimeEntry] {
        self.time_entries.as_deref().unwrap_or(&[])
    }
}
