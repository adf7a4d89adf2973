use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeEntryTitle {
    #[serde(rename = "time_entry", default)]
    pub name: Option<String>,
}

/// A single logged activity
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeEntry {
    #[serde(default)]
    pub title: Option<TimeEntryTitle>,
    /// Duration in milliseconds
    #[serde(rename = "time", default)]
    duration_ms: Option<i64>,
}

impl TimeEntry {
    /// Entry name, `None` when the response carried no title object
    pub fn name(&self) -> Option<&str> {
        self.title
            .as_ref()
            .map(|title| title.name.as_deref().unwrap_or_default())
    }

    /// Duration in milliseconds; absent or `null` reads as zero
    pub fn duration_ms(&self) -> i64 {
        self.duration_ms.unwrap_or_default()
    }
}
