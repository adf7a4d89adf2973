mod client;
mod timesheet;

use crate::SummaryReport;

use serde_json::{Value, json};

/// Build a report body with `projects` projects of `entries` entries each.
/// Entry `j` of every project lasts `j` hours.
pub(crate) fn report_json(projects: usize, entries: usize) -> Value {
    let data: Vec<Value> = (0..projects)
        .map(|p| {
            let items: Vec<Value> = (0..entries)
                .map(|e| {
                    json!({
                        "title": { "time_entry": format!("Task {p}.{e}") },
                        "time": e as i64 * 3_600_000
                    })
                })
                .collect();
            json!({ "title": { "project": format!("Project {p}") }, "items": items })
        })
        .collect();

    json!({ "data": data })
}

pub(crate) fn decode(value: &Value) -> SummaryReport {
    SummaryReport::decode(value.to_string().as_bytes()).unwrap()
}
