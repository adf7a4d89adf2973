use crate::{Client, DateRange, ExportError, ExportResult, SummaryReport, Timesheet, csv_writer};

use std::path::PathBuf;

use log::{error, info};
use toggl_config::Config;

/// Everything a run needs besides the config file contents
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub config_path: PathBuf,
    pub output_path: PathBuf,
    pub endpoint: String,
    pub range: DateRange,
}

/// Load config, fetch, decode, round, write the CSV.
///
/// Strictly sequential: a config failure happens before any request, and a
/// fetch or decode failure happens before the output file is touched.
pub async fn run(options: &ExportOptions) -> ExportResult<Timesheet> {
    let config = Config::load(&options.config_path)?;
    config.log_summary();

    info!(
        "Requesting summary for {:?}..{:?}",
        options.range.since, options.range.until
    );
    let client = Client::new(&options.endpoint, &config.api_token);
    let body = client
        .fetch_summary(&config.workspace_id, &options.range)
        .await?;

    let report = SummaryReport::decode(&body)?;
    let timesheet = Timesheet::from_report(&report, &config.user_name)?;

    csv_writer::write_timesheet(&options.output_path, &timesheet)?;

    Ok(timesheet)
}

/// The single stdout line; the total is printed unrounded
pub fn total_line(total_hours: f64) -> String {
    format!("Total time: {}h", total_hours)
}

/// Log a failed run at `error` and return the stderr line for it
pub fn report_failure(err: &ExportError) -> String {
    error!("Export failed: {}", err);
    format!("Error: {}", err)
}
