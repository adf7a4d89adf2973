//! Millisecond durations to billable quarter-hours.

const MS_PER_HOUR: f64 = 3_600_000.0;
const QUARTERS_PER_HOUR: f64 = 4.0;

/// Smallest amount ever reported for an entry
pub const MIN_BILLABLE_HOURS: f64 = 0.25;

/// Convert a duration to hours rounded to the nearest quarter.
///
/// Halves round away from zero. An entry that rounds to zero is reported as
/// [`MIN_BILLABLE_HOURS`], so no entry is ever billed as zero time.
pub fn round_to_quarter_hour(duration_ms: i64) -> f64 {
    let hours = duration_ms as f64 / MS_PER_HOUR;
    let rounded = (hours * QUARTERS_PER_HOUR).round() / QUARTERS_PER_HOUR;

    if rounded == 0.0 {
        MIN_BILLABLE_HOURS
    } else {
        rounded
    }
}

/// Render hours the way the CSV column expects them: exactly two decimals
pub fn format_hours(hours: f64) -> String {
    format!("{:.2}", hours)
}
