use crate::{ExportError, ExportResult};

use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::debug;
use toggl_config::LogLevel;

/// Initialize logger with fern
///
/// Log lines go to stderr; stdout carries only the total line.
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `colored` - Color the level name (for a TTY)
pub fn initialize(log_level: LogLevel, colored: bool) -> ExportResult<()> {
    let level_filter = log_level.0;

    let dispatch = if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new().format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = colors.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
    } else {
        Dispatch::new().format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = humantime::format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch.chain(std::io::stderr()))
        .apply()
        .map_err(|e| ExportError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    debug!("Logger initialized: level={:?}, stderr", level_filter);

    Ok(())
}
