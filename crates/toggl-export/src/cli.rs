use crate::{DEFAULT_OUTPUT_PATH, DateRange, ExportOptions, SUMMARY_URL};

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use toggl_config::{DEFAULT_CONFIG_PATH, LogLevel};

/// Flags also accepted with a single dash (`-start 2024-01-01`)
const LEGACY_FLAGS: [&str; 2] = ["start", "end"];

#[derive(Parser, Debug)]
#[command(name = "toggl-export")]
#[command(about = "Export a Toggl summary report to CSV, rounded to quarter hours")]
#[command(version)]
pub struct Cli {
    /// The first day to start the report from
    #[arg(long, default_value = "")]
    pub start: String,

    /// The last day to export from
    #[arg(long, default_value = "")]
    pub end: String,

    /// Path to the TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Path of the CSV file to create or overwrite
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Diagnostics level on stderr (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    /// Summary endpoint override
    #[arg(long, default_value = SUMMARY_URL, hide = true)]
    pub endpoint: String,
}

impl Cli {
    /// Parse process arguments, accepting `-start`/`-end` as well as `--start`/`--end`
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            config_path: self.config.clone(),
            output_path: self.output.clone(),
            endpoint: self.endpoint.clone(),
            range: DateRange::new(&self.start, &self.end),
        }
    }
}

/// Rewrite `-start`, `-end` (and their `=value` forms) to the double-dash spelling.
///
/// Everything after a bare `--` is left alone.
pub fn normalize_legacy_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            if text == "--" {
                passthrough = true;
                return arg;
            }

            let is_legacy = text.strip_prefix('-').is_some_and(|rest| {
                let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                LEGACY_FLAGS.contains(&name)
            });

            if is_legacy {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}
