//! toggl-export - Toggl summary report to CSV
//!
//! # Examples
//!
//! ```bash
//! # Export one month, reading ./config.toml and writing ./result.csv
//! toggl-export --start 2024-01-01 --end 2024-01-31
//! ```

use toggl_export::{Cli, logger, report_failure, run, total_line};

use std::io::IsTerminal;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();

    if let Err(e) = logger::initialize(cli.log_level, std::io::stderr().is_terminal()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli.export_options()).await {
        Ok(timesheet) => {
            println!("{}", total_line(timesheet.total_hours));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", report_failure(&e));
            ExitCode::FAILURE
        }
    }
}
