//! Headerless CSV output for a [`Timesheet`].
//!
//! Quoting follows RFC 4180: a field is wrapped in quotes when it contains a
//! comma, quote, CR or LF, or starts with whitespace. A field that is exactly
//! `\.` is quoted too, so it cannot be read as an end-of-data marker. Embedded
//! quotes are doubled. Records end in `\n`.

use crate::{ExportError, ExportResult, Timesheet};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{error, info};

/// Output file written when no `--output` flag is given, relative to the working directory
pub const DEFAULT_OUTPUT_PATH: &str = "result.csv";

/// Escape CSV field (handle commas, quotes, newlines, leading whitespace)
fn escape_field(field: &str) -> String {
    let needs_quotes = field == r"\."
        || field.contains([',', '"', '\r', '\n'])
        || field.chars().next().is_some_and(char::is_whitespace);

    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Render every row of the timesheet, no header
pub fn to_csv(timesheet: &Timesheet) -> String {
    let mut output = String::new();

    for row in &timesheet.rows {
        let fields: Vec<String> = row.to_record().iter().map(|f| escape_field(f)).collect();
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

/// Create or truncate `path` and write the timesheet to it in one batch.
///
/// The file handle is dropped on every return path.
pub fn write_timesheet(path: &Path, timesheet: &Timesheet) -> ExportResult<()> {
    let io_error = |source: std::io::Error| {
        error!("error writing csv {}: {}", path.display(), source);
        ExportError::Io {
            path: path.to_path_buf(),
            source,
        }
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(to_csv(timesheet).as_bytes())
        .map_err(io_error)?;
    writer.flush().map_err(io_error)?;

    info!("Wrote {} rows to {}", timesheet.len(), path.display());
    Ok(())
}
