use crate::ClientError;

use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;
use toggl_config::ConfigError;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Client(#[from] ClientError),

    #[error("JSON decode error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Report has no {kind} title (project #{project_index}, entry #{entry_index}) {location}"
    )]
    MissingTitle {
        kind: &'static str,
        project_index: usize,
        entry_index: usize,
        location: ErrorLocation,
    },

    #[error("IO error writing {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },
}

impl ExportError {
    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ExportError::Decode {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a missing-title error for the entry at the given position
    #[track_caller]
    pub fn missing_title(kind: &'static str, project_index: usize, entry_index: usize) -> Self {
        ExportError::MissingTitle {
            kind,
            project_index,
            entry_index,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
