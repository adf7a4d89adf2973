use error_location::ErrorLocation;
use reqwest::StatusCode;
use std::panic::Location;
use thiserror::Error;

/// Errors that can occur while fetching the summary report
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Reports API returned {status}: {body} {location}")]
    Status {
        status: StatusCode,
        body: String,
        location: ErrorLocation,
    },

    #[error("Invalid endpoint URL: {message} {location}")]
    Url {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a status error, keeping a short prefix of the body for diagnostics
    #[track_caller]
    pub fn status(status: StatusCode, body: &[u8]) -> Self {
        let body = String::from_utf8_lossy(body);
        let cut = body.char_indices().nth(MAX_BODY_CHARS).map(|(idx, _)| idx);
        let body = match cut {
            Some(idx) => format!("{}…", &body[..idx]),
            None => body.into_owned(),
        };

        ClientError::Status {
            status,
            body,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an invalid URL error with location
    #[track_caller]
    pub fn url<S: Into<String>>(message: S) -> Self {
        ClientError::Url {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

const MAX_BODY_CHARS: usize = 200;

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
