pub(crate) mod client;
pub(crate) mod error;

pub use client::{Client, DateRange, SUMMARY_URL, USER_AGENT};
pub use error::{ClientError, Result as CliClientResult};
