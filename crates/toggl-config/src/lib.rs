mod config;
mod error;
mod log_level;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;

/// Config file read when no `--config` flag is given, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
