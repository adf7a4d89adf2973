use crate::{ConfigError, ConfigErrorResult};

use std::fmt;
use std::path::Path;

use log::info;
use serde::Deserialize;

/// Static settings for one export run.
///
/// Every key is required. There are no defaults and no environment overrides;
/// a file that decodes is a valid config.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Reports API token, sent as the basic-auth username
    pub api_token: String,
    /// Workspace the summary report is scoped to
    pub workspace_id: String,
    /// Display name written into the first CSV column
    pub user_name: String,
}

impl Config {
    /// Load and parse the TOML file at `path`.
    ///
    /// Both the read and the parse error name the file, so a missing
    /// `config.toml` is obvious from the message alone.
    pub fn load(path: impl AsRef<Path>) -> ConfigErrorResult<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(ConfigError::config("config path is empty"));
        }

        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Log configuration summary (NEVER logs the token).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  workspace_id: {}", self.workspace_id);
        info!("  user_name: {}", self.user_name);
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_token", &"<redacted>")
            .field("workspace_id", &self.workspace_id)
            .field("user_name", &self.user_name)
            .finish()
    }
}
