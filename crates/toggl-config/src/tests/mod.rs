
use std::path::PathBuf;

use tempfile::TempDir;

pub(crate) const VALID_CONFIG: &str = r#"
api_token = "secret-token"
workspace_id = "123456"
user_name = "Jane Doe"
"#;

/// Create a temp directory holding a `config.toml` with the given contents
pub(crate) fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, contents).unwrap();
    (temp, path)
}
