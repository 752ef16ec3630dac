use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ReadmeError, Result};

/// User-level configuration loaded from `~/.config/pkgreadme/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Directory whose files shadow the built-in templates by name.
    #[serde(default)]
    pub template_dir: Option<PathBuf>,

    /// Host CLI binary used as the prefix of command docs (default `ee`).
    #[serde(default)]
    pub host_command: Option<String>,

    /// Arguments passed to the host binary to dump its command tree as JSON.
    #[serde(default)]
    pub cmd_dump: Option<Vec<String>>,

    /// Text for the update-instructions field of the README.
    #[serde(default)]
    pub update_instructions: Option<String>,
}

/// Get the path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pkgreadme").join("config.toml"))
}

/// Load user configuration from the XDG config directory.
///
/// Returns `Ok(None)` if the config file does not exist.
/// Returns `Err` if the file exists but cannot be read or parsed.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    match config_path() {
        Some(path) => load_user_config_from(&path),
        None => Ok(None),
    }
}

pub fn load_user_config_from(path: &Path) -> Result<Option<UserConfig>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path).map_err(|e| ReadmeError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig =
        toml::from_str(&content).map_err(|e| ReadmeError::ConfigParse { source: e })?;

    Ok(Some(config))
}
