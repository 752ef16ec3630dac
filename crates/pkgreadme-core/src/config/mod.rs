pub mod user;

use std::path::PathBuf;

pub use user::{load_user_config, load_user_config_from, UserConfig};

pub const DEFAULT_HOST_COMMAND: &str = "ee";
pub const DEFAULT_UPDATE_INSTRUCTIONS: &str = "the latest stable release with `ee cli update`";

fn default_cmd_dump() -> Vec<String> {
    vec!["cli".to_string(), "cmd-dump".to_string()]
}

/// Effective settings for one generation run: user config with defaults filled in.
#[derive(Debug, Clone)]
pub struct Settings {
    pub template_dir: Option<PathBuf>,
    pub host_command: String,
    pub cmd_dump: Vec<String>,
    pub update_instructions: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template_dir: None,
            host_command: DEFAULT_HOST_COMMAND.to_string(),
            cmd_dump: default_cmd_dump(),
            update_instructions: DEFAULT_UPDATE_INSTRUCTIONS.to_string(),
        }
    }
}

impl From<UserConfig> for Settings {
    fn from(config: UserConfig) -> Self {
        let defaults = Settings::default();
        Self {
            template_dir: config.template_dir,
            host_command: config.host_command.unwrap_or(defaults.host_command),
            cmd_dump: config.cmd_dump.unwrap_or(defaults.cmd_dump),
            update_instructions: config
                .update_instructions
                .unwrap_or(defaults.update_instructions),
        }
    }
}
