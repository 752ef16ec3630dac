use std::path::PathBuf;
use std::process::Command;

use super::CommandNode;
use crate::error::{ReadmeError, Result};

/// Source of the host CLI's command tree.
pub trait CommandIntrospector {
    fn command_tree(&self) -> Result<CommandNode>;
}

/// Reads a previously saved command dump from a JSON file.
pub struct JsonFileIntrospector {
    pub path: PathBuf,
}

impl CommandIntrospector for JsonFileIntrospector {
    fn command_tree(&self) -> Result<CommandNode> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| ReadmeError::Io {
            context: format!("reading command dump {}", self.path.display()),
            source: e,
        })?;
        parse_command_tree(&content)
    }
}

/// Runs the host binary (e.g. `ee cli cmd-dump`) and parses its JSON output.
pub struct HostIntrospector {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandIntrospector for HostIntrospector {
    fn command_tree(&self) -> Result<CommandNode> {
        log::info!("introspecting commands via `{} {}`", self.program, self.args.join(" "));

        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| ReadmeError::Introspection {
                reason: format!("could not run '{}': {e}", self.program),
            })?;

        if !output.status.success() {
            return Err(ReadmeError::Introspection {
                reason: format!(
                    "'{} {}' exited with {}: {}",
                    self.program,
                    self.args.join(" "),
                    output.status,
                    String::from_utf8_lossy(&output.stderr).trim()
                ),
            });
        }

        parse_command_tree(&String::from_utf8_lossy(&output.stdout))
    }
}

pub fn parse_command_tree(json: &str) -> Result<CommandNode> {
    serde_json::from_str(json).map_err(|e| ReadmeError::Introspection {
        reason: format!("invalid command dump JSON: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tree_with_missing_optional_fields() {
        let tree = parse_command_tree(r#"{ "name": "ee", "subcommands": [{ "name": "site" }] }"#)
            .unwrap();
        assert_eq!(tree.subcommands.len(), 1);
        assert_eq!(tree.subcommands[0].description, "");
        assert!(tree.subcommands[0].is_leaf());
    }

    #[test]
    fn parse_tree_invalid_json() {
        let err = parse_command_tree("not json").unwrap_err();
        assert!(matches!(err, ReadmeError::Introspection { .. }));
    }

    #[test]
    fn json_file_introspector_reads_dump() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmd-dump.json");
        std::fs::write(&path, r#"{ "name": "ee", "subcommands": [] }"#).unwrap();
        let tree = JsonFileIntrospector { path }.command_tree().unwrap();
        assert_eq!(tree.name, "ee");
    }

    #[test]
    fn host_introspector_reports_missing_binary() {
        let introspector = HostIntrospector {
            program: "pkgreadme-definitely-not-a-binary".into(),
            args: vec!["cli".into(), "cmd-dump".into()],
        };
        let err = introspector.command_tree().unwrap_err();
        assert!(matches!(err, ReadmeError::Introspection { .. }));
    }
}
