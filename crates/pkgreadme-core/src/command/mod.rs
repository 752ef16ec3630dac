pub mod format;
pub mod introspect;

use serde::{Deserialize, Serialize};

use crate::error::{ReadmeError, Result};

pub use format::format_longdesc;
pub use introspect::{CommandIntrospector, HostIntrospector, JsonFileIntrospector};

/// One node of the host CLI's introspected command tree.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CommandNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub longdesc: String,
    #[serde(default)]
    pub subcommands: Vec<CommandNode>,
}

impl CommandNode {
    pub fn is_leaf(&self) -> bool {
        self.subcommands.is_empty()
    }

    fn subcommand(&self, name: &str) -> Option<&CommandNode> {
        self.subcommands.iter().find(|sub| sub.name == name)
    }

    /// Walk the tree along a space-separated command path (e.g. `"site create"`).
    ///
    /// Returns `None` if any token has no matching subcommand. An empty path
    /// never matches.
    pub fn find(&self, path: &str) -> Option<&CommandNode> {
        let mut tokens = path.split_whitespace().peekable();
        tokens.peek()?;
        tokens.try_fold(self, |node, token| node.subcommand(token))
    }
}

/// Documentation for one declared command, ready for the README template.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CommandDoc {
    pub name: String,
    pub shortdesc: String,
    pub synopsis: String,
    pub longdesc: String,
}

/// Build the documentation for a single command path.
pub fn build_command_doc(root: &CommandNode, path: &str, host: &str) -> Result<CommandDoc> {
    let node = root.find(path).ok_or_else(|| ReadmeError::MissingCommand {
        command: path.to_string(),
    })?;

    log::debug!("resolved command '{path}' ({} subcommands)", node.subcommands.len());

    let invocation = format!("{host} {path}");
    let synopsis = if node.is_leaf() {
        format!("{invocation} {}", node.synopsis)
    } else {
        invocation.clone()
    };

    Ok(CommandDoc {
        name: invocation,
        shortdesc: node.description.clone(),
        synopsis,
        longdesc: format_longdesc(&node.longdesc),
    })
}

/// Build documentation for every declared command, failing on the first missing one.
pub fn build_command_docs(
    root: &CommandNode,
    paths: &[String],
    host: &str,
) -> Result<Vec<CommandDoc>> {
    paths
        .iter()
        .map(|path| build_command_doc(root, path, host))
        .collect()
}
