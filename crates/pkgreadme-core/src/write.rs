use std::path::{Path, PathBuf};

use console::style;

use crate::error::{ReadmeError, Result};
use crate::prompt::{OverwriteChoice, OverwritePrompt};

/// What happened to the target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written(PathBuf),
    Skipped(PathBuf),
}

impl WriteOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, Self::Written(_))
    }
}

/// Decide whether an existing file may be replaced. Missing files always may.
fn should_write(path: &Path, force: bool, prompt: &dyn OverwritePrompt) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }

    eprintln!(
        "{} File already exists: {}",
        style("warning:").yellow().bold(),
        path.display()
    );

    let replace = force || prompt.ask(path)? == OverwriteChoice::Replace;
    eprintln!("{}", if replace { "Replacing" } else { "Skipping" });
    Ok(replace)
}

/// Write `contents` to `path`, asking before replacing an existing file unless `force`.
pub fn write_readme(
    path: &Path,
    contents: &str,
    force: bool,
    prompt: &dyn OverwritePrompt,
) -> Result<WriteOutcome> {
    if !should_write(path, force, prompt)? {
        log::info!("skipped writing {}", path.display());
        return Ok(WriteOutcome::Skipped(path.to_path_buf()));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ReadmeError::FileWrite {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    std::fs::write(path, contents).map_err(|e| ReadmeError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("wrote {} ({} bytes)", path.display(), contents.len());

    Ok(WriteOutcome::Written(path.to_path_buf()))
}
