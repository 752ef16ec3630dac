use std::path::Path;

use crate::error::{ReadmeError, Result};

/// Answer to "the README already exists, what now?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverwriteChoice {
    Skip,
    Replace,
}

impl OverwriteChoice {
    /// Parse an `s`/`r` answer. Anything else is `None`.
    pub fn from_answer(answer: &str) -> Option<Self> {
        match answer.trim() {
            "s" => Some(Self::Skip),
            "r" => Some(Self::Replace),
            _ => None,
        }
    }
}

/// Asks the user whether an existing file should be replaced.
pub trait OverwritePrompt {
    fn ask(&self, path: &Path) -> Result<OverwriteChoice>;
}

/// Interactive terminal prompt; re-asks until the answer is `s` or `r`.
#[derive(Debug, Default)]
pub struct InquirePrompt;

impl OverwritePrompt for InquirePrompt {
    fn ask(&self, _path: &Path) -> Result<OverwriteChoice> {
        let answer = inquire::Text::new("Skip this file, or replace it with scaffolding?")
            .with_help_message("[s/r]")
            .with_validator(|input: &str| {
                if OverwriteChoice::from_answer(input).is_some() {
                    Ok(inquire::validator::Validation::Valid)
                } else {
                    Ok(inquire::validator::Validation::Invalid(
                        inquire::validator::ErrorMessage::Custom(
                            "Answer 's' to skip or 'r' to replace".to_string(),
                        ),
                    ))
                }
            })
            .prompt()
            .map_err(|_| ReadmeError::PromptCancelled)?;

        OverwriteChoice::from_answer(&answer).ok_or(ReadmeError::PromptCancelled)
    }
}
