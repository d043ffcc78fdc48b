//! Yes/no questions asked during a run.

use crate::error::ApiError;
use dialoguer::Confirm;

/// Source of yes/no answers for overwrite and retry decisions.
pub trait Prompt {
    fn confirm(&self, message: &str) -> Result<bool, ApiError>;
}

/// Answer taken when the user just presses enter.
pub const DEFAULT_ANSWER: bool = true;

/// Interactive terminal prompt. An empty answer means "yes".
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> Result<bool, ApiError> {
        Confirm::new()
            .with_prompt(message)
            .default(DEFAULT_ANSWER)
            .interact()
            .map_err(|e| ApiError::Aborted(format!("Failed to get user input: {}", e)))
    }
}
