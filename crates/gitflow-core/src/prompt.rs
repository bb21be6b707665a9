//! Branch name and commit message acquisition
//!
//! A value supplied up front (a "preset") short-circuits the prompt. Otherwise
//! the operator is asked until an acceptable answer arrives; there is no retry
//! limit and no timeout. Answers are read through a [`LineSource`], so tests
//! can script them.

use std::collections::VecDeque;

use crate::report::Reporter;
use crate::validate::{branch_name_problem, validate_commit_message};
use crate::{Error, Result};

const BRANCH_PROMPT: &str = "+ Enter branch name:";
const MESSAGE_PROMPT: &str = "+ Enter commit message:";
const CONFIRM_PROMPT: &str = "? Confirm message [y/N]:";

/// Errors from reading operator input.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input source ran out before an answer was accepted
    #[error("Input ended before a value was accepted")]
    Exhausted,

    #[error("Could not read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Where prompts read the operator's answers from.
pub trait LineSource {
    /// Show `prompt` and block until one line of input is available.
    ///
    /// The returned line has no trailing newline.
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, PromptError>;
}

/// A [`LineSource`] that replays canned answers.
///
/// Once the answers run out every read fails with [`PromptError::Exhausted`],
/// so a prompt loop fed by a script always terminates.
#[derive(Debug, Default)]
pub struct ScriptedLines {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> std::result::Result<String, PromptError> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(PromptError::Exhausted)
    }
}

/// Whether a confirmation answer means "yes".
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().to_lowercase().starts_with('y')
}

/// Validate a branch name supplied up front.
///
/// An empty preset counts as not supplied. An invalid preset is fatal; it is
/// never re-prompted.
pub fn preset_branch(preset: Option<&str>) -> Result<Option<String>> {
    let Some(name) = preset.filter(|name| !name.is_empty()) else {
        return Ok(None);
    };

    match branch_name_problem(name) {
        Some(problem) => Err(Error::InvalidInput {
            name: name.to_string(),
            problem,
        }),
        None => Ok(Some(name.to_string())),
    }
}

/// Obtain the branch to work on.
pub fn branch_name(
    preset: Option<&str>,
    input: &mut dyn LineSource,
    reporter: &dyn Reporter,
) -> Result<String> {
    reporter.info("###### Branch Setup ######");

    if let Some(name) = preset_branch(preset)? {
        return Ok(name);
    }

    loop {
        let answer = input.read_line(BRANCH_PROMPT)?;
        let name = answer.trim();

        match branch_name_problem(name) {
            None => return Ok(name.to_string()),
            Some(problem) => {
                tracing::debug!(name = %name, %problem, "Rejected branch name");
                reporter.warning(&format!(
                    "Illegal branch name ({}). Avoid ~ ^ : ? * [ \\ and leading/trailing '/'.",
                    problem
                ));
            }
        }
    }
}

/// Obtain the commit message.
///
/// A non-empty preset is accepted as-is without confirmation. Interactive
/// messages must be confirmed; anything but a "yes" asks for a new message.
pub fn commit_message(
    preset: Option<&str>,
    input: &mut dyn LineSource,
    reporter: &dyn Reporter,
) -> Result<String> {
    reporter.info("###### Commit Setup ######");

    if let Some(message) = preset.filter(|message| !message.is_empty()) {
        return Ok(message.to_string());
    }

    loop {
        let answer = input.read_line(MESSAGE_PROMPT)?;
        let message = answer.trim();

        if !validate_commit_message(message) {
            reporter.warning("Commit message cannot be empty.");
            continue;
        }

        let confirmation = input.read_line(CONFIRM_PROMPT)?;
        if is_affirmative(&confirmation) {
            return Ok(message.to_string());
        }
        tracing::debug!(answer = %confirmation, "Commit message not confirmed");
    }
}
