//! User interaction. The [`Prompter`] trait is the seam between the answer
//! collection logic and the terminal, so the collection logic can be driven
//! from tests without a TTY.

use crate::error::Result;
use dialoguer::Input;

pub trait Prompter {
    /// Asks a single free-text question. An empty reply yields `default`.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;

    /// Tells the user why the last reply was rejected before asking again.
    fn report_invalid(&self, message: &str);
}

/// Dialoguer-based terminal prompter.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .show_default(!default.is_empty())
            .allow_empty(true)
            .interact_text()?)
    }

    fn report_invalid(&self, message: &str) {
        eprintln!("{message}");
    }
}
