//! Terminal Prompter
//!
//! Interactive input for missing connection parameters via `dialoguer`.

use dialoguer::Input;

use crate::domain::ports::Prompter;

/// Prompter reading from the controlling terminal
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn ask(&self, prompt: &str) -> std::io::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| std::io::Error::other(e.to_string()))
    }
}
