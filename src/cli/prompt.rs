//! Terminal prompts.
//!
//! `Prompter` is the seam between the menu and the terminal: the menu only asks
//! for validated text or a choice, and `DialoguerPrompter` does the rendering.

use crate::error::{AppError, Result};
use crate::validation::Validator;
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use tracing::debug;

/// One selectable option: what the operator sees and the value it stands for.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<T> {
    pub label: String,
    pub value: T,
}

impl<T> Choice<T> {
    pub fn new(label: impl Into<String>, value: T) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Asks the operator questions.
pub trait Prompter {
    /// Free text. Re-asks until `validate` accepts the input, showing its message each time.
    fn text(&mut self, message: &str, validate: Validator) -> Result<String>;

    /// Single choice; returns the underlying value of the picked option.
    ///
    /// Returns `AppError::Cancelled` if the operator dismisses the prompt and
    /// `AppError::NoChoices` if `choices` is empty.
    fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T>;
}

/// `Prompter` backed by `dialoguer` with the colorful theme.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, message: &str, validate: Validator) -> Result<String> {
        // Empty input is allowed through so the validator can explain the rejection.
        let answer: String = Input::with_theme(&self.theme)
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(move |input: &String| validate(input))
            .interact_text()?;
        Ok(answer.trim().to_string())
    }

    fn select<T: Clone>(&mut self, message: &str, choices: &[Choice<T>]) -> Result<T> {
        if choices.is_empty() {
            println!("{} {}", message.bold(), "(no options available)".yellow());
            return Err(AppError::NoChoices(message.to_string()));
        }

        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
        let selection = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match selection {
            Some(index) => {
                debug!("Selected '{}' for '{}'", labels[index], message);
                Ok(choices[index].value.clone())
            },
            None => Err(AppError::Cancelled),
        }
    }
}
