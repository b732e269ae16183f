use std::io::ErrorKind;

use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::domain::AppError;
use crate::ports::OperatorConsole;

/// Terminal console backed by `dialoguer` prompts.
#[derive(Debug, Clone, Default)]
pub struct DialoguerConsole;

impl DialoguerConsole {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(prompt: &str, err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(io) if io.kind() == ErrorKind::Interrupted => {
            AppError::UserAbort(format!("interrupted at '{}'", prompt))
        }
        DialoguerError::IO(io) => AppError::Prompt(format!("{}: {}", prompt, io)),
    }
}

impl OperatorConsole for DialoguerConsole {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        let mut input = Input::<String>::new().with_prompt(prompt).allow_empty(true);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        input.interact_text().map_err(|err| prompt_error(prompt, err))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(|err| prompt_error(prompt, err))
    }

    fn info(&self, message: &str) {
        println!("{}", message);
    }

    fn warn(&self, message: &str) {
        println!("⚠️  {}", message);
    }
}
