use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::OperatorConsole;

/// Console that replays scripted answers and records everything shown.
#[derive(Default)]
pub struct ScriptedConsole {
    inputs: Mutex<VecDeque<String>>,
    confirms: Mutex<VecDeque<bool>>,
    pub prompts: Mutex<Vec<String>>,
    pub messages: Mutex<Vec<String>>,
    pub warnings: Mutex<Vec<String>>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str], confirms: &[bool]) -> Self {
        Self {
            inputs: Mutex::new(inputs.iter().map(|s| s.to_string()).collect()),
            confirms: Mutex::new(confirms.iter().copied().collect()),
            ..Self::default()
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn output(&self) -> String {
        self.messages.lock().unwrap().join("\n")
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn remaining_inputs(&self) -> usize {
        self.inputs.lock().unwrap().len()
    }
}

impl OperatorConsole for ScriptedConsole {
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        let answer = self
            .inputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))?;
        match default {
            Some(value) if answer.is_empty() => Ok(value.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&self, prompt: &str, _default: bool) -> Result<bool, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.confirms
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::Prompt(format!("no scripted answer for '{}'", prompt)))
    }

    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}
