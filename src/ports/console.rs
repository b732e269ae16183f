//! Interaction with the human operator at the terminal.

use crate::domain::AppError;

/// Port for prompting the operator and showing progress.
pub trait OperatorConsole {
    /// Ask for a line of text. An empty reply yields `default` when given.
    fn input(&self, prompt: &str, default: Option<&str>) -> Result<String, AppError>;

    /// Ask a yes/no question. Blocks until the operator answers.
    fn confirm(&self, prompt: &str, default: bool) -> Result<bool, AppError>;

    /// Show an informational message.
    fn info(&self, message: &str);

    /// Show a warning that does not stop the installation by itself.
    fn warn(&self, message: &str);
}
