use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for installer operations.
///
/// Every variant is fatal: the pipeline stops at the first error and the CLI
/// exits non-zero with the rendered message.
#[derive(Debug, Error)]
pub enum AppError {
    /// The process lacks the privileges the installer needs.
    #[error("{0}")]
    Precondition(String),

    /// A required answer is missing or malformed.
    #[error("{0}")]
    Validation(String),

    /// The operator declined at a confirmation gate.
    #[error("Aborted: {0}")]
    UserAbort(String),

    /// An external command exited unsuccessfully or could not be spawned.
    #[error("Command '{command}' failed{}: {details}", status_suffix(.status))]
    ExternalTool { command: String, status: Option<i32>, details: String },

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// I/O failure on a specific configuration file.
    #[error("{}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Installer settings could not be loaded or are invalid.
    #[error("Invalid settings: {0}")]
    Settings(String),

    /// Operator-facing text could not be rendered.
    #[error("Failed to render {0}")]
    Render(String),

    /// The terminal prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

fn status_suffix(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!(" with exit status {code}"),
        None => String::new(),
    }
}

impl AppError {
    pub fn validation<S: Into<String>>(message: S) -> Self {
        AppError::Validation(message.into())
    }

    pub fn config_file(path: impl Into<PathBuf>, source: io::Error) -> Self {
        AppError::ConfigFile { path: path.into(), source }
    }

    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) | AppError::ConfigFile { source: err, .. } => err.kind(),
            AppError::Precondition(_) => io::ErrorKind::PermissionDenied,
            AppError::Validation(_) | AppError::Settings(_) => io::ErrorKind::InvalidInput,
            AppError::UserAbort(_) | AppError::Prompt(_) => io::ErrorKind::Interrupted,
            AppError::ExternalTool { .. } | AppError::Render(_) => io::ErrorKind::Other,
        }
    }
}
