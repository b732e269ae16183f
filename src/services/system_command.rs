use std::process::Command;

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandSpec};

/// Runs external tools as child processes of the installer.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn build(spec: &CommandSpec) -> Command {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        command.envs(spec.envs.iter().map(|(key, value)| (key, value)));
        command
    }

    fn spawn_error(spec: &CommandSpec, err: std::io::Error) -> AppError {
        AppError::ExternalTool { command: spec.to_string(), status: None, details: err.to_string() }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<(), AppError> {
        debug!(command = %spec, "running");
        let status = Self::build(spec).status().map_err(|e| Self::spawn_error(spec, e))?;

        if !status.success() {
            return Err(AppError::ExternalTool {
                command: spec.to_string(),
                status: status.code(),
                details: "exited unsuccessfully".to_string(),
            });
        }
        Ok(())
    }

    fn capture(&self, spec: &CommandSpec) -> Result<String, AppError> {
        debug!(command = %spec, "capturing");
        let output = Self::build(spec).output().map_err(|e| Self::spawn_error(spec, e))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(AppError::ExternalTool {
                command: spec.to_string(),
                status: output.status.code(),
                details: if stderr.is_empty() { "Unknown error".to_string() } else { stderr },
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}
