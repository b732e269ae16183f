use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandSpec};

/// Command runner that records invocations instead of spawning processes.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: Mutex<Vec<CommandSpec>>,
    failures: Mutex<Vec<(String, i32)>>,
    captures: Mutex<HashMap<String, String>>,
}

impl RecordingRunner {
    /// Runner whose `id -u` probe reports root.
    pub fn as_root() -> Self {
        Self::with_uid("0")
    }

    pub fn with_uid(uid: &str) -> Self {
        let runner = Self::default();
        runner.captures.lock().unwrap().insert("id -u".to_string(), uid.to_string());
        runner
    }

    /// Fail every command whose command line starts with `prefix`.
    pub fn fail_on(self, prefix: &str, status: i32) -> Self {
        self.failures.lock().unwrap().push((prefix.to_string(), status));
        self
    }

    /// Command lines in invocation order, without environment.
    pub fn command_lines(&self) -> Vec<String> {
        self.commands.lock().unwrap().iter().map(command_line).collect()
    }

    pub fn find(&self, prefix: &str) -> Option<CommandSpec> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .find(|spec| command_line(spec).starts_with(prefix))
            .cloned()
    }

    fn record(&self, spec: &CommandSpec) -> Result<String, AppError> {
        self.commands.lock().unwrap().push(spec.clone());
        let line = command_line(spec);

        if let Some((_, status)) =
            self.failures.lock().unwrap().iter().find(|(prefix, _)| line.starts_with(prefix))
        {
            return Err(AppError::ExternalTool {
                command: spec.to_string(),
                status: Some(*status),
                details: "scripted failure".to_string(),
            });
        }

        Ok(self.captures.lock().unwrap().get(&line).cloned().unwrap_or_default())
    }
}

fn command_line(spec: &CommandSpec) -> String {
    std::iter::once(spec.program.as_str())
        .chain(spec.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandSpec) -> Result<(), AppError> {
        self.record(command).map(|_| ())
    }

    fn capture(&self, command: &CommandSpec) -> Result<String, AppError> {
        self.record(command)
    }
}
