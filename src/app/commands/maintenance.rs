//! Post-install status report and backup through the GitLab tooling.

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandSpec};

/// Show service status (`gitlab-ctl status`).
pub fn report_status(runner: &impl CommandRunner) -> Result<(), AppError> {
    runner.run(&CommandSpec::new("gitlab-ctl").arg("status"))
}

/// Create an application backup (`gitlab-rake gitlab:backup:create`).
pub fn create_backup(runner: &impl CommandRunner) -> Result<(), AppError> {
    runner.run(&CommandSpec::new("gitlab-rake").arg("gitlab:backup:create"))
}
