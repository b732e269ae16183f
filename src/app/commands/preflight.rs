//! Privilege check performed before any prompt.

use tracing::debug;

use crate::domain::AppError;
use crate::ports::{CommandRunner, CommandSpec};

/// Fail unless the effective user is root.
pub fn require_root(runner: &impl CommandRunner) -> Result<(), AppError> {
    let uid = runner.capture(&CommandSpec::new("id").arg("-u")).map_err(|err| {
        AppError::Precondition(format!("Unable to determine the current user: {}", err))
    })?;
    debug!(uid = %uid, "effective user");

    if uid.trim() != "0" {
        return Err(AppError::Precondition(
            "This installer must be run as root (try: sudo gitlab-setup)".to_string(),
        ));
    }
    Ok(())
}
