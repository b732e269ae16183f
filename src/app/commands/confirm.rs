//! Manual confirmation gate.

use crate::domain::{AppError, DeploymentConfig};
use crate::ports::OperatorConsole;
use crate::services::report::render_summary;

pub const PROMPT_PROCEED: &str = "Proceed with installation?";

/// Show the summary and ask the operator to proceed. Blocks without timeout.
pub fn confirm(
    console: &impl OperatorConsole,
    config: &DeploymentConfig,
) -> Result<bool, AppError> {
    console.info(&render_summary(config)?);
    console.confirm(PROMPT_PROCEED, false)
}

/// Like [`confirm`], turning a decline into `AppError::UserAbort`.
pub fn require_confirmation(
    console: &impl OperatorConsole,
    config: &DeploymentConfig,
) -> Result<(), AppError> {
    if confirm(console, config)? {
        Ok(())
    } else {
        Err(AppError::UserAbort("installation declined by operator".to_string()))
    }
}
