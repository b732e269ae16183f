//! Projection of the deployment config onto `gitlab.rb` and reconfigure.

use std::path::Path;

use tracing::info;

use crate::domain::gitlab_rb::{key_lines, upsert};
use crate::domain::{AppError, DeploymentConfig};
use crate::ports::{CommandRunner, CommandSpec, ConfigFileStore};

/// Upsert the key lines for `config` into the file at `path`.
///
/// Returns whether the file changed. The file is rewritten in place without
/// a backup, so an I/O failure mid-write can leave it partially edited.
pub fn apply_to_config_file(
    store: &impl ConfigFileStore,
    config: &DeploymentConfig,
    path: &Path,
) -> Result<bool, AppError> {
    let current = store.read(path)?;
    let updated = upsert(&current, &key_lines(config));

    if updated == current {
        info!(path = %path.display(), "configuration already up to date");
        return Ok(false);
    }

    store.write(path, &updated)?;
    info!(path = %path.display(), "configuration updated");
    Ok(true)
}

/// Apply `gitlab.rb` and restart affected services.
pub fn reconfigure(runner: &impl CommandRunner) -> Result<(), AppError> {
    runner.run(&CommandSpec::new("gitlab-ctl").arg("reconfigure"))
}
