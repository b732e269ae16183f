//! Installer settings loading.

use std::env;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::domain::{AppError, InstallerSettings};

/// Environment variable naming an optional settings file.
pub const SETTINGS_ENV: &str = "GITLAB_SETUP_SETTINGS";

/// Load settings from `$GITLAB_SETUP_SETTINGS`, or defaults when unset.
pub fn load_settings() -> Result<InstallerSettings, AppError> {
    match env::var_os(SETTINGS_ENV) {
        Some(path) if !path.is_empty() => load_settings_from(Path::new(&path)),
        _ => {
            debug!("no settings file configured, using defaults");
            Ok(InstallerSettings::default())
        }
    }
}

/// Load settings from a TOML file.
pub fn load_settings_from(path: &Path) -> Result<InstallerSettings, AppError> {
    let content = fs::read_to_string(path).map_err(|err| {
        AppError::Settings(format!("cannot read {}: {}", path.display(), err))
    })?;
    let settings = InstallerSettings::parse_toml(&content).map_err(|err| match err {
        AppError::Settings(message) => {
            AppError::Settings(format!("{}: {}", path.display(), message))
        }
        other => other,
    })?;
    debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}
