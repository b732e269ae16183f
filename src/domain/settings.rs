//! Installer settings loaded from an optional TOML file.

use std::path::PathBuf;

use serde::Deserialize;
use url::Url;

use crate::domain::AppError;

/// Fixed paths, package names and collaborator parameters.
///
/// Every field has a default, so an empty file (or no file at all) yields the
/// standard Omnibus layout on Ubuntu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InstallerSettings {
    /// Omnibus configuration file edited before reconfigure.
    #[serde(default = "default_gitlab_rb_path")]
    pub gitlab_rb_path: PathBuf,
    /// Credential file written by the first reconfigure.
    #[serde(default = "default_initial_root_password_path")]
    pub initial_root_password_path: PathBuf,
    /// Package installed from the GitLab repository.
    #[serde(default = "default_package")]
    pub package: String,
    /// Script that registers the GitLab package repository with apt.
    #[serde(default = "default_repository_script_url")]
    pub repository_script_url: Url,
    /// Packages installed before the repository is added.
    #[serde(default = "default_prerequisite_packages")]
    pub prerequisite_packages: Vec<String>,
    /// `ufw allow` arguments applied on a best-effort basis.
    #[serde(default = "default_firewall_rules")]
    pub firewall_rules: Vec<String>,
}

impl Default for InstallerSettings {
    fn default() -> Self {
        Self {
            gitlab_rb_path: default_gitlab_rb_path(),
            initial_root_password_path: default_initial_root_password_path(),
            package: default_package(),
            repository_script_url: default_repository_script_url(),
            prerequisite_packages: default_prerequisite_packages(),
            firewall_rules: default_firewall_rules(),
        }
    }
}

impl InstallerSettings {
    /// Parse and validate settings from TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let settings: InstallerSettings =
            toml::from_str(content).map_err(|err| AppError::Settings(err.message().to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.package.trim().is_empty() {
            return Err(AppError::Settings("package must not be empty".to_string()));
        }
        if self.gitlab_rb_path.as_os_str().is_empty() {
            return Err(AppError::Settings("gitlab_rb_path must not be empty".to_string()));
        }
        if self.initial_root_password_path.as_os_str().is_empty() {
            return Err(AppError::Settings(
                "initial_root_password_path must not be empty".to_string(),
            ));
        }
        if !matches!(self.repository_script_url.scheme(), "https" | "http") {
            return Err(AppError::Settings(format!(
                "repository_script_url must be http(s): {}",
                self.repository_script_url
            )));
        }
        if let Some(name) = self.prerequisite_packages.iter().find(|p| p.trim().is_empty()) {
            return Err(AppError::Settings(format!("invalid prerequisite package '{}'", name)));
        }
        Ok(())
    }
}

fn default_gitlab_rb_path() -> PathBuf {
    PathBuf::from("/etc/gitlab/gitlab.rb")
}

fn default_initial_root_password_path() -> PathBuf {
    PathBuf::from("/etc/gitlab/initial_root_password")
}

fn default_package() -> String {
    "gitlab-ce".to_string()
}

fn default_repository_script_url() -> Url {
    Url::parse("https://packages.gitlab.com/install/repositories/gitlab/gitlab-ce/script.deb.sh")
        .expect("Default repository script URL must be valid")
}

fn default_prerequisite_packages() -> Vec<String> {
    ["curl", "openssh-server", "ca-certificates", "tzdata", "perl"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_firewall_rules() -> Vec<String> {
    ["OpenSSH", "http", "https"].into_iter().map(String::from).collect()
}
