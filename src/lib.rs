//! gitlab-setup: interactive installer for GitLab Community Edition on a single Ubuntu host.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{InstallReport, install};
pub use domain::{AppError, Answers, DeploymentConfig, InstallerSettings, resolve};
