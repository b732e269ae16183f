//! Package installation through apt and the GitLab repository script.

use tempfile::Builder;

use crate::domain::{AppError, DeploymentConfig, InstallerSettings};
use crate::ports::{CommandRunner, CommandSpec, OperatorConsole};

const REPOSITORY_SCRIPT_NAME: &str = "gitlab-repository-setup.deb.sh";

fn apt_get<I, S>(args: I) -> CommandSpec
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CommandSpec::new("apt-get").args(args).env("DEBIAN_FRONTEND", "noninteractive")
}

/// Install prerequisites, register the package repository and install the
/// GitLab package with the resolved external URL.
pub fn install_packages(
    console: &impl OperatorConsole,
    runner: &impl CommandRunner,
    settings: &InstallerSettings,
    config: &DeploymentConfig,
) -> Result<(), AppError> {
    console.info("==> Updating package index");
    runner.run(&apt_get(["update"]))?;

    if !settings.prerequisite_packages.is_empty() {
        console.info("==> Installing prerequisite packages");
        let prerequisites = settings.prerequisite_packages.iter().cloned();
        runner.run(&apt_get(["install", "-y"]).args(prerequisites))?;
    }

    console.info("==> Adding the GitLab package repository");
    add_repository(runner, settings)?;

    console.info(&format!("==> Installing {} for {}", settings.package, config.external_url()));
    runner.run(
        &apt_get(["install", "-y", settings.package.as_str()])
            .env("EXTERNAL_URL", config.external_url()),
    )?;

    Ok(())
}

/// Download the repository script into a private directory and run it.
///
/// The directory is created with owner-only permissions under a random name
/// and removed when this returns, whether or not the script succeeded.
fn add_repository(
    runner: &impl CommandRunner,
    settings: &InstallerSettings,
) -> Result<(), AppError> {
    let workdir = Builder::new().prefix("gitlab-setup-").tempdir()?;
    let script = workdir.path().join(REPOSITORY_SCRIPT_NAME);
    let script = script.to_string_lossy().to_string();

    runner.run(&CommandSpec::new("curl").args([
        "-fsSL",
        "-o",
        script.as_str(),
        settings.repository_script_url.as_str(),
    ]))?;
    runner.run(&CommandSpec::new("bash").arg(script))?;

    workdir.close()?;
    Ok(())
}
