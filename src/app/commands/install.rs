//! The installation pipeline, run step by step until the first error.

use tracing::info;

use crate::app::AppContext;
use crate::app::commands::{
    configure, confirm, credential, dns_check, firewall, gather, maintenance, packages, preflight,
};
use crate::domain::{AppError, DeploymentConfig, resolve};
use crate::ports::{CommandRunner, ConfigFileStore, NameResolver, OperatorConsole};
use crate::services::report::render_completion;

/// Outcome of a completed installation.
#[derive(Debug, Clone)]
pub struct InstallReport {
    pub config: DeploymentConfig,
    pub config_file_changed: bool,
    pub firewall_rules_applied: usize,
    pub initial_password: Option<String>,
}

/// Execute the full installation.
pub fn execute<C, R, N, S>(ctx: &AppContext<C, R, N, S>) -> Result<InstallReport, AppError>
where
    C: OperatorConsole,
    R: CommandRunner,
    N: NameResolver,
    S: ConfigFileStore,
{
    let settings = ctx.settings();

    preflight::require_root(ctx.runner())?;

    let answers = gather::gather_answers(ctx.console())?;
    let config = resolve(&answers)?;
    info!(external_url = config.external_url(), tls = config.use_tls(), "configuration resolved");

    confirm::require_confirmation(ctx.console(), &config)?;
    dns_check::dns_advisory(ctx.console(), ctx.resolver(), &config)?;

    packages::install_packages(ctx.console(), ctx.runner(), settings, &config)?;

    ctx.console().info("==> Opening firewall ports");
    let firewall_rules_applied = firewall::open_firewall(ctx.runner(), &settings.firewall_rules);

    ctx.console().info(&format!("==> Updating {}", settings.gitlab_rb_path.display()));
    let config_file_changed =
        configure::apply_to_config_file(ctx.store(), &config, &settings.gitlab_rb_path)?;

    ctx.console().info("==> Reconfiguring GitLab");
    configure::reconfigure(ctx.runner())?;

    ctx.console().info("==> Service status");
    maintenance::report_status(ctx.runner())?;

    ctx.console().info("==> Creating backup");
    maintenance::create_backup(ctx.runner())?;

    let initial_password =
        credential::read_initial_password(ctx.store(), &settings.initial_root_password_path);
    ctx.console().info(&render_completion(
        &config,
        initial_password.as_deref(),
        &settings.initial_root_password_path,
    )?);

    Ok(InstallReport { config, config_file_changed, firewall_rules_applied, initial_password })
}
