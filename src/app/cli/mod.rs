//! CLI Adapter.

mod logging;

use clap::Parser;
use tracing::error;

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "gitlab-setup")]
#[command(version)]
#[command(
    about = "Install GitLab Community Edition on this Ubuntu host",
    long_about = "Install GitLab Community Edition on this Ubuntu host.\n\n\
                  Run as root. All parameters are asked interactively: server address, \
                  optional domain, and optional HTTPS via Let's Encrypt."
)]
struct Cli {}

/// Entry point for the CLI.
pub fn run() {
    let _cli = Cli::parse();
    logging::init();

    if let Err(e) = run_install() {
        error!(kind = ?e.kind(), "installation failed");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_install() -> Result<(), AppError> {
    let report = crate::app::api::install()?;
    if !report.config_file_changed {
        println!("ℹ️ Configuration file was already up to date");
    }
    Ok(())
}
