//! API Facade for the application.
//!
//! Glues context creation to command execution using the production adapters.

use crate::app::commands::install as install_command;
use crate::app::{AppContext, config};
use crate::services::{
    DialoguerConsole, FilesystemConfigStore, SystemCommandRunner, SystemNameResolver,
};

pub use crate::app::commands::install::InstallReport;
pub use crate::domain::AppError;

type SystemContext =
    AppContext<DialoguerConsole, SystemCommandRunner, SystemNameResolver, FilesystemConfigStore>;

/// Create an `AppContext` wired to the terminal, the host and its filesystem.
fn create_context() -> Result<SystemContext, AppError> {
    let settings = config::load_settings()?;
    Ok(AppContext::new(
        DialoguerConsole::new(),
        SystemCommandRunner::new(),
        SystemNameResolver::new(),
        FilesystemConfigStore::new(),
        settings,
    ))
}

/// Run the interactive GitLab installation on this host.
pub fn install() -> Result<InstallReport, AppError> {
    let ctx = create_context()?;
    install_command::execute(&ctx)
}
