mod dialoguer_console;
mod filesystem_config_store;
pub mod report;
mod system_command;
mod system_resolver;

pub use dialoguer_console::DialoguerConsole;
pub use filesystem_config_store::FilesystemConfigStore;
pub use system_command::SystemCommandRunner;
pub use system_resolver::SystemNameResolver;
