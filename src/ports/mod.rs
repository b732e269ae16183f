mod command_runner;
mod config_store;
mod console;
mod name_resolver;

pub use command_runner::{CommandRunner, CommandSpec};
pub use config_store::ConfigFileStore;
pub use console::OperatorConsole;
pub use name_resolver::NameResolver;
