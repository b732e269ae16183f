use crate::domain::InstallerSettings;
use crate::ports::{CommandRunner, ConfigFileStore, NameResolver, OperatorConsole};

/// Application context holding dependencies for command execution.
pub struct AppContext<C, R, N, S>
where
    C: OperatorConsole,
    R: CommandRunner,
    N: NameResolver,
    S: ConfigFileStore,
{
    console: C,
    runner: R,
    resolver: N,
    store: S,
    settings: InstallerSettings,
}

impl<C, R, N, S> AppContext<C, R, N, S>
where
    C: OperatorConsole,
    R: CommandRunner,
    N: NameResolver,
    S: ConfigFileStore,
{
    /// Create a new application context.
    pub fn new(console: C, runner: R, resolver: N, store: S, settings: InstallerSettings) -> Self {
        Self { console, runner, resolver, store, settings }
    }

    /// Get a reference to the operator console.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Get a reference to the external command runner.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Get a reference to the name resolver.
    pub fn resolver(&self) -> &N {
        &self.resolver
    }

    /// Get a reference to the config file store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the installer settings.
    pub fn settings(&self) -> &InstallerSettings {
        &self.settings
    }
}
