mod recording_runner;
mod scripted_console;
mod static_resolver;

pub use memory_config_store::MemoryConfigStore;
pub use recording_runner::RecordingRunner;
pub use scripted_console::ScriptedConsole;
pub use static_resolver::StaticResolver;

use crate::app::AppContext;
use crate::domain::InstallerSettings;

pub type FakeContext =
    AppContext<ScriptedConsole, RecordingRunner, StaticResolver, MemoryConfigStore>;

/// Context over fakes with default settings.
pub fn fake_context(
    console: ScriptedConsole,
    runner: RecordingRunner,
    resolver: StaticResolver,
    store: MemoryConfigStore,
) -> FakeContext {
    AppContext::new(console, runner, resolver, store, InstallerSettings::default())
}
