use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "GITLAB_SETUP_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the stderr subscriber. Diagnostics stay off stdout, which carries
/// the interactive session.
pub fn init() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    // A subscriber installed earlier in the process (tests, embedding callers) wins.
    if let Err(err) =
        fmt().with_env_filter(filter).with_target(true).with_writer(std::io::stderr).try_init()
    {
        tracing::debug!(error = %err, "keeping previously installed subscriber");
    }
}
