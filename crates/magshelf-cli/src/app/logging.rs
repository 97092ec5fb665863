//! tracing subscriber setup.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "MAGSHELF_LOG";

/// Pick the filter directive: MAGSHELF_LOG, then `-v`, then the config level, then `warn`.
fn filter_directive(env_value: Option<String>, verbose: bool, config_level: Option<&str>) -> String {
    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return value;
    }
    if verbose {
        return "debug".to_string();
    }
    config_level
        .filter(|level| !level.trim().is_empty())
        .unwrap_or("warn")
        .to_string()
}

/// Install the global subscriber. Log lines go to stderr so stdout stays parseable.
pub fn init_logging(verbose: bool, config_level: Option<&str>) {
    let directive = filter_directive(std::env::var(LOG_ENV).ok(), verbose, config_level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .try_init();
}
