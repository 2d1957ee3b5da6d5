//! Logging initialization.
//!
//! Uses the tracing ecosystem. The filter comes from, in order:
//! - `MEMORY_LAB_LOG` (e.g. "memory_lab=debug")
//! - the `log` key of the settings file
//! - `memory_lab=info`

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV: &str = "MEMORY_LAB_LOG";

pub const DEFAULT_FILTER: &str = "memory_lab=info";

/// Pick the filter directives to use.
#[must_use]
pub fn resolve_filter(from_env: Option<&str>, from_settings: Option<&str>) -> String {
    from_env
        .or(from_settings)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Install the console subscriber. Safe to call more than once; later
/// calls are no-ops.
pub fn init_logging(from_settings: Option<&str>) {
    let from_env = std::env::var(LOG_ENV).ok();
    let directives = resolve_filter(from_env.as_deref(), from_settings);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false)
        .with_ansi(true);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(&directives))
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(filter = %directives, "Logging initialized");
    }
}
