//! Diagnostic logging setup
//!
//! Logs go to stderr so they never mix with list or JSON output on stdout.
//! The level comes from `PROMPTPAD_LOG` (any `EnvFilter` directive), falling
//! back to `warn`. `--debug` overrides both with `debug`.

use anyhow::Result;
use std::env;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "PROMPTPAD_LOG";
const DEFAULT_LEVEL: &str = "warn";

/// Filter directive for the subscriber
pub fn filter_directive(debug: bool, from_env: Option<String>) -> String {
    if debug {
        return "debug".to_string();
    }
    from_env
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(debug_flag: bool) -> Result<()> {
    let directive = filter_directive(debug_flag, env::var(LOG_ENV).ok());
    let env_filter = EnvFilter::try_new(&directive)
        .or_else(|_| EnvFilter::try_new(DEFAULT_LEVEL))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    debug!(level = %directive, "logging initialized");
    Ok(())
}
