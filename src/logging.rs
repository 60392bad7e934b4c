//! Logging bootstrap.
//!
//! Diagnostics go to stderr through `flexi_logger` so stdout stays clean
//! for paths and JSON. Log lines are `event=... key=value` metadata; note
//! content is never logged.
//!
//! # Invariants
//! - Initialization happens at most once per process.
//! - A second call is a no-op and keeps the first spec.

use flexi_logger::{LogSpecification, Logger, LoggerHandle};
use log::debug;
use once_cell::sync::OnceCell;

use crate::constants as C;
use crate::error::{SyncError, SyncResult};

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Log level for a `-v` count, when no explicit spec is given
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => C::DEFAULT_LOG_LEVEL,
        1 => "info",
        _ => "debug",
    }
}

/// Log spec from the environment: `JOURNAL_SYNC_LOG`, then `RUST_LOG`
pub fn env_spec() -> Option<String> {
    pick_env_spec(
        std::env::var(C::ENV_LOG).ok(),
        std::env::var(C::ENV_RUST_LOG).ok(),
    )
}

fn pick_env_spec(own: Option<String>, rust_log: Option<String>) -> Option<String> {
    own.into_iter()
        .chain(rust_log)
        .find(|spec| !spec.trim().is_empty())
}

/// Pick the effective log spec.
///
/// The environment spec wins, then `-v` flags, then the config file, then
/// the default.
pub fn resolve_spec(env_spec: Option<&str>, verbose: u8, configured: Option<&str>) -> String {
    if let Some(spec) = env_spec.filter(|s| !s.trim().is_empty()) {
        return spec.to_string();
    }
    if verbose > 0 {
        return level_for_verbosity(verbose).to_string();
    }
    configured
        .filter(|s| !s.trim().is_empty())
        .unwrap_or(C::DEFAULT_LOG_LEVEL)
        .to_string()
}

/// Start the stderr logger with a flexi_logger spec (`warn`, `journal_sync=debug`)
pub fn init_logging(spec: &str) -> SyncResult<()> {
    if LOGGER.get().is_some() {
        return Ok(());
    }

    let spec = LogSpecification::parse(spec)
        .map_err(|e| SyncError::Logging(format!("invalid log spec `{}`: {}", spec, e)))?;

    let handle = Logger::with(spec)
        .log_to_stderr()
        .format(flexi_logger::default_format)
        .start()
        .map_err(|e| SyncError::Logging(e.to_string()))?;

    // Lost race: keep the handle that won
    let _ = LOGGER.set(handle);

    debug!(
        "event=logging_init module=logging status=ok version={}",
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}
