// src/log.rs
//! Logging setup. Call sites use the `logf!`/`logd!`/`logw!`/`loge!` macros
//! (see `macros.rs`); this module installs the `tracing` subscriber behind them.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::Uptime;

use crate::config::consts::{LOG_FILTER_DEFAULT, LOG_FILTER_VERBOSE};
use crate::error::Result;

#[doc(hidden)]
pub use tracing;

/// Install the global subscriber.
///
/// * `log_file` – append log lines to this file instead of stderr (no ANSI colours)
/// * `verbose`  – debug level for this crate
///
/// `RUST_LOG` wins over both defaults when set. Safe to call more than once;
/// later calls are ignored.
pub fn init(log_file: Option<&Path>, verbose: bool) -> Result<()> {
    let fallback = if verbose { LOG_FILTER_VERBOSE } else { LOG_FILTER_DEFAULT };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(Uptime::default())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init();
        }
        None => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_timer(Uptime::default())
                .with_writer(std::io::stderr)
                .try_init();
        }
    }
    Ok(())
}
