//! Log file setup.
//!
//! All logging goes through `tracing`. The subscriber writes plain text to the
//! configured log file, which stays open for the life of the process; stdout
//! belongs to the renderer.

use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing::Level;

use crate::config::Config;

/// Open (append, create) the log file and install the global subscriber.
///
/// Debug mode logs at `DEBUG`, otherwise `INFO`.
pub fn init(config: &Config) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
        .with_context(|| format!("error opening log file {}", config.log_path.display()))?;

    let level = if config.debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(level)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {e}"))?;

    Ok(())
}
