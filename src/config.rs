//! Process configuration.
//!
//! Resolved once at startup from environment variables, then the command line
//! on top. Simulation constants (grid size, move cap, intervals, scene) are not
//! configurable; see [`crate::types`].
//!
//! # Environment Variables
//!
//! - `ASCII_BLAST_DEBUG`: `1` or `true` disables rendering (same as `--debug`)
//! - `ASCII_BLAST_LOG_PATH`: log file path (default: `log.out`)

use std::path::PathBuf;

use anyhow::{bail, Result};

/// Default log file, relative to the working directory
pub const DEFAULT_LOG_PATH: &str = "log.out";

pub const USAGE: &str = "\
Usage: ascii-blast [OPTIONS]

Options:
  -d, --debug   disable rendering; log every tick instead
  -h, --help    print this help

Environment:
  ASCII_BLAST_DEBUG      1 or true to enable debug mode
  ASCII_BLAST_LOG_PATH   log file path (default: log.out)
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Skip the terminal renderer entirely
    pub debug: bool,
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
        }
    }
}

/// What the command line asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Run(Config),
    Help,
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let debug = lookup("ASCII_BLAST_DEBUG")
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        let log_path = lookup("ASCII_BLAST_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_PATH));

        Self { debug, log_path }
    }

    /// Apply command-line flags on top of `self`.
    ///
    /// Unknown flags and positional arguments are rejected.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Invocation>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for arg in args {
            match arg.as_ref() {
                "-d" | "-debug" | "--debug" => self.debug = true,
                "-h" | "-help" | "--help" => return Ok(Invocation::Help),
                other => bail!("unrecognized argument `{other}`\n\n{USAGE}"),
            }
        }
        Ok(Invocation::Run(self))
    }

    /// Environment, then the process arguments.
    pub fn load() -> Result<Invocation> {
        Self::from_env().with_args(std::env::args().skip(1))
    }
}
