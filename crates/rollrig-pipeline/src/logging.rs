//! Subscriber setup for hosts that embed rollrig (`logging` feature).
//!
//! The libraries only emit `tracing` events. A host that has no subscriber of
//! its own can install one here. Filters are scoped to the rollrig crates, so
//! the host's own events are not affected.

use std::fmt;
use std::str::FromStr;

use rollrig_config::ConfigError;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Variable read by [`init_logging_from_env`]
pub const LOG_ENV: &str = "ROLLRIG_LOG";

const TARGETS: [&str; 2] = ["rollrig_config", "rollrig_pipeline"];

/// How much of the config load and hand-off is reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Off,
    /// Warnings only, e.g. a `moduleName` the format ignores
    Quiet,
    /// Config loaded and pipeline handed to the bundler
    #[default]
    Normal,
    /// Every resolved path and plugin record
    Verbose,
}

impl Verbosity {
    fn level(self) -> &'static str {
        match self {
            Verbosity::Off => "off",
            Verbosity::Quiet => "warn",
            Verbosity::Normal => "info",
            Verbosity::Verbose => "debug",
        }
    }

    /// Filter directive covering the rollrig crates only
    pub fn directive(self) -> String {
        let level = self.level();
        TARGETS
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl FromStr for Verbosity {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" | "silent" => Ok(Verbosity::Off),
            "quiet" | "warn" => Ok(Verbosity::Quiet),
            "normal" | "info" => Ok(Verbosity::Normal),
            "verbose" | "debug" => Ok(Verbosity::Verbose),
            other => Err(ConfigError::InvalidValue {
                field: LOG_ENV.to_string(),
                hint: Some(format!(
                    "'{other}' is not a verbosity; use off, quiet, normal or verbose"
                )),
            }),
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verbosity::Off => "off",
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
        };
        f.write_str(name)
    }
}

/// Install a compact stderr subscriber at `verbosity`.
///
/// Returns `false` when the process already has a global subscriber, in
/// which case nothing is changed.
///
/// # Example
///
/// ```rust,no_run
/// use rollrig_pipeline::logging::{Verbosity, init_logging};
///
/// init_logging(Verbosity::Verbose);
/// ```
pub fn init_logging(verbosity: Verbosity) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(verbosity.directive()))
        .with_writer(std::io::stderr)
        .compact()
        .without_time()
        .try_init()
        .is_ok()
}

/// Read [`LOG_ENV`], defaulting to [`Verbosity::Normal`] when unset or empty
pub fn verbosity_from_env() -> Result<Verbosity> {
    match std::env::var(LOG_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(value.parse()?),
        _ => Ok(Verbosity::default()),
    }
}

/// [`init_logging`] at the verbosity named by `ROLLRIG_LOG`
pub fn init_logging_from_env() -> Result<bool> {
    Ok(init_logging(verbosity_from_env()?))
}
