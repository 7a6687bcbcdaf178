//! Diagnostic logging through `tracing`, written to stderr.

use crate::conf::ConfigurationModel;
use crate::error::{ShellError, ShellResult};
use std::env;
use std::io::{self, IsTerminal};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive. Overrides the config file.
pub const LOG_ENV: &str = "LSH_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global subscriber. Fails only if one is already installed.
pub fn init(config: &ConfigurationModel) -> ShellResult<()> {
    let env_value = env::var(LOG_ENV).ok();
    let filter = resolve_filter(env_value.as_deref(), config.log.filter.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init()
        .map_err(|err| ShellError::Logging(err.to_string()))
}

/// Pick the first usable directive from the environment, the config file, then the default.
fn resolve_filter(env_value: Option<&str>, configured: Option<&str>) -> EnvFilter {
    let candidates = [(LOG_ENV, env_value), ("log.filter", configured)];
    for (origin, directive) in candidates {
        let Some(directive) = directive.filter(|d| !d.trim().is_empty()) else {
            continue;
        };
        match EnvFilter::try_new(directive) {
            Ok(filter) => return filter,
            Err(err) => eprintln!("Warning: ignoring invalid {origin} filter '{directive}': {err}"),
        }
    }

    EnvFilter::new(DEFAULT_FILTER)
}
