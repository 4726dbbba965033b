//! Tracing subscriber setup.
//!
//! The interactive UI owns stdout, so log lines go to a file there; the
//! snapshot mode logs to stderr next to the report on stdout.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

/// Where log output is written.
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// Build the env filter: `RUST_LOG` wins, `default_level` otherwise.
pub fn env_filter(default_level: &str) -> Result<EnvFilter, ConfigError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| ConfigError::Logging(e.to_string()))
}

/// Install the global subscriber.
pub fn init(default_level: &str, target: LogTarget<'_>) -> Result<(), ConfigError> {
    let filter = env_filter(default_level)?;

    let result = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| ConfigError::Logging(format!("{}: {}", path.display(), e)))?;

            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))?;

    tracing::debug!("logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_accepts_level_names() {
        assert!(env_filter("debug").is_ok());
        assert!(env_filter("rating_dashboard=trace,reqwest=warn").is_ok());
    }
}
