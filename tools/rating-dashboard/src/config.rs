//! Command-line configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

/// Base URL used when `--api-url` is not given.
pub const DEFAULT_API_URL: &str = "http://localhost:7060";

/// Employee Performance Dashboard
#[derive(Parser, Debug, Clone)]
#[command(name = "rating-dashboard")]
#[command(author, version, about = "TUI dashboard for employee performance ratings", long_about = None)]
pub struct Args {
    /// Base URL of the rating API
    #[arg(short, long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value = "5")]
    pub timeout_secs: u64,

    /// Connect timeout in seconds
    #[arg(long, default_value = "2")]
    pub connect_timeout_secs: u64,

    /// Where log output goes while the TUI owns the terminal
    #[arg(long, default_value = "rating-dashboard.log")]
    pub log_file: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Fetch once, print a plain-text report and exit
    #[arg(long)]
    pub snapshot: bool,

    /// Run with built-in sample data (no API connection required)
    #[arg(long)]
    pub demo: bool,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Timeout must be at least one second")]
    ZeroTimeout,
    #[error("Failed to initialize logging: {0}")]
    Logging(String),
}

/// How the binary presents the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Snapshot,
}

/// Validated runtime configuration.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub api_url: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub log_file: PathBuf,
    pub log_level: String,
    pub mode: RunMode,
    pub demo: bool,
}

impl DashboardConfig {
    pub fn from_args(args: Args) -> Result<Self, ConfigError> {
        let api_url = normalize_api_url(&args.api_url)?;
        if args.timeout_secs == 0 || args.connect_timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(args.timeout_secs),
            connect_timeout: Duration::from_secs(args.connect_timeout_secs),
            log_file: args.log_file,
            log_level: args.log_level,
            mode: if args.snapshot {
                RunMode::Snapshot
            } else {
                RunMode::Interactive
            },
            demo: args.demo,
        })
    }
}

/// Check the scheme and strip trailing slashes.
fn normalize_api_url(raw: &str) -> Result<String, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: reason.to_string(),
    };

    let url = reqwest::Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(invalid(&format!("unsupported scheme {}", other))),
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }

    Ok(url.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<DashboardConfig, ConfigError> {
        let mut full = vec!["rating-dashboard"];
        full.extend_from_slice(argv);
        DashboardConfig::from_args(Args::try_parse_from(full).unwrap())
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.api_url, "http://localhost:7060");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
        assert_eq!(config.mode, RunMode::Interactive);
        assert!(!config.demo);
    }

    #[test]
    fn test_trailing_slash_stripped() {
        let config = parse(&["--api-url", "https://hr.example.com/"]).unwrap();
        assert_eq!(config.api_url, "https://hr.example.com");
        let config = parse(&["-a", "http://10.0.0.5:7060/base/"]).unwrap();
        assert_eq!(config.api_url, "http://10.0.0.5:7060/base");
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(
            parse(&["--api-url", "not a url"]),
            Err(ConfigError::InvalidUrl { .. })
        ));
        assert!(matches!(
            parse(&["--api-url", "ftp://files.example.com"]),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_snapshot_and_zero_timeout() {
        assert_eq!(parse(&["--snapshot"]).unwrap().mode, RunMode::Snapshot);
        assert!(matches!(
            parse(&["--timeout-secs", "0"]),
            Err(ConfigError::ZeroTimeout)
        ));
    }
}
