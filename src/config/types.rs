//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and library configuration.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDRESS, DEFAULT_MODEL_PATH, DEFAULT_SERVER_PORT, DEFAULT_USER_AGENT,
    FETCH_TIMEOUT_SECS, MAX_REDIRECT_HOPS, MAX_RESPONSE_BODY_SIZE, WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Library configuration for the feature extractor (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use phishing_detector::ExtractorConfig;
///
/// let config = ExtractorConfig {
///     timeout_seconds: 2,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    /// Page fetch timeout in seconds
    pub timeout_seconds: u64,

    /// Per-server WHOIS timeout in seconds
    pub whois_timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Maximum redirect hops followed before the fetch is given up
    pub max_redirect_hops: usize,

    /// Maximum page body size in bytes
    pub max_body_size: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: FETCH_TIMEOUT_SECS,
            whois_timeout_seconds: WHOIS_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            max_redirect_hops: MAX_REDIRECT_HOPS,
            max_body_size: MAX_RESPONSE_BODY_SIZE,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Print the feature vector of a URL as JSON
/// phishing_detector extract https://example.com/login
///
/// # Serve the verdict form with a trained model
/// phishing_detector serve --model model.json --port 5000
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "phishing_detector",
    about = "Extracts phishing features from URLs and classifies them."
)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    pub log_format: LogFormat,

    #[command(flatten)]
    pub network: NetworkArgs,
}

/// Network options shared by every subcommand.
#[derive(Debug, Args)]
pub struct NetworkArgs {
    /// Page fetch timeout in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS, global = true)]
    pub timeout_seconds: u64,

    /// Per-server WHOIS timeout in seconds
    #[arg(long, default_value_t = WHOIS_TIMEOUT_SECS, global = true)]
    pub whois_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    pub user_agent: String,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Extract the feature vector of a single URL and print it as JSON
    Extract {
        /// URL to analyze
        url: String,

        /// Training table whose header row defines the feature order
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Serve the URL form and phishing verdict page
    Serve {
        /// Classifier model file (JSON)
        #[arg(long, default_value = DEFAULT_MODEL_PATH)]
        model: PathBuf,

        /// Training table whose header row defines the feature order
        #[arg(long)]
        schema: Option<PathBuf>,

        /// Address to bind
        #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
        bind: String,

        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_SERVER_PORT)]
        port: u16,
    },
}

impl From<&NetworkArgs> for ExtractorConfig {
    fn from(args: &NetworkArgs) -> Self {
        Self {
            timeout_seconds: args.timeout_seconds,
            whois_timeout_seconds: args.whois_timeout_seconds,
            user_agent: args.user_agent.clone(),
            ..Default::default()
        }
    }
}
