//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, default paths)
//! - CLI option types and parsing
//! - Library configuration for the feature extractor

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Cli, Command, ExtractorConfig, LogFormat, LogLevel, NetworkArgs};
