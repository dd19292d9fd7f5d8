//! phishing_detector library: heuristic phishing features for URLs
//!
//! This library turns a URL into the 30 signed indicators (each -1, 0 or 1) a
//! pre-trained phishing classifier expects: lexical properties of the URL,
//! facts about its host, its WHOIS registration dates and the content of the
//! page it serves. A thin verdict layer and web front end sit on top.
//!
//! # Example
//!
//! ```no_run
//! use phishing_detector::{ExtractorConfig, FeatureExtractor, FeatureSchema};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let extractor = FeatureExtractor::from_config(&ExtractorConfig::default(), FeatureSchema::default())?;
//! let features = extractor.extract("http://secure-login.example.com/verify").await;
//! println!("{}", serde_json::to_string_pretty(&features)?);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod domain;
pub mod error_handling;
pub mod features;
pub mod fetch;
pub mod initialization;
mod parse;
pub mod server;
mod utils;
pub mod verdict;
pub mod whois;

// Re-export public API
pub use config::{Cli, Command, ExtractorConfig, LogFormat, LogLevel};
pub use features::{FeatureExtractor, FeatureName, FeatureSchema, FeatureVector};
pub use fetch::{FetchOutcome, HttpFetcher, PageFetcher, PageResponse};
pub use parse::PageDocument;
pub use verdict::{assess, Assessment, Classifier, LinearModel, Verdict};
pub use whois::{TcpWhoisClient, WhoisLookup, WhoisRecord};
