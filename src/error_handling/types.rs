//! Error type definitions.
//!
//! This module defines all error types used throughout the application. None of
//! the extraction-time errors escape the feature extractor; they are logged and
//! mapped to fallback feature values.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::{Display, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error loading the classifier model.
    #[error("Model initialization error: {0}")]
    ModelError(#[from] ModelError),
}

/// Error types for classifier model loading.
#[derive(Error, Debug)]
pub enum ModelError {
    /// The model file could not be read.
    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    /// The model file is not valid JSON for the expected layout.
    #[error("Failed to parse model file: {0}")]
    Parse(#[from] serde_json::Error),

    /// The model declares no feature weights.
    #[error("Model has no feature weights")]
    EmptyWeights,
}

/// Error types for canonical schema loading.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The training table could not be opened or its header could not be read.
    #[error("Failed to read schema header: {0}")]
    Csv(#[from] csv::Error),

    /// The header row had no usable column names.
    #[error("Schema header is empty")]
    EmptyHeader,
}

/// Error types for WHOIS lookups.
#[derive(Error, Debug)]
pub enum WhoisError {
    /// Connecting to or reading from the WHOIS server timed out.
    #[error("WHOIS query to {0} timed out")]
    Timeout(String),

    /// Network error talking to the WHOIS server.
    #[error("WHOIS I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server closed the connection without sending anything.
    #[error("Empty WHOIS response from {0}")]
    EmptyResponse(String),

    /// The server answered more than the response size cap.
    #[error("WHOIS response from {0} exceeds size limit")]
    ResponseTooLarge(String),

    /// The response carried neither a creation nor an expiration date.
    #[error("No registration record for {0}")]
    NoRecord(String),

    /// The domain cannot be looked up (empty or an IP literal).
    #[error("Domain '{0}' is not eligible for WHOIS lookup")]
    NotEligible(String),
}

/// Reasons a page fetch is marked unavailable.
///
/// A fetch failure never propagates out of the extractor; it only drives the
/// content-based rules to their fallback values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Display)]
pub enum FetchFailure {
    /// The URL could not be turned into a request (bad syntax, unsupported scheme).
    InvalidUrl,
    /// The request or body read exceeded the fetch timeout.
    Timeout,
    /// DNS resolution or TCP/TLS connection failed.
    Connect,
    /// A redirect could not be followed (bad `Location`, too many hops).
    Redirect,
    /// Reading the response body failed.
    Body,
    /// The response body could not be decoded.
    Decode,
    /// The response is not a text document.
    NonTextContent,
    /// The response body exceeded the size cap.
    BodyTooLarge,
    /// Any other request failure.
    Other,
}

/// Reasons a single rule could not compute its score.
///
/// Mapped uniformly to the rule's fallback value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// A piece of context the rule needs is absent (no document, no WHOIS record).
    #[error("missing context: {0}")]
    MissingContext(&'static str),

    /// The context is present but too sparse to score (e.g. an empty tag list).
    #[error("degenerate input: {0}")]
    Degenerate(&'static str),
}
