//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, model, schema, WHOIS)
//! - Fetch failure and rule failure categories
//! - Transport error categorization
//!
//! Only initialization errors reach callers. Everything that happens while
//! extracting features is recovered locally and turned into fallback values.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, is_text_content_type};
pub use types::{
    FetchFailure, InitializationError, ModelError, RuleError, SchemaError, WhoisError,
};
