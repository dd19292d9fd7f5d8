//! Utility functions.
//!
//! This module provides:
//! - CSS selector parsing with a no-match fallback
//! - Escaping and sanitization of untrusted text

pub mod sanitize;
mod selector;

pub use selector::parse_selector_with_fallback;
