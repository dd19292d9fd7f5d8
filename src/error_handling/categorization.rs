//! Error categorization.
//!
//! This module maps transport errors onto the fetch failure categories that are
//! logged when a page is marked unavailable.

use super::types::FetchFailure;

/// Categorizes a `reqwest::Error` into a `FetchFailure`.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `FetchFailure` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> FetchFailure {
    // Check reqwest error types
    if error.is_builder() {
        FetchFailure::InvalidUrl
    } else if error.is_timeout() {
        FetchFailure::Timeout
    } else if error.is_redirect() {
        FetchFailure::Redirect
    } else if error.is_connect() {
        FetchFailure::Connect
    } else if error.is_body() {
        FetchFailure::Body
    } else if error.is_decode() {
        FetchFailure::Decode
    } else {
        FetchFailure::Other
    }
}

/// Returns `true` if a `Content-Type` value denotes a textual document.
///
/// Pages served as images, archives or other binary formats are not scored
/// for content features.
pub fn is_text_content_type(content_type: &str) -> bool {
    let ct = content_type.trim().to_ascii_lowercase();
    ct.starts_with("text/")
        || ct.contains("html")
        || ct.contains("xml")
        || ct.contains("json")
        || ct.contains("javascript")
}
