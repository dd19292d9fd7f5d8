//! HTTP redirect chain following.
//!
//! This module follows redirect chains manually so the full path from the
//! initial URL to the final destination is recorded.

use reqwest::Url;

use crate::error_handling::{categorize_reqwest_error, FetchFailure};

/// Follows redirects from `start_url` and returns the final response with the
/// redirect history.
///
/// # Arguments
///
/// * `client` - HTTP client with redirects disabled (for manual tracking)
/// * `start_url` - The initial URL to start from
/// * `max_hops` - Maximum number of redirects to follow
///
/// # Returns
///
/// A tuple of (final_response, history) where `history` lists every URL that
/// answered with a redirect, in order. A page served without redirects has an
/// empty history.
///
/// # Errors
///
/// Returns a `FetchFailure` if the URL is invalid, a request fails, a
/// `Location` header cannot be resolved, or more than `max_hops` redirects
/// are encountered.
pub async fn follow_redirects(
    client: &reqwest::Client,
    start_url: &str,
    max_hops: usize,
) -> Result<(reqwest::Response, Vec<String>), FetchFailure> {
    let mut current = Url::parse(start_url).map_err(|_| FetchFailure::InvalidUrl)?;
    let mut history: Vec<String> = Vec::new();

    loop {
        let resp = client
            .get(current.clone())
            .send()
            .await
            .map_err(|e| categorize_reqwest_error(&e))?;

        // Only follow redirects if the status code indicates a redirect AND there's a Location header
        let status_code = resp.status().as_u16();
        if !matches!(status_code, 301 | 302 | 303 | 307 | 308) {
            return Ok((resp, history));
        }

        let Some(loc) = resp.headers().get(reqwest::header::LOCATION) else {
            log::warn!(
                "Redirect status {} for {} but no Location header",
                status_code,
                current
            );
            return Ok((resp, history));
        };

        if history.len() >= max_hops {
            log::debug!("Giving up on {} after {} redirects", start_url, max_hops);
            return Err(FetchFailure::Redirect);
        }

        let loc = loc.to_str().map_err(|_| FetchFailure::Redirect)?;
        let next = current.join(loc).map_err(|_| FetchFailure::Redirect)?;
        log::debug!("Redirect {} -> {}", current, next);
        history.push(current.to_string());
        current = next;
    }
}
