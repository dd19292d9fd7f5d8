//! Best-effort page fetching.
//!
//! A fetch either yields a [`PageResponse`] or is marked unavailable with a
//! [`FetchFailure`], never both, and never an error for the caller. The
//! [`PageFetcher`] trait is the seam that lets tests substitute a
//! deterministic fake for the network.

mod redirects;

use std::future::Future;

use log::debug;

use crate::config::ExtractorConfig;
use crate::error_handling::{
    categorize_reqwest_error, is_text_content_type, FetchFailure, InitializationError,
};
use crate::initialization::init_client;

pub use redirects::follow_redirects;

/// A fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageResponse {
    /// Final HTTP status code
    pub status: u16,
    /// URL of the final response after redirects
    pub final_url: String,
    /// URLs that answered with a redirect, in order
    pub history: Vec<String>,
    /// Response body as text
    pub body: String,
}

/// Result of a page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The page was fetched
    Fetched(PageResponse),
    /// The page could not be fetched
    Unavailable(FetchFailure),
}

impl FetchOutcome {
    /// The fetched response, if any.
    pub fn response(&self) -> Option<&PageResponse> {
        match self {
            FetchOutcome::Fetched(resp) => Some(resp),
            FetchOutcome::Unavailable(_) => None,
        }
    }

    /// `true` if the page was fetched.
    pub fn is_fetched(&self) -> bool {
        matches!(self, FetchOutcome::Fetched(_))
    }
}

/// Capability to fetch a URL.
///
/// Implementations must not fail: every problem is reported as
/// [`FetchOutcome::Unavailable`].
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` once (following redirects) and returns the outcome.
    fn fetch(&self, url: &str) -> impl Future<Output = FetchOutcome> + Send;
}

/// [`PageFetcher`] backed by `reqwest`.
///
/// Redirects are followed manually so the history can be recorded; the body is
/// read with a size cap and only text content types are accepted.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    max_redirect_hops: usize,
    max_body_size: usize,
}

impl HttpFetcher {
    /// Creates a fetcher from the extractor configuration.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the client cannot be built.
    pub fn new(config: &ExtractorConfig) -> Result<Self, InitializationError> {
        Ok(Self {
            client: init_client(config)?,
            max_redirect_hops: config.max_redirect_hops,
            max_body_size: config.max_body_size,
        })
    }

    async fn fetch_page(&self, url: &str) -> Result<PageResponse, FetchFailure> {
        let (response, history) = follow_redirects(&self.client, url, self.max_redirect_hops).await?;
        let final_url = response.url().to_string();
        let status = response.status().as_u16();

        // A missing Content-Type is tolerated; some servers don't send it
        if let Some(ct) = response.headers().get(reqwest::header::CONTENT_TYPE) {
            let ct = ct.to_str().unwrap_or("");
            if !is_text_content_type(ct) {
                debug!("Skipping body of {} - non-text content-type: {}", final_url, ct);
                return Err(FetchFailure::NonTextContent);
            }
        }

        let body = read_body_with_limit(response, self.max_body_size).await?;

        Ok(PageResponse {
            status,
            final_url,
            history,
            body,
        })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        match self.fetch_page(url).await {
            Ok(page) => {
                debug!(
                    "Fetched {} (status {}, {} redirects, {} bytes)",
                    url,
                    page.status,
                    page.history.len(),
                    page.body.len()
                );
                FetchOutcome::Fetched(page)
            }
            Err(failure) => {
                debug!("Fetch of {} unavailable: {}", url, failure);
                FetchOutcome::Unavailable(failure)
            }
        }
    }
}

/// Reads a response body as text, giving up once it exceeds `max_size` bytes.
async fn read_body_with_limit(
    mut response: reqwest::Response,
    max_size: usize,
) -> Result<String, FetchFailure> {
    let mut buf: Vec<u8> = Vec::with_capacity(max_size.min(16 * 1024));

    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| categorize_reqwest_error(&e))?
    {
        if buf.len() + chunk.len() > max_size {
            debug!(
                "Body exceeds {}KB limit for {} (aborting at {} bytes)",
                max_size / 1024,
                response.url(),
                buf.len() + chunk.len()
            );
            return Err(FetchFailure::BodyTooLarge);
        }
        buf.extend_from_slice(&chunk);
    }

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
