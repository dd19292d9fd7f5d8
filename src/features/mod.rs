//! URL feature extraction.
//!
//! This module turns a raw URL into the 30-value phishing indicator vector a
//! classifier expects. It provides:
//! - [`FeatureName`] - The canonical feature names
//! - [`FeatureSchema`] / [`FeatureVector`] - Output schema and reindexing
//! - [`ExtractionContext`] - Everything rules can look at for one URL
//! - [`RULES`] - The rule table
//! - [`FeatureExtractor`] - Fetch, WHOIS, evaluate, reindex
//!
//! Extraction never fails: unreachable pages, missing WHOIS data and malformed
//! URLs only push the affected rules to their fallback values.

mod context;
mod names;
mod rules;
mod schema;

use chrono::Utc;
use log::debug;

use crate::config::ExtractorConfig;
use crate::domain::{is_ip_literal, parse_url, split_host};
use crate::error_handling::InitializationError;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::whois::{TcpWhoisClient, WhoisLookup, WhoisRecord};

pub use context::ExtractionContext;
pub use names::FeatureName;
pub use rules::{evaluate_rules, Evaluator, Rule, RULES};
pub use schema::{FeatureSchema, FeatureVector};

/// Extracts feature vectors for URLs.
///
/// Holds only read-only state, so one extractor can serve concurrent requests.
#[derive(Debug, Clone)]
pub struct FeatureExtractor<F, W> {
    fetcher: F,
    whois: W,
    schema: FeatureSchema,
}

impl FeatureExtractor<HttpFetcher, TcpWhoisClient> {
    /// Builds an extractor backed by the real HTTP and WHOIS clients.
    ///
    /// # Errors
    ///
    /// Returns `InitializationError::HttpClientError` if the HTTP client cannot be built.
    pub fn from_config(
        config: &ExtractorConfig,
        schema: FeatureSchema,
    ) -> Result<Self, InitializationError> {
        Ok(Self::new(
            HttpFetcher::new(config)?,
            TcpWhoisClient::new(config),
            schema,
        ))
    }
}

impl<F, W> FeatureExtractor<F, W>
where
    F: PageFetcher,
    W: WhoisLookup,
{
    /// Builds an extractor from explicit capabilities.
    pub fn new(fetcher: F, whois: W, schema: FeatureSchema) -> Self {
        Self {
            fetcher,
            whois,
            schema,
        }
    }

    /// The schema output vectors are reindexed to.
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Extracts the feature vector for `url`.
    ///
    /// Performs at most one page fetch and one WHOIS query. The returned vector
    /// always covers exactly the extractor's schema.
    pub async fn extract(&self, url: &str) -> FeatureVector {
        let fetch = self.fetcher.fetch(url).await;
        let whois = self.lookup_whois(url).await;

        // The parsed document is not Send; everything from here on is synchronous
        let ctx = ExtractionContext::new(url, fetch, whois, Utc::now());
        extract_from_context(&ctx, &self.schema)
    }

    async fn lookup_whois(&self, url: &str) -> Option<WhoisRecord> {
        let host = parse_url(url).host;
        if host.is_empty() || is_ip_literal(&host) {
            debug!("Skipping WHOIS for '{}': no registrable host", url);
            return None;
        }
        let registrable = split_host(&host).registrable();
        if registrable.is_empty() {
            return None;
        }
        self.whois.lookup(&registrable).await
    }
}

/// Evaluates the rules against an already-built context.
///
/// Useful when the network results are obtained elsewhere.
pub fn extract_from_context(ctx: &ExtractionContext, schema: &FeatureSchema) -> FeatureVector {
    schema.reindex(&evaluate_rules(&RULES, ctx))
}
