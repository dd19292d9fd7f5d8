//! Per-URL extraction context shared by all rules.

use chrono::{DateTime, Utc};

use crate::domain::{parse_url, split_host, DomainParts, ParsedUrl};
use crate::error_handling::RuleError;
use crate::fetch::{FetchOutcome, PageResponse};
use crate::parse::PageDocument;
use crate::whois::WhoisRecord;

/// Everything the rules may look at for one URL.
///
/// Built once after all network work is done and then only read. Holds a
/// parsed HTML document, so it is not `Send` and must not live across an
/// `.await`.
#[derive(Debug)]
pub struct ExtractionContext {
    /// The URL as parsed
    pub url: ParsedUrl,
    /// PSL decomposition of the host
    pub domain: DomainParts,
    /// Result of the page fetch
    pub fetch: FetchOutcome,
    /// Parsed page, absent when the fetch failed or the body has no markup
    pub document: Option<PageDocument>,
    /// WHOIS record of the registrable domain
    pub whois: Option<WhoisRecord>,
    /// Reference time for the date-based rules
    pub now: DateTime<Utc>,
}

impl ExtractionContext {
    /// Assembles the context from the raw URL and the network results.
    pub fn new(
        raw_url: &str,
        fetch: FetchOutcome,
        whois: Option<WhoisRecord>,
        now: DateTime<Utc>,
    ) -> Self {
        let url = parse_url(raw_url);
        let domain = split_host(&url.host);
        let document = fetch
            .response()
            .map(|page| PageDocument::parse(&page.body));
        Self {
            url,
            domain,
            fetch,
            document,
            whois,
            now,
        }
    }

    /// The full URL text.
    pub fn raw(&self) -> &str {
        &self.url.raw
    }

    /// The URL host without port.
    pub fn host(&self) -> &str {
        &self.url.host
    }

    pub(crate) fn require_document(&self) -> Result<&PageDocument, RuleError> {
        self.document
            .as_ref()
            .ok_or(RuleError::MissingContext("document"))
    }

    pub(crate) fn require_response(&self) -> Result<&PageResponse, RuleError> {
        self.fetch
            .response()
            .ok_or(RuleError::MissingContext("response"))
    }

    pub(crate) fn require_whois(&self) -> Result<&WhoisRecord, RuleError> {
        self.whois
            .as_ref()
            .ok_or(RuleError::MissingContext("whois record"))
    }
}
