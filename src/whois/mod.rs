//! WHOIS domain lookup over TCP port 43.
//!
//! The query starts at the IANA bootstrap server, which refers each TLD to its
//! registry server. Only the registry's answer is parsed: the bootstrap answer
//! describes the TLD, not the domain. The whole lookup is bounded by the
//! configured timeout. Failures are reported to callers as an absent record,
//! never as an error.

mod parse;
mod types;

use std::future::Future;
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::{timeout_at, Instant};

use crate::config::{ExtractorConfig, IANA_WHOIS_SERVER, MAX_WHOIS_RESPONSE_SIZE, WHOIS_PORT};
use crate::domain::is_ip_literal;
use crate::error_handling::WhoisError;

pub use parse::{find_referral, is_bootstrap_answer, parse_whois_text};
pub use types::WhoisRecord;

/// Maximum servers queried for one domain (bootstrap, then registry)
const MAX_WHOIS_SERVERS: usize = 2;

/// Capability to look up the registration record of a domain.
///
/// Implementations must not fail: every problem is reported as `None`.
pub trait WhoisLookup: Send + Sync {
    /// Looks up `domain` (a registrable domain such as `example.com`).
    fn lookup(&self, domain: &str) -> impl Future<Output = Option<WhoisRecord>> + Send;
}

/// [`WhoisLookup`] speaking the WHOIS protocol directly.
#[derive(Debug, Clone)]
pub struct TcpWhoisClient {
    bootstrap_server: String,
    port: u16,
    timeout: Duration,
}

impl TcpWhoisClient {
    /// Creates a client that starts at the IANA server on port 43.
    pub fn new(config: &ExtractorConfig) -> Self {
        Self {
            bootstrap_server: IANA_WHOIS_SERVER.to_string(),
            port: WHOIS_PORT,
            timeout: Duration::from_secs(config.whois_timeout_seconds),
        }
    }

    /// Creates a client with an explicit bootstrap server, port and timeout.
    ///
    /// Referrals are queried on the same port.
    pub fn with_server(bootstrap_server: impl Into<String>, port: u16, timeout: Duration) -> Self {
        Self {
            bootstrap_server: bootstrap_server.into(),
            port,
            timeout,
        }
    }

    /// Looks up `domain`, following the bootstrap referral, and parses the
    /// registry's answer.
    ///
    /// # Errors
    ///
    /// Returns a `WhoisError` if any server in the chain cannot be queried, the
    /// deadline passes, or the final answer carries no registration date.
    pub async fn lookup_record(&self, domain: &str) -> Result<WhoisRecord, WhoisError> {
        if domain.is_empty() || is_ip_literal(domain) {
            return Err(WhoisError::NotEligible(domain.to_string()));
        }

        let deadline = Instant::now() + self.timeout;
        let mut server = self.bootstrap_server.clone();

        for hop in 0..MAX_WHOIS_SERVERS {
            let text = self.query_server(&server, domain, deadline).await?;

            if hop + 1 < MAX_WHOIS_SERVERS {
                if let Some(next) = find_referral(&text, &server) {
                    log::debug!("WHOIS {} refers {} to {}", server, domain, next);
                    server = next;
                    continue;
                }
            }

            // A TLD record from IANA says nothing about the domain itself
            if is_bootstrap_answer(&text) {
                log::debug!("WHOIS {} gave no registry for {}", server, domain);
                break;
            }

            let record = parse_whois_text(&text);
            if record.is_empty() {
                break;
            }
            return Ok(record);
        }

        Err(WhoisError::NoRecord(domain.to_string()))
    }

    /// Query a WHOIS server directly using TCP
    async fn query_server(
        &self,
        server: &str,
        domain: &str,
        deadline: Instant,
    ) -> Result<String, WhoisError> {
        log::debug!("Connecting to WHOIS server: {}:{}", server, self.port);

        let mut stream = timeout_at(deadline, TcpStream::connect((server, self.port)))
            .await
            .map_err(|_| WhoisError::Timeout(server.to_string()))??;

        stream.write_all(format!("{domain}\r\n").as_bytes()).await?;

        // Cap the read: one byte past the limit tells us the answer was truncated
        let mut buf = Vec::new();
        let mut limited = (&mut stream).take(MAX_WHOIS_RESPONSE_SIZE as u64 + 1);
        timeout_at(deadline, limited.read_to_end(&mut buf))
            .await
            .map_err(|_| WhoisError::Timeout(server.to_string()))??;

        if buf.len() > MAX_WHOIS_RESPONSE_SIZE {
            return Err(WhoisError::ResponseTooLarge(server.to_string()));
        }
        if buf.is_empty() {
            return Err(WhoisError::EmptyResponse(server.to_string()));
        }

        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

impl WhoisLookup for TcpWhoisClient {
    async fn lookup(&self, domain: &str) -> Option<WhoisRecord> {
        match self.lookup_record(domain).await {
            Ok(record) => {
                log::debug!("WHOIS lookup successful for {}", domain);
                Some(record)
            }
            Err(WhoisError::NotEligible(_)) => None,
            Err(e) => {
                log::warn!("WHOIS lookup failed for {}: {}", domain, e);
                None
            }
        }
    }
}
