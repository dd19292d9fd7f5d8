//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including timeouts, size limits, and default file locations.

/// Page fetch timeout in seconds
/// Kept short: a slow page only costs the content-based features, not the verdict
pub const FETCH_TIMEOUT_SECS: u64 = 4;
/// TCP connection timeout in seconds (bounded by the fetch timeout)
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 3;
/// WHOIS lookup timeout in seconds (one deadline for the whole referral chain)
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for HTTP requests.
///
/// Uses a generic Chrome-like string so phishing kits that cloak content from
/// obvious bots still serve their page. Users can override this via the
/// `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

// Response and body size limits
/// Maximum response body size in bytes (2MB)
/// Larger bodies mark the fetch unavailable to prevent memory exhaustion
pub const MAX_RESPONSE_BODY_SIZE: usize = 2 * 1024 * 1024;

/// Maximum WHOIS response size in bytes
pub const MAX_WHOIS_RESPONSE_SIZE: usize = 256 * 1024;

// Redirect handling
/// Maximum number of redirect hops to follow
/// Prevents infinite redirect loops and excessive request chains
pub const MAX_REDIRECT_HOPS: usize = 10;

// WHOIS
/// Well-known WHOIS port
pub const WHOIS_PORT: u16 = 43;
/// Bootstrap server that refers each TLD to its registry WHOIS server
pub const IANA_WHOIS_SERVER: &str = "whois.iana.org";

// Files
/// Training table whose header row carries the canonical feature order
pub const DEFAULT_SCHEMA_PATH: &str = "X_train.csv";
/// Serialized classifier used by the web form
pub const DEFAULT_MODEL_PATH: &str = "model.json";

// Web surface
/// Default port for the verdict form server
pub const DEFAULT_SERVER_PORT: u16 = 5000;
/// Default bind address for the verdict form server
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";
