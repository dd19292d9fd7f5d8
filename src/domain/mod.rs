//! URL parsing and domain decomposition.
//!
//! This module splits an untrusted URL string into the components the feature
//! rules look at, and decomposes its host with the Public Suffix List (PSL).
//!
//! Key functions:
//! - `parse_url()` - Splits a URL into scheme, host, port and path; never fails
//! - `split_host()` - Splits a host into subdomain, domain label and public suffix
//! - `is_ip_literal()` - Detects IPv4/IPv6 literal hosts

use std::net::{Ipv4Addr, Ipv6Addr};

use url::Url;

/// Components of a URL as seen by the feature rules.
///
/// Malformed input yields empty components rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUrl {
    /// The URL exactly as supplied
    pub raw: String,
    /// Scheme without `://` (empty when the input has none)
    pub scheme: String,
    /// Host without port or brackets, lowercased
    pub host: String,
    /// Explicit non-default port, if any
    pub port: Option<u16>,
    /// Path component (may be empty)
    pub path: String,
}

/// Host decomposition into subdomain, domain label and public suffix.
///
/// For `a.b.example.co.uk`: subdomain `a.b`, domain `example`, suffix `co.uk`.
/// IP literals and hosts without a known suffix keep the whole host as
/// `domain` with an empty subdomain and suffix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainParts {
    /// Labels left of the registrable domain, joined by dots
    pub subdomain: String,
    /// The label directly left of the public suffix
    pub domain: String,
    /// The public suffix (e.g. `com`, `co.uk`)
    pub suffix: String,
}

impl DomainParts {
    /// The registrable domain (`domain.suffix`), or just `domain` without a suffix.
    pub fn registrable(&self) -> String {
        if self.suffix.is_empty() {
            self.domain.clone()
        } else if self.domain.is_empty() {
            String::new()
        } else {
            format!("{}.{}", self.domain, self.suffix)
        }
    }
}

/// Parses a URL into its components.
///
/// Inputs with a scheme go through `url::Url`. Scheme-less inputs such as
/// `example.com/login` take their host from the text before the first `/`,
/// `?` or `#`. Anything else yields empty components.
pub fn parse_url(raw: &str) -> ParsedUrl {
    match Url::parse(raw) {
        // "example.com:8080/x" parses with scheme "example.com"
        Ok(url) if url.scheme().contains('.') => parse_schemeless(raw),
        Ok(url) => {
            let host = url
                .host_str()
                .unwrap_or("")
                .trim_start_matches('[')
                .trim_end_matches(']')
                .to_string();
            ParsedUrl {
                raw: raw.to_string(),
                scheme: url.scheme().to_string(),
                host,
                port: url.port(),
                path: url.path().to_string(),
            }
        }
        Err(url::ParseError::RelativeUrlWithoutBase) => parse_schemeless(raw),
        Err(e) => {
            log::debug!("Failed to parse URL '{}': {}", raw, e);
            ParsedUrl {
                raw: raw.to_string(),
                ..Default::default()
            }
        }
    }
}

fn parse_schemeless(raw: &str) -> ParsedUrl {
    let trimmed = raw.trim();
    let end = trimmed.find(['/', '?', '#']).unwrap_or(trimmed.len());
    let (authority, rest) = trimmed.split_at(end);

    // Drop userinfo, then an explicit port
    let host_port = authority.rsplit('@').next().unwrap_or(authority);
    let (host, port) = match host_port.rsplit_once(':') {
        Some((host, port)) if !host.contains(':') => (host, port.parse::<u16>().ok()),
        _ => (host_port, None),
    };

    let path = rest.split(['?', '#']).next().unwrap_or("").to_string();

    ParsedUrl {
        raw: raw.to_string(),
        scheme: String::new(),
        host: host.to_ascii_lowercase(),
        port,
        path,
    }
}

/// Returns `true` if the host is an IPv4 or IPv6 literal.
pub fn is_ip_literal(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    !host.is_empty() && (host.parse::<Ipv4Addr>().is_ok() || host.parse::<Ipv6Addr>().is_ok())
}

/// Splits a host into subdomain, domain label and public suffix using the PSL.
pub fn split_host(host: &str) -> DomainParts {
    let host = host.trim_end_matches('.');
    if host.is_empty() {
        return DomainParts::default();
    }

    if is_ip_literal(host) {
        return DomainParts {
            domain: host.to_string(),
            ..Default::default()
        };
    }

    let Some(registrable) = psl::domain_str(host) else {
        // No registrable domain (e.g. "localhost" or a bare suffix)
        return DomainParts {
            domain: host.to_string(),
            ..Default::default()
        };
    };

    let suffix = psl::suffix_str(registrable).unwrap_or("");
    let domain = registrable
        .strip_suffix(suffix)
        .and_then(|d| d.strip_suffix('.'))
        .unwrap_or(registrable);
    let subdomain = host
        .strip_suffix(registrable)
        .map(|s| s.trim_end_matches('.'))
        .unwrap_or("");

    DomainParts {
        subdomain: subdomain.to_string(),
        domain: domain.to_string(),
        suffix: suffix.to_string(),
    }
}
