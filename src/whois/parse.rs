//! WHOIS response parsing.
//!
//! WHOIS output has no standard layout; fields are matched line by line with
//! best-effort patterns covering the common registry formats.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;

use super::types::WhoisRecord;

static RE_CREATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:creation date|created on|created|registered on|registration date|registration time|domain registration date|record created)\s*:\s*(.+)$",
    )
    .expect("creation date pattern is valid")
});

static RE_EXPIRATION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^\s*(?:registry expiry date|registrar registration expiration date|expiration date|expiry date|expires on|expires|expire date|paid-till|renewal date)\s*:\s*(.+)$",
    )
    .expect("expiration date pattern is valid")
});

static RE_UPDATED_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:updated date|last updated|last-updated|last modified|changed)\s*:\s*(.+)$")
        .expect("updated date pattern is valid")
});

static RE_REGISTRAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:registrar|sponsoring registrar)\s*:\s*(.+)$")
        .expect("registrar pattern is valid")
});

// IANA answers with "refer:"/"whois:"; thin registries with "Registrar WHOIS Server:"
static RE_REFERRAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*(?:refer|whois|registrar whois server)\s*:\s*(\S+)\s*$")
        .expect("referral pattern is valid")
});

static RE_IANA_SOURCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*source\s*:\s*IANA\s*$").expect("IANA source pattern is valid")
});

/// Returns true when `raw` is an IANA answer describing a TLD rather than a
/// registered domain.
pub fn is_bootstrap_answer(raw: &str) -> bool {
    RE_IANA_SOURCE.is_match(raw)
}

/// Parses raw WHOIS text into a [`WhoisRecord`].
///
/// The first match of each field wins; comment lines (`%`, `#`, `>>>`) are
/// skipped.
pub fn parse_whois_text(raw: &str) -> WhoisRecord {
    let mut record = WhoisRecord::default();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty()
            || trimmed.starts_with('%')
            || trimmed.starts_with('#')
            || trimmed.starts_with(">>>")
        {
            continue;
        }

        if record.creation_date.is_none() {
            if let Some(date) = capture(&RE_CREATION_DATE, trimmed).and_then(parse_date_string) {
                record.creation_date = Some(date);
                continue;
            }
        }
        if record.expiration_date.is_none() {
            if let Some(date) = capture(&RE_EXPIRATION_DATE, trimmed).and_then(parse_date_string) {
                record.expiration_date = Some(date);
                continue;
            }
        }
        if record.updated_date.is_none() {
            if let Some(date) = capture(&RE_UPDATED_DATE, trimmed).and_then(parse_date_string) {
                record.updated_date = Some(date);
                continue;
            }
        }
        if record.registrar.is_none() {
            if let Some(name) = capture(&RE_REGISTRAR, trimmed) {
                record.registrar = Some(name.to_string());
            }
        }
    }

    record
}

/// Finds the WHOIS server a response refers the query on to.
///
/// Returns `None` when there is no referral or it points back at `current_server`.
pub fn find_referral(raw: &str, current_server: &str) -> Option<String> {
    raw.lines()
        .filter_map(|line| capture(&RE_REFERRAL, line))
        .map(|server| {
            // Some registries write the server as a URL
            server
                .trim_start_matches("whois://")
                .trim_start_matches("rwhois://")
                .trim_end_matches('/')
                .to_ascii_lowercase()
        })
        .find(|server| !server.is_empty() && !server.eq_ignore_ascii_case(current_server))
}

fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|s| !s.is_empty())
}

/// Attempts to parse a date string in various formats
pub(crate) fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if date_str.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Formats carrying an offset
    let offset_formats = ["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%d %H:%M:%S%z", "%Y-%m-%d %H:%M:%S %z"];
    for format in &offset_formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    // Some registries append a zone name ("2020-01-01 10:00:00 UTC", "... (JST)")
    let without_zone = date_str
        .trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '(' || c == ')')
        .trim();

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y.%m.%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%d-%b-%Y %H:%M:%S",
    ];
    for format in &datetime_formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(without_zone, format) {
            return Some(naive_dt.and_utc());
        }
    }

    let date_formats = [
        "%Y-%m-%d", "%Y.%m.%d", "%Y/%m/%d", "%Y%m%d", "%d-%b-%Y", "%d.%m.%Y", "%d/%m/%Y",
    ];
    for format in &date_formats {
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(without_zone, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}
