//! WHOIS data structures.

use chrono::{DateTime, Utc};

/// Registration data extracted from a WHOIS response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisRecord {
    /// Domain creation date
    pub creation_date: Option<DateTime<Utc>>,
    /// Domain expiration date
    pub expiration_date: Option<DateTime<Utc>>,
    /// Domain updated date
    pub updated_date: Option<DateTime<Utc>>,
    /// Registrar name
    pub registrar: Option<String>,
}

impl WhoisRecord {
    /// `true` if the record carries neither a creation nor an expiration date.
    ///
    /// Such a record is useless to the date-based rules and is treated as absent.
    pub fn is_empty(&self) -> bool {
        self.creation_date.is_none() && self.expiration_date.is_none()
    }
}
