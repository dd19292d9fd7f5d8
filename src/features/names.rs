//! Canonical feature names.
//!
//! The string forms are the column names of the training table and must match
//! it byte for byte, misspellings included.

use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// One of the 30 phishing indicators, in canonical column order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, AsRefStr, Display, EnumCount,
)]
pub enum FeatureName {
    /// Host is an IP literal
    #[strum(serialize = "having_IP_Address")]
    HavingIpAddress,
    /// Length of the full URL
    #[strum(serialize = "URL_Length")]
    UrlLength,
    /// Host of a known URL shortener
    #[strum(serialize = "Shortining_Service")]
    ShorteningService,
    /// `@` in the URL
    #[strum(serialize = "having_At_Symbol")]
    HavingAtSymbol,
    /// More than one `//` in the URL
    #[strum(serialize = "double_slash_redirecting")]
    DoubleSlashRedirecting,
    /// `-` in the host
    #[strum(serialize = "Prefix_Suffix")]
    PrefixSuffix,
    /// Depth of the subdomain
    #[strum(serialize = "having_Sub_Domain")]
    HavingSubDomain,
    /// `https` scheme
    #[strum(serialize = "SSLfinal_State")]
    SslFinalState,
    /// Time until the registration expires
    #[strum(serialize = "Domain_registeration_length")]
    DomainRegistrationLength,
    /// Favicon served from the page's host
    #[strum(serialize = "Favicon")]
    Favicon,
    /// Explicit standard port in the URL
    #[strum(serialize = "port")]
    Port,
    /// `https` token inside the host
    #[strum(serialize = "HTTPS_token")]
    HttpsToken,
    /// Share of images served from the page's host
    #[strum(serialize = "Request_URL")]
    RequestUrl,
    /// Share of dead or script anchors
    #[strum(serialize = "URL_of_Anchor")]
    UrlOfAnchor,
    /// Share of link/script tags pointing at the page's host
    #[strum(serialize = "Links_in_tags")]
    LinksInTags,
    /// Server form handler empty or blank
    #[strum(serialize = "SFH")]
    ServerFormHandler,
    /// Form submitting to `mailto:`
    #[strum(serialize = "Submitting_to_email")]
    SubmittingToEmail,
    /// Registrable domain absent from the URL
    #[strum(serialize = "Abnormal_URL")]
    AbnormalUrl,
    /// Number of redirects
    #[strum(serialize = "Redirect")]
    Redirect,
    /// Status bar hijack via `onmouseover`
    #[strum(serialize = "on_mouseover")]
    OnMouseover,
    /// Right click disabled
    #[strum(serialize = "RightClick")]
    RightClick,
    /// `alert(` pop-ups
    #[strum(serialize = "popUpWidnow")]
    PopUpWindow,
    /// `<iframe` present
    #[strum(serialize = "Iframe")]
    Iframe,
    /// Time since registration
    #[strum(serialize = "age_of_domain")]
    AgeOfDomain,
    /// Registrable domain known
    #[strum(serialize = "DNSRecord")]
    DnsRecord,
    /// Traffic rank (no data source; placeholder)
    #[strum(serialize = "web_traffic")]
    WebTraffic,
    /// Page rank (no data source; placeholder)
    #[strum(serialize = "Page_Rank")]
    PageRank,
    /// Indexed by Google
    #[strum(serialize = "Google_Index")]
    GoogleIndex,
    /// Number of links on the page
    #[strum(serialize = "Links_pointing_to_page")]
    LinksPointingToPage,
    /// Phishing keywords in the URL
    #[strum(serialize = "Statistical_report")]
    StatisticalReport,
}
