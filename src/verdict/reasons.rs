use std::str::FromStr;

use rand::seq::IndexedRandom;
use rand::Rng;

use super::model::Classifier;
use crate::features::{FeatureName, FeatureVector};

/// Shown when a phishing verdict comes with no explainable feature.
pub const FALLBACK_REASON: &str = "Anomaly detected - possible phishing behavior.";

/// Number of most important deviating features reasons are drawn from.
pub const REASON_POOL_SIZE: usize = 8;

/// Maximum number of reasons shown.
pub const MAX_REASONS: usize = 4;

/// Value a feature takes on a typical legitimate site.
///
/// `None` for names outside the canonical feature set, which never count as
/// deviating.
pub fn expected_safe_value(feature: &str) -> Option<i8> {
    match FeatureName::from_str(feature).ok()? {
        FeatureName::HavingIpAddress => Some(-1),
        _ => Some(1),
    }
}

/// Human-readable explanation of a deviating feature.
pub fn reason_text(feature: &str) -> String {
    let Ok(name) = FeatureName::from_str(feature) else {
        return format!(
            "Suspicious behavior detected in {}.",
            feature.replace('_', " ")
        );
    };
    let text = match name {
        FeatureName::HavingIpAddress => "The URL uses an IP address instead of a domain name.",
        FeatureName::UrlLength => "The URL is unusually long, a common phishing tactic.",
        FeatureName::ShorteningService => {
            "The URL uses a shortening service, hiding its real destination."
        }
        FeatureName::HavingAtSymbol => "The '@' symbol is used in URLs to trick users.",
        FeatureName::DoubleSlashRedirecting => "Multiple slashes suggest a redirect pattern.",
        FeatureName::PrefixSuffix => "The domain contains a hyphen, common in fake domains.",
        FeatureName::HavingSubDomain => {
            "Too many subdomains detected, often used to hide phishing."
        }
        FeatureName::SslFinalState => "Website lacks secure HTTPS/SSL certification.",
        FeatureName::DomainRegistrationLength => {
            "The domain was registered for a short period, suspicious."
        }
        FeatureName::Favicon => "The favicon is loaded from an external domain.",
        FeatureName::Port => "The website uses a non-standard port.",
        FeatureName::HttpsToken => "The domain name contains 'https', which is misleading.",
        FeatureName::RequestUrl => "Too many resources are loaded from external domains.",
        FeatureName::UrlOfAnchor => "Anchor links redirect to different domains.",
        FeatureName::LinksInTags => "Tags contain links pointing to suspicious domains.",
        FeatureName::ServerFormHandler => {
            "Form handler sends data to a suspicious or blank destination."
        }
        FeatureName::SubmittingToEmail => "Form submits data directly to an email address.",
        FeatureName::AbnormalUrl => "URL structure is inconsistent with domain.",
        FeatureName::Redirect => "Website performs multiple redirects.",
        FeatureName::OnMouseover => "Suspicious mouseover scripts found.",
        FeatureName::RightClick => "Right-click is disabled, often hides malicious intent.",
        FeatureName::PopUpWindow => "Popups detected, may capture sensitive info.",
        FeatureName::Iframe => "Page uses iframes, can mask real content.",
        FeatureName::AgeOfDomain => "Domain is newly created, potentially untrustworthy.",
        FeatureName::DnsRecord => "Domain has missing or invalid DNS records.",
        FeatureName::WebTraffic => "Website has low or no traffic, not trustworthy.",
        FeatureName::PageRank => "Low page rank, not reputable.",
        FeatureName::GoogleIndex => "Website not indexed by Google, suspicious.",
        FeatureName::LinksPointingToPage => "Few inbound links, not a legitimate site.",
        FeatureName::StatisticalReport => {
            "URL contains phishing-related keywords (e.g., 'login', 'verify')."
        }
    };
    text.to_string()
}

/// Features whose value differs from the expected-safe value, most important first.
pub fn deviating_features<'a, C: Classifier + ?Sized>(
    features: &'a FeatureVector,
    classifier: &C,
) -> Vec<&'a str> {
    let mut deviating: Vec<&str> = features
        .iter()
        .filter(|(name, value)| {
            expected_safe_value(name).is_some_and(|expected| *value != expected)
        })
        .map(|(name, _)| name)
        .collect();
    // Stable sort keeps schema order among equal importances
    deviating.sort_by(|a, b| {
        classifier
            .importance(b)
            .total_cmp(&classifier.importance(a))
    });
    deviating
}

/// Picks up to [`MAX_REASONS`] reasons at random from the
/// [`REASON_POOL_SIZE`] most important deviating features.
///
/// Never returns an empty list: without any deviating feature the single
/// [`FALLBACK_REASON`] is returned.
pub fn select_reasons<C, R>(features: &FeatureVector, classifier: &C, rng: &mut R) -> Vec<String>
where
    C: Classifier + ?Sized,
    R: Rng + ?Sized,
{
    let deviating = deviating_features(features, classifier);
    let pool = &deviating[..deviating.len().min(REASON_POOL_SIZE)];
    let reasons: Vec<String> = pool
        .choose_multiple(rng, MAX_REASONS)
        .map(|name| reason_text(name))
        .collect();

    if reasons.is_empty() {
        log::warn!("Phishing verdict without deviating features, using fallback reason");
        return vec![FALLBACK_REASON.to_string()];
    }
    reasons
}
