// Feature extraction tests.

use super::*;
use crate::error_handling::{FetchFailure, RuleError};
use crate::fetch::{FetchOutcome, PageResponse};
use chrono::{DateTime, Duration, TimeZone};
use std::collections::HashSet;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn fetched(url: &str, body: &str, history: usize) -> FetchOutcome {
    FetchOutcome::Fetched(PageResponse {
        status: 200,
        final_url: url.to_string(),
        history: (0..history).map(|i| format!("{url}?hop={i}")).collect(),
        body: body.to_string(),
    })
}

fn offline_ctx(url: &str) -> ExtractionContext {
    ExtractionContext::new(url, FetchOutcome::Unavailable(FetchFailure::Connect), None, now())
}

fn page_ctx(url: &str, body: &str) -> ExtractionContext {
    ExtractionContext::new(url, fetched(url, body, 0), None, now())
}

fn score(ctx: &ExtractionContext, feature: FeatureName) -> i8 {
    extract_from_context(ctx, &FeatureSchema::default())
        .value(feature)
        .unwrap()
}

struct FixedFetcher(FetchOutcome);

impl PageFetcher for FixedFetcher {
    async fn fetch(&self, _url: &str) -> FetchOutcome {
        self.0.clone()
    }
}

struct FixedWhois(Option<WhoisRecord>);

impl WhoisLookup for FixedWhois {
    async fn lookup(&self, _domain: &str) -> Option<WhoisRecord> {
        self.0.clone()
    }
}

#[test]
fn test_rule_table_covers_every_feature_once() {
    let features: HashSet<FeatureName> = RULES.iter().map(|r| r.feature).collect();
    assert_eq!(features.len(), 30);
    for (rule, name) in RULES.iter().zip(<FeatureName as strum::IntoEnumIterator>::iter()) {
        assert_eq!(rule.feature, name);
    }
}

#[test]
fn test_url_length_boundaries() {
    let base = "http://a.com/";
    let url_of = |len: usize| format!("{base}{}", "x".repeat(len - base.len()));

    assert_eq!(score(&offline_ctx(&url_of(53)), FeatureName::UrlLength), 1);
    assert_eq!(score(&offline_ctx(&url_of(54)), FeatureName::UrlLength), 0);
    assert_eq!(score(&offline_ctx(&url_of(75)), FeatureName::UrlLength), 0);
    assert_eq!(score(&offline_ctx(&url_of(76)), FeatureName::UrlLength), -1);
}

#[test]
fn test_sub_domain_depth() {
    assert_eq!(
        score(&offline_ctx("http://example.com"), FeatureName::HavingSubDomain),
        1
    );
    // "www" has no dots
    assert_eq!(
        score(&offline_ctx("http://www.example.com"), FeatureName::HavingSubDomain),
        1
    );
    assert_eq!(
        score(&offline_ctx("http://a.b.example.com"), FeatureName::HavingSubDomain),
        0
    );
    assert_eq!(
        score(&offline_ctx("http://a.b.c.example.co.uk"), FeatureName::HavingSubDomain),
        -1
    );
}

#[test]
fn test_lexical_rules_on_suspicious_url() {
    let ctx = offline_ctx("http://secure-login.example.com//paypal@bit.ly/verify");
    assert_eq!(score(&ctx, FeatureName::HavingAtSymbol), -1);
    assert_eq!(score(&ctx, FeatureName::DoubleSlashRedirecting), -1);
    assert_eq!(score(&ctx, FeatureName::PrefixSuffix), -1);
    assert_eq!(score(&ctx, FeatureName::ShorteningService), -1);
    assert_eq!(score(&ctx, FeatureName::SslFinalState), -1);
    assert_eq!(score(&ctx, FeatureName::StatisticalReport), -1);
    assert_eq!(score(&ctx, FeatureName::GoogleIndex), -1);
}

#[test]
fn test_lexical_rules_on_clean_url() {
    let ctx = offline_ctx("https://www.google.com/search");
    assert_eq!(score(&ctx, FeatureName::HavingAtSymbol), 1);
    assert_eq!(score(&ctx, FeatureName::DoubleSlashRedirecting), 1);
    assert_eq!(score(&ctx, FeatureName::PrefixSuffix), 1);
    assert_eq!(score(&ctx, FeatureName::SslFinalState), 1);
    assert_eq!(score(&ctx, FeatureName::HttpsToken), 1);
    assert_eq!(score(&ctx, FeatureName::GoogleIndex), 1);
    assert_eq!(score(&ctx, FeatureName::AbnormalUrl), 1);
    assert_eq!(score(&ctx, FeatureName::DnsRecord), 1);
    assert_eq!(score(&ctx, FeatureName::StatisticalReport), 1);
}

#[test]
fn test_ip_address_polarity() {
    assert_eq!(
        score(&offline_ctx("http://192.168.1.10/login"), FeatureName::HavingIpAddress),
        1
    );
    assert_eq!(
        score(&offline_ctx("http://example.com/"), FeatureName::HavingIpAddress),
        -1
    );
}

#[test]
fn test_port_and_https_token() {
    assert_eq!(score(&offline_ctx("http://example.com:80/"), FeatureName::Port), 1);
    assert_eq!(score(&offline_ctx("https://example.com:443/"), FeatureName::Port), 1);
    assert_eq!(score(&offline_ctx("http://example.com:8443/"), FeatureName::Port), -1);
    assert_eq!(
        score(&offline_ctx("http://https-example.com/"), FeatureName::HttpsToken),
        -1
    );
}

#[test]
fn test_offline_fallbacks() {
    let ctx = offline_ctx("http://example.com/");
    assert_eq!(score(&ctx, FeatureName::Favicon), -1);
    assert_eq!(score(&ctx, FeatureName::RequestUrl), 0);
    assert_eq!(score(&ctx, FeatureName::UrlOfAnchor), 0);
    assert_eq!(score(&ctx, FeatureName::LinksInTags), 0);
    assert_eq!(score(&ctx, FeatureName::ServerFormHandler), 0);
    assert_eq!(score(&ctx, FeatureName::SubmittingToEmail), 1);
    assert_eq!(score(&ctx, FeatureName::Redirect), 1);
    assert_eq!(score(&ctx, FeatureName::OnMouseover), 1);
    assert_eq!(score(&ctx, FeatureName::RightClick), 1);
    assert_eq!(score(&ctx, FeatureName::PopUpWindow), 1);
    assert_eq!(score(&ctx, FeatureName::Iframe), 1);
    assert_eq!(score(&ctx, FeatureName::LinksPointingToPage), -1);
    assert_eq!(score(&ctx, FeatureName::WebTraffic), 0);
    assert_eq!(score(&ctx, FeatureName::PageRank), 0);
}

#[test]
fn test_missing_whois_scores_negative() {
    let ctx = offline_ctx("http://example.com/");
    assert_eq!(score(&ctx, FeatureName::DomainRegistrationLength), -1);
    assert_eq!(score(&ctx, FeatureName::AgeOfDomain), -1);
}

#[test]
fn test_whois_dates() {
    let established = WhoisRecord {
        creation_date: Some(now() - Duration::days(3650)),
        expiration_date: Some(now() + Duration::days(400)),
        ..Default::default()
    };
    let ctx = ExtractionContext::new(
        "http://example.com/",
        FetchOutcome::Unavailable(FetchFailure::Timeout),
        Some(established),
        now(),
    );
    assert_eq!(score(&ctx, FeatureName::DomainRegistrationLength), 1);
    assert_eq!(score(&ctx, FeatureName::AgeOfDomain), 1);

    let fresh = WhoisRecord {
        creation_date: Some(now() - Duration::days(30)),
        expiration_date: Some(now() + Duration::days(300)),
        ..Default::default()
    };
    let ctx = ExtractionContext::new(
        "http://example.com/",
        FetchOutcome::Unavailable(FetchFailure::Timeout),
        Some(fresh),
        now(),
    );
    assert_eq!(score(&ctx, FeatureName::DomainRegistrationLength), -1);
    assert_eq!(score(&ctx, FeatureName::AgeOfDomain), -1);
}

#[test]
fn test_content_rules_on_phishing_page() {
    let body = r##"<html><head>
        <link rel="icon" href="https://cdn.evil.net/favicon.ico">
        <link rel="stylesheet" href="https://cdn.evil.net/a.css">
        <script src="https://cdn.evil.net/a.js"></script>
        </head><body>
        <img src="https://cdn.evil.net/logo.png">
        <a href="#">a</a><a href="#top">b</a><a href="JavaScript:void(0)">c</a>
        <form action=""></form>
        <form action="mailto:drop@evil.net"></form>
        <iframe src="https://evil.net"></iframe>
        <script>alert('hi'); if (event.button==2) {}</script>
        </body></html>"##;
    let ctx = page_ctx("http://shop.example.com/", body);

    assert_eq!(score(&ctx, FeatureName::Favicon), -1);
    assert_eq!(score(&ctx, FeatureName::RequestUrl), -1);
    assert_eq!(score(&ctx, FeatureName::UrlOfAnchor), -1);
    assert_eq!(score(&ctx, FeatureName::LinksInTags), -1);
    assert_eq!(score(&ctx, FeatureName::ServerFormHandler), -1);
    assert_eq!(score(&ctx, FeatureName::SubmittingToEmail), -1);
    assert_eq!(score(&ctx, FeatureName::Iframe), -1);
    assert_eq!(score(&ctx, FeatureName::PopUpWindow), -1);
    assert_eq!(score(&ctx, FeatureName::RightClick), -1);
    assert_eq!(score(&ctx, FeatureName::LinksPointingToPage), -1);
}

#[test]
fn test_content_rules_on_clean_page() {
    let body = r#"<html><head>
        <link rel="shortcut icon" href="https://shop.example.com/favicon.ico">
        <script src="https://cdn.other.net/a.js"></script>
        </head><body>
        <img src="https://shop.example.com/logo.png">
        <img src="https://cdn.other.net/banner.png">
        <a href="/1">1</a><a href="/2">2</a><a href="/3">3</a>
        <a href="/4">4</a><a href="/5">5</a><a href="/6#x">6</a>
        <form action="/search"></form>
        </body></html>"#;
    let ctx = page_ctx("https://shop.example.com/", body);

    assert_eq!(score(&ctx, FeatureName::Favicon), 1);
    assert_eq!(score(&ctx, FeatureName::RequestUrl), 1);
    assert_eq!(score(&ctx, FeatureName::UrlOfAnchor), 1);
    // one local link out of one link plus one script
    assert_eq!(score(&ctx, FeatureName::LinksInTags), 1);
    assert_eq!(score(&ctx, FeatureName::ServerFormHandler), 1);
    assert_eq!(score(&ctx, FeatureName::SubmittingToEmail), 1);
    assert_eq!(score(&ctx, FeatureName::Iframe), 1);
    assert_eq!(score(&ctx, FeatureName::PopUpWindow), 1);
    assert_eq!(score(&ctx, FeatureName::OnMouseover), 1);
    assert_eq!(score(&ctx, FeatureName::LinksPointingToPage), 1);
}

#[test]
fn test_degenerate_tag_lists() {
    let ctx = page_ctx("https://example.com/", "<html><body><p>hi</p></body></html>");
    assert_eq!(score(&ctx, FeatureName::RequestUrl), 0);
    assert_eq!(score(&ctx, FeatureName::UrlOfAnchor), 0);
    assert_eq!(score(&ctx, FeatureName::ServerFormHandler), 0);
    // no link or script tags at all counts as clean
    assert_eq!(score(&ctx, FeatureName::LinksInTags), 1);
    assert_eq!(score(&ctx, FeatureName::Favicon), -1);
}

#[test]
fn test_mouseover_requires_bare_script_tag() {
    let ctx = page_ctx(
        "https://example.com/",
        "<html><script>window.status=''; x.onmouseover=f;</script></html>",
    );
    assert_eq!(score(&ctx, FeatureName::OnMouseover), -1);
}

#[test]
fn test_redirect_history_threshold() {
    let url = "https://example.com/";
    let two = ExtractionContext::new(url, fetched(url, "<p></p>", 2), None, now());
    let three = ExtractionContext::new(url, fetched(url, "<p></p>", 3), None, now());
    assert_eq!(score(&two, FeatureName::Redirect), 1);
    assert_eq!(score(&three, FeatureName::Redirect), -1);
}

#[test]
fn test_tagless_body_is_an_empty_document() {
    for body in ["", "plain text alert(1)"] {
        let ctx = page_ctx("https://example.com/", body);
        assert!(ctx.document.is_some());
        assert_eq!(score(&ctx, FeatureName::LinksInTags), 1);
        assert_eq!(score(&ctx, FeatureName::RequestUrl), 0);
        assert_eq!(score(&ctx, FeatureName::UrlOfAnchor), 0);
        assert_eq!(score(&ctx, FeatureName::ServerFormHandler), 0);
        assert_eq!(score(&ctx, FeatureName::SubmittingToEmail), 1);
        assert_eq!(score(&ctx, FeatureName::LinksPointingToPage), -1);
        assert_eq!(score(&ctx, FeatureName::Favicon), -1);
    }
    // body rules still see the text
    let ctx = page_ctx("https://example.com/", "plain text alert(1)");
    assert_eq!(score(&ctx, FeatureName::PopUpWindow), -1);
}

#[test]
fn test_empty_registrable_domain() {
    // The empty string is a substring of any URL
    let ctx = offline_ctx("");
    assert_eq!(ctx.domain.registrable(), "");
    assert_eq!(score(&ctx, FeatureName::AbnormalUrl), 1);
    assert_eq!(score(&ctx, FeatureName::DnsRecord), -1);
}

#[test]
fn test_malformed_url_still_yields_full_vector() {
    let ctx = offline_ctx("not a url at all");
    let vector = extract_from_context(&ctx, &FeatureSchema::default());
    assert_eq!(vector.len(), 30);
    assert!(vector.iter().all(|(_, v)| (-1..=1).contains(&v)));
}

fn exploding_rule(_ctx: &ExtractionContext) -> Result<i8, RuleError> {
    panic!("rule blew up");
}

#[test]
fn test_panicking_rule_keeps_partial_scores() {
    let rules = [
        RULES[0],
        Rule {
            feature: FeatureName::UrlLength,
            evaluate: exploding_rule,
            fallback: 0,
        },
        RULES[2],
    ];
    let ctx = offline_ctx("http://192.168.0.1/");
    let raw = evaluate_rules(&rules, &ctx);
    assert_eq!(raw.get("having_IP_Address"), Some(&1));
    assert!(!raw.contains_key("URL_Length"));
    assert!(!raw.contains_key("Shortining_Service"));

    let vector = FeatureSchema::default().reindex(&raw);
    assert_eq!(vector.len(), 30);
    assert_eq!(vector.value(FeatureName::ShorteningService), Some(0));
}

#[test]
fn test_rule_error_uses_fallback() {
    let rule = Rule {
        feature: FeatureName::Favicon,
        evaluate: |_| Err(RuleError::Degenerate("test")),
        fallback: -1,
    };
    assert_eq!(rule.score(&offline_ctx("http://example.com")), -1);
}

#[tokio::test]
async fn test_extractor_keys_match_schema() {
    let schema = FeatureSchema::from_names(["SFH", "URL_Length", "Unknown_Column"]);
    let extractor = FeatureExtractor::new(
        FixedFetcher(FetchOutcome::Unavailable(FetchFailure::Timeout)),
        FixedWhois(None),
        schema.clone(),
    );
    let vector = extractor.extract("http://example.com").await;
    let names: Vec<&str> = vector.names().collect();
    assert_eq!(names, schema.names());
    assert_eq!(vector.get("Unknown_Column"), Some(0));
    assert_eq!(vector.get("URL_Length"), Some(1));
}

#[tokio::test]
async fn test_extractor_uses_whois_record() {
    let record = WhoisRecord {
        creation_date: Some(Utc::now() - Duration::days(2000)),
        expiration_date: Some(Utc::now() + Duration::days(1000)),
        ..Default::default()
    };
    let extractor = FeatureExtractor::new(
        FixedFetcher(FetchOutcome::Unavailable(FetchFailure::Connect)),
        FixedWhois(Some(record)),
        FeatureSchema::default(),
    );
    let vector = extractor.extract("https://example.com/").await;
    assert_eq!(vector.value(FeatureName::AgeOfDomain), Some(1));
    assert_eq!(vector.value(FeatureName::DomainRegistrationLength), Some(1));
}

#[tokio::test]
async fn test_extractor_skips_whois_for_ip_hosts() {
    let record = WhoisRecord {
        creation_date: Some(Utc::now() - Duration::days(2000)),
        ..Default::default()
    };
    let extractor = FeatureExtractor::new(
        FixedFetcher(FetchOutcome::Unavailable(FetchFailure::Connect)),
        FixedWhois(Some(record)),
        FeatureSchema::default(),
    );
    let vector = extractor.extract("http://10.0.0.1/").await;
    assert_eq!(vector.value(FeatureName::AgeOfDomain), Some(-1));
}

#[test]
fn test_extract_future_is_send() {
    fn assert_send<T: Send>(_: T) {}
    let extractor = FeatureExtractor::new(
        FixedFetcher(FetchOutcome::Unavailable(FetchFailure::Other)),
        FixedWhois(None),
        FeatureSchema::default(),
    );
    assert_send(extractor.extract("http://example.com"));
}
