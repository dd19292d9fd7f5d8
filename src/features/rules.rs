//! The 30 phishing rules.
//!
//! Each rule is a `(feature, evaluator, fallback)` entry in [`RULES`]. An
//! evaluator is a pure function of the [`ExtractionContext`]; when it returns a
//! [`RuleError`] the rule's fallback value is used instead. Scores follow the
//! training table's convention: 1 legitimate, 0 suspicious, -1 phishing.

use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::LazyLock;

use regex::Regex;

use super::context::ExtractionContext;
use super::names::FeatureName;
use crate::domain::is_ip_literal;
use crate::error_handling::RuleError;

/// Signature shared by all rule evaluators.
pub type Evaluator = fn(&ExtractionContext) -> Result<i8, RuleError>;

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Feature this rule scores
    pub feature: FeatureName,
    /// Scoring function
    pub evaluate: Evaluator,
    /// Score used when the evaluator returns an error
    pub fallback: i8,
}

impl Rule {
    const fn new(feature: FeatureName, evaluate: Evaluator, fallback: i8) -> Self {
        Self {
            feature,
            evaluate,
            fallback,
        }
    }

    /// Scores the context, substituting the fallback on error.
    pub fn score(&self, ctx: &ExtractionContext) -> i8 {
        match (self.evaluate)(ctx) {
            Ok(value) => value,
            Err(e) => {
                log::debug!(
                    "Rule {} fell back to {}: {}",
                    self.feature,
                    self.fallback,
                    e
                );
                self.fallback
            }
        }
    }
}

static SHORTENER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"bit\.ly|goo\.gl|tinyurl\.com|ow\.ly|t\.co")
        .expect("Failed to compile shortener regex")
});
static MOUSEOVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<script>.+onmouseover").expect("Failed to compile mouseover regex")
});
static RIGHT_CLICK_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"event.button ?== ?2").expect("Failed to compile right-click regex")
});
static POPUP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"alert\(").expect("Failed to compile popup regex"));
static KEYWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"login|bank|free|verify|update").expect("Failed to compile keyword regex")
});

/// All rules in canonical feature order.
pub static RULES: [Rule; 30] = [
    Rule::new(FeatureName::HavingIpAddress, having_ip_address, -1),
    Rule::new(FeatureName::UrlLength, url_length, 0),
    Rule::new(FeatureName::ShorteningService, shortening_service, 0),
    Rule::new(FeatureName::HavingAtSymbol, having_at_symbol, 0),
    Rule::new(FeatureName::DoubleSlashRedirecting, double_slash_redirecting, 0),
    Rule::new(FeatureName::PrefixSuffix, prefix_suffix, 0),
    Rule::new(FeatureName::HavingSubDomain, having_sub_domain, 0),
    Rule::new(FeatureName::SslFinalState, ssl_final_state, 0),
    Rule::new(FeatureName::DomainRegistrationLength, domain_registration_length, -1),
    Rule::new(FeatureName::Favicon, favicon, -1),
    Rule::new(FeatureName::Port, port, 0),
    Rule::new(FeatureName::HttpsToken, https_token, 0),
    Rule::new(FeatureName::RequestUrl, request_url, 0),
    Rule::new(FeatureName::UrlOfAnchor, url_of_anchor, 0),
    Rule::new(FeatureName::LinksInTags, links_in_tags, 0),
    Rule::new(FeatureName::ServerFormHandler, server_form_handler, 0),
    Rule::new(FeatureName::SubmittingToEmail, submitting_to_email, 1),
    Rule::new(FeatureName::AbnormalUrl, abnormal_url, 0),
    Rule::new(FeatureName::Redirect, redirect, 1),
    Rule::new(FeatureName::OnMouseover, on_mouseover, 1),
    Rule::new(FeatureName::RightClick, right_click, 1),
    Rule::new(FeatureName::PopUpWindow, pop_up_window, 1),
    Rule::new(FeatureName::Iframe, iframe, 1),
    Rule::new(FeatureName::AgeOfDomain, age_of_domain, -1),
    Rule::new(FeatureName::DnsRecord, dns_record, 0),
    Rule::new(FeatureName::WebTraffic, placeholder, 0),
    Rule::new(FeatureName::PageRank, placeholder, 0),
    Rule::new(FeatureName::GoogleIndex, google_index, 0),
    Rule::new(FeatureName::LinksPointingToPage, links_pointing_to_page, -1),
    Rule::new(FeatureName::StatisticalReport, statistical_report, 0),
];

/// Scores every rule against the context.
///
/// A panic inside a rule stops evaluation; it is logged and the scores
/// computed before it are returned. Callers zero-fill the rest on reindexing.
pub fn evaluate_rules(rules: &[Rule], ctx: &ExtractionContext) -> HashMap<String, i8> {
    let mut scores = HashMap::with_capacity(rules.len());
    let outcome = catch_unwind(AssertUnwindSafe(|| {
        for rule in rules {
            scores.insert(rule.feature.to_string(), rule.score(ctx));
        }
    }));
    if outcome.is_err() {
        log::error!(
            "Feature extraction aborted for '{}' after {} of {} rules",
            ctx.raw(),
            scores.len(),
            rules.len()
        );
    }
    scores
}

fn flag(suspicious: bool) -> i8 {
    if suspicious {
        -1
    } else {
        1
    }
}

// IP hosts score 1 here; the training table encodes this feature that way.
fn having_ip_address(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(if is_ip_literal(ctx.host()) { 1 } else { -1 })
}

fn url_length(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(match ctx.raw().chars().count() {
        0..=53 => 1,
        54..=75 => 0,
        _ => -1,
    })
}

fn shortening_service(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(SHORTENER_REGEX.is_match(ctx.raw())))
}

fn having_at_symbol(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.raw().contains('@')))
}

fn double_slash_redirecting(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.raw().matches("//").count() > 1))
}

fn prefix_suffix(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.host().contains('-')))
}

fn having_sub_domain(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(match ctx.domain.subdomain.matches('.').count() {
        0 => 1,
        1 => 0,
        _ => -1,
    })
}

fn ssl_final_state(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(!ctx.raw().starts_with("https")))
}

fn domain_registration_length(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let expiration = ctx
        .require_whois()?
        .expiration_date
        .ok_or(RuleError::MissingContext("expiration date"))?;
    let days_left = (expiration - ctx.now).num_days();
    Ok(flag(days_left < 365))
}

fn favicon(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let doc = ctx.require_document()?;
    let href = doc
        .favicon_href()
        .ok_or(RuleError::Degenerate("no icon link"))?;
    Ok(flag(!href.contains(ctx.host())))
}

fn port(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let raw = ctx.raw();
    Ok(flag(!raw.contains(":443") && !raw.contains(":80")))
}

fn https_token(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.host().contains("https")))
}

fn request_url(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let images = ctx.require_document()?.image_sources();
    if images.is_empty() {
        return Err(RuleError::Degenerate("no images"));
    }
    let host = ctx.host();
    let local = images.iter().filter(|src| src.contains(host)).count();
    Ok(flag((local as f64) / (images.len() as f64) < 0.5))
}

fn url_of_anchor(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let anchors = ctx.require_document()?.anchor_hrefs();
    if anchors.is_empty() {
        return Err(RuleError::Degenerate("no anchors"));
    }
    let unsafe_count = anchors
        .iter()
        .filter(|href| href.contains('#') || href.to_lowercase().contains("javascript"))
        .count();
    Ok(flag((unsafe_count as f64) / (anchors.len() as f64) > 0.6))
}

fn links_in_tags(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let doc = ctx.require_document()?;
    let links = doc.link_hrefs();
    let total = links.len() + doc.script_sources().len();
    if total == 0 {
        return Ok(1);
    }
    let host = ctx.host();
    let local = links.iter().filter(|href| href.contains(host)).count();
    Ok(flag((local as f64) / (total as f64) < 0.5))
}

fn server_form_handler(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let actions = ctx.require_document()?.form_actions();
    if actions.is_empty() {
        return Err(RuleError::Degenerate("no forms"));
    }
    Ok(flag(
        actions
            .iter()
            .any(|action| action.is_empty() || *action == "about:blank"),
    ))
}

fn submitting_to_email(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let actions = ctx.require_document()?.form_actions();
    Ok(flag(actions.iter().any(|action| action.contains("mailto:"))))
}

fn abnormal_url(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let registrable = ctx.domain.registrable();
    Ok(flag(!ctx.raw().contains(registrable.as_str())))
}

fn redirect(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.require_response()?.history.len() > 2))
}

fn on_mouseover(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(MOUSEOVER_REGEX.is_match(&ctx.require_response()?.body)))
}

fn right_click(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(RIGHT_CLICK_REGEX.is_match(&ctx.require_response()?.body)))
}

fn pop_up_window(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(POPUP_REGEX.is_match(&ctx.require_response()?.body)))
}

fn iframe(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.require_response()?.body.contains("<iframe")))
}

fn age_of_domain(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    let created = ctx
        .require_whois()?
        .creation_date
        .ok_or(RuleError::MissingContext("creation date"))?;
    let age_months = (ctx.now - created).num_days() as f64 / 30.0;
    Ok(flag(age_months < 6.0))
}

fn dns_record(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.domain.registrable().is_empty()))
}

// No traffic or rank data source is wired in.
fn placeholder(_ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(0)
}

fn google_index(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(!ctx.raw().contains("google")))
}

fn links_pointing_to_page(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(ctx.require_document()?.anchor_count() <= 5))
}

fn statistical_report(ctx: &ExtractionContext) -> Result<i8, RuleError> {
    Ok(flag(KEYWORD_REGEX.is_match(ctx.raw())))
}
