//! Verdict handler.

use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use super::super::render::render_page;
use super::super::types::{AppState, PageView, PredictForm};
use crate::fetch::PageFetcher;
use crate::utils::sanitize::strip_control_chars;
use crate::verdict::{assess, Classifier};
use crate::whois::WhoisLookup;

/// `POST /predict` - extract features for the submitted URL and show the verdict
pub async fn predict_handler<F, W, C>(
    State(state): State<AppState<F, W, C>>,
    Form(form): Form<PredictForm>,
) -> Response
where
    F: PageFetcher + 'static,
    W: WhoisLookup + 'static,
    C: Classifier + ?Sized + 'static,
{
    let url = form.url.trim().to_string();
    if url.is_empty() {
        let page = render_page(&PageView::InputError("Please enter a URL."));
        return (StatusCode::BAD_REQUEST, Html(page)).into_response();
    }
    if url.chars().any(char::is_whitespace) {
        let page = render_page(&PageView::InputError(
            "Please enter only one URL at a time (no spaces).",
        ));
        return (StatusCode::BAD_REQUEST, Html(page)).into_response();
    }

    let features = state.extractor.extract(&url).await;
    let assessment = assess(&features, state.classifier.as_ref(), &mut rand::rng());
    log::info!(
        "Verdict for {}: {} ({} reasons)",
        strip_control_chars(&url),
        assessment.class,
        assessment.reasons.len()
    );

    let view = PageView::Verdict {
        url,
        label: assessment.label,
        phishing: assessment.class == 0,
        reasons: assessment.reasons,
    };
    Html(render_page(&view)).into_response()
}
