//! Web server data structures.

use serde::Deserialize;
use std::sync::Arc;

use crate::features::FeatureExtractor;

/// Shared state for the web server
pub struct AppState<F, W, C: ?Sized> {
    /// Feature extractor shared by all requests
    pub extractor: Arc<FeatureExtractor<F, W>>,
    /// Trained classifier
    pub classifier: Arc<C>,
}

impl<F, W, C: ?Sized> AppState<F, W, C> {
    /// Wraps an extractor and a classifier for sharing across requests
    pub fn new(extractor: FeatureExtractor<F, W>, classifier: Arc<C>) -> Self {
        Self {
            extractor: Arc::new(extractor),
            classifier,
        }
    }
}

// Manual impl: cloning only bumps the Arcs, whatever F, W and C are
impl<F, W, C: ?Sized> Clone for AppState<F, W, C> {
    fn clone(&self) -> Self {
        Self {
            extractor: Arc::clone(&self.extractor),
            classifier: Arc::clone(&self.classifier),
        }
    }
}

/// Body of `POST /predict`
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    /// URL to check, surrounding whitespace allowed
    #[serde(default)]
    pub url: String,
}

/// What the page shows below the form
#[derive(Debug, Clone, PartialEq)]
pub enum PageView {
    /// Empty form
    Blank,
    /// Input rejected before classification
    InputError(&'static str),
    /// Verdict for a URL
    #[allow(missing_docs)]
    Verdict {
        url: String,
        label: &'static str,
        phishing: bool,
        reasons: Vec<String>,
    },
}
