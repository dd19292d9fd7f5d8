//! Phishing verdicts and their explanations.
//!
//! This module provides:
//! - [`Classifier`] - The capability a trained model exposes (predict, importances)
//! - [`LinearModel`] - A JSON-loaded linear classifier
//! - [`select_reasons`] - Human-readable reasons for a phishing verdict
//! - [`assess`] - Classify a vector and explain the result

mod model;
mod reasons;

use rand::Rng;
use serde::Serialize;

use crate::features::FeatureVector;

pub use model::{Classifier, LinearModel, Verdict};
pub use reasons::{
    deviating_features, expected_safe_value, reason_text, select_reasons, FALLBACK_REASON,
    MAX_REASONS, REASON_POOL_SIZE,
};

/// A verdict with the reasons shown for it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    /// Predicted class (1 legitimate, 0 phishing)
    pub class: u8,
    /// Text shown for the verdict
    pub label: &'static str,
    /// Reasons; empty for legitimate sites
    pub reasons: Vec<String>,
}

/// Classifies `features` and, for phishing verdicts, selects reasons.
pub fn assess<C, R>(features: &FeatureVector, classifier: &C, rng: &mut R) -> Assessment
where
    C: Classifier + ?Sized,
    R: Rng + ?Sized,
{
    let verdict = classifier.predict(features);
    let reasons = match verdict {
        Verdict::Legitimate => Vec::new(),
        Verdict::Phishing => select_reasons(features, classifier, rng),
    };
    Assessment {
        class: verdict.class(),
        label: verdict.label(),
        reasons,
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
