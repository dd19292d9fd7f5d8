use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error_handling::ModelError;
use crate::features::FeatureVector;

/// Outcome of classifying a feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Class 1
    Legitimate,
    /// Class 0
    Phishing,
}

impl Verdict {
    /// Maps a class label (1 legitimate, anything else phishing).
    pub fn from_class(class: u8) -> Self {
        if class == 1 {
            Verdict::Legitimate
        } else {
            Verdict::Phishing
        }
    }

    /// Class label as used by the training table.
    pub fn class(self) -> u8 {
        match self {
            Verdict::Legitimate => 1,
            Verdict::Phishing => 0,
        }
    }

    /// Text shown to the user.
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Legitimate => "Legitimate Website! ✅",
            Verdict::Phishing => "Phishing Website Detected ⚠️",
        }
    }
}

/// A trained phishing classifier.
pub trait Classifier: Send + Sync {
    /// Classifies a feature vector.
    fn predict(&self, features: &FeatureVector) -> Verdict;

    /// Relative importance of a feature; 0 for unknown names.
    fn importance(&self, feature: &str) -> f64;
}

/// Linear scoring model stored as JSON.
///
/// ```json
/// { "bias": 0.1, "weights": { "SSLfinal_State": 1.4 }, "importances": { "SSLfinal_State": 0.3 } }
/// ```
///
/// A vector is legitimate when `bias + sum(weight * value)` is at least 0.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LinearModel {
    /// Intercept
    #[serde(default)]
    pub bias: f64,
    /// Per-feature weight; features without one contribute nothing
    pub weights: HashMap<String, f64>,
    /// Per-feature importance used to rank reasons
    #[serde(default)]
    pub importances: HashMap<String, f64>,
}

impl LinearModel {
    /// Loads a model from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::Io` if the file cannot be read, `ModelError::Parse`
    /// if it is not a valid model and `ModelError::EmptyWeights` if it has no weights.
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses a model from JSON text.
    ///
    /// # Errors
    ///
    /// Same as [`LinearModel::load`], minus the I/O case.
    pub fn from_json(text: &str) -> Result<Self, ModelError> {
        let model: LinearModel = serde_json::from_str(text)?;
        if model.weights.is_empty() {
            return Err(ModelError::EmptyWeights);
        }
        Ok(model)
    }

    /// Raw linear score of a vector.
    pub fn score(&self, features: &FeatureVector) -> f64 {
        features
            .iter()
            .map(|(name, value)| self.weights.get(name).copied().unwrap_or(0.0) * f64::from(value))
            .sum::<f64>()
            + self.bias
    }
}

impl Classifier for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Verdict {
        if self.score(features) >= 0.0 {
            Verdict::Legitimate
        } else {
            Verdict::Phishing
        }
    }

    fn importance(&self, feature: &str) -> f64 {
        self.importances.get(feature).copied().unwrap_or(0.0)
    }
}
