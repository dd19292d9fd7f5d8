// Verdict and reason selection tests.

use super::*;
use crate::features::{FeatureName, FeatureSchema};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashMap;
use std::io::Write;
use strum::IntoEnumIterator;

fn all_safe() -> HashMap<String, i8> {
    FeatureName::iter()
        .map(|name| {
            let safe = expected_safe_value(name.as_ref()).expect("canonical feature");
            (name.to_string(), safe)
        })
        .collect()
}

fn vector(overrides: &[(&str, i8)]) -> FeatureVector {
    let mut raw = all_safe();
    for (name, value) in overrides {
        raw.insert(name.to_string(), *value);
    }
    FeatureSchema::default().reindex(&raw)
}

fn model_with_importances(importances: &[(&str, f64)]) -> LinearModel {
    LinearModel {
        bias: -100.0,
        weights: HashMap::from([("SSLfinal_State".to_string(), 1.0)]),
        importances: importances
            .iter()
            .map(|(name, imp)| (name.to_string(), *imp))
            .collect(),
    }
}

#[test]
fn test_expected_safe_values() {
    assert_eq!(expected_safe_value("having_IP_Address"), Some(-1));
    assert_eq!(expected_safe_value("URL_Length"), Some(1));
    assert_eq!(expected_safe_value("Not_A_Feature"), None);
}

#[test]
fn test_reason_text_known_and_unknown() {
    assert_eq!(
        reason_text("Submitting_to_email"),
        "Form submits data directly to an email address."
    );
    assert_eq!(
        reason_text("Custom_Extra_Signal"),
        "Suspicious behavior detected in Custom Extra Signal."
    );
}

#[test]
fn test_deviating_features_sorted_by_importance() {
    let features = vector(&[("Favicon", -1), ("Iframe", -1), ("having_IP_Address", 1)]);
    let model = model_with_importances(&[("Iframe", 0.5), ("having_IP_Address", 0.9)]);
    let deviating = deviating_features(&features, &model);
    assert_eq!(deviating, vec!["having_IP_Address", "Iframe", "Favicon"]);
}

#[test]
fn test_select_reasons_at_most_four_from_top_eight() {
    let names: Vec<String> = FeatureName::iter().map(|n| n.to_string()).collect();
    let overrides: Vec<(&str, i8)> = names
        .iter()
        .filter(|name| *name != "having_IP_Address")
        .map(|name| (name.as_str(), -1))
        .collect();
    let features = vector(&overrides);

    // Give the last eight schema names the highest importances
    let ranked: Vec<&str> = names.iter().skip(22).map(String::as_str).collect();
    let importances: Vec<(&str, f64)> = ranked
        .iter()
        .enumerate()
        .map(|(i, name)| (*name, 1.0 + i as f64))
        .collect();
    let model = model_with_importances(&importances);
    let allowed: Vec<String> = ranked.iter().map(|name| reason_text(name)).collect();

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let reasons = select_reasons(&features, &model, &mut rng);
        assert_eq!(reasons.len(), MAX_REASONS);
        assert!(reasons.iter().all(|r| allowed.contains(r)));
    }
}

#[test]
fn test_select_reasons_fewer_deviations() {
    let features = vector(&[("port", -1)]);
    let model = model_with_importances(&[]);
    let mut rng = StdRng::seed_from_u64(7);
    let reasons = select_reasons(&features, &model, &mut rng);
    assert_eq!(reasons, vec!["The website uses a non-standard port.".to_string()]);
}

#[test]
fn test_select_reasons_fallback_when_nothing_deviates() {
    let features = vector(&[]);
    let model = model_with_importances(&[]);
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(
        select_reasons(&features, &model, &mut rng),
        vec![FALLBACK_REASON.to_string()]
    );
}

#[test]
fn test_linear_model_threshold() {
    let model = LinearModel {
        bias: -1.0,
        weights: HashMap::from([
            ("SSLfinal_State".to_string(), 1.0),
            ("URL_Length".to_string(), 0.5),
        ]),
        importances: HashMap::new(),
    };
    // -1 + 1 + 0 = 0 -> legitimate
    let features = vector(&[("URL_Length", 0)]);
    assert_eq!(model.predict(&features), Verdict::Legitimate);

    // -1 - 1 + 0.5 < 0 -> phishing
    let features = vector(&[("SSLfinal_State", -1)]);
    assert_eq!(model.predict(&features), Verdict::Phishing);
}

#[test]
fn test_linear_model_from_json() {
    let model = LinearModel::from_json(
        r#"{"bias": 0.25, "weights": {"port": 2.0}, "importances": {"port": 0.1}}"#,
    )
    .expect("valid model");
    assert_eq!(model.bias, 0.25);
    assert_eq!(model.importance("port"), 0.1);
    assert_eq!(model.importance("Iframe"), 0.0);
}

#[test]
fn test_linear_model_rejects_empty_weights() {
    let err = LinearModel::from_json(r#"{"bias": 1.0, "weights": {}}"#).unwrap_err();
    assert!(matches!(err, crate::error_handling::ModelError::EmptyWeights));
    assert!(LinearModel::from_json("not json").is_err());
}

#[test]
fn test_linear_model_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(br#"{"weights": {"SFH": 1.0}}"#)
        .expect("Failed to write model");
    let model = LinearModel::load(file.path()).expect("model loads");
    assert_eq!(model.bias, 0.0);
    assert!(LinearModel::load(std::path::Path::new("/nonexistent/model.json")).is_err());
}

#[test]
fn test_assess_legitimate_has_no_reasons() {
    let model = LinearModel {
        bias: 1.0,
        weights: HashMap::from([("port".to_string(), 0.0)]),
        importances: HashMap::new(),
    };
    let mut rng = StdRng::seed_from_u64(3);
    let assessment = assess(&vector(&[("Iframe", -1)]), &model, &mut rng);
    assert_eq!(assessment.class, 1);
    assert_eq!(assessment.label, "Legitimate Website! ✅");
    assert!(assessment.reasons.is_empty());
}

#[test]
fn test_assess_phishing_has_reasons() {
    let model = model_with_importances(&[]);
    let mut rng = StdRng::seed_from_u64(3);
    let assessment = assess(&vector(&[("Iframe", -1)]), &model, &mut rng);
    assert_eq!(assessment.class, 0);
    assert_eq!(assessment.label, "Phishing Website Detected ⚠️");
    assert_eq!(
        assessment.reasons,
        vec!["Page uses iframes, can mask real content.".to_string()]
    );
}

#[test]
fn test_verdict_class_mapping() {
    assert_eq!(Verdict::from_class(1), Verdict::Legitimate);
    assert_eq!(Verdict::from_class(0), Verdict::Phishing);
    assert_eq!(Verdict::Phishing.class(), 0);
}

#[test]
fn test_extra_schema_columns_never_deviate() {
    // Columns outside the canonical set are zero-filled by reindexing
    let schema = FeatureSchema::from_names(["Iframe", "Extra_Column", "URL_Length"]);
    let mut raw = all_safe();
    raw.insert("Iframe".to_string(), -1);
    let features = schema.reindex(&raw);
    assert_eq!(features.get("Extra_Column"), Some(0));

    let model = model_with_importances(&[("Extra_Column", 1.0)]);
    assert_eq!(deviating_features(&features, &model), vec!["Iframe"]);

    let mut rng = StdRng::seed_from_u64(11);
    let reasons = select_reasons(&features, &model, &mut rng);
    assert_eq!(reasons, vec!["Page uses iframes, can mask real content.".to_string()]);
}
