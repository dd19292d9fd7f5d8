//! Canonical feature schema and output reindexing.
//!
//! The schema is the ordered list of column names the classifier was trained
//! on. It is read from the header row of the training table when available
//! and otherwise falls back to the built-in 30 names.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::ser::{Serialize, SerializeMap, Serializer};
use strum::IntoEnumIterator;

use super::names::FeatureName;
use crate::error_handling::SchemaError;

/// Ordered set of canonical feature names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
}

impl Default for FeatureSchema {
    /// The built-in 30-name schema, in canonical order.
    fn default() -> Self {
        Self {
            names: FeatureName::iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl FeatureSchema {
    /// Builds a schema from explicit names. Duplicates keep their first position.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let names = names
            .into_iter()
            .map(Into::into)
            .filter(|name: &String| seen.insert(name.clone()))
            .collect();
        Self { names }
    }

    /// Reads the schema from the header row of a CSV training table.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::Csv` if the file cannot be read and
    /// `SchemaError::EmptyHeader` if the header has no non-blank column.
    pub fn from_csv_header(path: &Path) -> Result<Self, SchemaError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?;
        let names: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_string())
            .filter(|h| !h.is_empty())
            .collect();
        if names.is_empty() {
            return Err(SchemaError::EmptyHeader);
        }
        Ok(Self::from_names(names))
    }

    /// Reads the schema from `path`, falling back to the built-in default on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_csv_header(path) {
            Ok(schema) => {
                log::info!(
                    "Loaded feature schema with {} columns from {}",
                    schema.len(),
                    path.display()
                );
                schema
            }
            Err(e) => {
                log::debug!(
                    "Using built-in feature schema ({}: {})",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Names in schema order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// `true` if the schema has no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Restricts raw rule outputs to exactly this schema.
    ///
    /// Names missing from `raw` get 0; names in `raw` outside the schema are dropped.
    pub fn reindex(&self, raw: &HashMap<String, i8>) -> FeatureVector {
        let entries = self
            .names
            .iter()
            .map(|name| (name.clone(), raw.get(name).copied().unwrap_or(0)))
            .collect();
        FeatureVector { entries }
    }
}

/// Feature values keyed by canonical name, in schema order.
///
/// Serializes as a JSON object preserving that order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureVector {
    entries: Vec<(String, i8)>,
}

impl FeatureVector {
    /// Value of `name`, if it is part of the schema.
    pub fn get(&self, name: &str) -> Option<i8> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Value of a canonical feature, if it is part of the schema.
    pub fn value(&self, feature: FeatureName) -> Option<i8> {
        self.get(feature.as_ref())
    }

    /// `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i8)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), *v))
    }

    /// Names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FeatureVector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
