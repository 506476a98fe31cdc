//! Partial content supplied by the caller.
//!
//! On the wire (content-editing tooling, JSON files) overrides are a flat
//! object keyed by field name:
//!
//! ```json
//! { "feature3Title": "Custom Title", "primaryCTAHref": "/contact" }
//! ```
//!
//! Unknown keys are skipped with a warning. Non-string values are a
//! [`ContentError::Json`].

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::content::FeatureContent;
use crate::error::ContentError;
use crate::field::Field;

/// Any subset of the recognised fields with replacement values.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct ContentOverrides {
    entries: BTreeMap<Field, String>,
}

impl ContentOverrides {
    /// No overrides: resolves to the default content.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Override `field`, returning the previous override if any.
    pub fn set(&mut self, field: Field, value: impl Into<String>) -> Option<String> {
        self.entries.insert(field, value.into())
    }

    /// Drop the override for `field` so it falls back to the default again.
    pub fn remove(&mut self, field: Field) -> Option<String> {
        self.entries.remove(&field)
    }

    /// The override for `field`, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    /// Number of overridden fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Overridden fields in [`Field::all`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Parse a flat JSON object of field names to strings.
    pub fn from_json_str(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON overrides file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let overrides = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), fields = overrides.len(), "loaded content overrides");
        Ok(overrides)
    }
}

impl FromIterator<(Field, String)> for ContentOverrides {
    fn from_iter<I: IntoIterator<Item = (Field, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl From<BTreeMap<String, String>> for ContentOverrides {
    fn from(flat: BTreeMap<String, String>) -> Self {
        flat.into_iter()
            .filter_map(|(name, value)| match name.parse::<Field>() {
                Ok(field) => Some((field, value)),
                Err(err) => {
                    tracing::warn!(%err, "ignoring content override");
                    None
                }
            })
            .collect()
    }
}

impl From<ContentOverrides> for BTreeMap<String, String> {
    fn from(overrides: ContentOverrides) -> Self {
        overrides
            .entries
            .into_iter()
            .map(|(field, value)| (field.to_string(), value))
            .collect()
    }
}

/// Every field of `content` as an override, e.g. to export an editable template.
impl From<&FeatureContent> for ContentOverrides {
    fn from(content: &FeatureContent) -> Self {
        content
            .fields()
            .map(|(field, value)| (field, value.to_owned()))
            .collect()
    }
}
