//! Serde model for `feature_compat.json`.
//!
//! The catalog file is a bare JSON array of feature records. Every record
//! carries a support entry for each of the four tracked browsers; a record
//! missing one is a deserialization error rather than a lookup-time surprise.

use crate::catalog::{Browser, FeatureCategory, FeatureId};
use crate::schema_loader::FeatureSchema;
use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Feature {
    pub id: FeatureId,
    pub name: String,
    pub description: String,
    pub category: FeatureCategory,
    pub support_status: SupportMatrix,
}

impl Feature {
    pub fn support(&self, browser: Browser) -> &SupportEntry {
        self.support_status.get(browser)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
/// Per-browser support entries keyed the way the catalog file keys them.
pub struct SupportMatrix {
    pub chrome: SupportEntry,
    pub firefox: SupportEntry,
    pub safari: SupportEntry,
    pub edge: SupportEntry,
}

impl SupportMatrix {
    pub fn get(&self, browser: Browser) -> &SupportEntry {
        match browser {
            Browser::Chrome => &self.chrome,
            Browser::Firefox => &self.firefox,
            Browser::Safari => &self.safari,
            Browser::Edge => &self.edge,
        }
    }

    /// Entries in `Browser::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (Browser, &SupportEntry)> {
        Browser::ALL
            .into_iter()
            .map(move |browser| (browser, self.get(browser)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct SupportEntry {
    #[serde(default)]
    pub version: Option<String>,
    pub category: SupportCategory,
    #[serde(default)]
    pub notes: String,
}

impl SupportEntry {
    pub fn is_widely_available(&self) -> bool {
        matches!(self.category, SupportCategory::WidelyAvailable)
    }
}

/// Availability bucket reported for one browser.
///
/// Anything other than `widely_available` or `limited` counts as unsupported;
/// the raw marker is kept for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SupportCategory {
    WidelyAvailable,
    Limited,
    Unsupported(String),
}

impl SupportCategory {
    pub fn as_str(&self) -> &str {
        match self {
            SupportCategory::WidelyAvailable => "widely_available",
            SupportCategory::Limited => "limited",
            SupportCategory::Unsupported(raw) => raw.as_str(),
        }
    }
}

impl From<&str> for SupportCategory {
    fn from(value: &str) -> Self {
        match value {
            "widely_available" => SupportCategory::WidelyAvailable,
            "limited" => SupportCategory::Limited,
            other => SupportCategory::Unsupported(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for SupportCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SupportCategory::from(raw.as_str()))
    }
}

impl Serialize for SupportCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Read, schema-check and deserialize a catalog file.
pub fn load_catalog_from_path(path: &Path) -> Result<Vec<Feature>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading feature catalog {}", path.display()))?;
    parse_catalog(&data).with_context(|| format!("parsing feature catalog {}", path.display()))
}

/// Parse catalog JSON text already in memory.
pub fn parse_catalog(data: &str) -> Result<Vec<Feature>> {
    let value: Value = serde_json::from_str(data).context("catalog is not valid JSON")?;
    FeatureSchema::bundled()?.validate(&value)?;
    let features: Vec<Feature> =
        serde_json::from_value(value).context("catalog does not match the feature model")?;
    Ok(features)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn support_entry_defaults_optional_fields() {
        let entry: SupportEntry =
            serde_json::from_value(json!({"category": "unsupported"})).unwrap();
        assert_eq!(entry.version, None);
        assert_eq!(entry.notes, "");
        assert_eq!(
            entry.category,
            SupportCategory::Unsupported("unsupported".to_string())
        );
        assert!(!entry.is_widely_available());
    }

    #[test]
    fn matrix_iterates_in_display_order() {
        let entry = json!({"version": "1", "category": "limited", "notes": ""});
        let matrix: SupportMatrix = serde_json::from_value(json!({
            "chrome": entry, "firefox": entry, "safari": entry, "edge": entry
        }))
        .unwrap();
        let order: Vec<Browser> = matrix.iter().map(|(browser, _)| browser).collect();
        assert_eq!(order, Browser::ALL.to_vec());
    }

    #[test]
    fn matrix_requires_every_browser() {
        let entry = json!({"category": "widely_available"});
        let result: Result<SupportMatrix, _> = serde_json::from_value(json!({
            "chrome": entry, "firefox": entry, "safari": entry
        }));
        assert!(result.is_err());
    }
}
