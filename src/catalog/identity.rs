//! Identifier and enum wrappers for feature catalog fields.
//!
//! Category strings outside the recognized set are preserved as `Other` so the
//! loader stays tolerant of catalog drift; they simply never satisfy a
//! category query.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(transparent)]
/// Unique integer id of a feature record.
pub struct FeatureId(pub u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FeatureCategory {
    Css,
    Javascript,
    Html,
    Api,
    Other(String),
}

impl FeatureCategory {
    /// The recognized categories, in the order they are presented.
    pub const KNOWN: [FeatureCategory; 4] = [
        FeatureCategory::Css,
        FeatureCategory::Javascript,
        FeatureCategory::Html,
        FeatureCategory::Api,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            FeatureCategory::Css => "css",
            FeatureCategory::Javascript => "javascript",
            FeatureCategory::Html => "html",
            FeatureCategory::Api => "api",
            FeatureCategory::Other(value) => value.as_str(),
        }
    }

    /// Matches an already case-folded query against the recognized set.
    ///
    /// Returns `None` for anything else, including strings that would parse
    /// as `Other`.
    pub fn recognize(folded: &str) -> Option<Self> {
        Self::KNOWN
            .iter()
            .find(|category| category.as_str() == folded)
            .cloned()
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, FeatureCategory::Other(_))
    }
}

impl From<&str> for FeatureCategory {
    fn from(value: &str) -> Self {
        match value {
            "css" => FeatureCategory::Css,
            "javascript" => FeatureCategory::Javascript,
            "html" => FeatureCategory::Html,
            "api" => FeatureCategory::Api,
            other => FeatureCategory::Other(other.to_string()),
        }
    }
}

impl fmt::Display for FeatureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FeatureCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(FeatureCategory::from(raw.as_str()))
    }
}

impl Serialize for FeatureCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Browser {
    Chrome,
    Firefox,
    Safari,
    Edge,
}

impl Browser {
    /// Every browser tracked by the catalog, in display order.
    pub const ALL: [Browser; 4] = [
        Browser::Chrome,
        Browser::Firefox,
        Browser::Safari,
        Browser::Edge,
    ];

    /// Key used in the `support_status` map.
    pub fn key(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
            Browser::Safari => "safari",
            Browser::Edge => "edge",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Browser::Chrome => "Chrome",
            Browser::Firefox => "Firefox",
            Browser::Safari => "Safari",
            Browser::Edge => "Edge",
        }
    }
}

impl fmt::Display for Browser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognize_only_accepts_known_lowercase_names() {
        assert_eq!(FeatureCategory::recognize("css"), Some(FeatureCategory::Css));
        assert_eq!(
            FeatureCategory::recognize("javascript"),
            Some(FeatureCategory::Javascript)
        );
        assert_eq!(FeatureCategory::recognize("CSS"), None);
        assert_eq!(FeatureCategory::recognize("webgl"), None);
    }

    #[test]
    fn unknown_category_round_trips_verbatim() {
        let parsed: FeatureCategory = serde_json::from_str("\"CSS\"").unwrap();
        assert_eq!(parsed, FeatureCategory::Other("CSS".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"CSS\"");
    }
}
