//! Cross-browser support classification.

use crate::catalog::{Browser, Feature};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SupportLevel {
    FullySupported,
    PartiallySupported,
    NotSupported,
}

impl SupportLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SupportLevel::FullySupported => "fully-supported",
            SupportLevel::PartiallySupported => "partially-supported",
            SupportLevel::NotSupported => "not-supported",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupportLevel::FullySupported => "Widely Available",
            SupportLevel::PartiallySupported => "Limited Support",
            SupportLevel::NotSupported => "Not Supported",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            SupportLevel::FullySupported => "\u{2705}",
            SupportLevel::PartiallySupported => "\u{26a0}\u{fe0f}",
            SupportLevel::NotSupported => "\u{274c}",
        }
    }
}

impl fmt::Display for SupportLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts the browsers reporting `widely_available` and buckets the feature.
pub fn classify(feature: &Feature) -> SupportLevel {
    let supported = Browser::ALL
        .iter()
        .filter(|&&browser| feature.support(browser).is_widely_available())
        .count();

    if supported == Browser::ALL.len() {
        SupportLevel::FullySupported
    } else if supported > 0 {
        SupportLevel::PartiallySupported
    } else {
        SupportLevel::NotSupported
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{
        FeatureCategory, FeatureId, SupportCategory, SupportEntry, SupportMatrix,
    };

    fn entry(category: &str) -> SupportEntry {
        SupportEntry {
            version: None,
            category: SupportCategory::from(category),
            notes: String::new(),
        }
    }

    fn with_support(chrome: &str, firefox: &str, safari: &str, edge: &str) -> Feature {
        Feature {
            id: FeatureId(1),
            name: "Container queries".to_string(),
            description: String::new(),
            category: FeatureCategory::Css,
            support_status: SupportMatrix {
                chrome: entry(chrome),
                firefox: entry(firefox),
                safari: entry(safari),
                edge: entry(edge),
            },
        }
    }

    #[test]
    fn all_widely_available_is_fully_supported() {
        let feature = with_support(
            "widely_available",
            "widely_available",
            "widely_available",
            "widely_available",
        );
        assert_eq!(classify(&feature), SupportLevel::FullySupported);
    }

    #[test]
    fn one_browser_short_is_partial() {
        let feature = with_support(
            "widely_available",
            "widely_available",
            "limited",
            "widely_available",
        );
        assert_eq!(classify(&feature), SupportLevel::PartiallySupported);
    }

    #[test]
    fn limited_everywhere_is_not_supported() {
        let feature = with_support("limited", "limited", "unsupported", "limited");
        assert_eq!(classify(&feature), SupportLevel::NotSupported);
    }

    #[test]
    fn levels_serialize_as_slugs() {
        assert_eq!(
            serde_json::to_string(&SupportLevel::PartiallySupported).unwrap(),
            "\"partially-supported\""
        );
        assert_eq!(SupportLevel::NotSupported.label(), "Not Supported");
    }
}
