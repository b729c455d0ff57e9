//! User-facing lookup failures.
//!
//! Every variant is terminal where it is detected and maps to exactly one
//! notice; nothing here is retried.

use crate::catalog::{FeatureCategory, FeatureId};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("failed to load feature catalog {}: {reason}", path.display())]
    LoadFailure { path: PathBuf, reason: String },

    #[error("Please enter a feature name to search")]
    EmptyQuery,

    #[error("No features found for \"{query}\"")]
    NoMatch { query: String },

    #[error("No {category} features found")]
    EmptyCategory { category: FeatureCategory },

    #[error("no feature with id {id}")]
    UnknownFeature { id: FeatureId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl LookupError {
    pub fn severity(&self) -> Severity {
        match self {
            LookupError::EmptyQuery => Severity::Warning,
            LookupError::LoadFailure { .. }
            | LookupError::NoMatch { .. }
            | LookupError::EmptyCategory { .. }
            | LookupError::UnknownFeature { .. } => Severity::Error,
        }
    }

    /// Empty results are expected outcomes, not faults in the catalog.
    pub fn is_empty_result(&self) -> bool {
        matches!(
            self,
            LookupError::NoMatch { .. } | LookupError::EmptyCategory { .. }
        )
    }
}
