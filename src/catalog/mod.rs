//! Feature catalog wiring.
//!
//! This module wraps the compatibility catalog on disk (by default
//! `data/feature_compat.json`) so callers can load a validated snapshot once
//! and look records up by id. Types here mirror the catalog fields; callers use
//! `FeatureIndex` for lookups and searching.

pub mod identity;
pub mod index;
pub mod model;

pub use identity::{Browser, FeatureCategory, FeatureId};
pub use index::FeatureIndex;
pub use model::{
    Feature, SupportCategory, SupportEntry, SupportMatrix, load_catalog_from_path, parse_catalog,
};

/// Default relative path to the bundled feature catalog.
pub const DEFAULT_CATALOG_PATH: &str = "data/feature_compat.json";
