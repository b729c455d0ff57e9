//! Indexed view of a loaded feature catalog.
//!
//! The index owns the feature list for the lifetime of a session. It is strict
//! about duplicate ids and blank names so lookups by id stay unambiguous, and
//! it never reorders or mutates the records: search results borrow from it in
//! the catalog's own order.

use crate::catalog::{Feature, FeatureCategory, FeatureId, load_catalog_from_path};
use crate::error::LookupError;
use crate::search::{SearchResult, search};
use anyhow::{Context, Result, bail};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug)]
/// Feature list plus a derived index keyed by feature id.
pub struct FeatureIndex {
    features: Vec<Feature>,
    by_id: BTreeMap<FeatureId, usize>,
}

impl FeatureIndex {
    /// Load and validate the catalog from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let features =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        let index = Self::from_features(features)?;
        tracing::debug!(
            path = %path.display(),
            features = index.len(),
            "feature catalog loaded"
        );
        Ok(index)
    }

    /// Build an index from records already in memory.
    pub fn from_features(features: Vec<Feature>) -> Result<Self> {
        let by_id = build_index(&features)?;
        Ok(Self { features, by_id })
    }

    /// Resolve a feature by id.
    ///
    /// Returns `None` instead of erroring; callers decide how to surface the
    /// miss.
    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.by_id.get(&id).map(|&pos| &self.features[pos])
    }

    /// Records in catalog order.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// Iterates feature ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = FeatureId> + '_ {
        self.by_id.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Record counts per category, recognized categories first.
    pub fn category_counts(&self) -> Vec<(FeatureCategory, usize)> {
        let mut counts: BTreeMap<FeatureCategory, usize> = FeatureCategory::KNOWN
            .iter()
            .cloned()
            .map(|category| (category, 0))
            .collect();
        for feature in &self.features {
            *counts.entry(feature.category.clone()).or_default() += 1;
        }
        counts.into_iter().collect()
    }

    pub fn search(&self, query: &str) -> Result<SearchResult<'_>, LookupError> {
        search(query, &self.features)
    }
}

fn build_index(features: &[Feature]) -> Result<BTreeMap<FeatureId, usize>> {
    if features.is_empty() {
        bail!("catalog contains no features");
    }

    let mut map = BTreeMap::new();
    for (pos, feature) in features.iter().enumerate() {
        if feature.name.trim().is_empty() {
            bail!("feature {} has an empty name", feature.id);
        }
        if map.insert(feature.id, pos).is_some() {
            bail!("duplicate feature id {}", feature.id);
        }
        if !feature.category.is_known() {
            tracing::warn!(
                id = %feature.id,
                category = feature.category.as_str(),
                "feature uses an unrecognized category; category queries will skip it"
            );
        }
    }
    Ok(map)
}
