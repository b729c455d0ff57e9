//! Feature lookup over an immutable catalog slice.
//!
//! A query takes exactly one of two paths. If it names a recognized category
//! it yields a category batch drawn from the whole catalog; otherwise it picks
//! a single best match from the substring hits. The paths never merge: a
//! category name that also appears inside some description is still served as
//! a category batch.

use crate::catalog::{Feature, FeatureCategory};
use crate::classify::{SupportLevel, classify};
use crate::error::LookupError;

/// Upper bound on records returned for a category query.
pub const CATEGORY_LIMIT: usize = 12;
/// Cards per row when a category batch is laid out.
pub const ROW_WIDTH: usize = 3;

/// A trimmed, case-folded, non-empty query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn parse(raw: &str) -> Result<Self, LookupError> {
        let folded = raw.trim().to_lowercase();
        if folded.is_empty() {
            return Err(LookupError::EmptyQuery);
        }
        Ok(Self(folded))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn category(&self) -> Option<FeatureCategory> {
        FeatureCategory::recognize(&self.0)
    }

    fn hits(&self, feature: &Feature) -> bool {
        feature.name.to_lowercase().contains(&self.0)
            || feature.description.to_lowercase().contains(&self.0)
            || feature.category.as_str().to_lowercase().contains(&self.0)
    }
}

#[derive(Debug)]
pub enum SearchResult<'a> {
    Category(CategoryBatch<'a>),
    Single(BestMatch<'a>),
}

impl<'a> SearchResult<'a> {
    /// Records to render, in display order.
    pub fn features(&self) -> Vec<&'a Feature> {
        match self {
            SearchResult::Category(batch) => batch.features.clone(),
            SearchResult::Single(best) => vec![best.feature],
        }
    }

    /// Records paired with their computed support level.
    pub fn classified(&self) -> Vec<(&'a Feature, SupportLevel)> {
        self.features()
            .into_iter()
            .map(|feature| (feature, classify(feature)))
            .collect()
    }
}

#[derive(Debug)]
pub struct CategoryBatch<'a> {
    pub category: FeatureCategory,
    pub features: Vec<&'a Feature>,
}

impl<'a> CategoryBatch<'a> {
    pub fn rows(&self) -> impl Iterator<Item = &[&'a Feature]> {
        self.features.chunks(ROW_WIDTH)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchRule {
    ExactName,
    NamePrefix,
    FirstHit,
}

#[derive(Debug)]
pub struct BestMatch<'a> {
    pub query: Query,
    pub feature: &'a Feature,
    pub rule: MatchRule,
    /// Every substring hit, in catalog order.
    pub candidates: Vec<&'a Feature>,
}

/// Run a query against the catalog.
pub fn search<'a>(raw: &str, features: &'a [Feature]) -> Result<SearchResult<'a>, LookupError> {
    let query = Query::parse(raw)?;

    let hits: Vec<&Feature> = features.iter().filter(|f| query.hits(f)).collect();
    if hits.is_empty() {
        tracing::debug!(query = query.as_str(), "no substring hits");
        return Err(LookupError::NoMatch {
            query: query.as_str().to_string(),
        });
    }

    if let Some(category) = query.category() {
        let batch = category_batch(category, features)?;
        tracing::debug!(
            category = %batch.category,
            returned = batch.features.len(),
            "category query"
        );
        return Ok(SearchResult::Category(batch));
    }

    let (feature, rule) = best_match(&query, &hits);
    tracing::debug!(
        query = query.as_str(),
        id = %feature.id,
        rule = ?rule,
        candidates = hits.len(),
        "name query"
    );
    Ok(SearchResult::Single(BestMatch {
        query,
        feature,
        rule,
        candidates: hits,
    }))
}

/// First `CATEGORY_LIMIT` records of the category, in catalog order.
pub fn category_batch(
    category: FeatureCategory,
    features: &[Feature],
) -> Result<CategoryBatch<'_>, LookupError> {
    let selected: Vec<&Feature> = features
        .iter()
        .filter(|feature| feature.category == category)
        .take(CATEGORY_LIMIT)
        .collect();
    if selected.is_empty() {
        return Err(LookupError::EmptyCategory { category });
    }
    Ok(CategoryBatch {
        category,
        features: selected,
    })
}

fn best_match<'a>(query: &Query, hits: &[&'a Feature]) -> (&'a Feature, MatchRule) {
    let needle = query.as_str();
    if let Some(exact) = hits.iter().copied().find(|f| f.name.to_lowercase() == needle) {
        return (exact, MatchRule::ExactName);
    }
    if let Some(prefixed) = hits
        .iter()
        .copied()
        .find(|f| f.name.to_lowercase().starts_with(needle))
    {
        return (prefixed, MatchRule::NamePrefix);
    }
    (hits[0], MatchRule::FirstHit)
}
