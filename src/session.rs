//! A loaded catalog plus the hand-off it was started with.
//!
//! A `Session` only exists once the catalog has loaded, so nothing can search
//! an unloaded list. The pending hand-off is consumed by the first call to
//! [`Session::take_pending`] and never again.

use crate::catalog::{Feature, FeatureId, FeatureIndex};
use crate::error::LookupError;
use crate::handoff::HandoffMessage;
use crate::search::SearchResult;
use std::path::Path;

#[derive(Debug)]
pub struct Session {
    index: FeatureIndex,
    pending: Option<HandoffMessage>,
}

/// Outcome of running the hand-off query.
#[derive(Debug)]
pub struct PendingSearch<'a> {
    pub message: HandoffMessage,
    pub outcome: Result<SearchResult<'a>, LookupError>,
}

impl Session {
    /// Load the catalog at `path`. A failure is final for this session.
    pub fn open(path: &Path, handoff: Option<HandoffMessage>) -> Result<Self, LookupError> {
        match FeatureIndex::load(path) {
            Ok(index) => Ok(Self::from_index(index, handoff)),
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::debug!(path = %path.display(), error = %reason, "catalog load failed");
                Err(LookupError::LoadFailure {
                    path: path.to_path_buf(),
                    reason,
                })
            }
        }
    }

    pub fn from_index(index: FeatureIndex, handoff: Option<HandoffMessage>) -> Self {
        Self {
            index,
            pending: handoff,
        }
    }

    pub fn index(&self) -> &FeatureIndex {
        &self.index
    }

    pub fn search(&self, query: &str) -> Result<SearchResult<'_>, LookupError> {
        self.index.search(query)
    }

    pub fn details(&self, id: FeatureId) -> Result<&Feature, LookupError> {
        self.index
            .feature(id)
            .ok_or(LookupError::UnknownFeature { id })
    }

    /// Queue a hand-off read after the catalog loaded, replacing any earlier one.
    pub fn set_pending(&mut self, message: HandoffMessage) {
        self.pending = Some(message);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Run the hand-off query, if one is still pending.
    pub fn take_pending(&mut self) -> Option<PendingSearch<'_>> {
        let message = self.pending.take()?;
        let outcome = self.index.search(&message.query);
        Some(PendingSearch { message, outcome })
    }
}
