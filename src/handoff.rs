//! One-shot query hand-off between invocations.
//!
//! A front page stashes the query a user typed; the lookup session picks it up
//! on start and runs it exactly once. The slot is a single JSON file in a state
//! directory. Writes go through a temp file and a rename so a reader never
//! observes a half-written message, and `take` deletes the slot before
//! returning so the same message cannot trigger twice.

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const SLOT_FILE: &str = "handoff.json";
const STATE_DIR_NAME: &str = "feature-compat";
const ENV_STATE_DIR: &str = "FEATURE_COMPAT_STATE_DIR";

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct HandoffMessage {
    pub query: String,
    #[serde(default)]
    pub scroll_to_results: bool,
}

impl HandoffMessage {
    pub fn new(query: impl Into<String>, scroll_to_results: bool) -> Self {
        Self {
            query: query.into(),
            scroll_to_results,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HandoffStore {
    dir: PathBuf,
}

impl HandoffStore {
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at `FEATURE_COMPAT_STATE_DIR`, falling back to the
    /// platform's local data directory and finally the temp directory.
    pub fn from_env() -> Self {
        if let Some(dir) = std::env::var_os(ENV_STATE_DIR).filter(|v| !v.is_empty()) {
            return Self::at(dir);
        }
        let base = dirs::data_local_dir().unwrap_or_else(std::env::temp_dir);
        Self::at(base.join(STATE_DIR_NAME))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot(&self) -> PathBuf {
        self.dir.join(SLOT_FILE)
    }

    /// Replace any pending message with `message`.
    pub fn stash(&self, message: &HandoffMessage) -> Result<()> {
        if message.query.trim().is_empty() {
            bail!("refusing to stash an empty hand-off query");
        }
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating state directory {}", self.dir.display()))?;

        let mut tmp = NamedTempFile::new_in(&self.dir)
            .with_context(|| format!("creating temp file in {}", self.dir.display()))?;
        serde_json::to_writer(&mut tmp, message).context("serializing hand-off message")?;
        tmp.flush()?;
        let slot = self.slot();
        tmp.persist(&slot)
            .with_context(|| format!("writing hand-off slot {}", slot.display()))?;
        tracing::debug!(slot = %slot.display(), "hand-off message stashed");
        Ok(())
    }

    /// Consume the pending message, if any.
    ///
    /// The slot is removed even when its contents fail to parse so a corrupt
    /// message is reported once rather than on every start.
    pub fn take(&self) -> Result<Option<HandoffMessage>> {
        let slot = self.slot();
        let data = match fs::read_to_string(&slot) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("reading hand-off slot {}", slot.display()));
            }
        };
        fs::remove_file(&slot)
            .with_context(|| format!("clearing hand-off slot {}", slot.display()))?;

        let message: HandoffMessage = serde_json::from_str(&data)
            .with_context(|| format!("parsing hand-off slot {}", slot.display()))?;
        tracing::debug!(query = %message.query, "hand-off message consumed");
        Ok(Some(message))
    }

    /// Whether a message is waiting, without consuming it.
    pub fn is_pending(&self) -> bool {
        self.slot().is_file()
    }
}
