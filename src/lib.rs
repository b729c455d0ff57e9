//! Searchable catalog of web-platform feature compatibility.
//!
//! Load a catalog once with [`Session::open`] or [`FeatureIndex::load`], then
//! run [`search`] queries against it and [`classify`] the records you get
//! back. Rendering lives in [`view`]; nothing in the lookup path produces
//! markup.

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod classify;
pub mod docs;
pub mod error;
pub mod handoff;
pub mod logging;
pub mod schema_loader;
pub mod search;
pub mod session;
pub mod view;

pub use catalog::{
    Browser, DEFAULT_CATALOG_PATH, Feature, FeatureCategory, FeatureId, FeatureIndex,
    SupportCategory, SupportEntry, SupportMatrix, load_catalog_from_path, parse_catalog,
};
pub use classify::{SupportLevel, classify};
pub use docs::{DocSite, documentation_url};
pub use error::{LookupError, Severity};
pub use handoff::{HandoffMessage, HandoffStore};
pub use schema_loader::FeatureSchema;
pub use search::{
    BestMatch, CATEGORY_LIMIT, CategoryBatch, MatchRule, Query, ROW_WIDTH, SearchResult, search,
};
pub use session::{PendingSearch, Session};
pub use view::{FeatureCard, FeatureDetail, Notice, ResultView};

const ENV_ROOT: &str = "FEATURE_COMPAT_ROOT";
const ENV_CATALOG: &str = "FEATURE_COMPAT_CATALOG";

fn is_data_root(candidate: &Path) -> bool {
    candidate.join(DEFAULT_CATALOG_PATH).is_file()
}

fn data_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_data_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_data_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the directory holding `data/feature_compat.json`.
///
/// Checks `FEATURE_COMPAT_ROOT`, the executable's ancestors, the build-time
/// `FEATURE_COMPAT_ROOT_HINT`, then the working directory's ancestors.
pub fn find_data_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var(ENV_ROOT) {
        if let Some(root) = data_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("FEATURE_COMPAT_ROOT_HINT") {
        if let Some(root) = data_root_from_hint(hint) {
            return Ok(root);
        }
    }

    if let Ok(cwd) = env::current_dir() {
        if let Some(root) = search_upwards(&cwd) {
            return Ok(root);
        }
    }

    bail!(
        "Unable to locate {DEFAULT_CATALOG_PATH}. Pass --catalog, or set {ENV_CATALOG} or {ENV_ROOT}."
    );
}

pub fn default_catalog_path(root: &Path) -> PathBuf {
    root.join(DEFAULT_CATALOG_PATH)
}

/// Pick the catalog file: explicit path, then `FEATURE_COMPAT_CATALOG`, then
/// the discovered data root.
pub fn resolve_catalog_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(path) = env::var_os(ENV_CATALOG).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    Ok(default_catalog_path(&find_data_root()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_root_with_catalog() -> TempDir {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("data");
        fs::create_dir_all(&data_dir).unwrap();
        fs::write(data_dir.join("feature_compat.json"), "[]").unwrap();
        temp
    }

    #[test]
    fn hint_accepts_directory_with_catalog() {
        let temp = temp_root_with_catalog();
        let hint = temp.path().to_str().unwrap();
        let resolved = data_root_from_hint(hint).unwrap();
        assert_eq!(resolved, fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn hint_rejects_directory_without_catalog() {
        let temp = TempDir::new().unwrap();
        assert!(data_root_from_hint(temp.path().to_str().unwrap()).is_none());
        assert!(data_root_from_hint("").is_none());
    }

    #[test]
    fn search_upwards_finds_ancestor_root() {
        let temp = temp_root_with_catalog();
        let nested = temp.path().join("a/b/c");
        fs::create_dir_all(&nested).unwrap();
        let found = search_upwards(&nested).unwrap();
        assert_eq!(found, fs::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn explicit_catalog_path_wins() {
        let path = Path::new("/tmp/custom.json");
        assert_eq!(resolve_catalog_path(Some(path)).unwrap(), path);
    }
}
