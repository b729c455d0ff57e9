#![allow(dead_code)]

use anyhow::{Context, Result};
use feature_compat::{DEFAULT_CATALOG_PATH, Feature, FeatureIndex};
use serde_json::{Value, json};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::NamedTempFile;

pub const WIDE: &str = "widely_available";
pub const LIMITED: &str = "limited";
pub const NONE: &str = "unsupported";

pub fn repo_catalog_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_CATALOG_PATH)
}

pub fn cli_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_feature-compat"))
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.env_remove("RUST_LOG")
        .env_remove("FEATURE_COMPAT_CATALOG")
        .env_remove("FEATURE_COMPAT_STATE_DIR");
    cmd.output()
        .with_context(|| format!("failed to execute {:?}", cmd.get_program()))
}

/// Feature record as it appears in a catalog file.
pub fn feature_json(id: u64, name: &str, description: &str, category: &str) -> Value {
    feature_json_with_support(id, name, description, category, [WIDE; 4])
}

pub fn feature_json_with_support(
    id: u64,
    name: &str,
    description: &str,
    category: &str,
    support: [&str; 4],
) -> Value {
    let entry = |category: &str| {
        let version = if category == NONE { Value::Null } else { json!("100") };
        json!({"version": version, "category": category, "notes": ""})
    };
    json!({
        "id": id,
        "name": name,
        "description": description,
        "category": category,
        "support_status": {
            "chrome": entry(support[0]),
            "firefox": entry(support[1]),
            "safari": entry(support[2]),
            "edge": entry(support[3]),
        }
    })
}

pub fn features_from(records: Vec<Value>) -> Result<Vec<Feature>> {
    serde_json::from_value(Value::Array(records)).context("fixture records should deserialize")
}

pub fn write_catalog(records: &[Value]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    serde_json::to_writer(&mut file, records)?;
    file.flush()?;
    Ok(file)
}

pub fn write_raw_catalog(contents: &str) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(contents.as_bytes())?;
    file.flush()?;
    Ok(file)
}

pub fn sample_index(records: Vec<Value>) -> Result<FeatureIndex> {
    FeatureIndex::from_features(features_from(records)?)
}
