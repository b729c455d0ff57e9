//! JSON Schema gate for feature catalogs.
//!
//! The catalog schema ships inside the binary so validation never depends on
//! the working directory. Callers that maintain their own variant can load it
//! from disk instead.

use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;

const BUNDLED_SCHEMA: &str = include_str!("../schema/feature_catalog.schema.json");

/// Compiled catalog schema.
pub struct FeatureSchema {
    compiled: JSONSchema,
    origin: String,
}

impl FeatureSchema {
    /// Schema compiled from the copy embedded at build time.
    pub fn bundled() -> Result<Self> {
        let raw: Value =
            serde_json::from_str(BUNDLED_SCHEMA).context("parsing bundled catalog schema")?;
        Self::from_value(&raw, "bundled catalog schema")
    }

    /// Schema compiled from a file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: Value = serde_json::from_reader(
            File::open(path).with_context(|| format!("opening schema {}", path.display()))?,
        )
        .with_context(|| format!("parsing schema {}", path.display()))?;
        Self::from_value(&raw, &path.display().to_string())
    }

    fn from_value(raw: &Value, origin: &str) -> Result<Self> {
        if raw.get("type").and_then(Value::as_str) != Some("array") {
            bail!("{origin} must describe a top-level array of features");
        }
        // Compilation errors borrow the schema; flatten them to text first.
        let compiled = JSONSchema::compile(raw)
            .map_err(|err| anyhow!("compiling {origin}: {err}"))?;
        Ok(Self {
            compiled,
            origin: origin.to_string(),
        })
    }

    pub fn validate(&self, instance: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(instance) {
            let details = errors
                .map(|err| format!("{} at {}", err, err.instance_path))
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed {} validation:\n{}", self.origin, details);
        }
        Ok(())
    }
}
