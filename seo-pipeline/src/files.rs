//! YAML state-file helpers shared by the CLI commands.
//!
//! The CLI passes pipeline state between invocations as YAML files
//! (business profile in, plan bundle out, plan bundle in, article batch
//! out). The orchestrator itself never touches the filesystem.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use seo_pipeline_sdk::log_file_saved;
use std::path::Path;

/// Load a YAML file into a typed structure
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_yaml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Serialize a value as YAML and write it to `path`
pub fn save_yaml<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = serde_yaml::to_string(value).context("Failed to serialize YAML")?;
    std::fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))?;
    log_file_saved!(path.display());
    Ok(())
}
