//! Row files: JSON arrays or YAML sequences standing in for fetched rows.

use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{BrainyError, Result};

/// Load every row from `path`. `.yaml`/`.yml` is YAML, anything else JSON.
pub fn load_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = std::fs::read_to_string(path).map_err(|e| BrainyError::io(path, e))?;
    let rows: Vec<T> = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => {
            serde_yaml::from_str(&content).map_err(|e| BrainyError::parse(path, e.to_string()))?
        }
        _ => serde_json::from_str(&content).map_err(|e| BrainyError::parse(path, e.to_string()))?,
    };
    info!(path = %path.display(), rows = rows.len(), "loaded rows");
    Ok(rows)
}
