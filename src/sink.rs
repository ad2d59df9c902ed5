//! Result sink: persists one JSON record per processed document.
//!
//! Records are pretty-printed JSON named after the source document's stem
//! (`report.pdf` → `report.json`). The output directory is created on
//! demand. A sink failure is scoped to its document; the batch continues.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::models::ResultSet;

/// Write `result` for the document at `source`, returning the output path.
pub fn write_result(output_dir: &Path, source: &Path, result: &ResultSet) -> Result<PathBuf> {
    std::fs::create_dir_all(output_dir).with_context(|| {
        format!("Failed to create output directory: {}", output_dir.display())
    })?;

    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "result".to_string());
    let path = output_dir.join(format!("{}.json", stem));

    let json = serde_json::to_string_pretty(result)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write result: {}", path.display()))?;

    Ok(path)
}
