use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::fear_greed::IndexRecord;

/// Writes `records` as a pretty-printed JSON array to `path`, replacing any existing
/// file and creating missing parent directories first.
pub fn save_records(records: &[IndexRecord], path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("✔️ Saved: {} ({} days total)", path.display(), records.len());

    Ok(())
}
