//! JSON export of the aggregated result set.
//!
//! The file holds one array, pretty-printed with two-space indentation, in
//! result-set order. Non-ASCII characters are written as-is (UTF-8).

use crate::models::NormalizedRecord;
use std::error::Error;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, instrument};

/// Serialize `records` as a JSON array.
pub fn to_json(records: &[NormalizedRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Write `records` to `path`, creating missing parent directories.
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn write_records(records: &[NormalizedRecord], path: &Path) -> Result<(), Box<dyn Error>> {
    let json = to_json(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = fs::create_dir_all(parent).await {
            error!(dir = %parent.display(), error = %e, "Failed to create output dir");
            return Err(e.into());
        }
    }

    fs::write(path, json).await?;
    info!(count = records.len(), "Wrote JSON file");

    Ok(())
}
