//! JSON file helpers
//!
//! Every data file is replaced in one step: the new contents go to a sibling
//! temp file, are synced, and then renamed over the old file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::ExpensioError;

/// Read JSON from a file, returning a default value if file doesn't exist
pub fn read_json<T, P>(path: P) -> Result<T, ExpensioError>
where
    T: DeserializeOwned + Default,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        tracing::debug!(path = %path.display(), "data file missing, using defaults");
        return Ok(T::default());
    }

    let file = File::open(path).map_err(|e| {
        ExpensioError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        ExpensioError::Storage(format!("Failed to parse {}: {}", path.display(), e))
    })
}

/// Write JSON to a file atomically (write to temp, then rename)
pub fn write_json_atomic<T, P>(path: P, data: &T) -> Result<(), ExpensioError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let storage_err = |what: &str, e: std::io::Error| {
        ExpensioError::Storage(format!("Failed to {} {}: {}", what, path.display(), e))
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| storage_err("create directory for", e))?;
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| storage_err("create temp file for", e))?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, data)
        .map_err(|e| ExpensioError::Storage(format!("Failed to serialize data: {}", e)))?;
    writer.flush().map_err(|e| storage_err("flush", e))?;
    writer.get_ref().sync_all().map_err(|e| storage_err("sync", e))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        storage_err("replace", e)
    })?;

    tracing::debug!(path = %path.display(), "wrote data file");
    Ok(())
}
