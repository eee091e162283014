//! Snapshot file I/O.
//!
//! Snapshot files are immutable once written. The write path goes through a
//! temp file and a rename so no reader ever observes a partially written
//! snapshot; the read path fails fast before any window is touched.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::models::Snapshot;

pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let bytes = fs::read(path).map_err(|e| invalid(path, e.to_string()))?;
    let snapshot: Snapshot =
        serde_json::from_slice(&bytes).map_err(|e| invalid(path, e.to_string()))?;
    if !snapshot.format_version.starts_with("1.") {
        return Err(invalid(
            path,
            format!("unsupported format_version '{}'", snapshot.format_version),
        ));
    }
    Ok(snapshot)
}

fn invalid(path: &Path, reason: String) -> Error {
    Error::InvalidSnapshot {
        path: path.to_path_buf(),
        reason,
    }
}

/// Writes the snapshot as newline-terminated pretty JSON, atomically.
pub fn write_snapshot(path: &Path, snapshot: &Snapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let tmp = path.with_extension("tmp");
    let mut file = File::create(&tmp)?;
    serde_json::to_writer_pretty(&mut file, snapshot)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    file.write_all(b"\n")?;
    file.sync_all()?;

    fs::rename(tmp, path)?;
    Ok(())
}

/// Deterministic path for a new snapshot under `root/<collection>/`.
///
/// The filename carries minute granularity; a second capture in the same
/// minute gets an explicit `_2`, `_3`, ... suffix instead of overwriting.
pub fn snapshot_file_path(root: &Path, collection_name: &str, stamp: &str) -> PathBuf {
    let dir = root.join(collection_name);
    let base = dir.join(format!("snapshot_{}.json", stamp));
    if !base.exists() {
        return base;
    }
    let mut n = 2u32;
    loop {
        let candidate = dir.join(format!("snapshot_{}_{}.json", stamp, n));
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

/// All snapshot files under `root/<collection>/`, sorted by filename.
pub fn list_snapshots(root: &Path, collection_name: &str) -> Result<Vec<PathBuf>> {
    let dir = root.join(collection_name);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for dent in fs::read_dir(&dir)? {
        let path = dent?.path();
        let name = path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default();
        if name.starts_with("snapshot_") && name.ends_with(".json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
