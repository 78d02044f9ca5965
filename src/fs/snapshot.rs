//! JSON snapshot file format and the file-backed store.
//!
//! The file is a pretty-printed object:
//!
//! ```json
//! {
//!   "tasks": [
//!     { "id": 1, "name": "do anything", "done": true }
//!   ],
//!   "next_id": 2
//! }
//! ```
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so a reader never sees a half-written file.

use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Deserialize;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::SnapshotStore;
use crate::core::{Snapshot, Task, TaskId};

/// Failures while reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed snapshot: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("task id {0} leaves no room for new ids")]
    IdOverflow(TaskId),
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("snapshot worker stopped: {0}")]
    Worker(#[from] tokio::task::JoinError),
}

/// On-disk shape before repair. Both fields may be absent or null.
#[derive(Debug, Deserialize)]
struct RawSnapshot {
    #[serde(default)]
    tasks: Option<Vec<Task>>,
    #[serde(default)]
    next_id: Option<TaskId>,
}

/// Parses snapshot JSON and repairs the id counter.
///
/// Returns `Ok(None)` when the document holds no task list at all, which
/// counts as nothing saved. An empty list is a real, empty snapshot.
///
/// # Errors
///
/// Returns [`SnapshotError::Decode`] if `json` is not a snapshot object, or
/// [`SnapshotError::IdOverflow`] if a task id leaves no successor id.
pub fn decode_snapshot(json: &str) -> Result<Option<Snapshot>, SnapshotError> {
    let raw: RawSnapshot = serde_json::from_str(json).map_err(SnapshotError::Decode)?;
    let Some(tasks) = raw.tasks else {
        return Ok(None);
    };
    if let Some(task) = tasks.iter().find(|task| task.id == TaskId::MAX) {
        return Err(SnapshotError::IdOverflow(task.id));
    }
    Ok(Some(Snapshot::repaired(tasks, raw.next_id)))
}

/// Serializes a snapshot as indented JSON.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode_snapshot(snapshot: &Snapshot) -> Result<String, SnapshotError> {
    serde_json::to_string_pretty(snapshot).map_err(SnapshotError::Encode)
}

/// Reads a snapshot file.
///
/// Returns `Ok(None)` when the file does not exist or holds no task list.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or decoded.
pub async fn read_snapshot(path: &Path) -> Result<Option<Snapshot>, SnapshotError> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => decode_snapshot(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(SnapshotError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replaces the file at `path` with `snapshot`.
///
/// The parent directory is created if missing. This performs blocking I/O.
///
/// # Errors
///
/// Returns an error if encoding, writing, or the final rename fails. On
/// failure the previous file content is left untouched.
pub fn write_snapshot_atomic(path: &Path, snapshot: &Snapshot) -> Result<(), SnapshotError> {
    let json = encode_snapshot(snapshot)?;
    let write_err = |source| SnapshotError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(write_err)?;

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(json.as_bytes()).map_err(write_err)?;
    temp.write_all(b"\n").map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;
    temp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}

/// Snapshot store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SnapshotStore for JsonFileStore {
    async fn load(&self) -> Result<Option<Snapshot>, SnapshotError> {
        let result = read_snapshot(&self.path).await;
        match &result {
            Ok(Some(snapshot)) => info!(
                path = %self.path.display(),
                tasks = snapshot.tasks.len(),
                next_id = snapshot.next_id,
                "snapshot loaded"
            ),
            Ok(None) => info!(path = %self.path.display(), "no snapshot file yet"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "snapshot load failed"),
        }
        result
    }

    async fn save(&self, snapshot: Snapshot) -> Result<(), SnapshotError> {
        let path = self.path.clone();
        let result =
            tokio::task::spawn_blocking(move || write_snapshot_atomic(&path, &snapshot)).await?;
        match &result {
            Ok(()) => debug!(path = %self.path.display(), "snapshot saved"),
            Err(e) => warn!(path = %self.path.display(), error = %e, "snapshot save failed"),
        }
        result
    }
}
