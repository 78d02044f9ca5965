//! Snapshot persistence.

use async_trait::async_trait;

use crate::core::Snapshot;

pub mod snapshot;

pub use snapshot::{
    JsonFileStore, SnapshotError, decode_snapshot, encode_snapshot, read_snapshot,
    write_snapshot_atomic,
};

/// Snapshot file used when no path is given on the command line.
pub const DEFAULT_SNAPSHOT_FILE: &str = "persist.json";

/// Durable home of the task list.
///
/// Implementations are called from background tasks only; the dispatcher never
/// awaits them directly.
#[async_trait]
pub trait SnapshotStore: Send + Sync {
    /// Reads the stored snapshot, or `None` if nothing has been saved yet.
    async fn load(&self) -> Result<Option<Snapshot>, SnapshotError>;

    /// Replaces the stored snapshot with `snapshot`.
    async fn save(&self, snapshot: Snapshot) -> Result<(), SnapshotError>;
}
