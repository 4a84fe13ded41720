// Best-effort "save last configuration" support.
// JSON payload with versioning and atomic file writes.

pub mod error;
pub mod manager;
pub mod store;

pub use error::SnapshotError;
pub use manager::SnapshotManager;
pub use store::{DistributionSnapshot, FileSnapshotStore, MemorySnapshotStore, SnapshotStore};

pub const SNAPSHOT_VERSION: u32 = 1;
