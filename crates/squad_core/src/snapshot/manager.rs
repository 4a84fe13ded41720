use once_cell::sync::Lazy;
use std::sync::Mutex;

use super::error::SnapshotError;
use super::store::{DistributionSnapshot, SnapshotStore};

// Last snapshot handed to a store, kept for quick restoration without a read.
static CURRENT_SNAPSHOT: Lazy<Mutex<Option<DistributionSnapshot>>> =
    Lazy::new(|| Mutex::new(None));

pub struct SnapshotManager;

impl SnapshotManager {
    pub fn current() -> Option<DistributionSnapshot> {
        CURRENT_SNAPSHOT.lock().unwrap().clone()
    }

    pub fn set_current(snapshot: DistributionSnapshot) {
        *CURRENT_SNAPSHOT.lock().unwrap() = Some(snapshot);
    }

    pub fn clear_current() {
        *CURRENT_SNAPSHOT.lock().unwrap() = None;
    }

    /// Persist a snapshot, swallowing failures.
    ///
    /// Losing a save is not a correctness failure for the engine, so a store
    /// error is logged and reported as `false` instead of propagating.
    pub fn save_best_effort(store: &dyn SnapshotStore, snapshot: &DistributionSnapshot) -> bool {
        match store.save(snapshot) {
            Ok(()) => {
                Self::set_current(snapshot.clone());
                log::debug!("snapshot saved ({} players)", snapshot.player_count);
                true
            }
            Err(err) => {
                log::warn!("snapshot save skipped: {}", err);
                false
            }
        }
    }

    /// Load the stored snapshot, updating the in-memory slot on success.
    pub fn restore(store: &dyn SnapshotStore) -> Result<Option<DistributionSnapshot>, SnapshotError> {
        let snapshot = store.load()?;
        if let Some(ref snap) = snapshot {
            Self::set_current(snap.clone());
            log::info!("snapshot restored ({} players, {})", snap.player_count, snap.game_type);
        }
        Ok(snapshot)
    }
}
