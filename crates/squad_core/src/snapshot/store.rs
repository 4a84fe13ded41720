use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{rename, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::error::SnapshotError;
use super::SNAPSHOT_VERSION;
use crate::models::{GameType, TeamDistribution};

/// The whole distribution plus the selection metadata needed to restore the
/// generator screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionSnapshot {
    pub version: u32,
    pub distribution: TeamDistribution,
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(rename = "formationId", default, skip_serializing_if = "Option::is_none")]
    pub formation_id: Option<String>,
    #[serde(rename = "playerCount")]
    pub player_count: usize,
    #[serde(rename = "savedAt")]
    pub saved_at: DateTime<Utc>,
}

impl DistributionSnapshot {
    pub fn of(distribution: &TeamDistribution, player_count: usize) -> Self {
        DistributionSnapshot {
            version: SNAPSHOT_VERSION,
            game_type: distribution.game_type,
            formation_id: distribution.formation.as_ref().map(|f| f.id.clone()),
            player_count,
            saved_at: Utc::now(),
            distribution: distribution.clone(),
        }
    }
}

/// Storage boundary for the "last configuration" snapshot.
///
/// The engine never depends on a specific storage technology; hosts inject
/// whatever fits their platform (a file, browser-local storage, memory).
pub trait SnapshotStore {
    fn save(&self, snapshot: &DistributionSnapshot) -> Result<(), SnapshotError>;
    fn load(&self) -> Result<Option<DistributionSnapshot>, SnapshotError>;
}

/// File-backed store with atomic writes: serialize, write to a temp file,
/// fsync, then rename over the target.
pub struct FileSnapshotStore {
    path: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSnapshotStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save(&self, snapshot: &DistributionSnapshot) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_vec(snapshot)?;
        let temp_path = self.path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(&data)?;
            file.flush()?;
            file.sync_all()?;
        }
        rename(&temp_path, &self.path)?;

        log::debug!("saved {} snapshot bytes to {:?}", data.len(), self.path);
        Ok(())
    }

    fn load(&self) -> Result<Option<DistributionSnapshot>, SnapshotError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&self.path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        let snapshot: DistributionSnapshot = serde_json::from_slice(&data)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::VersionMismatch {
                found: snapshot.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        log::debug!("loaded {} snapshot bytes from {:?}", data.len(), self.path);
        Ok(Some(snapshot))
    }
}

/// In-memory store for tests and hosts that persist elsewhere.
#[derive(Default)]
pub struct MemorySnapshotStore {
    slot: Mutex<Option<DistributionSnapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save(&self, snapshot: &DistributionSnapshot) -> Result<(), SnapshotError> {
        *self.slot.lock().unwrap() = Some(snapshot.clone());
        Ok(())
    }

    fn load(&self) -> Result<Option<DistributionSnapshot>, SnapshotError> {
        Ok(self.slot.lock().unwrap().clone())
    }
}
