//! Caller-side session state for the team generator screen.
//!
//! Owns the player selection, the current format/formation choice and the
//! current distribution, and routes every change through the calculator and
//! mutator so the held distribution is always the last valid one.

use crate::calculator::calculate_distribution;
use crate::error::{DistributionError, Result};
use crate::models::{Formation, GameType, Player, Role, Side, TeamDistribution};
use crate::mutator;
use crate::snapshot::{DistributionSnapshot, SnapshotError, SnapshotManager, SnapshotStore};

pub struct TeamGenerator {
    selected_players: Vec<Player>,
    game_type: GameType,
    formation: Option<Formation>,
    distribution: Option<TeamDistribution>,
    store: Option<Box<dyn SnapshotStore>>,
}

impl TeamGenerator {
    pub fn new(game_type: GameType) -> Self {
        TeamGenerator {
            selected_players: Vec::new(),
            game_type,
            formation: Some(Formation::default_for(game_type)),
            distribution: None,
            store: None,
        }
    }

    /// Attach a snapshot store for save/load of the last configuration.
    pub fn with_store(mut self, store: Box<dyn SnapshotStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn selection(&self) -> &[Player] {
        &self.selected_players
    }

    pub fn game_type(&self) -> GameType {
        self.game_type
    }

    pub fn formation(&self) -> Option<&Formation> {
        self.formation.as_ref()
    }

    pub fn distribution(&self) -> Option<&TeamDistribution> {
        self.distribution.as_ref()
    }

    pub fn can_generate(&self) -> bool {
        self.selected_players.len() >= 2
    }

    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if self.selected_players.iter().any(|p| p.id == player.id) {
            return Err(DistributionError::AlreadySelected { player_id: player.id });
        }
        self.selected_players.push(player);
        Ok(())
    }

    /// Removing an id that is not selected is a no-op.
    pub fn remove_player(&mut self, player_id: u32) {
        self.selected_players.retain(|p| p.id != player_id);
    }

    /// Drop the selection and the distribution derived from it.
    pub fn clear_selection(&mut self) {
        self.selected_players.clear();
        self.distribution = None;
    }

    pub fn generate(&mut self) -> Result<&TeamDistribution> {
        let formation = self
            .formation
            .clone()
            .unwrap_or_else(|| Formation::default_for(self.game_type));
        let distribution =
            calculate_distribution(&self.selected_players, self.game_type, Some(formation))?;
        self.distribution = Some(distribution);
        Ok(self.distribution.as_ref().unwrap())
    }

    pub fn regenerate(&mut self) -> Result<&TeamDistribution> {
        self.generate()
    }

    /// Change the format; picks that format's stock formation and regenerates
    /// when a distribution already exists.
    pub fn set_game_type(&mut self, game_type: GameType) -> Result<()> {
        self.game_type = game_type;
        self.formation = Some(Formation::default_for(game_type));
        if self.distribution.is_some() {
            self.generate()?;
        }
        Ok(())
    }

    /// Change the formation hint; regenerates when a distribution exists.
    pub fn set_formation(&mut self, formation: Option<Formation>) -> Result<()> {
        self.formation = formation;
        if self.distribution.is_some() {
            self.generate()?;
        }
        Ok(())
    }

    pub fn move_player(
        &mut self,
        player_id: u32,
        from_side: Side,
        from_role: Role,
        to_side: Side,
        to_role: Role,
    ) -> Result<&TeamDistribution> {
        let current = self.distribution.as_ref().ok_or(DistributionError::NothingGenerated)?;
        let next =
            mutator::move_player(current, player_id, from_side, from_role, to_side, to_role)?;
        self.distribution = Some(next);
        Ok(self.distribution.as_ref().unwrap())
    }

    pub fn swap_players(
        &mut self,
        substitute_id: u32,
        starter_id: u32,
    ) -> Result<&TeamDistribution> {
        let current = self.distribution.as_ref().ok_or(DistributionError::NothingGenerated)?;
        let next = mutator::swap_players(current, substitute_id, starter_id)?;
        self.distribution = Some(next);
        Ok(self.distribution.as_ref().unwrap())
    }

    pub fn toggle_role(&mut self, player_id: u32) -> Result<&TeamDistribution> {
        let current = self.distribution.as_ref().ok_or(DistributionError::NothingGenerated)?;
        let next = mutator::toggle_role(current, player_id)?;
        self.distribution = Some(next);
        Ok(self.distribution.as_ref().unwrap())
    }

    /// Snapshot the current configuration. The write is best-effort: a store
    /// failure is logged and the snapshot still returned.
    pub fn save_configuration(&self) -> Result<DistributionSnapshot> {
        let distribution =
            self.distribution.as_ref().ok_or(DistributionError::NothingGenerated)?;
        let snapshot = DistributionSnapshot::of(distribution, self.selected_players.len());
        match self.store {
            Some(ref store) => {
                SnapshotManager::save_best_effort(store.as_ref(), &snapshot);
            }
            None => log::debug!("no snapshot store attached, keeping snapshot in memory only"),
        }
        Ok(snapshot)
    }

    /// Restore the last saved configuration, replacing the held distribution
    /// and format. Returns `Ok(None)` when nothing was saved or no store is
    /// attached.
    pub fn load_saved_configuration(
        &mut self,
    ) -> std::result::Result<Option<DistributionSnapshot>, SnapshotError> {
        let store = match self.store {
            Some(ref store) => store.as_ref(),
            None => return Ok(None),
        };
        let snapshot = SnapshotManager::restore(store)?;
        if let Some(ref snap) = snapshot {
            self.game_type = snap.distribution.game_type;
            self.formation = snap.distribution.formation.clone();
            self.distribution = Some(snap.distribution.clone());
        }
        Ok(snapshot)
    }
}
