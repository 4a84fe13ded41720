use thiserror::Error;

use crate::models::{GameType, Role, Side};

/// Engine error taxonomy.
///
/// Every operation fails atomically: when a mutation returns an error the
/// caller's distribution is untouched and still valid.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DistributionError {
    #[error("at least 2 players are required to generate teams, got {found}")]
    InsufficientPlayers { found: usize },

    #[error("player {player_id} is already selected")]
    AlreadySelected { player_id: u32 },

    #[error("no distribution has been generated yet")]
    NothingGenerated,

    #[error("{side} {role} bucket is full ({limit} max for {game_type})")]
    CapacityExceeded { side: Side, role: Role, limit: usize, game_type: GameType },

    #[error("player {player_id} not found in {location}")]
    PlayerNotFound { player_id: u32, location: String },
}

pub type Result<T> = std::result::Result<T, DistributionError>;
