//! # squad_core - Balanced Team Distribution Engine
//!
//! Splits a selected roster into two balanced sides (starters plus bench)
//! for 5v5, 7v7 and 11v11 formats, and keeps the split valid through manual
//! moves, swaps and role toggles.
//!
//! ## Features
//! - Deterministic distribution (same selection = same teams)
//! - Capacity-checked mutations that never corrupt the caller's state
//! - JSON API for easy integration with UI hosts
//! - Best-effort snapshot of the last configuration

pub mod api;
pub mod calculator;
pub mod error;
pub mod models;
pub mod mutator;
pub mod session;
pub mod snapshot;
pub mod stats;

#[cfg(test)]
mod invariants_test;

// Re-export main API functions
pub use api::{
    generate_distribution_json, move_player_json, swap_players_json, toggle_role_json,
    GenerateRequest, GenerateResponse,
};
pub use calculator::calculate_distribution;
pub use error::{DistributionError, Result};
pub use models::{
    GameConfiguration, GameType, Player, PositionZone, Role, Side, TeamDistribution, TeamSection,
};
pub use mutator::{move_player, swap_players, toggle_role};
pub use session::TeamGenerator;
pub use snapshot::{DistributionSnapshot, FileSnapshotStore, SnapshotStore};
pub use stats::{distribution_stats, validate_distribution, DistributionStats, ValidationReport};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON boundary schema version; requests carrying another value are refused.
pub const SCHEMA_VERSION: u8 = 1;
