//! String-in/string-out JSON boundary.
//!
//! Hosts that cannot link against the crate's types directly (FFI, embedded
//! scripting) call these functions with a JSON request and get back either a
//! JSON response or a `"CODE: message"` error string.

use serde::{Deserialize, Serialize};

use crate::calculator::calculate_distribution;
use crate::error::DistributionError;
use crate::models::{Formation, GameType, Player, Role, Side, TeamDistribution};
use crate::mutator;
use crate::stats::{validate_distribution, ValidationReport};
use crate::SCHEMA_VERSION;

pub mod error_codes {
    pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
    pub const UNSUPPORTED_SCHEMA_VERSION: &str = "UNSUPPORTED_SCHEMA_VERSION";
    pub const INSUFFICIENT_PLAYERS: &str = "INSUFFICIENT_PLAYERS";
    pub const CAPACITY_EXCEEDED: &str = "CAPACITY_EXCEEDED";
    pub const PLAYER_NOT_FOUND: &str = "PLAYER_NOT_FOUND";
    pub const SERIALIZATION_FAILED: &str = "SERIALIZATION_FAILED";
}

fn err_code(code: &str, message: impl std::fmt::Display) -> String {
    format!("{code}: {message}")
}

fn distribution_err(err: DistributionError) -> String {
    let code = match err {
        DistributionError::InsufficientPlayers { .. } => error_codes::INSUFFICIENT_PLAYERS,
        DistributionError::CapacityExceeded { .. } => error_codes::CAPACITY_EXCEEDED,
        DistributionError::PlayerNotFound { .. } => error_codes::PLAYER_NOT_FOUND,
        DistributionError::AlreadySelected { .. } | DistributionError::NothingGenerated => {
            error_codes::INVALID_REQUEST
        }
    };
    err_code(code, err)
}

fn check_schema_version(version: u8) -> Result<(), String> {
    if version == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(err_code(
            error_codes::UNSUPPORTED_SCHEMA_VERSION,
            format!("expected schema_version {}, got {}", SCHEMA_VERSION, version),
        ))
    }
}

fn to_response_json(distribution: TeamDistribution) -> Result<String, String> {
    let validation = validate_distribution(&distribution);
    let response = MutationResponse { schema_version: SCHEMA_VERSION, distribution, validation };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION_FAILED, e))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub schema_version: u8,
    pub players: Vec<Player>,
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(default)]
    pub formation: Option<Formation>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub schema_version: u8,
    pub distribution: TeamDistribution,
    pub validation: ValidationReport,
}

/// Mutation responses carry the replacement distribution plus its validation
/// report; the caller's previous value stays usable on error.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub schema_version: u8,
    pub distribution: TeamDistribution,
    pub validation: ValidationReport,
}

#[derive(Debug, Deserialize)]
struct MoveRequest {
    pub schema_version: u8,
    pub distribution: TeamDistribution,
    #[serde(rename = "playerId")]
    pub player_id: u32,
    #[serde(rename = "fromTeam")]
    pub from_team: Side,
    #[serde(rename = "fromRole")]
    pub from_role: Role,
    #[serde(rename = "toTeam")]
    pub to_team: Side,
    #[serde(rename = "toRole")]
    pub to_role: Role,
}

#[derive(Debug, Deserialize)]
struct SwapRequest {
    pub schema_version: u8,
    pub distribution: TeamDistribution,
    #[serde(rename = "substituteId")]
    pub substitute_id: u32,
    #[serde(rename = "starterId")]
    pub starter_id: u32,
}

#[derive(Debug, Deserialize)]
struct ToggleRequest {
    pub schema_version: u8,
    pub distribution: TeamDistribution,
    #[serde(rename = "playerId")]
    pub player_id: u32,
}

/// Split a player selection into two sides.
pub fn generate_distribution_json(request_json: &str) -> Result<String, String> {
    let request: GenerateRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let distribution =
        calculate_distribution(&request.players, request.game_type, request.formation)
            .map_err(distribution_err)?;

    let validation = validate_distribution(&distribution);
    let response = GenerateResponse { schema_version: SCHEMA_VERSION, distribution, validation };
    serde_json::to_string(&response).map_err(|e| err_code(error_codes::SERIALIZATION_FAILED, e))
}

/// Move a player between buckets of an existing distribution.
pub fn move_player_json(request_json: &str) -> Result<String, String> {
    let request: MoveRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let next = mutator::move_player(
        &request.distribution,
        request.player_id,
        request.from_team,
        request.from_role,
        request.to_team,
        request.to_role,
    )
    .map_err(distribution_err)?;
    to_response_json(next)
}

/// Exchange a substitute with a starter, preserving both slots.
pub fn swap_players_json(request_json: &str) -> Result<String, String> {
    let request: SwapRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let next = mutator::swap_players(&request.distribution, request.substitute_id, request.starter_id)
        .map_err(distribution_err)?;
    to_response_json(next)
}

/// Flip a player between starter and substitute on their own side.
pub fn toggle_role_json(request_json: &str) -> Result<String, String> {
    let request: ToggleRequest = serde_json::from_str(request_json)
        .map_err(|e| err_code(error_codes::INVALID_REQUEST, e))?;
    check_schema_version(request.schema_version)?;

    let next =
        mutator::toggle_role(&request.distribution, request.player_id).map_err(distribution_err)?;
    to_response_json(next)
}
