//! Distribution Calculator.
//!
//! Produces an initial, reasonably balanced `TeamDistribution` from an
//! unordered player selection and a game format. Fully deterministic: the
//! same selection in the same order always yields the same buckets.

use chrono::Utc;

use crate::error::{DistributionError, Result};
use crate::models::{
    Formation, GameConfiguration, GameType, Player, Side, TeamDistribution, TeamSection,
};

/// Split `players` into two sides for `game_type`.
///
/// Players are ranked by `skill_level` descending (stable, so input order
/// breaks ties) and dealt to the sides in a snake pattern: ranks 1,4,5,8,9,…
/// go home, ranks 2,3,6,7,10,… go away. Interleaving high and low ranks this
/// way keeps the starter skill sums near-equal even for skewed rosters.
///
/// Within a side, starters fill before substitutes. A player whose snake side
/// is already full spills to the other side; once both sides are at capacity
/// the remainder lands in `unassigned`, still in skill order.
pub fn calculate_distribution(
    players: &[Player],
    game_type: GameType,
    formation: Option<Formation>,
) -> Result<TeamDistribution> {
    if players.len() < 2 {
        return Err(DistributionError::InsufficientPlayers { found: players.len() });
    }

    let config = game_type.configuration();

    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.skill_level.cmp(&a.skill_level));

    let mut home_team = TeamSection::default();
    let mut away_team = TeamSection::default();
    let mut unassigned = Vec::new();

    for (rank, player) in ranked.into_iter().enumerate() {
        let preferred = snake_side(rank);
        let section = match preferred {
            Side::Home => &mut home_team,
            Side::Away => &mut away_team,
        };
        if place(section, config, player) {
            continue;
        }
        let other = match preferred.opponent() {
            Side::Home => &mut home_team,
            Side::Away => &mut away_team,
        };
        if !place(other, config, player) {
            unassigned.push(player.clone());
        }
    }

    let mut distribution = TeamDistribution {
        game_type,
        formation,
        home_team,
        away_team,
        unassigned,
        balance_score: 0,
        generated_at: Utc::now(),
    };
    distribution.refresh_scores();

    log::debug!(
        "generated {} distribution: {}+{} home, {}+{} away, {} unassigned, balance {}",
        game_type,
        distribution.home_team.starters.len(),
        distribution.home_team.substitutes.len(),
        distribution.away_team.starters.len(),
        distribution.away_team.substitutes.len(),
        distribution.unassigned.len(),
        distribution.balance_score,
    );

    Ok(distribution)
}

/// Snake dealing order: 0-based ranks 0,3,4,7,8,… home; 1,2,5,6,9,… away.
fn snake_side(rank: usize) -> Side {
    if matches!(rank % 4, 0 | 3) {
        Side::Home
    } else {
        Side::Away
    }
}

/// Append to the side's starters if there is room, then to its bench.
/// Returns false when the side is completely full.
fn place(section: &mut TeamSection, config: &GameConfiguration, player: &Player) -> bool {
    if section.starters.len() < config.starters_per_team {
        section.starters.push(player.clone());
        true
    } else if section.substitutes.len() < config.max_substitutes_per_team {
        section.substitutes.push(player.clone());
        true
    } else {
        false
    }
}
