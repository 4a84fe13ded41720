use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::format::GameType;
use super::formation::Formation;
use super::player::Player;

/// One of the two teams being formed. Arbitrary labels, no home-advantage
/// semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Home,
    Away,
}

impl Side {
    pub fn opponent(&self) -> Self {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

/// Lineup role within a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Starter,
    Substitute,
}

impl Role {
    pub fn toggled(&self) -> Self {
        match self {
            Role::Starter => Role::Substitute,
            Role::Substitute => Role::Starter,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Starter => f.write_str("starter"),
            Role::Substitute => f.write_str("substitute"),
        }
    }
}

/// Mean starter skill, rounded to one decimal. Empty lineups average to 0.
pub fn average_skill(players: &[Player]) -> f32 {
    if players.is_empty() {
        return 0.0;
    }
    let total: u32 = players.iter().map(|p| p.skill_level as u32).sum();
    (total as f32 / players.len() as f32 * 10.0).round() / 10.0
}

/// 0-100 score summarizing how close the two starter skill averages are.
/// 100 means perfectly equal; every 0.1 of gap costs one point, floored at 0.
pub fn balance_score(home: &TeamSection, away: &TeamSection) -> u8 {
    let gap = (home.average_skill - away.average_skill).abs();
    (100.0 - gap * 10.0).max(0.0).round() as u8
}

/// Starters and bench of one side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamSection {
    pub starters: Vec<Player>,
    pub substitutes: Vec<Player>,
    #[serde(rename = "averageSkill")]
    pub average_skill: f32,
}

impl TeamSection {
    pub fn bucket(&self, role: Role) -> &Vec<Player> {
        match role {
            Role::Starter => &self.starters,
            Role::Substitute => &self.substitutes,
        }
    }

    pub fn bucket_mut(&mut self, role: Role) -> &mut Vec<Player> {
        match role {
            Role::Starter => &mut self.starters,
            Role::Substitute => &mut self.substitutes,
        }
    }

    pub fn total(&self) -> usize {
        self.starters.len() + self.substitutes.len()
    }

    pub fn contains(&self, player_id: u32) -> bool {
        self.starters.iter().chain(self.substitutes.iter()).any(|p| p.id == player_id)
    }

    /// Recompute `average_skill` from the current starters.
    pub fn refresh_average(&mut self) {
        self.average_skill = average_skill(&self.starters);
    }
}

/// Complete two-sided split of a player selection.
///
/// Replaced wholesale by every mutation; never patched in place. Holding the
/// previous value is therefore always safe for undo/comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TeamDistribution {
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<Formation>,
    #[serde(rename = "homeTeam")]
    pub home_team: TeamSection,
    #[serde(rename = "awayTeam")]
    pub away_team: TeamSection,
    pub unassigned: Vec<Player>,
    #[serde(rename = "balanceScore")]
    pub balance_score: u8,
    #[serde(rename = "generatedAt")]
    pub generated_at: DateTime<Utc>,
}

impl TeamDistribution {
    pub fn side(&self, side: Side) -> &TeamSection {
        match side {
            Side::Home => &self.home_team,
            Side::Away => &self.away_team,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut TeamSection {
        match side {
            Side::Home => &mut self.home_team,
            Side::Away => &mut self.away_team,
        }
    }

    /// Locate a player in the four side buckets. Unassigned players are not
    /// part of either side and report as absent.
    pub fn locate(&self, player_id: u32) -> Option<(Side, Role)> {
        for side in [Side::Home, Side::Away] {
            for role in [Role::Starter, Role::Substitute] {
                if self.side(side).bucket(role).iter().any(|p| p.id == player_id) {
                    return Some((side, role));
                }
            }
        }
        None
    }

    /// All player ids across the five buckets, in bucket order.
    pub fn player_ids(&self) -> Vec<u32> {
        self.home_team
            .starters
            .iter()
            .chain(self.home_team.substitutes.iter())
            .chain(self.away_team.starters.iter())
            .chain(self.away_team.substitutes.iter())
            .chain(self.unassigned.iter())
            .map(|p| p.id)
            .collect()
    }

    /// Recompute both averages and the balance score. Must run after every
    /// mutation so neither figure is ever stale.
    pub fn refresh_scores(&mut self) {
        self.home_team.refresh_average();
        self.away_team.refresh_average();
        self.balance_score = balance_score(&self.home_team, &self.away_team);
    }
}
