use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::distribution::Role;
use super::player::PositionZone;

/// Squad-size variant that parameterizes every capacity limit in the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameType {
    #[serde(rename = "5v5")]
    FiveASide,
    #[serde(rename = "7v7")]
    SevenASide,
    #[serde(rename = "11v11")]
    ElevenASide,
}

/// Static per-format configuration.
///
/// `required_positions` is advisory: the validator reports gaps as warnings,
/// the balancer never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfiguration {
    pub game_type: GameType,
    pub starters_per_team: usize,
    pub max_substitutes_per_team: usize,
    pub max_players: usize,
    pub required_positions: &'static [PositionZone],
}

impl GameConfiguration {
    /// Capacity limit of one bucket.
    pub fn capacity_for(&self, role: Role) -> usize {
        match role {
            Role::Starter => self.starters_per_team,
            Role::Substitute => self.max_substitutes_per_team,
        }
    }

    /// Total capacity across both sides.
    pub fn total_capacity(&self) -> usize {
        2 * (self.starters_per_team + self.max_substitutes_per_team)
    }
}

const FIVE_A_SIDE: GameConfiguration = GameConfiguration {
    game_type: GameType::FiveASide,
    starters_per_team: 5,
    max_substitutes_per_team: 3,
    max_players: 16,
    required_positions: {
        use PositionZone::*;
        &[Goalkeeper, Defender, Defender, Midfielder, Forward]
    },
};

const SEVEN_A_SIDE: GameConfiguration = GameConfiguration {
    game_type: GameType::SevenASide,
    starters_per_team: 7,
    max_substitutes_per_team: 4,
    max_players: 22,
    required_positions: {
        use PositionZone::*;
        &[Goalkeeper, Defender, Defender, Midfielder, Midfielder, Forward, Forward]
    },
};

const ELEVEN_A_SIDE: GameConfiguration = GameConfiguration {
    game_type: GameType::ElevenASide,
    starters_per_team: 11,
    max_substitutes_per_team: 7,
    max_players: 36,
    required_positions: {
        use PositionZone::*;
        &[
            Goalkeeper, Defender, Defender, Defender, Defender, Midfielder, Midfielder,
            Midfielder, Midfielder, Forward, Forward,
        ]
    },
};

impl GameType {
    pub const ALL: [GameType; 3] =
        [GameType::FiveASide, GameType::SevenASide, GameType::ElevenASide];

    pub const fn configuration(&self) -> &'static GameConfiguration {
        match self {
            GameType::FiveASide => &FIVE_A_SIDE,
            GameType::SevenASide => &SEVEN_A_SIDE,
            GameType::ElevenASide => &ELEVEN_A_SIDE,
        }
    }

    /// Canonical format code string (e.g., "5v5").
    pub fn code(&self) -> &'static str {
        match self {
            GameType::FiveASide => "5v5",
            GameType::SevenASide => "7v7",
            GameType::ElevenASide => "11v11",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for GameType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "5v5" => Ok(GameType::FiveASide),
            "7v7" => Ok(GameType::SevenASide),
            "11v11" => Ok(GameType::ElevenASide),
            _ => Err(format!("Invalid game type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_table_matches_real_squad_sizes() {
        let five = GameType::FiveASide.configuration();
        assert_eq!(five.starters_per_team, 5);
        assert_eq!(five.max_substitutes_per_team, 3);
        assert_eq!(five.total_capacity(), 16);

        let seven = GameType::SevenASide.configuration();
        assert_eq!(seven.starters_per_team, 7);
        assert_eq!(seven.max_substitutes_per_team, 4);

        let eleven = GameType::ElevenASide.configuration();
        assert_eq!(eleven.starters_per_team, 11);
        assert_eq!(eleven.max_substitutes_per_team, 7);
        assert_eq!(eleven.total_capacity(), 36);
    }

    #[test]
    fn required_positions_match_starter_counts() {
        for game_type in GameType::ALL {
            let config = game_type.configuration();
            assert_eq!(config.required_positions.len(), config.starters_per_team);
        }
    }

    #[test]
    fn game_type_string_round_trip() {
        for game_type in GameType::ALL {
            assert_eq!(game_type.code().parse::<GameType>().unwrap(), game_type);
            let json = serde_json::to_string(&game_type).unwrap();
            assert_eq!(json, format!("\"{}\"", game_type.code()));
        }
        assert!("9v9".parse::<GameType>().is_err());
    }
}
