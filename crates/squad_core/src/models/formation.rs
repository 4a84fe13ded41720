use serde::{Deserialize, Serialize};

use super::format::GameType;
use super::player::PositionZone;

/// Pitch-layout metadata for rendering a generated distribution.
///
/// The balancer treats this as opaque: it is carried through unchanged and
/// never influences bucket assignment.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Formation {
    pub id: String,
    /// Shape code, e.g. "4-4-2".
    pub name: String,
    pub description: String,
    #[serde(rename = "gameType")]
    pub game_type: GameType,
    #[serde(default)]
    pub positions: Vec<FormationPosition>,
}

/// One slot on the rendered pitch, coordinates in percent of pitch size.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormationPosition {
    pub zone: PositionZone,
    pub x: f32,
    pub y: f32,
}

impl Formation {
    /// Stock formation used when the caller has not picked one.
    pub fn default_for(game_type: GameType) -> Self {
        let (name, description) = match game_type {
            GameType::FiveASide => ("2-2-1", "Standard five-a-side shape"),
            GameType::SevenASide => ("3-2-1", "Standard seven-a-side shape"),
            GameType::ElevenASide => ("4-4-2", "Classic balanced formation"),
        };
        Formation {
            id: name.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            game_type,
            positions: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_formation_per_game_type() {
        assert_eq!(Formation::default_for(GameType::FiveASide).name, "2-2-1");
        assert_eq!(Formation::default_for(GameType::SevenASide).name, "3-2-1");
        let eleven = Formation::default_for(GameType::ElevenASide);
        assert_eq!(eleven.name, "4-4-2");
        assert_eq!(eleven.game_type, GameType::ElevenASide);
        assert!(eleven.positions.is_empty());
    }
}
