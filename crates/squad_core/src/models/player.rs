use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roster entry as supplied by the hosting application.
///
/// Players are value-like: the engine never mutates one, it only reassigns
/// which bucket references it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: u32,
    pub name: String,
    /// Nominal 1-10 scale. The engine does not validate the range; it only
    /// compares and averages whatever the roster store provides.
    pub skill_level: u8,
    /// Height in centimeters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u16>,
    /// Weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u16>,
    pub position_zone: PositionZone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position_specific: Option<SpecificPosition>,
    /// Ad-hoc entry not backed by a persisted roster.
    #[serde(default)]
    pub is_guest: bool,
}

impl Player {
    /// Effective pitch zone: the specific position's zone when one is set,
    /// otherwise the coarse zone classification.
    pub fn effective_zone(&self) -> PositionZone {
        self.position_specific.map(|p| p.zone()).unwrap_or(self.position_zone)
    }

    /// Abbreviation shown on cards and in validation messages. Prefers the
    /// finer classification when available.
    pub fn position_abbreviation(&self) -> &'static str {
        match self.position_specific {
            Some(specific) => specific.abbreviation(),
            None => self.position_zone.abbreviation(),
        }
    }
}

/// Coarse pitch-zone classification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PositionZone {
    #[serde(rename = "POR")]
    Goalkeeper,
    #[serde(rename = "DEF")]
    Defender,
    #[serde(rename = "MED")]
    Midfielder,
    #[serde(rename = "DEL")]
    Forward,
}

impl PositionZone {
    pub fn abbreviation(&self) -> &'static str {
        match self {
            PositionZone::Goalkeeper => "POR",
            PositionZone::Defender => "DEF",
            PositionZone::Midfielder => "MED",
            PositionZone::Forward => "DEL",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PositionZone::Goalkeeper => "Goalkeeper",
            PositionZone::Defender => "Defender",
            PositionZone::Midfielder => "Midfielder",
            PositionZone::Forward => "Forward",
        }
    }

    pub const ALL: [PositionZone; 4] = [
        PositionZone::Goalkeeper,
        PositionZone::Defender,
        PositionZone::Midfielder,
        PositionZone::Forward,
    ];
}

impl fmt::Display for PositionZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

impl FromStr for PositionZone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "POR" => Ok(PositionZone::Goalkeeper),
            "DEF" => Ok(PositionZone::Defender),
            "MED" => Ok(PositionZone::Midfielder),
            "DEL" => Ok(PositionZone::Forward),
            _ => Err(format!("Invalid position zone: {}", s)),
        }
    }
}

/// Finer position classification within a zone.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SpecificPosition {
    /// Right back
    LD,
    /// Left back
    LI,
    /// Centre back
    DFC,
    /// Left wing back
    CAI,
    /// Right wing back
    CAD,
    /// Defensive midfielder
    MCD,
    /// Central midfielder
    MC,
    /// Attacking midfielder
    MCO,
    /// Right midfielder
    MD,
    /// Left midfielder
    MI,
    /// Right winger
    ED,
    /// Left winger
    EI,
    /// Centre forward
    DC,
    /// Second striker
    SD,
}

impl SpecificPosition {
    pub fn zone(&self) -> PositionZone {
        match self {
            SpecificPosition::LD
            | SpecificPosition::LI
            | SpecificPosition::DFC
            | SpecificPosition::CAI
            | SpecificPosition::CAD => PositionZone::Defender,
            SpecificPosition::MCD
            | SpecificPosition::MC
            | SpecificPosition::MCO
            | SpecificPosition::MD
            | SpecificPosition::MI => PositionZone::Midfielder,
            SpecificPosition::ED
            | SpecificPosition::EI
            | SpecificPosition::DC
            | SpecificPosition::SD => PositionZone::Forward,
        }
    }

    pub fn abbreviation(&self) -> &'static str {
        match self {
            SpecificPosition::LD => "LD",
            SpecificPosition::LI => "LI",
            SpecificPosition::DFC => "DFC",
            SpecificPosition::CAI => "CAI",
            SpecificPosition::CAD => "CAD",
            SpecificPosition::MCD => "MCD",
            SpecificPosition::MC => "MC",
            SpecificPosition::MCO => "MCO",
            SpecificPosition::MD => "MD",
            SpecificPosition::MI => "MI",
            SpecificPosition::ED => "ED",
            SpecificPosition::EI => "EI",
            SpecificPosition::DC => "DC",
            SpecificPosition::SD => "SD",
        }
    }
}
