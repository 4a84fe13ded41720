pub mod distribution;
pub mod format;
pub mod formation;
pub mod player;

pub use distribution::{
    average_skill, balance_score, Role, Side, TeamDistribution, TeamSection,
};
pub use format::{GameConfiguration, GameType};
pub use formation::{Formation, FormationPosition};
pub use player::{Player, PositionZone, SpecificPosition};
