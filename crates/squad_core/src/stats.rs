//! Validation and summary helpers.
//!
//! `validate_distribution` is diagnostic: mutations already maintain the
//! invariants by construction, but hosts and the test suite use the report to
//! verify a distribution they received or deserialized.

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::models::{PositionZone, Side, TeamDistribution, TeamSection};

/// Outcome of checking a distribution against its format.
///
/// Errors are invariant violations; warnings flag advisory issues (position
/// coverage, large skill gaps, unassigned players) that a host may surface
/// without rejecting the distribution.
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check every structural invariant of a distribution.
pub fn validate_distribution(distribution: &TeamDistribution) -> ValidationReport {
    let mut report = ValidationReport::default();
    let config = distribution.game_type.configuration();

    // Invariant: a player id appears in at most one bucket.
    let mut seen = HashSet::new();
    for id in distribution.player_ids() {
        if !seen.insert(id) {
            report.errors.push(format!("player {} appears in more than one bucket", id));
        }
    }

    for side in [Side::Home, Side::Away] {
        let section = distribution.side(side);

        if section.starters.len() > config.starters_per_team {
            report.errors.push(format!(
                "{} starters exceed the {} limit: {} of {}",
                side,
                distribution.game_type,
                section.starters.len(),
                config.starters_per_team
            ));
        }
        if section.substitutes.len() > config.max_substitutes_per_team {
            report.errors.push(format!(
                "{} substitutes exceed the {} limit: {} of {}",
                side,
                distribution.game_type,
                section.substitutes.len(),
                config.max_substitutes_per_team
            ));
        }
        if section.starters.len() < config.starters_per_team {
            report.warnings.push(format!(
                "{} side is short of starters: {} of {}",
                side,
                section.starters.len(),
                config.starters_per_team
            ));
        }

        for (zone, missing) in missing_positions(section, config.required_positions) {
            report.warnings.push(format!(
                "{} side is missing {} {} starter(s)",
                side,
                missing,
                zone.abbreviation()
            ));
        }
    }

    let gap =
        (distribution.home_team.average_skill - distribution.away_team.average_skill).abs();
    if gap > 2.0 {
        report.warnings.push(format!("high skill gap between sides: {:.1}", gap));
    }

    if !distribution.unassigned.is_empty() {
        report.warnings.push(format!("{} player(s) unassigned", distribution.unassigned.len()));
    }

    report
}

/// Per-zone deficit of a side's starters against the format's advisory list.
fn missing_positions(
    section: &TeamSection,
    required: &[PositionZone],
) -> Vec<(PositionZone, usize)> {
    let mut deficits = Vec::new();
    for zone in PositionZone::ALL {
        let needed = required.iter().filter(|z| **z == zone).count();
        if needed == 0 {
            continue;
        }
        let present = section.starters.iter().filter(|p| p.effective_zone() == zone).count();
        if present < needed {
            deficits.push((zone, needed - present));
        }
    }
    deficits
}

/// Summary counts for one side.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SideStats {
    pub starters: usize,
    pub substitutes: usize,
    pub total: usize,
    pub average_skill: f32,
    /// Players per zone abbreviation, starters and bench combined.
    pub positions: BTreeMap<&'static str, usize>,
}

/// Display figures derived from the current distribution. Pure.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DistributionStats {
    pub total_players: usize,
    pub total_assigned: usize,
    pub unassigned: usize,
    pub home_team: SideStats,
    pub away_team: SideStats,
    pub skill_gap: f32,
    pub balance_score: u8,
}

pub fn distribution_stats(distribution: &TeamDistribution) -> DistributionStats {
    let home = side_stats(&distribution.home_team);
    let away = side_stats(&distribution.away_team);
    let total_assigned = home.total + away.total;
    let skill_gap =
        ((home.average_skill - away.average_skill).abs() * 10.0).round() / 10.0;

    DistributionStats {
        total_players: total_assigned + distribution.unassigned.len(),
        total_assigned,
        unassigned: distribution.unassigned.len(),
        home_team: home,
        away_team: away,
        skill_gap,
        balance_score: distribution.balance_score,
    }
}

fn side_stats(section: &TeamSection) -> SideStats {
    let mut positions = BTreeMap::new();
    for player in section.starters.iter().chain(section.substitutes.iter()) {
        *positions.entry(player.effective_zone().abbreviation()).or_insert(0) += 1;
    }
    SideStats {
        starters: section.starters.len(),
        substitutes: section.substitutes.len(),
        total: section.total(),
        average_skill: section.average_skill,
        positions,
    }
}
