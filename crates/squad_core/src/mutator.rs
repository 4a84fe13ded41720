//! Distribution Mutator.
//!
//! Applies one user-directed change to an existing distribution and returns a
//! new, fully consistent one. All three operations are pure with respect to
//! their input: the passed-in distribution is never modified, so callers can
//! keep it as a snapshot for undo or comparison.

use crate::error::{DistributionError, Result};
use crate::models::{Role, Side, TeamDistribution};

/// Relocate one player from a (side, role) bucket to another.
///
/// The player must currently occupy the source bucket and the destination
/// must have spare capacity, measured after the player has left the source
/// (so a move within one bucket re-appends rather than failing).
pub fn move_player(
    distribution: &TeamDistribution,
    player_id: u32,
    from_side: Side,
    from_role: Role,
    to_side: Side,
    to_role: Role,
) -> Result<TeamDistribution> {
    let mut next = distribution.clone();
    let game_type = next.game_type;

    let source = next.side_mut(from_side).bucket_mut(from_role);
    let index = source.iter().position(|p| p.id == player_id).ok_or_else(|| {
        DistributionError::PlayerNotFound {
            player_id,
            location: format!("{} {}s", from_side, from_role),
        }
    })?;
    let player = source.remove(index);

    let limit = game_type.configuration().capacity_for(to_role);
    let destination = next.side_mut(to_side).bucket_mut(to_role);
    if destination.len() >= limit {
        return Err(DistributionError::CapacityExceeded {
            side: to_side,
            role: to_role,
            limit,
            game_type,
        });
    }
    destination.push(player);

    next.refresh_scores();
    log::debug!(
        "moved player {} from {} {} to {} {}",
        player_id,
        from_side,
        from_role,
        to_side,
        to_role
    );
    Ok(next)
}

/// Exchange a substitute and a starter, possibly across sides.
///
/// The former substitute takes the starter's lineup slot on the starter's
/// side; the former starter takes the substitute's bench slot on the
/// substitute's side. Capacities cannot be exceeded by a 1-for-1 exchange.
pub fn swap_players(
    distribution: &TeamDistribution,
    substitute_id: u32,
    starter_id: u32,
) -> Result<TeamDistribution> {
    let (sub_side, sub_index) = find_in_role(distribution, substitute_id, Role::Substitute)?;
    let (starter_side, starter_index) = find_in_role(distribution, starter_id, Role::Starter)?;

    let mut next = distribution.clone();
    let substitute = next.side_mut(sub_side).substitutes.remove(sub_index);
    let starter = next.side_mut(starter_side).starters.remove(starter_index);

    next.side_mut(starter_side).starters.insert(starter_index, substitute);
    next.side_mut(sub_side).substitutes.insert(sub_index, starter);

    next.refresh_scores();
    log::debug!(
        "swapped substitute {} ({}) with starter {} ({})",
        substitute_id,
        sub_side,
        starter_id,
        starter_side
    );
    Ok(next)
}

/// Move a player to the opposite role on the same side.
///
/// The player must currently be a starter or a substitute; unassigned players
/// are not part of either side and report as not found. The destination
/// bucket must have spare capacity.
pub fn toggle_role(distribution: &TeamDistribution, player_id: u32) -> Result<TeamDistribution> {
    let (side, role) = distribution.locate(player_id).ok_or_else(|| {
        DistributionError::PlayerNotFound { player_id, location: "either squad".to_string() }
    })?;
    move_player(distribution, player_id, side, role, side, role.toggled())
}

fn find_in_role(
    distribution: &TeamDistribution,
    player_id: u32,
    role: Role,
) -> Result<(Side, usize)> {
    for side in [Side::Home, Side::Away] {
        if let Some(index) =
            distribution.side(side).bucket(role).iter().position(|p| p.id == player_id)
        {
            return Ok((side, index));
        }
    }
    Err(DistributionError::PlayerNotFound { player_id, location: format!("{}s", role) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::calculate_distribution;
    use crate::models::{GameType, Player, PositionZone};

    fn player(id: u32, skill: u8) -> Player {
        Player {
            id,
            name: format!("P{}", id),
            skill_level: skill,
            height: None,
            weight: None,
            position_zone: PositionZone::Midfielder,
            position_specific: None,
            is_guest: false,
        }
    }

    fn roster(skills: &[u8]) -> Vec<Player> {
        skills.iter().enumerate().map(|(i, &s)| player(i as u32 + 1, s)).collect()
    }

    /// 12 players, 5v5: 5 starters + 1 substitute per side.
    fn sample_distribution() -> TeamDistribution {
        calculate_distribution(
            &roster(&[9, 8, 8, 7, 7, 6, 6, 5, 5, 4, 4, 3]),
            GameType::FiveASide,
            None,
        )
        .unwrap()
    }

    #[test]
    fn move_requires_the_player_in_the_source_bucket() {
        let dist = sample_distribution();
        let missing = move_player(&dist, 999, Side::Home, Role::Starter, Side::Away, Role::Substitute);
        assert!(matches!(missing, Err(DistributionError::PlayerNotFound { player_id: 999, .. })));

        // Present in the distribution but in a different bucket than claimed.
        let starter_id = dist.home_team.starters[0].id;
        let wrong_bucket =
            move_player(&dist, starter_id, Side::Home, Role::Substitute, Side::Away, Role::Starter);
        assert!(matches!(wrong_bucket, Err(DistributionError::PlayerNotFound { .. })));
    }

    #[test]
    fn move_into_full_starters_is_rejected_and_input_unchanged() {
        let dist = sample_distribution();
        let before = dist.clone();
        let sub_id = dist.home_team.substitutes[0].id;

        // Away starters are already at the 5v5 limit.
        let err = move_player(&dist, sub_id, Side::Home, Role::Substitute, Side::Away, Role::Starter)
            .unwrap_err();
        assert_eq!(
            err,
            DistributionError::CapacityExceeded {
                side: Side::Away,
                role: Role::Starter,
                limit: 5,
                game_type: GameType::FiveASide,
            }
        );
        assert_eq!(dist, before);
    }

    #[test]
    fn move_between_benches_recomputes_scores() {
        let dist = sample_distribution();
        let sub_id = dist.home_team.substitutes[0].id;

        let next =
            move_player(&dist, sub_id, Side::Home, Role::Substitute, Side::Away, Role::Substitute)
                .unwrap();

        assert!(dist.home_team.contains(sub_id), "input distribution must stay intact");
        assert!(!next.home_team.contains(sub_id));
        assert!(next.away_team.substitutes.iter().any(|p| p.id == sub_id));
        assert_eq!(next.away_team.substitutes.len(), 2);
        // Starter sets are untouched, so the averages are unchanged.
        assert_eq!(next.home_team.average_skill, dist.home_team.average_skill);
        assert_eq!(next.balance_score, dist.balance_score);
    }

    #[test]
    fn move_within_the_same_bucket_reorders_to_the_end() {
        let dist = sample_distribution();
        let first_id = dist.home_team.starters[0].id;

        let next = move_player(&dist, first_id, Side::Home, Role::Starter, Side::Home, Role::Starter)
            .unwrap();
        assert_eq!(next.home_team.starters.last().unwrap().id, first_id);
        assert_eq!(next.home_team.starters.len(), dist.home_team.starters.len());
        assert_eq!(next.balance_score, dist.balance_score);
    }

    #[test]
    fn swap_exchanges_roles_and_sides() {
        let dist = sample_distribution();
        let before = dist.clone();

        // Home's bench player for away's strongest starter.
        let sub_id = dist.home_team.substitutes[0].id;
        let starter = dist.away_team.starters[0].clone();

        let next = swap_players(&dist, sub_id, starter.id).unwrap();
        assert_eq!(dist, before, "input distribution must stay intact");

        // The substitute now starts on the starter's former side and slot.
        assert_eq!(next.away_team.starters[0].id, sub_id);
        // The starter now sits on the substitute's former bench.
        assert_eq!(next.home_team.substitutes[0].id, starter.id);

        // Away lost its strongest starter for a bench player: average drops.
        assert!(next.away_team.average_skill < dist.away_team.average_skill);
    }

    #[test]
    fn swap_recomputes_both_averages() {
        // Deterministic small case: home starter P1 (5), away bench P2 (1).
        let dist = calculate_distribution(
            &roster(&[5, 4, 4, 4, 4, 4, 3, 3, 3, 3, 3, 1]),
            GameType::FiveASide,
            None,
        )
        .unwrap();
        let weakest_sub_side =
            if dist.home_team.substitutes.iter().any(|p| p.skill_level == 1) {
                Side::Home
            } else {
                Side::Away
            };
        let sub = dist
            .side(weakest_sub_side)
            .substitutes
            .iter()
            .find(|p| p.skill_level == 1)
            .unwrap()
            .clone();
        let starter = dist.home_team.starters.iter().find(|p| p.skill_level == 5).unwrap().clone();

        let next = swap_players(&dist, sub.id, starter.id).unwrap();
        assert!(next.home_team.starters.iter().any(|p| p.id == sub.id));
        assert!(next.side(weakest_sub_side).substitutes.iter().any(|p| p.id == starter.id));
        assert!(next.home_team.average_skill < dist.home_team.average_skill);
    }

    #[test]
    fn swap_requires_the_expected_roles() {
        let dist = sample_distribution();
        let starter_id = dist.home_team.starters[0].id;
        let sub_id = dist.home_team.substitutes[0].id;

        // Arguments reversed: a starter is not found among substitutes.
        let err = swap_players(&dist, starter_id, sub_id).unwrap_err();
        assert!(matches!(err, DistributionError::PlayerNotFound { .. }));

        let err = swap_players(&dist, 999, starter_id).unwrap_err();
        assert!(matches!(err, DistributionError::PlayerNotFound { player_id: 999, .. }));
    }

    #[test]
    fn toggle_role_moves_within_the_same_side() {
        let dist = sample_distribution();
        let sub_id = dist.away_team.substitutes[0].id;

        let next = toggle_role(&dist, sub_id);
        // Away starters are full: toggling the bench player must fail.
        assert!(matches!(next, Err(DistributionError::CapacityExceeded { .. })));

        // Toggle a starter down to the bench instead.
        let starter_id = dist.away_team.starters[4].id;
        let next = toggle_role(&dist, starter_id).unwrap();
        assert!(next.away_team.substitutes.iter().any(|p| p.id == starter_id));
        assert_eq!(next.away_team.starters.len(), 4);
        // One fewer starter changes the away average.
        assert_ne!(next.away_team.average_skill, 0.0);
    }

    #[test]
    fn toggle_role_rejects_unknown_and_unassigned_players() {
        let mut dist = sample_distribution();
        dist.unassigned.push(player(42, 2));

        assert!(matches!(
            toggle_role(&dist, 999),
            Err(DistributionError::PlayerNotFound { player_id: 999, .. })
        ));
        assert!(matches!(
            toggle_role(&dist, 42),
            Err(DistributionError::PlayerNotFound { player_id: 42, .. })
        ));
    }

    #[test]
    fn mutations_conserve_the_player_multiset() {
        let dist = sample_distribution();
        let mut ids_before = dist.player_ids();
        ids_before.sort_unstable();

        let moved = move_player(
            &dist,
            dist.home_team.substitutes[0].id,
            Side::Home,
            Role::Substitute,
            Side::Away,
            Role::Substitute,
        )
        .unwrap();
        let swapped =
            swap_players(&moved, moved.away_team.substitutes[0].id, moved.home_team.starters[0].id)
                .unwrap();
        let toggled = toggle_role(&swapped, swapped.home_team.starters[0].id).unwrap();

        let mut ids_after = toggled.player_ids();
        ids_after.sort_unstable();
        assert_eq!(ids_before, ids_after);
    }
}
