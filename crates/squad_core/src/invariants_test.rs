//! Property-based checks that generation and every mutation preserve the
//! structural guarantees: no player lost or duplicated, no bucket over
//! capacity, scores never stale.

use proptest::prelude::*;

use crate::calculator::calculate_distribution;
use crate::models::{
    average_skill, balance_score, GameType, Player, PositionZone, Role, Side, TeamDistribution,
};
use crate::mutator;
use crate::stats::validate_distribution;

fn roster(skills: &[u8]) -> Vec<Player> {
    skills
        .iter()
        .enumerate()
        .map(|(i, &skill)| Player {
            id: i as u32 + 1,
            name: format!("P{}", i + 1),
            skill_level: skill,
            height: None,
            weight: None,
            position_zone: PositionZone::Midfielder,
            position_specific: None,
            is_guest: false,
        })
        .collect()
}

fn sorted_ids(distribution: &TeamDistribution) -> Vec<u32> {
    let mut ids = distribution.player_ids();
    ids.sort_unstable();
    ids
}

fn assert_invariants(distribution: &TeamDistribution) {
    let config = distribution.game_type.configuration();
    for side in [Side::Home, Side::Away] {
        let section = distribution.side(side);
        assert!(section.starters.len() <= config.starters_per_team);
        assert!(section.substitutes.len() <= config.max_substitutes_per_team);
        assert_eq!(section.average_skill, average_skill(&section.starters));
    }
    assert_eq!(
        distribution.balance_score,
        balance_score(&distribution.home_team, &distribution.away_team)
    );
    assert!(validate_distribution(distribution).is_valid());
}

fn game_type_strategy() -> impl Strategy<Value = GameType> {
    prop_oneof![
        Just(GameType::FiveASide),
        Just(GameType::SevenASide),
        Just(GameType::ElevenASide),
    ]
}

/// One randomly parametrized manual edit. Indices are taken modulo the
/// current player count so every pick lands on a real player.
#[derive(Debug, Clone)]
enum Edit {
    Move { pick: usize, to_side: Side, to_role: Role },
    Swap { sub_pick: usize, starter_pick: usize },
    Toggle { pick: usize },
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (any::<usize>(), any::<bool>(), any::<bool>()).prop_map(|(pick, home, starter)| {
            Edit::Move {
                pick,
                to_side: if home { Side::Home } else { Side::Away },
                to_role: if starter { Role::Starter } else { Role::Substitute },
            }
        }),
        (any::<usize>(), any::<usize>())
            .prop_map(|(sub_pick, starter_pick)| Edit::Swap { sub_pick, starter_pick }),
        any::<usize>().prop_map(|pick| Edit::Toggle { pick }),
    ]
}

fn pick_assigned(distribution: &TeamDistribution, pick: usize) -> Option<u32> {
    let assigned: Vec<u32> = distribution
        .player_ids()
        .into_iter()
        .filter(|id| distribution.locate(*id).is_some())
        .collect();
    if assigned.is_empty() {
        None
    } else {
        Some(assigned[pick % assigned.len()])
    }
}

fn apply_edit(distribution: &TeamDistribution, edit: &Edit) -> Option<TeamDistribution> {
    let result = match edit {
        Edit::Move { pick, to_side, to_role } => {
            let id = pick_assigned(distribution, *pick)?;
            let (from_side, from_role) = distribution.locate(id)?;
            mutator::move_player(distribution, id, from_side, from_role, *to_side, *to_role)
        }
        Edit::Swap { sub_pick, starter_pick } => {
            let subs: Vec<u32> = [Side::Home, Side::Away]
                .iter()
                .flat_map(|s| distribution.side(*s).substitutes.iter().map(|p| p.id))
                .collect();
            let starters: Vec<u32> = [Side::Home, Side::Away]
                .iter()
                .flat_map(|s| distribution.side(*s).starters.iter().map(|p| p.id))
                .collect();
            if subs.is_empty() || starters.is_empty() {
                return None;
            }
            mutator::swap_players(
                distribution,
                subs[sub_pick % subs.len()],
                starters[starter_pick % starters.len()],
            )
        }
        Edit::Toggle { pick } => {
            let id = pick_assigned(distribution, *pick)?;
            mutator::toggle_role(distribution, id)
        }
    };
    result.ok()
}

proptest! {
    /// Generation assigns every player exactly once and respects capacities.
    #[test]
    fn generation_conserves_players(
        skills in prop::collection::vec(1u8..=10, 2..=40),
        game_type in game_type_strategy(),
    ) {
        let players = roster(&skills);
        let distribution = calculate_distribution(&players, game_type, None).unwrap();

        let mut expected: Vec<u32> = players.iter().map(|p| p.id).collect();
        expected.sort_unstable();
        prop_assert_eq!(sorted_ids(&distribution), expected);
        assert_invariants(&distribution);
    }

    /// Same selection, same teams.
    #[test]
    fn generation_is_deterministic(
        skills in prop::collection::vec(1u8..=10, 2..=40),
        game_type in game_type_strategy(),
    ) {
        let players = roster(&skills);
        let first = calculate_distribution(&players, game_type, None).unwrap();
        let second = calculate_distribution(&players, game_type, None).unwrap();
        prop_assert_eq!(first.player_ids(), second.player_ids());
        prop_assert_eq!(first.balance_score, second.balance_score);
    }

    /// Any sequence of accepted edits keeps the distribution structurally
    /// sound, and rejected edits leave the input untouched.
    #[test]
    fn edits_preserve_invariants(
        skills in prop::collection::vec(1u8..=10, 4..=30),
        game_type in game_type_strategy(),
        edits in prop::collection::vec(edit_strategy(), 1..=12),
    ) {
        let players = roster(&skills);
        let mut current = calculate_distribution(&players, game_type, None).unwrap();
        let expected = sorted_ids(&current);

        for edit in &edits {
            let before = current.clone();
            match apply_edit(&current, edit) {
                Some(next) => current = next,
                None => prop_assert_eq!(&current, &before),
            }
            prop_assert_eq!(sorted_ids(&current), expected.clone());
            assert_invariants(&current);
        }
    }
}
