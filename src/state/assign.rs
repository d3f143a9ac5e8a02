//! Role assignment for a round.
//!
//! Given the roster, the requested impostor count and the prior-round
//! history, this produces the pass order, the impostor set and the
//! discussion starter. The pass order is re-shuffled from scratch every
//! round, so pass positions carry no information between rounds.

use crate::rng::{EntropySource, SecureRandom};
use crate::types::{Player, PlayerId};
use serde::{Deserialize, Serialize};

/// A streak of this many rounds with the same impostor forces a swap on
/// the next repeat draw.
const FORCED_SWAP_STREAK: u32 = 2;
/// Chance (percent) of swapping away a second consecutive repeat.
const SOFT_SWAP_PERCENT: u32 = 60;

/// Tracks consecutive single-impostor repeats across rounds. Survives
/// "reset to setup"; cleared only by an explicit session reset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundHistory {
    pub previous_impostor: Option<PlayerId>,
    pub streak: u32,
}

/// Everything role assignment decides for one round.
#[derive(Debug, Clone)]
pub struct Assignment {
    /// The pass order, with `is_impostor` flags applied.
    pub ordered_players: Vec<Player>,
    pub impostor_ids: Vec<PlayerId>,
    pub starter_index: usize,
}

/// Select impostors, pass order and discussion starter, updating the
/// repeat history.
///
/// Anti-repetition only applies to single-impostor rounds: a re-drawn
/// repeat is swapped away with [`SOFT_SWAP_PERCENT`] probability on the
/// second consecutive round, and unconditionally from the third on.
/// Multi-impostor rounds leave the history untouched.
pub fn assign_roles<E: EntropySource>(
    roster: &[Player],
    impostor_count: usize,
    history: &mut RoundHistory,
    rng: &mut SecureRandom<E>,
) -> Assignment {
    if roster.is_empty() {
        return Assignment {
            ordered_players: Vec::new(),
            impostor_ids: Vec::new(),
            starter_index: 0,
        };
    }

    let mut ordered = rng.shuffled(roster);
    let indices: Vec<usize> = (0..ordered.len()).collect();
    let candidates = rng.shuffled(&indices);

    let chosen: Vec<usize> = if impostor_count == 1 {
        vec![resolve_single(&candidates, &ordered, history, rng)]
    } else {
        candidates.iter().copied().take(impostor_count).collect()
    };

    let impostor_ids: Vec<PlayerId> = chosen.iter().map(|&i| ordered[i].id.clone()).collect();

    if impostor_count == 1 {
        let id = &impostor_ids[0];
        if history.previous_impostor.as_ref() == Some(id) {
            history.streak += 1;
        } else {
            history.streak = 1;
        }
        history.previous_impostor = Some(id.clone());
    }

    for player in &mut ordered {
        player.is_impostor = impostor_ids.contains(&player.id);
    }

    let starter_index = rng.below(ordered.len());

    Assignment {
        ordered_players: ordered,
        impostor_ids,
        starter_index,
    }
}

/// Pick the single impostor from the pre-shuffled candidate indices,
/// applying the anti-repetition correction. The swap target is the next
/// pre-shuffled candidate, which is always a different player.
fn resolve_single<E: EntropySource>(
    candidates: &[usize],
    ordered: &[Player],
    history: &RoundHistory,
    rng: &mut SecureRandom<E>,
) -> usize {
    let first = candidates[0];
    let previous = match &history.previous_impostor {
        Some(id) => id,
        None => return first,
    };
    if ordered[first].id != *previous || candidates.len() < 2 {
        return first;
    }
    if history.streak >= FORCED_SWAP_STREAK {
        return candidates[1];
    }
    if rng.percent(SOFT_SWAP_PERCENT) {
        candidates[1]
    } else {
        first
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedEntropy;
    use std::collections::HashMap;

    fn roster(n: usize) -> Vec<Player> {
        (0..n)
            .map(|i| Player::new(&format!("Player {i}")))
            .collect()
    }

    #[test]
    fn impostor_set_has_exact_size_and_no_duplicates() {
        let players = roster(6);
        let mut rng = SecureRandom::new();
        for count in 1..=3 {
            for _ in 0..100 {
                let mut history = RoundHistory::default();
                let assignment = assign_roles(&players, count, &mut history, &mut rng);
                assert_eq!(assignment.impostor_ids.len(), count);
                let mut unique = assignment.impostor_ids.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), count, "duplicate impostor ids");
            }
        }
    }

    #[test]
    fn role_flags_match_the_impostor_set() {
        let players = roster(7);
        let mut rng = SecureRandom::new();
        let mut history = RoundHistory::default();
        let assignment = assign_roles(&players, 3, &mut history, &mut rng);

        assert_eq!(assignment.ordered_players.len(), 7);
        for player in &assignment.ordered_players {
            assert_eq!(
                player.is_impostor,
                assignment.impostor_ids.contains(&player.id)
            );
        }
    }

    #[test]
    fn starter_index_is_in_range() {
        let players = roster(5);
        let mut rng = SecureRandom::new();
        for _ in 0..200 {
            let mut history = RoundHistory::default();
            let assignment = assign_roles(&players, 1, &mut history, &mut rng);
            assert!(assignment.starter_index < 5);
        }
    }

    #[test]
    fn selection_is_roughly_fair_without_history() {
        let players = roster(5);
        let mut rng = SecureRandom::new();
        let mut counts: HashMap<PlayerId, u32> = HashMap::new();
        let trials = 5000;
        for _ in 0..trials {
            // Fresh history each trial so the correction never engages.
            let mut history = RoundHistory::default();
            let assignment = assign_roles(&players, 1, &mut history, &mut rng);
            *counts.entry(assignment.impostor_ids[0].clone()).or_default() += 1;
        }
        for player in &players {
            let count = counts.get(&player.id).copied().unwrap_or(0);
            let frequency = count as f64 / trials as f64;
            // Expected 0.2 with a generous statistical margin.
            assert!(
                (0.15..=0.25).contains(&frequency),
                "player {} selected with frequency {frequency}",
                player.name
            );
        }
    }

    #[test]
    fn third_consecutive_repeat_is_always_swapped() {
        let players = roster(4);
        let history = RoundHistory {
            previous_impostor: Some(players[0].id.clone()),
            streak: 2,
        };
        // Candidate 0 re-draws the previous impostor.
        let candidates = vec![0, 2, 1, 3];
        let mut rng = SecureRandom::new();
        for _ in 0..200 {
            let index = resolve_single(&candidates, &players, &history, &mut rng);
            assert_eq!(index, 2);
            assert_ne!(players[index].id, players[0].id);
        }
    }

    #[test]
    fn second_consecutive_repeat_swaps_sixty_percent_of_the_time() {
        let players = roster(4);
        let history = RoundHistory {
            previous_impostor: Some(players[0].id.clone()),
            streak: 1,
        };
        let candidates = vec![0, 3, 1, 2];
        // Enumerate every possible percentage roll exactly once.
        let mut swaps = 0;
        for roll in 0..100u64 {
            let mut rng = SecureRandom::with_entropy(ScriptedEntropy::new(vec![roll]));
            if resolve_single(&candidates, &players, &history, &mut rng) == 3 {
                swaps += 1;
            }
        }
        assert_eq!(swaps, 60);
    }

    #[test]
    fn fresh_draws_are_never_corrected() {
        let players = roster(4);
        let history = RoundHistory {
            previous_impostor: Some(players[1].id.clone()),
            streak: 5,
        };
        // Candidate 0 is not the previous impostor, so no swap happens.
        let candidates = vec![0, 1, 2, 3];
        let mut rng = SecureRandom::new();
        assert_eq!(resolve_single(&candidates, &players, &history, &mut rng), 0);
    }

    #[test]
    fn no_history_means_no_correction() {
        let players = roster(3);
        let history = RoundHistory::default();
        let candidates = vec![2, 0, 1];
        let mut rng = SecureRandom::new();
        assert_eq!(resolve_single(&candidates, &players, &history, &mut rng), 2);
    }

    #[test]
    fn history_streak_tracks_consecutive_repeats() {
        let players = roster(3);
        let mut rng = SecureRandom::new();
        let mut history = RoundHistory::default();
        let mut previous: Option<PlayerId> = None;
        let mut expected_streak = 0;

        for _ in 0..50 {
            let assignment = assign_roles(&players, 1, &mut history, &mut rng);
            let id = assignment.impostor_ids[0].clone();
            expected_streak = if previous.as_ref() == Some(&id) {
                expected_streak + 1
            } else {
                1
            };
            assert_eq!(history.streak, expected_streak);
            assert_eq!(history.previous_impostor.as_ref(), Some(&id));
            previous = Some(id);
        }
    }

    #[test]
    fn streak_never_exceeds_the_forced_bound() {
        // Forcing at streak >= 2 makes a third consecutive round with
        // the same impostor impossible, so the streak caps at 2.
        let players = roster(3);
        let mut rng = SecureRandom::new();
        let mut history = RoundHistory::default();
        for _ in 0..500 {
            assign_roles(&players, 1, &mut history, &mut rng);
            assert!(history.streak <= 2, "streak reached {}", history.streak);
        }
    }

    #[test]
    fn multi_impostor_rounds_leave_history_untouched() {
        let players = roster(6);
        let mut rng = SecureRandom::new();
        let mut history = RoundHistory {
            previous_impostor: Some(players[0].id.clone()),
            streak: 2,
        };
        let before = history.clone();
        assign_roles(&players, 2, &mut history, &mut rng);
        assert_eq!(history, before);
    }

    #[test]
    fn pass_order_is_a_permutation_of_the_roster() {
        let players = roster(8);
        let mut rng = SecureRandom::new();
        let mut history = RoundHistory::default();
        let assignment = assign_roles(&players, 2, &mut history, &mut rng);

        let mut original: Vec<&str> = players.iter().map(|p| p.id.as_str()).collect();
        let mut shuffled: Vec<&str> = assignment
            .ordered_players
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        original.sort_unstable();
        shuffled.sort_unstable();
        assert_eq!(original, shuffled);
    }

    #[test]
    fn empty_roster_yields_an_empty_assignment() {
        let mut rng = SecureRandom::new();
        let mut history = RoundHistory::default();
        let assignment = assign_roles(&[], 1, &mut history, &mut rng);
        assert!(assignment.ordered_players.is_empty());
        assert!(assignment.impostor_ids.is_empty());
        assert_eq!(assignment.starter_index, 0);
    }
}
