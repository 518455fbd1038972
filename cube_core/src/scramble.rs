//! Scramble orchestration: a scramble is nothing more than a run of
//! independent single-move applications.

use fastrand::Rng;
use itertools::Itertools;

use crate::moves::Move;
use crate::state::CubeState;

/// How many random moves a scramble applies unless told otherwise.
pub const DEFAULT_SCRAMBLE_MOVES: usize = 20;

/// Apply `move_count` moves drawn uniformly, with replacement, from the full
/// move set. Returns the scrambled state and the sequence that produced it.
///
/// Draws are independent: repeats and immediate self-inverses are allowed. A
/// seeded `rng` reproduces the same sequence and the same final state.
#[must_use]
pub fn scramble(state: &CubeState, move_count: usize, rng: &mut Rng) -> (CubeState, Vec<Move>) {
    let mut scrambled = state.clone();
    let mut sequence = Vec::with_capacity(move_count);
    for _ in 0..move_count {
        let mv = rng.choice(Move::ALL).unwrap();
        scrambled = scrambled.apply(mv);
        sequence.push(mv);
    }
    log::debug!("scrambled with {}", sequence.iter().join(" "));
    (scrambled, sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scramble_applies_the_requested_move_count() {
        let mut rng = Rng::with_seed(99);
        let (state, sequence) = scramble(&CubeState::initial(), DEFAULT_SCRAMBLE_MOVES, &mut rng);
        assert_eq!(sequence.len(), DEFAULT_SCRAMBLE_MOVES);
        assert_eq!(state, CubeState::initial().apply_all(&sequence));
    }

    #[test]
    fn zero_moves_is_a_no_op() {
        let mut rng = Rng::with_seed(99);
        let (state, sequence) = scramble(&CubeState::initial(), 0, &mut rng);
        assert!(sequence.is_empty());
        assert!(state.is_solved());
    }
}
