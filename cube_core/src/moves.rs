//! The twelve face-turn operators and their application to a cube state.

use crate::state::{CubeState, Face, Grid};

/// A quarter turn of one face, clockwise or counter-clockwise as viewed with
/// that face toward the observer.
///
/// The set is closed: every value the engine can be driven with is listed
/// here, so `apply` has no failure path. A half turn is two applications of
/// the same move.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Move {
    F,
    FPrime,
    B,
    BPrime,
    R,
    RPrime,
    L,
    LPrime,
    U,
    UPrime,
    D,
    DPrime,
}

impl Move {
    /// Every legal move. Scrambles draw uniformly from this set.
    pub const ALL: [Move; 12] = [
        Move::F,
        Move::FPrime,
        Move::B,
        Move::BPrime,
        Move::R,
        Move::RPrime,
        Move::L,
        Move::LPrime,
        Move::U,
        Move::UPrime,
        Move::D,
        Move::DPrime,
    ];

    /// The face this move turns.
    #[must_use]
    pub fn face(self) -> Face {
        match self {
            Move::F | Move::FPrime => Face::Front,
            Move::B | Move::BPrime => Face::Back,
            Move::R | Move::RPrime => Face::Right,
            Move::L | Move::LPrime => Face::Left,
            Move::U | Move::UPrime => Face::Up,
            Move::D | Move::DPrime => Face::Down,
        }
    }

    /// Whether the turn is clockwise when looking at the turned face.
    #[must_use]
    pub fn is_clockwise(self) -> bool {
        matches!(
            self,
            Move::F | Move::B | Move::R | Move::L | Move::U | Move::D
        )
    }

    /// The move that undoes this one.
    #[must_use]
    pub fn inverse(self) -> Move {
        match self {
            Move::F => Move::FPrime,
            Move::FPrime => Move::F,
            Move::B => Move::BPrime,
            Move::BPrime => Move::B,
            Move::R => Move::RPrime,
            Move::RPrime => Move::R,
            Move::L => Move::LPrime,
            Move::LPrime => Move::L,
            Move::U => Move::UPrime,
            Move::UPrime => Move::U,
            Move::D => Move::DPrime,
            Move::DPrime => Move::D,
        }
    }
}

// Source index for each destination slot when a grid turns clockwise: the
// left column rises to become the top row. Index 4 is the fixed center.
const ROTATE_CW: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
// The inverse mapping, for counter-clockwise turns.
const ROTATE_CCW: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

/// Rotate a face's 3×3 sticker grid a quarter turn.
#[must_use]
pub fn rotate_grid(grid: &Grid, clockwise: bool) -> Grid {
    let table = if clockwise { &ROTATE_CW } else { &ROTATE_CCW };
    std::array::from_fn(|i| grid[table[i]])
}

/// The border strips adjacent to each face, one ring of four
/// `(face, indices)` strips per face, indexed by `Face`.
///
/// A clockwise turn carries each strip's sticker values one slot forward
/// around its ring (wrapping); counter-clockwise carries them one slot back.
/// The Back ring reads its neighbors in mirrored index order because Back's
/// reading orientation is fixed as seen from behind the cube.
const EDGE_RINGS: [[(Face, [usize; 3]); 4]; 6] = [
    // Front
    [
        (Face::Up, [6, 7, 8]),
        (Face::Right, [0, 3, 6]),
        (Face::Down, [2, 1, 0]),
        (Face::Left, [8, 5, 2]),
    ],
    // Back
    [
        (Face::Up, [2, 1, 0]),
        (Face::Left, [0, 3, 6]),
        (Face::Down, [8, 7, 6]),
        (Face::Right, [2, 5, 8]),
    ],
    // Right
    [
        (Face::Up, [2, 5, 8]),
        (Face::Back, [6, 3, 0]),
        (Face::Down, [2, 5, 8]),
        (Face::Front, [2, 5, 8]),
    ],
    // Left
    [
        (Face::Up, [0, 3, 6]),
        (Face::Front, [0, 3, 6]),
        (Face::Down, [0, 3, 6]),
        (Face::Back, [8, 5, 2]),
    ],
    // Up
    [
        (Face::Back, [0, 1, 2]),
        (Face::Right, [0, 1, 2]),
        (Face::Front, [0, 1, 2]),
        (Face::Left, [0, 1, 2]),
    ],
    // Down
    [
        (Face::Front, [6, 7, 8]),
        (Face::Right, [6, 7, 8]),
        (Face::Back, [6, 7, 8]),
        (Face::Left, [6, 7, 8]),
    ],
];

impl CubeState {
    /// Apply one move, returning the next state.
    ///
    /// The turned face's grid is rotated a quarter turn and the four border
    /// strips around it are cycled one step. Every read comes from `self`,
    /// the pre-move snapshot, so no transfer observes another transfer's
    /// write.
    #[must_use]
    pub fn apply(&self, mv: Move) -> CubeState {
        log::trace!("applying {mv}");

        let face = mv.face();
        let mut next = self.clone();
        next.replace(face, rotate_grid(self.get(face), mv.is_clockwise()));

        let ring = &EDGE_RINGS[face as usize];
        for slot in 0..4 {
            let (src, dest) = if mv.is_clockwise() {
                (ring[slot], ring[(slot + 1) % 4])
            } else {
                (ring[(slot + 1) % 4], ring[slot])
            };
            let mut grid = *next.get(dest.0);
            for (s, d) in src.1.into_iter().zip(dest.1) {
                grid[d] = self.get(src.0)[s];
            }
            next.replace(dest.0, grid);
        }

        debug_assert_eq!(next.color_counts(), self.color_counts());
        next
    }

    /// Fold a sequence of moves over the state, one full move at a time.
    #[must_use]
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        moves
            .iter()
            .fold(self.clone(), |state, &mv| state.apply(mv))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::state::Color;

    #[test]
    fn quarter_turn_grid_mappings() {
        use Color::{Blue, Green, Orange, Red, White, Yellow};
        let grid = [White, Yellow, Red, Orange, Green, Blue, White, Yellow, Red];
        assert_eq!(
            rotate_grid(&grid, true),
            [White, Orange, White, Yellow, Green, Yellow, Red, Blue, Red]
        );
        assert_eq!(
            rotate_grid(&grid, false),
            [Red, Blue, Red, Yellow, Green, Yellow, White, Orange, White]
        );
    }

    #[test]
    fn grid_rotations_invert_each_other() {
        let grid = *CubeState::initial().apply(Move::R).get(Face::Front);
        assert_eq!(rotate_grid(&rotate_grid(&grid, true), false), grid);

        let mut four_turns = grid;
        for _ in 0..4 {
            four_turns = rotate_grid(&four_turns, true);
        }
        assert_eq!(four_turns, grid);
    }

    #[test]
    fn inverses_pair_off_within_a_face() {
        for mv in Move::ALL {
            assert_ne!(mv.inverse(), mv);
            assert_eq!(mv.inverse().inverse(), mv);
            assert_eq!(mv.inverse().face(), mv.face());
            assert_ne!(mv.inverse().is_clockwise(), mv.is_clockwise());
        }
    }

    #[test]
    fn edge_rings_visit_each_neighbor_once() {
        for face in Face::ALL {
            let ring = EDGE_RINGS[face as usize];
            let neighbors: HashSet<Face> = ring.iter().map(|&(f, _)| f).collect();
            assert_eq!(neighbors.len(), 4);
            assert!(!neighbors.contains(&face));
            assert!(!neighbors.contains(&face.opposite()));
        }
    }

    #[test]
    fn edge_rings_never_touch_centers() {
        for ring in EDGE_RINGS {
            for (_, strip) in ring {
                assert!(strip.iter().all(|&i| i != 4 && i < 9));
            }
        }
    }
}
