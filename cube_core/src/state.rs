//! The cube's sticker data model.

use itertools::Itertools;

/// One of the six sticker colors. The engine only ever compares colors for
/// identity.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Color {
    White,
    Yellow,
    Red,
    Orange,
    Green,
    Blue,
}

/// One of the six faces of the cube. The discriminant doubles as the face's
/// index into the state array.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Face {
    Front,
    Back,
    Right,
    Left,
    Up,
    Down,
}

impl Face {
    pub const ALL: [Face; 6] = [
        Face::Front,
        Face::Back,
        Face::Right,
        Face::Left,
        Face::Up,
        Face::Down,
    ];

    /// The color this face shows in the solved state.
    #[must_use]
    pub fn home_color(self) -> Color {
        match self {
            Face::Front => Color::Red,
            Face::Back => Color::Orange,
            Face::Right => Color::Blue,
            Face::Left => Color::Green,
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
        }
    }

    /// The face on the other side of the cube, the one face a turn never
    /// borders.
    #[must_use]
    pub fn opposite(self) -> Face {
        match self {
            Face::Front => Face::Back,
            Face::Back => Face::Front,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Up => Face::Down,
            Face::Down => Face::Up,
        }
    }
}

/// The nine stickers of one face in row-major order: 0, 1, 2 across the top
/// row, 3, 4, 5 across the middle, 6, 7, 8 across the bottom, read in the
/// face's fixed orientation. Index 4 is the center.
pub type Grid = [Color; 9];

/// The full sticker configuration of the cube, one grid per face.
///
/// Moves permute stickers and never create, destroy, or recolor one, so every
/// reachable state holds exactly nine stickers of each color.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CubeState {
    faces: [Grid; 6],
}

impl CubeState {
    /// The solved configuration: every face uniformly its home color.
    #[must_use]
    pub fn initial() -> CubeState {
        CubeState {
            faces: Face::ALL.map(|face| [face.home_color(); 9]),
        }
    }

    /// The sticker grid of `face`.
    #[must_use]
    pub fn get(&self, face: Face) -> &Grid {
        &self.faces[face as usize]
    }

    /// Overwrite the grid of `face`. Only the move engine writes faces, and
    /// only with whole grids computed from a pre-move snapshot.
    pub(crate) fn replace(&mut self, face: Face, grid: Grid) {
        self.faces[face as usize] = grid;
    }

    /// Whether every face is uniformly one color.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|grid| grid.iter().all_equal())
    }

    /// How many stickers of each color are on the cube, indexed by the order
    /// of `Color`'s variants. `[9; 6]` for every reachable state.
    #[must_use]
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for grid in &self.faces {
            for color in grid {
                counts[*color as usize] += 1;
            }
        }
        counts
    }

    /// Restore the solved configuration, discarding the current state.
    pub fn reset(&mut self) {
        *self = CubeState::initial();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_cube_is_solved() {
        let cube = CubeState::initial();
        assert!(cube.is_solved());
        assert_eq!(cube.color_counts(), [9; 6]);
        for face in Face::ALL {
            assert!(cube.get(face).iter().all(|&color| color == face.home_color()));
        }
    }

    #[test]
    fn opposite_faces_pair_up() {
        for face in Face::ALL {
            assert_ne!(face.opposite(), face);
            assert_eq!(face.opposite().opposite(), face);
        }
        assert_eq!(Face::Front.opposite(), Face::Back);
        assert_eq!(Face::Right.opposite(), Face::Left);
        assert_eq!(Face::Up.opposite(), Face::Down);
    }

    #[test]
    fn home_colors_are_distinct() {
        let mut solved = CubeState::initial();
        assert_eq!(solved.color_counts(), [9; 6]);
        solved.reset();
        assert_eq!(solved, CubeState::initial());
    }
}
