//! A deterministic sticker-level model of the 3×3×3 twisty puzzle.
//!
//! [`CubeState`] holds six faces of nine sticker colors; [`Move`] enumerates
//! the twelve legal quarter turns. Applying a move is a pure permutation of
//! the 54 stickers, computed from a snapshot of the pre-move state, so
//! callers only ever observe fully-applied moves and a seeded scramble is
//! reproducible sticker-for-sticker.

pub mod moves;
pub mod notation;
pub mod scramble;
pub mod state;

pub use moves::{Move, rotate_grid};
pub use notation::{ParseAlgError, parse_alg};
pub use scramble::{DEFAULT_SCRAMBLE_MOVES, scramble};
pub use state::{Color, CubeState, Face, Grid};
