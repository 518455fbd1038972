//! Flat-net rendering of a cube state for the terminal. Each `(face, index)`
//! pair maps to one fixed cell; the caller reprints the whole net after
//! every state change.

use cube_core::{Color, CubeState, Face};
use owo_colors::OwoColorize;

fn sticker_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 255, 0),
        Color::Red => (255, 0, 0),
        Color::Orange => (255, 128, 0),
        Color::Green => (0, 255, 0),
        Color::Blue => (0, 0, 255),
    }
}

fn sticker_cell(color: Color) -> String {
    let (r, g, b) = sticker_rgb(color);
    "  ".on_truecolor(r, g, b).to_string()
}

/// Render the cube as an unfolded net:
///
/// ```text
///       U
/// L F R B
///       D
/// ```
///
/// Each sticker is a two-column colored cell; rows follow each grid's
/// row-major order.
#[must_use]
pub fn render_net(cube: &CubeState) -> String {
    let face_row =
        |face: Face, row: usize| -> String { (0..3).map(|col| sticker_cell(cube.get(face)[row * 3 + col])).collect() };

    let mut net = String::new();
    for row in 0..3 {
        net.push_str("      ");
        net.push_str(&face_row(Face::Up, row));
        net.push('\n');
    }
    for row in 0..3 {
        for face in [Face::Left, Face::Front, Face::Right, Face::Back] {
            net.push_str(&face_row(face, row));
        }
        net.push('\n');
    }
    for row in 0..3 {
        net.push_str("      ");
        net.push_str(&face_row(Face::Down, row));
        net.push('\n');
    }
    net
}
