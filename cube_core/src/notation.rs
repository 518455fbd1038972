//! Textual face-turn notation: `F` turns the front face clockwise, `F'`
//! counter-clockwise.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::moves::Move;

/// A move token or sequence that could not be parsed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseAlgError {
    #[error("unrecognized move `{0}`")]
    UnrecognizedMove(String),
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Move::F => "F",
            Move::FPrime => "F'",
            Move::B => "B",
            Move::BPrime => "B'",
            Move::R => "R",
            Move::RPrime => "R'",
            Move::L => "L",
            Move::LPrime => "L'",
            Move::U => "U",
            Move::UPrime => "U'",
            Move::D => "D",
            Move::DPrime => "D'",
        })
    }
}

impl FromStr for Move {
    type Err = ParseAlgError;

    fn from_str(s: &str) -> Result<Move, ParseAlgError> {
        match s {
            "F" => Ok(Move::F),
            "F'" => Ok(Move::FPrime),
            "B" => Ok(Move::B),
            "B'" => Ok(Move::BPrime),
            "R" => Ok(Move::R),
            "R'" => Ok(Move::RPrime),
            "L" => Ok(Move::L),
            "L'" => Ok(Move::LPrime),
            "U" => Ok(Move::U),
            "U'" => Ok(Move::UPrime),
            "D" => Ok(Move::D),
            "D'" => Ok(Move::DPrime),
            _ => Err(ParseAlgError::UnrecognizedMove(s.to_owned())),
        }
    }
}

/// Parse a whitespace-separated move sequence.
///
/// A `2` suffix doubles the quarter turn before it: `F2` yields `F F`. The
/// engine itself has no half-turn operator.
///
/// # Errors
///
/// Returns `ParseAlgError::UnrecognizedMove` for any token outside the
/// notation.
pub fn parse_alg(alg: &str) -> Result<Vec<Move>, ParseAlgError> {
    let mut moves = Vec::new();
    for token in alg.split_whitespace() {
        if let Some(base) = token.strip_suffix('2') {
            let mv = base
                .parse::<Move>()
                .map_err(|_| ParseAlgError::UnrecognizedMove(token.to_owned()))?;
            moves.extend([mv, mv]);
        } else {
            moves.push(token.parse()?);
        }
    }
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_move_round_trips_through_its_name() {
        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse(), Ok(mv));
        }
    }

    #[test]
    fn sequences_split_on_whitespace_and_expand_doubles() {
        assert_eq!(
            parse_alg("R U2  R'\tU'"),
            Ok(vec![
                Move::R,
                Move::U,
                Move::U,
                Move::RPrime,
                Move::UPrime
            ])
        );
        assert_eq!(parse_alg(""), Ok(vec![]));
    }

    #[test]
    fn junk_tokens_are_rejected() {
        assert_eq!(
            parse_alg("R X"),
            Err(ParseAlgError::UnrecognizedMove("X".to_owned()))
        );
        assert_eq!(
            parse_alg("R2'"),
            Err(ParseAlgError::UnrecognizedMove("R2'".to_owned()))
        );
    }
}
