//! Quarter-turn moves and sequences of them in standard notation.

use std::{fmt::Display, str::FromStr};

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{CubeError, algebra::Direction, geometry::Face};

/// A quarter turn of one face. Written `U` for clockwise and `U'` for
/// counterclockwise, as seen from outside the turning face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

impl Move {
    /// The twelve quarter turns, clockwise before counterclockwise for each
    /// face in index order.
    pub const ALL: [Move; 12] = {
        let mut all = [Move {
            face: Face::Down,
            direction: Direction::Clockwise,
        }; 12];

        let mut i = 0;
        while i < all.len() {
            all[i] = Move::new(
                Face::ALL[i / 2],
                if i % 2 == 0 {
                    Direction::Clockwise
                } else {
                    Direction::Counterclockwise
                },
            );
            i += 1;
        }

        all
    };

    #[must_use]
    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    #[must_use]
    pub fn inverse(self) -> Move {
        Move {
            face: self.face,
            direction: self.direction.inverse(),
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face),
            Direction::Counterclockwise => write!(f, "{}'", self.face),
        }
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unsupported = || CubeError::UnsupportedMove(s.to_owned());

        let mut chars = s.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(unsupported)?;

        let direction = match chars.as_str() {
            "" => Direction::Clockwise,
            "'" => Direction::Counterclockwise,
            _ => return Err(unsupported()),
        };

        Ok(Move { face, direction })
    }
}

/// An ordered list of quarter turns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveSequence(pub Vec<Move>);

impl MoveSequence {
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The sequence that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> MoveSequence {
        MoveSequence(self.0.iter().rev().map(|mv| mv.inverse()).collect())
    }

    /// A random sequence of `length` quarter turns in which no face turns
    /// twice in a row.
    pub fn scramble(length: usize, rng: &mut fastrand::Rng) -> MoveSequence {
        let mut moves: Vec<Move> = Vec::with_capacity(length);

        for _ in 0..length {
            let previous = moves.last().map(|mv| mv.face);
            let candidates = Move::ALL
                .into_iter()
                .filter(|mv| Some(mv.face) != previous)
                .collect_vec();

            moves.push(candidates[rng.usize(..candidates.len())]);
        }

        let scramble = MoveSequence(moves);
        debug!("Generated scramble {scramble}");
        scramble
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(" "))
    }
}

/// Whitespace separated moves. A trailing `2` (`U2`) stands for the same
/// clockwise quarter turn twice.
impl FromStr for MoveSequence {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut moves = vec![];

        for token in s.split_whitespace() {
            if let Some(single) = token.strip_suffix('2') {
                let mv = single
                    .parse::<Move>()
                    .ok()
                    .filter(|mv| mv.direction == Direction::Clockwise)
                    .ok_or_else(|| CubeError::UnsupportedMove(token.to_owned()))?;

                moves.extend([mv, mv]);
            } else {
                moves.push(token.parse()?);
            }
        }

        Ok(MoveSequence(moves))
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<T: IntoIterator<Item = Move>>(iter: T) -> Self {
        MoveSequence(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveSequence};
    use crate::{CubeError, algebra::Direction, geometry::Face};

    #[test]
    fn alphabet() {
        let names = Move::ALL.iter().map(ToString::to_string).collect::<Vec<_>>();

        assert_eq!(
            names,
            ["D", "D'", "U", "U'", "F", "F'", "B", "B'", "L", "L'", "R", "R'"]
        );

        for mv in Move::ALL {
            assert_eq!(mv.to_string().parse::<Move>(), Ok(mv));
            assert_ne!(mv.inverse(), mv);
            assert_eq!(mv.inverse().inverse(), mv);
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        for symbol in ["", "X", "u", "U''", "Up", "R2", "M", "U' "] {
            assert_eq!(
                symbol.parse::<Move>(),
                Err(CubeError::UnsupportedMove(symbol.to_owned())),
                "{symbol:?}"
            );
        }
    }

    #[test]
    fn parse_sequence() {
        let sequence: MoveSequence = " R U  R' U2\tF'".parse().unwrap();

        assert_eq!(sequence.to_string(), "R U R' U U F'");
        assert_eq!(sequence.len(), 6);
        assert_eq!(
            sequence.moves()[0],
            Move::new(Face::Right, Direction::Clockwise)
        );

        assert!("".parse::<MoveSequence>().unwrap().is_empty());
        assert_eq!(
            "R U'2".parse::<MoveSequence>(),
            Err(CubeError::UnsupportedMove("U'2".to_owned()))
        );
        assert_eq!(
            "R Q".parse::<MoveSequence>(),
            Err(CubeError::UnsupportedMove("Q".to_owned()))
        );
    }

    #[test]
    fn inverse_sequence() {
        let sequence: MoveSequence = "R U F'".parse().unwrap();

        assert_eq!(sequence.inverse().to_string(), "F U' R'");
        assert_eq!(sequence.inverse().inverse(), sequence);
    }

    #[test]
    fn scramble_never_repeats_a_face() {
        let mut rng = fastrand::Rng::with_seed(7);
        let scramble = MoveSequence::scramble(200, &mut rng);

        assert_eq!(scramble.len(), 200);
        for (a, b) in scramble.moves().iter().zip(scramble.moves().iter().skip(1)) {
            assert_ne!(a.face, b.face);
        }

        let again = MoveSequence::scramble(200, &mut fastrand::Rng::with_seed(7));
        assert_eq!(scramble, again);
    }
}
