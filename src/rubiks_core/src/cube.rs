use log::{debug, trace};
use thiserror::Error;

use crate::{
    FACE_COUNT, SIZE,
    algebra::permutation_matrices,
    facelets::Facelets,
    geometry::turn_geometry,
    math::PermutationMatrix,
    moves::{Move, MoveSequence},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid direction `{0}`, expected `clockwise` or `counterclockwise`")]
    InvalidArgument(String),
    #[error("Unsupported move `{0}`, expected one of U U' D D' F F' B B' L L' R R'")]
    UnsupportedMove(String),
}

/// Permutes whole rows of the facelet array.
type FaceIndexMatrix = PermutationMatrix<FACE_COUNT>;

/// A 3×3×3 cube as six faces of nine colored facelets.
///
/// The facelets only ever change through quarter turns, so every state is
/// reachable from the solved cube by exactly the moves applied to it. Readers
/// get copies through [`Cube::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cube {
    facelets: Facelets,
}

impl Default for Cube {
    fn default() -> Self {
        Cube::new()
    }
}

impl Cube {
    /// A solved cube.
    #[must_use]
    pub fn new() -> Cube {
        Cube {
            facelets: Facelets::solved(),
        }
    }

    /// A copy of the current facelets.
    #[must_use]
    pub fn snapshot(&self) -> Facelets {
        self.facelets
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.facelets.is_solved()
    }

    /// Apply the move written as `symbol`, e.g. `R` or `U'`.
    ///
    /// # Errors
    ///
    /// `CubeError::UnsupportedMove` if `symbol` is not one of the twelve
    /// quarter turns. The cube is left untouched.
    pub fn apply_move(&mut self, symbol: &str) -> Result<(), CubeError> {
        let mv = symbol.parse::<Move>()?;
        self.apply(mv);
        Ok(())
    }

    /// Apply every move of a whitespace separated sequence.
    ///
    /// # Errors
    ///
    /// `CubeError::UnsupportedMove` if any token is not a move. The whole
    /// sequence is parsed before anything is applied, so the cube is left
    /// untouched.
    pub fn apply_sequence(&mut self, sequence: &str) -> Result<(), CubeError> {
        let sequence = sequence.parse::<MoveSequence>()?;
        debug!("Applying {} moves: {sequence}", sequence.len());
        self.apply_all(&sequence);
        Ok(())
    }

    pub fn apply_all<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for &mv in moves {
            self.apply(mv);
        }
    }

    /// Apply one quarter turn.
    pub fn apply(&mut self, mv: Move) {
        let geometry = turn_geometry(mv.face);
        let (sides, _) = permutation_matrices(geometry.side_direction(mv.direction));
        let (_, spin) = permutation_matrices(mv.direction);

        let rows = &self.facelets.rows;

        // Only ring rows are ever read back out of `layer`
        let mut layer = [[0; SIZE]; FACE_COUNT];
        for strip in &geometry.strips {
            let row = &rows[strip.face.index()];
            layer[strip.face.index()] = strip.positions.map(|position| row[position]);
        }

        let layer = FaceIndexMatrix::embed(&sides, &geometry.ring_slots()).permute_rows(&layer);

        let mut next = *rows;
        for strip in &geometry.strips {
            for (&position, &color) in strip.positions.iter().zip(&layer[strip.face.index()]) {
                next[strip.face.index()][position] = color;
            }
        }

        next[mv.face.index()] = spin.permute_vector(&rows[mv.face.index()]);

        self.facelets.rows = next;
        trace!("Applied {mv}");

        debug_assert!(self.facelets.is_well_formed());
    }
}

#[cfg(test)]
mod tests {
    use super::{Cube, CubeError};
    use crate::{FACELETS_PER_FACE, color::Color, facelets::Facelets, geometry::Face};

    #[test]
    fn starts_solved() {
        let cube = Cube::new();

        assert!(cube.is_solved());
        for face in Face::ALL {
            assert_eq!(
                cube.snapshot().face(face),
                &[Color::of_face(face).id(); FACELETS_PER_FACE]
            );
        }
    }

    #[test]
    fn up_moves_top_rows() {
        let mut cube = Cube::new();
        cube.apply_move("U").unwrap();

        assert_eq!(
            cube.snapshot().rows(),
            &[
                [1, 1, 1, 1, 1, 1, 1, 1, 1],
                [2, 2, 2, 2, 2, 2, 2, 2, 2],
                [6, 6, 6, 3, 3, 3, 3, 3, 3],
                [5, 5, 5, 4, 4, 4, 4, 4, 4],
                [3, 3, 3, 5, 5, 5, 5, 5, 5],
                [4, 4, 4, 6, 6, 6, 6, 6, 6],
            ]
        );
    }

    #[test]
    fn right_moves_right_columns() {
        let mut cube = Cube::new();
        cube.apply_move("R").unwrap();

        assert_eq!(
            cube.snapshot().rows(),
            &[
                [1, 1, 4, 1, 1, 4, 1, 1, 4],
                [2, 2, 3, 2, 2, 3, 2, 2, 3],
                [3, 3, 1, 3, 3, 1, 3, 3, 1],
                [2, 4, 4, 2, 4, 4, 2, 4, 4],
                [5, 5, 5, 5, 5, 5, 5, 5, 5],
                [6, 6, 6, 6, 6, 6, 6, 6, 6],
            ]
        );
    }

    #[test]
    fn front_moves_edges_of_four_faces() {
        let mut cube = Cube::new();
        cube.apply_move("F").unwrap();

        assert_eq!(
            cube.snapshot().rows(),
            &[
                [6, 6, 6, 1, 1, 1, 1, 1, 1],
                [2, 2, 2, 2, 2, 2, 5, 5, 5],
                [3, 3, 3, 3, 3, 3, 3, 3, 3],
                [4, 4, 4, 4, 4, 4, 4, 4, 4],
                [5, 5, 1, 5, 5, 1, 5, 5, 1],
                [2, 6, 6, 2, 6, 6, 2, 6, 6],
            ]
        );
    }

    #[test]
    fn unsupported_move_changes_nothing() {
        let mut cube = Cube::new();
        cube.apply_sequence("R U F'").unwrap();
        let before = cube.snapshot();

        assert_eq!(
            cube.apply_move("Q"),
            Err(CubeError::UnsupportedMove("Q".to_owned()))
        );
        assert_eq!(cube.snapshot(), before);

        assert_eq!(
            cube.apply_sequence("R U X"),
            Err(CubeError::UnsupportedMove("X".to_owned()))
        );
        assert_eq!(cube.snapshot(), before);
    }

    #[test]
    fn snapshot_is_a_copy() {
        let mut cube = Cube::new();
        let solved = cube.snapshot();

        cube.apply_move("D").unwrap();

        assert_eq!(solved, Facelets::solved());
        assert_ne!(cube.snapshot(), solved);
    }
}
