//! The fixed permutation matrices behind every quarter turn.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CubeError, FACELETS_PER_FACE, SIZE, math::PermutationMatrix};

/// Number of faces bordering a turning face.
pub const SIDE_COUNT: usize = 4;

/// Cycles the four faces bordering a turning face.
pub type SideMatrix = PermutationMatrix<SIDE_COUNT>;

/// Spins the facelets of a single face.
pub type FaceMatrix = PermutationMatrix<FACELETS_PER_FACE>;

/// A clockwise side turn sends ring slot 0 to slot 2, 2 to 1, 1 to 3 and 3
/// back to 0. Row `i` has its 1 in column `CLOCKWISE_SIDES[i]`.
const CLOCKWISE_SIDES: SideMatrix = match PermutationMatrix::from_ones([3, 2, 0, 1]) {
    Ok(matrix) => matrix,
    Err(_) => panic!("clockwise side turn is not a permutation"),
};

/// The 90° clockwise spin of a row-major `SIZE × SIZE` grid, applied by
/// right-multiplying a face's row.
const CLOCKWISE_FACE: FaceMatrix = {
    let mut ones = [0; FACELETS_PER_FACE];

    let mut position = 0;
    while position < FACELETS_PER_FACE {
        let (row, column) = (position / SIZE, position % SIZE);
        ones[position] = column * SIZE + (SIZE - 1 - row);
        position += 1;
    }

    match PermutationMatrix::from_ones(ones) {
        Ok(matrix) => matrix,
        Err(_) => panic!("clockwise face spin is not a permutation"),
    }
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Clockwise,
    Counterclockwise,
}

impl Direction {
    pub const ALL: [Self; 2] = [Direction::Clockwise, Direction::Counterclockwise];

    #[must_use]
    pub fn inverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::Counterclockwise,
            Direction::Counterclockwise => Direction::Clockwise,
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Direction::Clockwise => "clockwise",
            Direction::Counterclockwise => "counterclockwise",
        })
    }
}

impl FromStr for Direction {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clockwise" => Ok(Direction::Clockwise),
            "counterclockwise" => Ok(Direction::Counterclockwise),
            _ => Err(CubeError::InvalidArgument(s.to_owned())),
        }
    }
}

/// The side and face matrices of a quarter turn in `direction`.
///
/// The counterclockwise matrices are the transposes of the clockwise ones.
#[must_use]
pub fn permutation_matrices(direction: Direction) -> (SideMatrix, FaceMatrix) {
    match direction {
        Direction::Clockwise => (CLOCKWISE_SIDES, CLOCKWISE_FACE),
        Direction::Counterclockwise => (CLOCKWISE_SIDES.transpose(), CLOCKWISE_FACE.transpose()),
    }
}
