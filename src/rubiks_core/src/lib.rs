//! Facelet model of a 3×3×3 Rubik's cube and the quarter turns acting on it.
//!
//! The state is a 6 × 9 array of color identifiers, one row per [`Face`].
//! Every quarter turn is carried out as a product of permutation matrices: a
//! 4 × 4 matrix cycling the strips of the four bordering faces, embedded into
//! the 6 × 6 identity over faces, and a 9 × 9 matrix spinning the turned face.
//! Which strips move, and in which order their facelets are read, is derived
//! from the geometry of each face rather than spelled out per move.

#![warn(clippy::pedantic)]

pub mod algebra;
pub mod color;
mod cube;
pub mod facelets;
pub mod geometry;
pub mod math;
pub mod moves;

pub use algebra::{Direction, permutation_matrices};
pub use color::Color;
pub use cube::{Cube, CubeError};
pub use facelets::Facelets;
pub use geometry::Face;
pub use moves::{Move, MoveSequence};

/// Edge length of the cube.
pub const SIZE: usize = 3;

/// Rows of the facelet array.
pub const FACE_COUNT: usize = 6;

/// Facelets on one face, stored row-major.
pub const FACELETS_PER_FACE: usize = SIZE * SIZE;
