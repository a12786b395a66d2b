pub mod permutation_matrix;

pub use permutation_matrix::{PermutationMatrix, PermutationMatrixError};
