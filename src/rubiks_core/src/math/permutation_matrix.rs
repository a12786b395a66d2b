use std::fmt::{self, Debug};

use thiserror::Error;

/// A square 0/1 matrix with exactly one 1 in every row and every column.
///
/// Only the position of the 1 in each row is stored. Row `i` has its 1 in
/// column `ones[i]`, so multiplying stays a gather/scatter over `N` values
/// instead of an `N × N` product.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PermutationMatrix<const N: usize> {
    ones: [usize; N],
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationMatrixError {
    #[error("Entry ({row}, {column}) is {value}, expected 0 or 1")]
    InvalidEntry { row: usize, column: usize, value: u8 },
    #[error("Row {0} must contain exactly one 1")]
    BadRow(usize),
    #[error("Column {0} must contain exactly one 1")]
    BadColumn(usize),
}

impl<const N: usize> PermutationMatrix<N> {
    /// The identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        PermutationMatrix {
            ones: std::array::from_fn(|i| i),
        }
    }

    /// Build a matrix from the column of the 1 in each row. Usable in const
    /// items, so fixed matrices are checked at compile time.
    ///
    /// # Errors
    ///
    /// If two rows put their 1 in the same column, or a column is out of
    /// range.
    pub const fn from_ones(ones: [usize; N]) -> Result<Self, PermutationMatrixError> {
        let mut seen = [false; N];

        let mut row = 0;
        while row < N {
            let column = ones[row];
            if column >= N || seen[column] {
                return Err(PermutationMatrixError::BadRow(row));
            }

            seen[column] = true;
            row += 1;
        }

        Ok(PermutationMatrix { ones })
    }

    /// Build a matrix from a literal 0/1 grid.
    ///
    /// # Errors
    ///
    /// If the grid has an entry other than 0 or 1, or a row or column
    /// without exactly one 1.
    pub fn from_rows(rows: &[[u8; N]; N]) -> Result<Self, PermutationMatrixError> {
        let mut ones = [0; N];
        let mut column_counts = [0_usize; N];

        for (row, entries) in rows.iter().enumerate() {
            let mut found = None;

            for (column, &value) in entries.iter().enumerate() {
                match value {
                    0 => {}
                    1 if found.is_none() => {
                        found = Some(column);
                        column_counts[column] += 1;
                    }
                    1 => return Err(PermutationMatrixError::BadRow(row)),
                    value => {
                        return Err(PermutationMatrixError::InvalidEntry { row, column, value });
                    }
                }
            }

            ones[row] = found.ok_or(PermutationMatrixError::BadRow(row))?;
        }

        if let Some(column) = column_counts.iter().position(|&count| count != 1) {
            return Err(PermutationMatrixError::BadColumn(column));
        }

        Ok(PermutationMatrix { ones })
    }

    /// The entry at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of range.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        u8::from(self.ones[row] == column)
    }

    /// The column holding the 1 of every row.
    #[must_use]
    pub fn ones(&self) -> &[usize; N] {
        &self.ones
    }

    /// The dense 0/1 form of the matrix.
    #[must_use]
    pub fn to_rows(&self) -> [[u8; N]; N] {
        std::array::from_fn(|row| std::array::from_fn(|column| self.get(row, column)))
    }

    /// The transpose, which for a permutation matrix is also its inverse.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut ones = [0; N];

        for (row, &column) in self.ones.iter().enumerate() {
            ones[column] = row;
        }

        PermutationMatrix { ones }
    }

    /// The matrix product `self · other`.
    #[must_use]
    pub fn product(&self, other: &Self) -> Self {
        PermutationMatrix {
            ones: std::array::from_fn(|row| other.ones[self.ones[row]]),
        }
    }

    /// `self` multiplied by itself `exponent` times.
    #[must_use]
    pub fn pow(&self, exponent: u32) -> Self {
        (0..exponent).fold(Self::identity(), |acc, _| acc.product(self))
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.ones.iter().enumerate().all(|(row, &column)| row == column)
    }

    /// Left-multiply the matrix against a column of rows: `self · rows`.
    ///
    /// Row `i` of the result is row `ones[i]` of the input.
    #[must_use]
    pub fn permute_rows<T: Copy>(&self, rows: &[T; N]) -> [T; N] {
        std::array::from_fn(|row| rows[self.ones[row]])
    }

    /// Right-multiply a row vector against the matrix: `vector · self`.
    ///
    /// Entry `ones[i]` of the result is entry `i` of the input.
    #[must_use]
    pub fn permute_vector<T: Copy>(&self, vector: &[T; N]) -> [T; N] {
        let mut out = *vector;

        for (row, &column) in self.ones.iter().enumerate() {
            out[column] = vector[row];
        }

        out
    }

    /// Place a smaller permutation matrix into the identity of size `N`.
    ///
    /// Entry `(i, j)` of `block` lands at `(slots[i], slots[j])`; every row
    /// and column outside `slots` stays as in the identity.
    ///
    /// # Panics
    ///
    /// Panics if a slot is out of range. Repeated slots are rejected with a
    /// panic in debug builds.
    #[must_use]
    pub fn embed<const M: usize>(block: &PermutationMatrix<M>, slots: &[usize; M]) -> Self {
        debug_assert!(
            slots
                .iter()
                .enumerate()
                .all(|(i, slot)| !slots[..i].contains(slot)),
            "embedding slots must be distinct"
        );

        let mut ones = Self::identity().ones;

        for (i, &slot) in slots.iter().enumerate() {
            ones[slot] = slots[block.ones[i]];
        }

        PermutationMatrix { ones }
    }
}

impl<const N: usize> Debug for PermutationMatrix<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.to_rows().iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{PermutationMatrix, PermutationMatrixError};

    #[test]
    fn from_rows_round_trips_through_dense_form() {
        let rows = [[0, 0, 1], [1, 0, 0], [0, 1, 0]];
        let matrix = PermutationMatrix::from_rows(&rows).unwrap();

        assert_eq!(matrix.ones(), &[2, 0, 1]);
        assert_eq!(matrix.to_rows(), rows);
    }

    #[test]
    fn rejects_non_permutations() {
        assert_eq!(
            PermutationMatrix::from_rows(&[[1, 1], [0, 0]]),
            Err(PermutationMatrixError::BadRow(0))
        );
        assert_eq!(
            PermutationMatrix::from_rows(&[[1, 0], [1, 0]]),
            Err(PermutationMatrixError::BadColumn(0))
        );
        assert_eq!(
            PermutationMatrix::from_rows(&[[2, 0], [0, 1]]),
            Err(PermutationMatrixError::InvalidEntry {
                row: 0,
                column: 0,
                value: 2
            })
        );
        assert_eq!(
            PermutationMatrix::from_ones([1, 1, 0]),
            Err(PermutationMatrixError::BadRow(1))
        );
        assert_eq!(
            PermutationMatrix::from_ones([0, 3, 1]),
            Err(PermutationMatrixError::BadRow(1))
        );
    }

    #[test]
    fn from_ones_in_const_items() {
        const SWAP: Result<PermutationMatrix<3>, PermutationMatrixError> =
            PermutationMatrix::from_ones([1, 0, 2]);
        const BROKEN: Result<PermutationMatrix<3>, PermutationMatrixError> =
            PermutationMatrix::from_ones([2, 0, 2]);

        assert_eq!(SWAP.map(|matrix| *matrix.ones()), Ok([1, 0, 2]));
        assert_eq!(BROKEN, Err(PermutationMatrixError::BadRow(2)));
    }

    #[test]
    fn transpose_is_inverse() {
        let matrix = PermutationMatrix::from_ones([3, 0, 4, 1, 2]).unwrap();

        assert!(matrix.product(&matrix.transpose()).is_identity());
        assert!(matrix.transpose().product(&matrix).is_identity());
        assert_eq!(matrix.transpose().transpose(), matrix);
    }

    #[test]
    fn multiplication_matches_dense_product() {
        let a = PermutationMatrix::from_ones([1, 2, 0, 3]).unwrap();
        let b = PermutationMatrix::from_ones([3, 1, 0, 2]).unwrap();

        let (a_rows, b_rows) = (a.to_rows(), b.to_rows());
        let dense: [[u8; 4]; 4] = std::array::from_fn(|i| {
            std::array::from_fn(|j| (0..4).map(|k| a_rows[i][k] * b_rows[k][j]).sum())
        });

        assert_eq!(a.product(&b).to_rows(), dense);
    }

    #[test]
    fn row_and_vector_products_match_dense_products() {
        let matrix = PermutationMatrix::from_ones([2, 0, 3, 1]).unwrap();
        let rows = matrix.to_rows();
        let values = [10_u32, 20, 30, 40];

        let left: [u32; 4] =
            std::array::from_fn(|i| (0..4).map(|k| u32::from(rows[i][k]) * values[k]).sum());
        let right: [u32; 4] =
            std::array::from_fn(|j| (0..4).map(|k| values[k] * u32::from(rows[k][j])).sum());

        assert_eq!(matrix.permute_rows(&values), left);
        assert_eq!(matrix.permute_vector(&values), right);
    }

    #[test]
    fn embed_touches_only_the_slots() {
        let block = PermutationMatrix::from_ones([1, 0]).unwrap();
        let embedded = PermutationMatrix::<5>::embed(&block, &[1, 3]);

        assert_eq!(embedded.ones(), &[0, 3, 2, 1, 4]);
        assert_eq!(
            embedded.permute_rows(&['a', 'b', 'c', 'd', 'e']),
            ['a', 'd', 'c', 'b', 'e']
        );
    }
}
