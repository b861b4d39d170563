use crate::{error::Error, matrix::Matrix};

/// Rule used to pick the pivot row when eliminating a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PivotStrategy {
    /// Keep the diagonal cell unless it is exactly zero, then swap in the first row below
    /// with a nonzero value in the pivot column. Not numerically optimal for ill-conditioned
    /// systems.
    #[default]
    FirstNonZero,
    /// Swap in the row at or below the diagonal with the largest absolute value in the
    /// pivot column (partial pivoting).
    LargestMagnitude,
}

/// Gauss-Jordan elimination on an augmented matrix.
///
/// For a system of `R` unknowns the matrix must have `R` rows and `R + 1` columns. Every
/// row `k` in turn is pivoted, normalised so that the pivot becomes exactly 1 and then
/// subtracted from all other rows to zero column `k`. On success the leading `R × R`
/// block is the identity and the last column holds the solution.
///
/// Runs in O(R³) time without extra allocation. There is no epsilon tolerance, any value
/// different from `0.0` is accepted as a pivot.
///
/// # Example
/// ```
/// use gauss_jordan_spline::{GaussJordan, Matrix};
/// use assert_approx_eq::assert_approx_eq;
///
/// let mut matrix = Matrix::from_rows(&[
///     vec![6.0, -4.0, -1.0, 5.0, 0.0],
///     vec![6.0, -6.0, -7.0, -3.0, 6.0],
///     vec![-3.0, 9.0, 0.0, -7.0, -9.0],
///     vec![0.0, 7.0, 7.0, 0.0, -9.0],
/// ]).unwrap();
///
/// GaussJordan::default().solve(&mut matrix).unwrap();
///
/// assert_approx_eq!(-26.0 / 49.0, matrix[(0, 4)], 1e-6);
/// assert_approx_eq!(-30.0 / 49.0, matrix[(3, 4)], 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GaussJordan {
    pivot: PivotStrategy,
}

impl GaussJordan {
    pub fn new(pivot: PivotStrategy) -> Self {
        GaussJordan { pivot }
    }

    pub fn pivot_strategy(&self) -> PivotStrategy {
        self.pivot
    }

    /// Solves `matrix` in place.
    /// # Errors
    /// - [Error::InvalidShape] when `columns != rows + 1`,
    /// - [Error::UnsolvableSystem] when no nonzero pivot is found for a column.
    ///
    /// After an error the matrix is left partially reduced.
    pub fn solve(&self, matrix: &mut Matrix) -> Result<(), Error> {
        let rows = matrix.rows();
        let columns = matrix.columns();

        if columns != rows + 1 {
            return Err(Error::InvalidShape { rows, columns });
        }

        for k in 0..rows {
            self.pivot(matrix, k)?;

            let pivot = matrix[(k, k)];
            matrix.scale_row(k, 1.0 / pivot);

            for other in 0..rows {
                let value = matrix[(other, k)];
                if other != k && value != 0.0 {
                    matrix.add_scaled_row(k, other, -value);
                }
            }
        }

        log::debug!("solved {}x{} system:\n{}", rows, columns, matrix);
        Ok(())
    }

    fn pivot(&self, matrix: &mut Matrix, k: usize) -> Result<(), Error> {
        let rows = matrix.rows();

        let candidate = match self.pivot {
            PivotStrategy::FirstNonZero => {
                if matrix[(k, k)] != 0.0 {
                    return Ok(());
                }
                (k + 1..rows).find(|row| matrix[(*row, k)] != 0.0)
            }
            PivotStrategy::LargestMagnitude => (k..rows)
                .filter(|row| matrix[(*row, k)] != 0.0)
                .max_by(|a, b| matrix[(*a, k)].abs().total_cmp(&matrix[(*b, k)].abs())),
        };

        match candidate {
            Some(row) => {
                if row != k {
                    log::trace!("column {}: swapping rows {} and {}", k, k, row);
                    matrix.swap_rows(k, row);
                }
                Ok(())
            }
            None => Err(Error::UnsolvableSystem { column: k }),
        }
    }
}

/// Solves `matrix` in place with [PivotStrategy::FirstNonZero].
pub fn solve(matrix: &mut Matrix) -> Result<(), Error> {
    GaussJordan::default().solve(matrix)
}
