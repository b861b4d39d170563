use std::{
    fmt::Display,
    ops::{Index, IndexMut},
};

use nalgebra::DMatrix;

use crate::{error::Error, solver::GaussJordan};

/// Dense `rows × columns` matrix of `f64` values, mutated in place by the elementary
/// row operations of Gauss-Jordan elimination.
///
/// An augmented system of `R` equations is stored with `R` rows and `R + 1` columns,
/// the last column holding the right hand side constants:
///
/// ```text
/// |a1 b1 c1 d1|
/// |a2 b2 c2 d2|
/// |a3 b3 c3 d3|
/// ```
///
/// After [Matrix::solve] the leading block is the identity and the last column holds
/// the solution.
///
/// The matrix is not thread-safe without external synchronization, all mutation goes
/// through `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Creates matrix filled with zeros.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Matrix { data: DMatrix::zeros(rows, columns) }
    }

    /// Creates matrix from row data. All rows must have the same length.
    /// # Example
    /// ```
    /// use gauss_jordan_spline::Matrix;
    ///
    /// let matrix = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    /// assert_eq!(2, matrix.rows());
    /// assert_eq!(3, matrix.columns());
    /// assert_eq!(6.0, matrix[(1, 2)]);
    /// ```
    /// # Errors
    /// [Error::RaggedRows] is returned when a row length differs from the first row.
    /// ```
    /// use gauss_jordan_spline::Matrix;
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, Error> {
        let columns = rows.first().map(|row| row.len()).unwrap_or(0);

        if let Some((row, found)) = rows
            .iter()
            .map(|row| row.len())
            .enumerate()
            .find(|(_, len)| *len != columns)
        {
            return Err(Error::RaggedRows { row, expected: columns, found });
        }

        let data = DMatrix::from_fn(rows.len(), columns, |r, c| rows[r][c]);
        Ok(Matrix { data })
    }

    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    pub fn columns(&self) -> usize {
        self.data.ncols()
    }

    /// # Panics
    /// Panics when `row` or `column` is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[(row, column)]
    }

    /// # Panics
    /// Panics when `row` or `column` is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, value: f64) {
        self.data[(row, column)] = value;
    }

    /// Copy of all values in a row.
    pub fn row(&self, row: usize) -> Vec<f64> {
        self.data.row(row).iter().copied().collect()
    }

    /// Copy of all values in a column.
    pub fn column(&self, column: usize) -> Vec<f64> {
        self.data.column(column).iter().copied().collect()
    }

    /// Last column of the matrix, which holds the solution vector once the matrix
    /// has been solved. Empty for a matrix without columns.
    pub fn solution(&self) -> Vec<f64> {
        match self.columns() {
            0 => Vec::new(),
            columns => self.column(columns - 1),
        }
    }

    /// Swaps two full rows.
    pub fn swap_rows(&mut self, row1: usize, row2: usize) {
        if row1 != row2 {
            self.data.swap_rows(row1, row2);
        }
    }

    /// Multiplies every cell of `row` by `factor`.
    pub fn scale_row(&mut self, row: usize, factor: f64) {
        let mut view = self.data.row_mut(row);
        view *= factor;
    }

    /// Adds `source` row multiplied by `factor` to `target` row, result is stored in `target`.
    pub fn add_scaled_row(&mut self, source: usize, target: usize, factor: f64) {
        for column in 0..self.columns() {
            let value = self.data[(source, column)] * factor;
            self.data[(target, column)] += value;
        }
    }

    /// Adds `source` row to `target` row.
    pub fn add_row(&mut self, source: usize, target: usize) {
        self.add_scaled_row(source, target, 1.0);
    }

    /// Solves augmented system in place using [GaussJordan] with default pivot strategy.
    /// # Example
    /// ```
    /// use gauss_jordan_spline::Matrix;
    ///
    /// // x + y = 3
    /// // x - y = 1
    /// let mut matrix = Matrix::from_rows(&[vec![1.0, 1.0, 3.0], vec![1.0, -1.0, 1.0]]).unwrap();
    /// matrix.solve().unwrap();
    ///
    /// assert_eq!(vec![2.0, 1.0], matrix.solution());
    /// ```
    pub fn solve(&mut self) -> Result<(), Error> {
        GaussJordan::default().solve(self)
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn into_inner(self) -> DMatrix<f64> {
        self.data
    }
}

impl From<DMatrix<f64>> for Matrix {
    fn from(data: DMatrix<f64>) -> Self {
        Matrix { data }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.data[index]
    }
}

/// Fixed width rows for debug output, e.g. `|  1.00,  -2.50|`.
impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.data.row_iter() {
            let cells: Vec<String> = row.iter().map(|value| format!("{:6.2}", value)).collect();
            writeln!(f, "|{}|", cells.join(", "))?;
        }
        Ok(())
    }
}
