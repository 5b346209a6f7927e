//! Dense matrices over an exact coefficient ring.
//!
//! Multiplication matrices are assembled exactly, column by column, and only
//! converted to `f64` once complete.

use std::ops::{Add, Index, IndexMut, Sub};

use nalgebra::DMatrix;
use num_traits::ToPrimitive;

use nullstelle_rings::traits::Ring;

use crate::error::LinalgError;

/// Dense matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix<R> {
    /// Matrix entries in row-major order.
    data: Vec<R>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

/// Inner product of two vectors.
///
/// # Panics
///
/// Panics if the lengths differ.
#[must_use]
pub fn dot<R: Ring>(a: &[R], b: &[R]) -> R {
    assert_eq!(a.len(), b.len(), "vectors have different lengths");
    a.iter()
        .zip(b)
        .fold(R::zero(), |acc, (x, y)| acc + x.clone() * y.clone())
}

impl<R: Ring> DenseMatrix<R> {
    /// Creates a new matrix filled with zeros.
    #[must_use]
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![R::zero(); num_rows * num_cols],
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from its rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<R>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        assert!(
            rows.iter().all(|r| r.len() == num_cols),
            "rows have different lengths"
        );
        Self {
            data: rows.into_iter().flatten().collect(),
            num_rows,
            num_cols,
        }
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = R::one();
        }
        m
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns a reference to the entry at (row, col).
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&R> {
        (row < self.num_rows && col < self.num_cols).then(|| &self.data[row * self.num_cols + col])
    }

    /// Returns a slice of the specified row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[R] {
        let start = row * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// Returns a column as a vector.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<R> {
        (0..self.num_rows)
            .map(|row| self[(row, col)].clone())
            .collect()
    }

    /// Sets a column from a slice.
    pub fn set_col(&mut self, col: usize, values: &[R]) {
        assert_eq!(values.len(), self.num_rows, "column has wrong length");
        for (row, val) in values.iter().enumerate() {
            self[(row, col)] = val.clone();
        }
    }

    /// Matrix-vector multiply: y = A * x.
    #[must_use]
    pub fn mv(&self, x: &[R]) -> Vec<R> {
        assert_eq!(x.len(), self.num_cols, "vector has wrong length");
        (0..self.num_rows).map(|row| dot(self.row(row), x)).collect()
    }

    /// Matrix-matrix multiply: C = A * B.
    #[must_use]
    pub fn mm(&self, other: &Self) -> Self {
        assert_eq!(self.num_cols, other.num_rows, "inner dimensions differ");

        let other_t = other.transpose();
        let mut result = Self::zeros(self.num_rows, other.num_cols);
        for i in 0..self.num_rows {
            for j in 0..other.num_cols {
                result[(i, j)] = dot(self.row(i), other_t.row(j));
            }
        }
        result
    }

    /// Returns the transpose of the matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.num_cols, self.num_rows);
        for i in 0..self.num_rows {
            for j in 0..self.num_cols {
                result[(j, i)] = self[(i, j)].clone();
            }
        }
        result
    }

    /// Scales all entries by a scalar.
    #[must_use]
    pub fn scale(&self, scalar: &R) -> Self {
        Self {
            data: self.data.iter().map(|v| v.clone() * scalar.clone()).collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Returns true if every entry is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(Ring::is_zero)
    }

    fn zip_with(&self, other: &Self, f: impl Fn(R, R) -> R) -> Self {
        assert_eq!(self.num_rows, other.num_rows, "row counts differ");
        assert_eq!(self.num_cols, other.num_cols, "column counts differ");

        Self {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| f(a.clone(), b.clone()))
                .collect(),
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }
}

impl<R: Ring + ToPrimitive> DenseMatrix<R> {
    /// Rounds every entry to the nearest `f64`.
    ///
    /// # Errors
    ///
    /// Returns [`LinalgError::NonFiniteEntry`] for the first entry with no
    /// finite `f64` image.
    pub fn to_f64(&self) -> Result<DMatrix<f64>, LinalgError> {
        let mut out = DMatrix::zeros(self.num_rows, self.num_cols);
        for row in 0..self.num_rows {
            for col in 0..self.num_cols {
                out[(row, col)] = self[(row, col)]
                    .to_f64()
                    .filter(|v| v.is_finite())
                    .ok_or(LinalgError::NonFiniteEntry { row, col })?;
            }
        }
        Ok(out)
    }
}

impl<R> Index<(usize, usize)> for DenseMatrix<R> {
    type Output = R;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.num_cols + col]
    }
}

impl<R> IndexMut<(usize, usize)> for DenseMatrix<R> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.num_cols + col]
    }
}

impl<R: Ring> Add for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn add(self, other: Self) -> DenseMatrix<R> {
        self.zip_with(other, |a, b| a + b)
    }
}

impl<R: Ring> Sub for &DenseMatrix<R> {
    type Output = DenseMatrix<R>;

    fn sub(self, other: Self) -> DenseMatrix<R> {
        self.zip_with(other, |a, b| a - b)
    }
}
