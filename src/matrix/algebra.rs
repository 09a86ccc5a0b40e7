use crate::error::{MatrixError, Result};
use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;
use std::ops;

/// Cofactor expansion visits `n!` minors; past this order it gets slow enough to warn about.
pub const LARGE_ORDER_WARNING: usize = 10;

impl<T: Element> Matrix<T> {
    pub fn multiply(&self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "multiply",
                lhs: self.size(),
                rhs: rhs.size(),
            });
        }

        let rows = self.rows;
        let cols = if rows == 0 { 0 } else { rhs.cols };
        Ok(Matrix {
            rows,
            cols,
            cells: (0..rows)
                .flat_map(|i| {
                    (0..cols).map(move |j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                })
                .collect(),
        })
    }

    pub fn multiply_by_value(&self, value: T) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(|x| value * *x).collect(),
        }
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// This runs in `O(n!)`. An LU decomposition would give the same value
    /// (within rounding) in `O(n^3)`, but the expansion is kept as the
    /// reference algorithm. The empty matrix has determinant 1.
    pub fn determinant(&self) -> Result<T> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { size: self.size() });
        }
        if self.rows > LARGE_ORDER_WARNING {
            log::warn!(
                "Cofactor determinant of a {}x{} matrix, this will be slow",
                self.rows,
                self.cols
            );
        }
        Ok(self.det_inner())
    }

    // `self` must be square
    fn det_inner(&self) -> T {
        match self.rows {
            0 => T::one(),
            1 => self.cells[0],
            _ => (0..self.cols)
                .map(|i| {
                    let sign = if i % 2 == 0 { T::one() } else { -T::one() };
                    sign * self.at(0, i) * self.minor(0, i).det_inner()
                })
                .sum(),
        }
    }

    /// `self` without row `row` and column `col`
    fn minor(&self, row: usize, col: usize) -> Matrix<T> {
        self.submatrix(&[row], &[col])
    }

    /// Negates every entry whose row and column indices have different
    /// parity (the checkerboard pattern of cofactors)
    pub fn apply_signs(&self) -> Matrix<T> {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .enumerate()
                .map(|(i, x)| {
                    let (r, c) = (i / self.cols, i % self.cols);
                    if (r + c) % 2 == 1 {
                        -*x
                    } else {
                        *x
                    }
                })
                .collect(),
        }
    }

    /// Adjugate: minor determinants, then signs, then transposed.
    pub fn adjoint(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { size: self.size() });
        }

        let minors = Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: (0..self.rows)
                .flat_map(|r| (0..self.cols).map(move |c| self.minor(r, c).det_inner()))
                .collect(),
        };

        minors.apply_signs().reflect()
    }

    /// `adjoint / determinant`. Fails with `SingularMatrix` when the
    /// determinant is zero relative to the size of the entries, see
    /// `inverse_with_tolerance`.
    pub fn inverse(&self) -> Result<Matrix<T>> {
        self.inverse_with_tolerance(T::tolerance())
    }

    /// The matrix counts as singular when
    /// `|det| <= tolerance * prod(max |row_i|)`. The product bounds `|det|`
    /// up to a constant factor, so scaling every entry doesn't change
    /// the outcome.
    pub fn inverse_with_tolerance(&self, tolerance: T) -> Result<Matrix<T>> {
        let det = self.determinant()?;
        let scale = (0..self.rows)
            .map(|r| self.row(r).iter().fold(T::zero(), |m, x| m.max(x.abs())))
            .fold(T::one(), |acc, x| acc * x);

        if det.abs() <= tolerance * scale {
            log::debug!(
                "Refusing to invert singular matrix (det = {}, scale = {})",
                det,
                scale
            );
            return Err(MatrixError::SingularMatrix);
        }

        Ok(self.adjoint()?.multiply_by_value(T::one() / det))
    }
}

impl<T: Element> ops::Mul<&Matrix<T>> for &Matrix<T> {
    type Output = Result<Matrix<T>>;

    fn mul(self, rhs: &Matrix<T>) -> Result<Matrix<T>> {
        self.multiply(rhs)
    }
}

impl<T: Element> ops::Mul<T> for &Matrix<T> {
    type Output = Matrix<T>;

    fn mul(self, rhs: T) -> Matrix<T> {
        self.multiply_by_value(rhs)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
