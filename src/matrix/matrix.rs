use crate::error::{MatrixError, Result};
use crate::matrix::element::Element;
use crate::utils::unit_slice;
use itertools::Itertools;
use std::fmt;
use std::ops;

/// Dense row-major matrix of real numbers.
///
/// Every transform returns a new matrix and leaves the receiver untouched.
/// The only mutating methods are `set` and `set_value_at`, which need
/// `&mut self`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T = f64> {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<T>,
}

/// Number of rows and columns of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub rows: usize,
    pub columns: usize,
}

impl Size {
    pub fn len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}

impl<T: Element> Matrix<T> {
    /// `rows x cols` matrix with every entry set to `value`.
    /// A matrix without rows has no columns either.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Matrix {
            rows,
            cols,
            cells: unit_slice(value, rows * cols),
        }
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    pub fn square(order: usize) -> Self {
        Self::zeros(order, order)
    }

    pub fn filled_square(order: usize, value: T) -> Self {
        Self::filled(order, order, value)
    }

    pub fn identity(order: usize) -> Self {
        (0..order).fold(Self::square(order), |m, i| m.insert(i, i, T::one()))
    }

    /// `n x 1` column of zeros
    pub fn vector(n: usize) -> Self {
        Self::zeros(n, 1)
    }

    /// `n x 1` column holding `values`, one per row
    pub fn vector_from(values: &[T]) -> Self {
        Matrix {
            rows: values.len(),
            cols: if values.is_empty() { 0 } else { 1 },
            cells: values.to_vec(),
        }
    }

    /// Builds a matrix from nested rows. Rows shorter than the longest one
    /// are padded with zeros.
    pub fn from_list(lines: Vec<Vec<T>>) -> Self {
        let cols = lines.iter().map(|l| l.len()).max().unwrap_or(0);
        let rows = if cols == 0 { 0 } else { lines.len() };

        Matrix {
            rows,
            cols,
            cells: lines
                .into_iter()
                .flat_map(|l| {
                    let pad = cols - l.len();
                    l.into_iter().chain(std::iter::repeat(T::zero()).take(pad))
                })
                .collect(),
        }
    }

    pub fn to_list(&self) -> Vec<Vec<T>> {
        if self.cols == 0 {
            return vec![Vec::new(); self.rows];
        }
        self.cells
            .chunks(self.cols)
            .map(|line| line.to_vec())
            .collect()
    }

    pub fn size(&self) -> Size {
        Size {
            rows: self.rows,
            columns: self.cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Deep copy, same as `clone`
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Panics when out of bounds, like slice indexing
    #[inline(always)]
    pub fn at(&self, row: usize, col: usize) -> T {
        assert!(row < self.rows && col < self.cols, "Index out of bounds");
        self.cells[row * self.cols + col]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        if row < self.rows && col < self.cols {
            Some(self.cells[row * self.cols + col])
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows {
            return Err(MatrixError::OutOfBounds {
                index: row,
                len: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                index: col,
                len: self.cols,
            });
        }
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Value at the row-major linear index `i`
    /// (row `i / cols`, column `i % cols`)
    pub fn value_at(&self, i: usize) -> Result<T> {
        self.cells
            .get(i)
            .copied()
            .ok_or(MatrixError::OutOfBounds {
                index: i,
                len: self.len(),
            })
    }

    pub fn set_value_at(&mut self, i: usize, value: T) -> Result<()> {
        let len = self.len();
        let cell = self
            .cells
            .get_mut(i)
            .ok_or(MatrixError::OutOfBounds { index: i, len })?;
        *cell = value;
        Ok(())
    }

    /// Row `row` as a slice of the underlying buffer
    #[inline(always)]
    pub(crate) fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    pub(crate) fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for k in 0..self.cols {
            self.cells.swap(a * self.cols + k, b * self.cols + k);
        }
    }

    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<T: Element> ops::Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.rows && col < self.cols, "Index out of bounds");
        &self.cells[row * self.cols + col]
    }
}

impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for r in 0..self.rows {
            writeln!(
                f,
                " [{}]",
                self.row(r)
                    .iter()
                    // -0.0 prints as 0
                    .map(|x| format!("{:.6}", if x.is_zero() { T::zero() } else { *x }))
                    .join(", ")
            )?;
        }
        write!(f, "]")
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let m = Matrix::<f64>::zeros(2, 3);
        assert_eq!(m.size(), Size { rows: 2, columns: 3 });
        assert!(m.to_list().iter().flatten().all(|x| *x == 0.0));

        let m = Matrix::filled(3, 2, 7.5);
        assert_eq!(m.to_list(), vec![vec![7.5, 7.5]; 3]);
        assert!(!m.is_square());

        assert!(Matrix::<f64>::square(4).is_square());
        assert_eq!(
            Matrix::filled_square(2, -1.0).to_list(),
            vec![vec![-1.0, -1.0], vec![-1.0, -1.0]]
        );

        assert_eq!(
            Matrix::<f64>::identity(3).to_list(),
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0]
            ]
        );

        assert_eq!(Matrix::<f64>::vector(3).size(), Size { rows: 3, columns: 1 });
        assert_eq!(
            Matrix::vector_from(&[1.0, 2.0, 3.0]).to_list(),
            vec![vec![1.0], vec![2.0], vec![3.0]]
        );
    }

    #[test]
    fn test_empty() {
        let m = Matrix::<f64>::zeros(0, 5);
        assert_eq!(m.size(), Size { rows: 0, columns: 0 });
        assert!(m.is_empty());
        assert!(m.is_square());

        assert_eq!(Matrix::<f64>::vector_from(&[]).size().columns, 0);
        assert_eq!(Matrix::<f64>::identity(0).size(), Size { rows: 0, columns: 0 });
        assert_eq!(Matrix::<f64>::from_list(vec![]).size(), Size { rows: 0, columns: 0 });
    }

    #[test]
    fn test_from_list_pads_short_rows() {
        let m = Matrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0]]);
        assert_eq!(m.size(), Size { rows: 2, columns: 3 });
        assert_eq!(
            m.to_list(),
            vec![vec![1.0, 2.0, 3.0], vec![4.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn test_linear_access() {
        let mut m = Matrix::from_list(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(m.len(), 6);
        assert_eq!(m.value_at(0), Ok(1.0));
        assert_eq!(m.value_at(4), Ok(5.0));
        assert_eq!(
            m.value_at(6),
            Err(MatrixError::OutOfBounds { index: 6, len: 6 })
        );

        m.set_value_at(3, -4.0).unwrap();
        assert_eq!(m.at(1, 0), -4.0);
        assert_eq!(m[(1, 0)], -4.0);
        assert!(m.set_value_at(10, 0.0).is_err());
    }

    #[test]
    fn test_2d_access() {
        let mut m = Matrix::<f64>::zeros(2, 2);
        m.set(1, 0, 3.0).unwrap();
        assert_eq!(m.get(1, 0), Some(3.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(
            m.set(0, 2, 1.0),
            Err(MatrixError::OutOfBounds { index: 2, len: 2 })
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let m = Matrix::from_list(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let mut c = m.copy();
        c.set(0, 0, 9.0).unwrap();
        assert_eq!(m.at(0, 0), 1.0);
        assert_eq!(c.at(0, 0), 9.0);
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_list(vec![vec![1.0, 2.5], vec![-3.0, 0.0]]);
        assert_eq!(
            m.to_display_string(),
            "[\n [1.000000, 2.500000]\n [-3.000000, 0.000000]\n]"
        );
        assert_eq!(Matrix::<f64>::zeros(0, 0).to_string(), "[\n]");

        let m = Matrix::from_list(vec![vec![-0.0, 1.0]]);
        assert_eq!(m.to_string(), "[\n [0.000000, 1.000000]\n]");
        let e = Matrix::from_list(vec![vec![0.0, 1.0], vec![0.0, 2.0]]).echelon();
        assert!(!e.to_string().contains("-0.000000"));
    }
}
