use crate::error::{MatrixError, Result};
use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;
use crate::utils::{contains, sorted_indices};

impl<T: Element> Matrix<T> {
    /// Returns a copy with `value` written at (`row`, `column`).
    ///
    /// The copy grows to at least `(row + 1) x (column + 1)` when needed:
    /// new rows are appended and every row is widened by the same amount,
    /// all with zeros.
    ///
    /// Panics when `row` or `column` is `usize::MAX`, since the grown
    /// size can't be represented.
    pub fn insert(&self, row: usize, column: usize, value: T) -> Matrix<T> {
        let (rows, cols) = match (row.checked_add(1), column.checked_add(1)) {
            (Some(r), Some(c)) => (self.rows.max(r), self.cols.max(c)),
            _ => panic!("Insert at ({}, {}) overflows the matrix size", row, column),
        };

        let mut grown = if rows == self.rows && cols == self.cols {
            self.clone()
        } else {
            let mut grown = Matrix::zeros(rows, cols);
            for r in 0..self.rows {
                grown.cells[r * cols..r * cols + self.cols].copy_from_slice(self.row(r));
            }
            grown
        };

        grown.cells[row * cols + column] = value;
        grown
    }

    /// Writes `values` into the row right after `after_row` (row 0 for
    /// `None`), one `insert` per value.
    pub fn insert_row(&self, after_row: Option<usize>, values: &[T]) -> Matrix<T> {
        let target = after_row.map_or(0, |r| r.saturating_add(1));

        values
            .iter()
            .enumerate()
            .fold(self.clone(), |m, (c, v)| m.insert(target, c, *v))
    }

    /// Appends `rows` one after another, starting right after the current
    /// last row.
    pub fn insert_rows(&self, rows: &[Vec<T>]) -> Matrix<T> {
        rows.iter().fold(self.clone(), |m, values| {
            let after_row = m.rows.checked_sub(1);
            m.insert_row(after_row, values)
        })
    }

    /// Splits into rows `0..=after_row` and `after_row+1..`.
    /// Both halves are independent copies.
    pub fn divide_rows(&self, after_row: usize) -> Result<(Matrix<T>, Matrix<T>)> {
        if after_row >= self.rows {
            return Err(MatrixError::OutOfBounds {
                index: after_row,
                len: self.rows,
            });
        }

        let split = (after_row + 1) * self.cols;
        let bottom_rows = self.rows - after_row - 1;

        Ok((
            Matrix {
                rows: after_row + 1,
                cols: self.cols,
                cells: self.cells[..split].to_vec(),
            },
            Matrix {
                rows: bottom_rows,
                cols: if bottom_rows == 0 { 0 } else { self.cols },
                cells: self.cells[split..].to_vec(),
            },
        ))
    }

    /// Splits into columns `0..=after_column` and `after_column+1..`.
    /// Both halves are independent copies.
    pub fn divide_columns(&self, after_column: usize) -> Result<(Matrix<T>, Matrix<T>)> {
        if after_column >= self.cols {
            return Err(MatrixError::OutOfBounds {
                index: after_column,
                len: self.cols,
            });
        }

        let split = after_column + 1;
        let mut left = Vec::with_capacity(self.rows * split);
        let mut right = Vec::with_capacity(self.rows * (self.cols - split));
        for r in 0..self.rows {
            let (l, rt) = self.row(r).split_at(split);
            left.extend_from_slice(l);
            right.extend_from_slice(rt);
        }

        Ok((
            Matrix {
                rows: self.rows,
                cols: split,
                cells: left,
            },
            Matrix {
                rows: self.rows,
                cols: self.cols - split,
                cells: right,
            },
        ))
    }

    /// Copy of `self` with the columns of `other` appended to each row
    pub fn augment(&self, other: &Matrix<T>) -> Result<Matrix<T>> {
        if self.rows != other.rows {
            return Err(MatrixError::DimensionMismatch {
                op: "augment",
                lhs: self.size(),
                rhs: other.size(),
            });
        }

        let cols = self.cols + other.cols;
        Ok(Matrix {
            rows: self.rows,
            cols: if self.rows == 0 { 0 } else { cols },
            cells: (0..self.rows)
                .flat_map(|r| self.row(r).iter().chain(other.row(r)).copied())
                .collect(),
        })
    }

    pub fn transpose(&self) -> Matrix<T> {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .flat_map(|c| (0..self.rows).map(move |r| self.at(r, c)))
                .collect(),
        }
    }

    /// Reflection about the main diagonal, only defined for square matrices
    pub fn reflect(&self) -> Result<Matrix<T>> {
        if !self.is_square() {
            return Err(MatrixError::NotSquare { size: self.size() });
        }
        Ok(self.transpose())
    }

    /// Removes the given rows and columns, keeping the order of the rest.
    /// Indices that don't exist are ignored.
    pub fn submatrix(&self, rows: &[usize], columns: &[usize]) -> Matrix<T> {
        let rows = sorted_indices(rows);
        let columns = sorted_indices(columns);

        let kept_rows: Vec<usize> = (0..self.rows).filter(|r| !contains(&rows, *r)).collect();
        let kept_cols: Vec<usize> = (0..self.cols)
            .filter(|c| !contains(&columns, *c))
            .collect();

        if kept_rows.is_empty() || kept_cols.is_empty() {
            return Matrix::zeros(kept_rows.len(), kept_cols.len());
        }

        Matrix {
            rows: kept_rows.len(),
            cols: kept_cols.len(),
            cells: kept_rows
                .iter()
                .flat_map(|&r| kept_cols.iter().map(move |&c| self.at(r, c)))
                .collect(),
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
