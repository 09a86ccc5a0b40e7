use crate::matrix::element::Element;
use crate::matrix::matrix::Matrix;
use itertools::Itertools;

impl<T: Element> Matrix<T> {
    /// Reduced row echelon form, by Gauss-Jordan elimination on a copy.
    ///
    /// Augmenting a system with its right hand side before reducing gives
    /// its solution in the last column.
    pub fn echelon(&self) -> Matrix<T> {
        self.echelon_with_tolerance(T::tolerance())
    }

    /// Same as `echelon`, entries with `|x| < tolerance` are not used as pivots
    pub fn echelon_with_tolerance(&self, tolerance: T) -> Matrix<T> {
        let mut mat = self.clone();
        let (rows, cols) = (mat.rows, mat.cols);

        let mut lead = 0;
        for row in 0..rows {
            if lead >= cols {
                break;
            }

            let mut i = row;
            while mat.at(i, lead).is_negligible(tolerance) {
                i += 1;
                if i == rows {
                    i = row;
                    lead += 1;
                    if lead == cols {
                        return mat;
                    }
                }
            }
            log::trace!("Pivot for row {} at ({}, {})", row, i, lead);

            mat.swap_rows(i, row);

            let pivot = mat.at(row, lead);
            for k in 0..cols {
                mat.cells[row * cols + k] = mat.cells[row * cols + k] / pivot;
            }

            for r in 0..rows {
                if r == row {
                    continue;
                }

                let factor = mat.at(r, lead);
                for k in 0..cols {
                    let b = mat.cells[row * cols + k] * factor;
                    mat.cells[r * cols + k] = mat.cells[r * cols + k] - b;
                }
            }

            lead += 1;
        }

        mat
    }

    /// Whether the matrix is in reduced row echelon form
    /// (entries within `T::tolerance()` of 0 or 1 count as such)
    pub fn is_rref(&self) -> bool {
        let tolerance = T::tolerance();

        // Zero rows only at the bottom
        let rank = (0..self.rows)
            .take_while(|&r| self.leading_column(r, tolerance).is_some())
            .count();
        if (rank..self.rows).any(|r| self.leading_column(r, tolerance).is_some()) {
            return false;
        }

        let pivots = self.pivot_columns();
        pivots.iter().tuple_windows().all(|(a, b)| a < b)
            && pivots.iter().enumerate().all(|(row, &col)| {
                (0..self.rows).all(|r| {
                    let expected = if r == row { T::one() } else { T::zero() };
                    (self.at(r, col) - expected).is_negligible(tolerance)
                })
            })
    }

    /// Column of the leading entry of each non-zero row
    pub fn pivot_columns(&self) -> Vec<usize> {
        let tolerance = T::tolerance();
        (0..self.rows)
            .filter_map(|r| self.leading_column(r, tolerance))
            .collect()
    }

    fn leading_column(&self, row: usize, tolerance: T) -> Option<usize> {
        self.row(row).iter().position(|x| !x.is_negligible(tolerance))
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
