use crate::error::MatrixError;
use crate::matrix::matrix::Matrix;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<MatrixError> for PyErr {
    fn from(error: MatrixError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[derive(Debug, Clone)]
#[pyclass(frozen, name = "Matrix")]
pub struct PyMatrix {
    pub inner: Matrix<f64>,
}

impl From<Matrix<f64>> for PyMatrix {
    fn from(inner: Matrix<f64>) -> Self {
        PyMatrix { inner }
    }
}

#[pymethods]
impl PyMatrix {
    #[classmethod]
    pub fn from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f64>>) -> Self {
        Matrix::from_list(lines).into()
    }

    #[staticmethod]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix::zeros(rows, cols).into()
    }

    #[staticmethod]
    pub fn identity(order: usize) -> Self {
        Matrix::identity(order).into()
    }

    #[staticmethod]
    pub fn vector(values: Vec<f64>) -> Self {
        Matrix::vector_from(&values).into()
    }

    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_list()
    }

    #[getter]
    pub fn rows(&self) -> usize {
        self.inner.rows()
    }

    #[getter]
    pub fn cols(&self) -> usize {
        self.inner.cols()
    }

    #[allow(non_snake_case)]
    #[getter]
    pub fn T(&self) -> PyMatrix {
        self.inner.transpose().into()
    }

    pub fn __mul__(&self, rhs: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.multiply(&rhs.inner)?.into())
    }

    pub fn scale(&self, value: f64) -> PyMatrix {
        self.inner.multiply_by_value(value).into()
    }

    pub fn value_at(&self, i: usize) -> PyResult<f64> {
        Ok(self.inner.value_at(i)?)
    }

    pub fn insert(&self, row: usize, column: usize, value: f64) -> PyMatrix {
        self.inner.insert(row, column, value).into()
    }

    pub fn insert_rows(&self, rows: Vec<Vec<f64>>) -> PyMatrix {
        self.inner.insert_rows(&rows).into()
    }

    pub fn divide_rows(&self, after_row: usize) -> PyResult<(PyMatrix, PyMatrix)> {
        let (top, bottom) = self.inner.divide_rows(after_row)?;
        Ok((top.into(), bottom.into()))
    }

    pub fn divide_columns(&self, after_column: usize) -> PyResult<(PyMatrix, PyMatrix)> {
        let (left, right) = self.inner.divide_columns(after_column)?;
        Ok((left.into(), right.into()))
    }

    pub fn augment(&self, other: &PyMatrix) -> PyResult<PyMatrix> {
        Ok(self.inner.augment(&other.inner)?.into())
    }

    pub fn reflect(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.reflect()?.into())
    }

    pub fn submatrix(&self, rows: Vec<usize>, columns: Vec<usize>) -> PyMatrix {
        self.inner.submatrix(&rows, &columns).into()
    }

    pub fn det(&self) -> PyResult<f64> {
        Ok(self.inner.determinant()?)
    }

    pub fn adjoint(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.adjoint()?.into())
    }

    pub fn inverse(&self) -> PyResult<PyMatrix> {
        Ok(self.inner.inverse()?.into())
    }

    pub fn echelon(&self) -> PyMatrix {
        self.inner.echelon().into()
    }

    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }
}
