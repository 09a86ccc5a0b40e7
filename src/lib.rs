pub mod error;

pub mod matrix {
    pub mod algebra;
    pub mod echelon;
    pub mod element;
    pub mod matrix;
    #[cfg(feature = "python")]
    pub mod python;
    pub mod structure;
}

pub mod utils;

pub use error::{MatrixError, Result};
pub use matrix::element::Element;
pub use matrix::matrix::{Matrix, Size};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn rust_matrix(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<matrix::python::PyMatrix>()?;
    Ok(())
}
