// There seems to be some issues with the pyo3 bindings generation on methods returning
// a `PyResult<T>`.
#![allow(clippy::useless_conversion)]

pub mod matrix;

use crate::matrix::PyMatrix;
use pyo3::prelude::*;

#[pymodule]
fn realgauss(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyMatrix>()?;
    Ok(())
}
