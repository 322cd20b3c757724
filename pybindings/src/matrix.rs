use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use rand::{rngs::SmallRng, SeedableRng};
use realgauss::{matrix, Matrix, MatrixError};

fn value_error(e: MatrixError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyclass(name = "Matrix")]
#[derive(Clone)]
pub struct PyMatrix {
    pub(crate) inner: Matrix,
}

impl PyMatrix {
    fn check_row(&self, i: usize) -> PyResult<()> {
        if i >= self.inner.height() {
            return Err(PyValueError::new_err("Row index out of bounds"));
        }
        Ok(())
    }

    fn check_col(&self, j: usize) -> PyResult<()> {
        if j >= self.inner.width() {
            return Err(PyValueError::new_err("Column index out of bounds"));
        }
        Ok(())
    }
}

#[pymethods]
impl PyMatrix {
    /// Creates a new Matrix from a list of rows of equal length
    #[new]
    pub fn new(rows: Vec<Vec<f64>>) -> PyResult<Self> {
        let inner = Matrix::from_rows(&rows).map_err(value_error)?;
        Ok(PyMatrix { inner })
    }

    /// Creates a zero matrix of the given height and width
    #[staticmethod]
    pub fn zeros(height: usize, width: usize) -> Self {
        PyMatrix {
            inner: Matrix::zeros(height, width),
        }
    }

    /// Creates an identity matrix of the given size
    #[staticmethod]
    pub fn identity(size: usize) -> Self {
        PyMatrix {
            inner: Matrix::identity(size),
        }
    }

    /// Creates a matrix with entries drawn uniformly from [-1, 1)
    #[staticmethod]
    #[pyo3(signature = (height, width, seed=None))]
    pub fn random(height: usize, width: usize, seed: Option<u64>) -> Self {
        let mut rng = if let Some(s) = seed {
            SmallRng::seed_from_u64(s)
        } else {
            SmallRng::from_os_rng()
        };

        PyMatrix {
            inner: Matrix::random(&mut rng, height, width),
        }
    }

    /// Number of columns
    #[getter]
    pub fn width(&self) -> usize {
        self.inner.width()
    }

    /// Number of rows
    #[getter]
    pub fn height(&self) -> usize {
        self.inner.height()
    }

    /// Returns a copy of row i
    pub fn row(&self, i: usize) -> PyResult<Vec<f64>> {
        self.check_row(i)?;
        Ok(self.inner.row(i).to_vec())
    }

    /// Returns a copy of column j
    pub fn col(&self, j: usize) -> PyResult<Vec<f64>> {
        self.check_col(j)?;
        Ok(self.inner.col(j))
    }

    /// Replaces row i, which must keep the width of the matrix
    pub fn put_row(&mut self, i: usize, row: Vec<f64>) -> PyResult<()> {
        self.check_row(i)?;
        self.inner.try_put_row(i, &row).map_err(value_error)
    }

    /// Swaps rows i and j
    pub fn swap_rows(&mut self, i: usize, j: usize) -> PyResult<()> {
        self.check_row(i)?;
        self.check_row(j)?;
        self.inner.swap_rows(i, j);
        Ok(())
    }

    /// Returns a copy of rows [row_start, row_end) and columns [col_start, col_end)
    pub fn submatrix(
        &self,
        row_start: usize,
        row_end: usize,
        col_start: usize,
        col_end: usize,
    ) -> PyResult<Self> {
        if row_start > row_end || row_end > self.inner.height() {
            return Err(PyValueError::new_err("Row range out of bounds"));
        }
        if col_start > col_end || col_end > self.inner.width() {
            return Err(PyValueError::new_err("Column range out of bounds"));
        }
        Ok(PyMatrix {
            inner: self.inner.submatrix(row_start..row_end, col_start..col_end),
        })
    }

    /// Convert matrix to a list of rows
    pub fn to_list(&self) -> Vec<Vec<f64>> {
        self.inner.to_rows()
    }

    /// Returns the reduced row echelon form, leaving this matrix unchanged
    pub fn rref(&self) -> Self {
        PyMatrix {
            inner: self.inner.rref(),
        }
    }

    /// Returns the rank of the matrix
    pub fn rank(&self) -> usize {
        self.inner.rank()
    }

    /// Returns the columns holding pivots in the reduced row echelon form
    pub fn pivot_columns(&self) -> Vec<usize> {
        self.inner.pivot_columns()
    }

    /// Checks whether the matrix is in reduced row echelon form
    pub fn is_rref(&self) -> bool {
        self.inner.is_rref()
    }

    /// Support for indexing with [i, j]
    pub fn __getitem__(&self, key: (usize, usize)) -> PyResult<f64> {
        self.inner
            .get(key.0, key.1)
            .ok_or_else(|| PyValueError::new_err("Index out of bounds"))
    }

    /// Support for item assignment with [i, j] = value
    pub fn __setitem__(&mut self, key: (usize, usize), value: f64) -> PyResult<()> {
        self.check_row(key.0)?;
        self.check_col(key.1)?;
        self.inner[key] = value;
        Ok(())
    }

    /// Cellwise addition using the + operator
    pub fn __add__(&self, other: &PyMatrix) -> PyResult<Self> {
        let inner = matrix::add(&self.inner, &other.inner).map_err(value_error)?;
        Ok(PyMatrix { inner })
    }

    /// Cellwise subtraction using the - operator
    pub fn __sub__(&self, other: &PyMatrix) -> PyResult<Self> {
        let inner = matrix::subtract(&self.inner, &other.inner).map_err(value_error)?;
        Ok(PyMatrix { inner })
    }

    /// Matrix multiplication using the * operator
    pub fn __mul__(&self, other: &PyMatrix) -> PyResult<Self> {
        let inner = matrix::multiply(&self.inner, &other.inner).map_err(value_error)?;
        Ok(PyMatrix { inner })
    }

    /// Matrix equality comparison
    pub fn __eq__(&self, other: &PyMatrix) -> bool {
        self.inner == other.inner
    }

    /// Matrix inequality comparison
    pub fn __ne__(&self, other: &PyMatrix) -> bool {
        !self.__eq__(other)
    }

    /// String representation of the matrix
    pub fn __str__(&self) -> String {
        self.inner.to_string()
    }

    /// Python representation of the matrix
    pub fn __repr__(&self) -> String {
        format!(
            "Matrix(height={}, width={})",
            self.inner.height(),
            self.inner.width()
        )
    }

    /// Returns a copy of the matrix
    pub fn copy(&self) -> Self {
        self.clone()
    }
}
