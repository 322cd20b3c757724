use crate::error::MatrixError;
use rand::Rng;
use std::{
    fmt,
    ops::{Add, Bound, Index, IndexMut, Mul, Range, RangeBounds, Sub},
};

/// Number of columns of the left operand processed together by [`multiply`]
pub const BLOCKSIZE: usize = 64;

/// A dense matrix of `f64`s
///
/// The matrix is stored in row-major order as a single buffer of `height * width` cells, so
/// row `i` is the contiguous slice `data[i * width..(i + 1) * width]`. The dimensions are fixed
/// when the matrix is built; only the contents of rows may change afterwards.
#[derive(Clone, Debug)]
pub struct Matrix {
    /// the number of rows in the matrix
    height: usize,

    /// the number of columns in the matrix, i.e. the length of every row
    width: usize,

    /// the cells of the matrix, stored in row-major order
    data: Vec<f64>,
}

/// Row-level access and mutation, which is all Gauss-Jordan elimination needs from a matrix
pub trait RowOps {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn row(&self, i: usize) -> &[f64];

    /// Replaces row `i` with `row`, which must have exactly `width()` entries
    fn put_row(&mut self, i: usize, row: &[f64]);
    fn swap_rows(&mut self, i: usize, j: usize);
}

/// Turns an arbitrary range into a concrete one, checking it lies inside `0..len`
fn resolve_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&s) => s,
        Bound::Excluded(&s) => s + 1,
    };
    let end = match range.end_bound() {
        Bound::Unbounded => len,
        Bound::Included(&e) => e + 1,
        Bound::Excluded(&e) => e,
    };
    assert!(
        start <= end && end <= len,
        "range {}..{} out of bounds for length {}",
        start,
        end,
        len
    );
    start..end
}

impl Matrix {
    /// Builds a matrix from a list of rows
    ///
    /// An empty list gives a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::RaggedRows`] naming the first row whose length differs from the
    /// length of the first row. No matrix is built in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use realgauss::Matrix;
    ///
    /// let m = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
    /// assert_eq!((m.height(), m.width()), (3, 2));
    /// assert_eq!(m.row(1), &[3.0, 4.0]);
    ///
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * width);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != width {
                return Err(MatrixError::RaggedRows {
                    row: i,
                    expected: width,
                    found: r.len(),
                });
            }
            data.extend_from_slice(r);
        }

        Ok(Matrix {
            height: rows.len(),
            width,
            data,
        })
    }

    /// Builds a `height x width` matrix from a row-major buffer
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidBufferLength`] if `data` does not hold exactly
    /// `height * width` values.
    pub fn from_shape_vec(height: usize, width: usize, data: Vec<f64>) -> Result<Self, MatrixError> {
        if data.len() != height * width {
            return Err(MatrixError::InvalidBufferLength {
                height,
                width,
                len: data.len(),
            });
        }
        Ok(Matrix {
            height,
            width,
            data,
        })
    }

    /// Builds a `height x width` matrix whose cell `(i, j)` is `f(i, j)`
    pub fn build(height: usize, width: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let data = (0..height)
            .flat_map(|i| (0..width).map(move |j| (i, j)))
            .map(|(i, j)| f(i, j))
            .collect();
        Matrix {
            height,
            width,
            data,
        }
    }

    pub fn zeros(height: usize, width: usize) -> Self {
        Matrix {
            height,
            width,
            data: vec![0.0; height * width],
        }
    }

    pub fn identity(size: usize) -> Self {
        Matrix::build(size, size, |i, j| if i == j { 1.0 } else { 0.0 })
    }

    /// A matrix with entries drawn uniformly from `[-1, 1)`
    #[inline]
    pub fn random(rng: &mut impl Rng, height: usize, width: usize) -> Self {
        let data = (0..height * width)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();
        Matrix {
            height,
            width,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(height, width)`
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// True if the matrix has no cells, i.e. zero height or zero width
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// True if every cell is zero (vacuously so for an empty matrix)
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|&x| x == 0.0)
    }

    /// Returns the cell at row `i`, column `j`, or `None` if the position is out of range
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.height && j < self.width {
            Some(self.data[i * self.width + j])
        } else {
            None
        }
    }

    /// Returns row `i`
    ///
    /// # Panics
    ///
    /// Panics if `i >= height`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(i < self.height, "row {} out of range for height {}", i, self.height);
        &self.data[i * self.width..(i + 1) * self.width]
    }

    #[inline]
    fn row_mut(&mut self, i: usize) -> &mut [f64] {
        assert!(i < self.height, "row {} out of range for height {}", i, self.height);
        &mut self.data[i * self.width..(i + 1) * self.width]
    }

    /// Returns a copy of column `j`
    ///
    /// # Panics
    ///
    /// Panics if `j >= width`.
    pub fn col(&self, j: usize) -> Vec<f64> {
        assert!(j < self.width, "column {} out of range for width {}", j, self.width);
        (0..self.height).map(|i| self.data[i * self.width + j]).collect()
    }

    /// Returns a deep copy of the cells as a list of rows
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.height).map(|i| self.row(i).to_vec()).collect()
    }

    /// Replaces row `i` with `row`
    ///
    /// # Panics
    ///
    /// Panics if `row` does not have exactly `width` entries or `i` is out of range. Use
    /// [`Matrix::try_put_row`] to get an error instead of a panic for the length check.
    pub fn put_row(&mut self, i: usize, row: &[f64]) {
        if let Err(e) = self.try_put_row(i, row) {
            panic!("cannot replace row {}: {}", i, e);
        }
    }

    /// Replaces row `i` with `row`, leaving the matrix untouched if the length is wrong
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidRowLength`] if `row` does not have exactly `width` entries.
    pub fn try_put_row(&mut self, i: usize, row: &[f64]) -> Result<(), MatrixError> {
        if row.len() != self.width {
            return Err(MatrixError::InvalidRowLength {
                expected: self.width,
                found: row.len(),
            });
        }
        self.row_mut(i).copy_from_slice(row);
        Ok(())
    }

    /// Swaps rows `i` and `j` in place
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        assert!(
            i < self.height && j < self.height,
            "cannot swap rows {} and {} of a matrix with height {}",
            i,
            j,
            self.height
        );
        if i == j {
            return;
        }
        let (lo, hi) = (usize::min(i, j), usize::max(i, j));
        let w = self.width;
        let (top, bottom) = self.data.split_at_mut(hi * w);
        top[lo * w..(lo + 1) * w].swap_with_slice(&mut bottom[..w]);
    }

    /// Returns a copy of the cells in the given ranges of rows and columns
    ///
    /// # Panics
    ///
    /// Panics if either range reaches outside the matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use realgauss::Matrix;
    ///
    /// let m = Matrix::build(4, 5, |i, j| (10 * i + j) as f64);
    /// let s = m.submatrix(1..3, 2..);
    /// assert_eq!(s.to_rows(), vec![vec![12.0, 13.0, 14.0], vec![22.0, 23.0, 24.0]]);
    /// ```
    pub fn submatrix(&self, rows: impl RangeBounds<usize>, cols: impl RangeBounds<usize>) -> Self {
        let rows = resolve_range(rows, self.height);
        let cols = resolve_range(cols, self.width);
        let width = cols.len();
        let mut data = Vec::with_capacity(rows.len() * width);
        for i in rows.clone() {
            data.extend_from_slice(&self.row(i)[cols.clone()]);
        }
        Matrix {
            height: rows.len(),
            width,
            data,
        }
    }

    /// Returns a new matrix with `f` applied to every cell
    pub fn map(&self, f: impl FnMut(f64) -> f64) -> Self {
        Matrix {
            height: self.height,
            width: self.width,
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    fn mul_helper(&self, rhs: &Matrix) -> Matrix {
        let mut res = Matrix::zeros(self.height, rhs.width);

        // accumulate each result row from rows of `rhs`, a block of `self`'s columns at a time
        for k0 in (0..self.width).step_by(BLOCKSIZE) {
            let k1 = usize::min(k0 + BLOCKSIZE, self.width);
            for i in 0..self.height {
                let lhs_row = self.row(i);
                let out = res.row_mut(i);
                for k in k0..k1 {
                    let a = lhs_row[k];
                    for (o, &b) in out.iter_mut().zip(rhs.row(k)) {
                        *o += a * b;
                    }
                }
            }
        }

        res
    }
}

/// Combines two matrices of the same shape cell by cell, storing `f(a, b)` in a new matrix
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if `a` and `b` differ in height or width.
pub fn map2(
    a: &Matrix,
    b: &Matrix,
    mut f: impl FnMut(f64, f64) -> f64,
) -> Result<Matrix, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(Matrix {
        height: a.height,
        width: a.width,
        data: a.data.iter().zip(&b.data).map(|(&x, &y)| f(x, y)).collect(),
    })
}

/// Cellwise sum of two matrices of the same shape
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
pub fn add(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    map2(a, b, |x, y| x + y)
}

/// Cellwise difference `a - b` of two matrices of the same shape
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] if the shapes differ.
pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    map2(a, b, |x, y| x - y)
}

/// Matrix product `a * b`
///
/// # Errors
///
/// Returns [`MatrixError::ShapeMismatch`] unless `a` has as many columns as `b` has rows.
pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    if a.width != b.height {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
        });
    }
    Ok(a.mul_helper(b))
}

/// Two matrices are equal if they have the same dimensions and every pair of cells compares
/// equal as `f64`s, so a matrix containing NaN is only equal to itself by reference
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }

        self.height == other.height && self.width == other.width && self.data == other.data
    }
}

impl RowOps for Matrix {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn row(&self, i: usize) -> &[f64] {
        Matrix::row(self, i)
    }

    #[inline]
    fn put_row(&mut self, i: usize, row: &[f64]) {
        Matrix::put_row(self, i, row);
    }

    #[inline]
    fn swap_rows(&mut self, i: usize, j: usize) {
        Matrix::swap_rows(self, i, j);
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.row(index.0)[index.1]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.row_mut(index.0)[index.1]
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            for x in self.row(i) {
                write!(f, " {} ", x)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Add for &Matrix {
    type Output = Matrix;
    fn add(self, rhs: Self) -> Self::Output {
        match add(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("Attempting to add matrices: {}", e),
        }
    }
}

impl Sub for &Matrix {
    type Output = Matrix;
    fn sub(self, rhs: Self) -> Self::Output {
        match subtract(self, rhs) {
            Ok(m) => m,
            Err(e) => panic!("Attempting to subtract matrices: {}", e),
        }
    }
}

impl Mul for &Matrix {
    type Output = Matrix;
    fn mul(self, rhs: Self) -> Self::Output {
        if self.width != rhs.height {
            panic!(
                "Attempting to multiply matrices of incompatible dimensions: {} != {}",
                self.width, rhs.height
            );
        }
        self.mul_helper(rhs)
    }
}
