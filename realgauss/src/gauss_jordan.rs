//! Reduction to reduced row echelon form by Gauss-Jordan elimination
//!
//! Pivots are chosen in column order. For each column, the first row (scanning from the top)
//! whose leading coefficient lies in that column becomes the pivot row. There is no search for
//! the largest entry: a row only qualifies by where its first nonzero entry is, and zero means
//! exactly `0.0`.

use crate::matrix::{Matrix, RowOps};
use crate::vector;

/// Finds the first row whose leading coefficient is in column `col`, returning the row index
/// and the coefficient
fn find_pivot(m: &impl RowOps, col: usize) -> Option<(usize, f64)> {
    (0..m.height()).find_map(|i| match vector::leading_coefficient(m.row(i)) {
        Some((j, c)) if j == col => Some((i, c)),
        _ => None,
    })
}

/// Perform Gauss-Jordan elimination in place and return the vector of pivot columns
///
/// Pivot row `k` ends up holding the `k`-th pivot, normalised to 1, and every other row is
/// zero in that pivot's column.
fn gauss_jordan_helper(m: &mut impl RowOps) -> Vec<usize> {
    let mut pcols = vec![];

    for col in 0..m.width() {
        let Some((row1, coefficient)) = find_pivot(&*m, col) else {
            continue;
        };

        // rows above `row` already hold pivots in earlier columns, so `row1 >= row`
        let row = pcols.len();
        log::trace!("pivot {} found in row {}, moving to row {}", col, row1, row);
        m.swap_rows(row, row1);

        let pivot = vector::divide(m.row(row), coefficient);
        m.put_row(row, &pivot);

        for i in 0..m.height() {
            if i == row {
                continue;
            }
            let factor = m.row(i)[col];
            if factor != 0.0 {
                let reduced = vector::subtract(m.row(i), &vector::scale(&pivot, factor))
                    .expect("Rows of a matrix all have the same length");
                m.put_row(i, &reduced);
            }
        }

        pcols.push(col);
    }

    log::debug!(
        "reduced {}x{} matrix, rank {}",
        m.height(),
        m.width(),
        pcols.len()
    );
    pcols
}

/// Returns the reduced row echelon form of `m`, leaving `m` itself untouched
///
/// This never fails: empty and all-zero matrices come back unchanged.
///
/// # Examples
///
/// ```
/// use realgauss::{gauss_jordan::reduce, Matrix};
///
/// let m = Matrix::from_rows(&[[1.0, 1.0, 1.0], [-1.0, 0.0, 1.0], [0.0, 1.0, 1.0]]).unwrap();
/// assert_eq!(reduce(&m), Matrix::identity(3));
/// ```
pub fn reduce<M: RowOps + Clone>(m: &M) -> M {
    let mut res = m.clone();
    gauss_jordan_helper(&mut res);
    res
}

/// Returns the columns of `m` holding a pivot in its reduced row echelon form, in increasing
/// order
pub fn pivot_columns<M: RowOps + Clone>(m: &M) -> Vec<usize> {
    gauss_jordan_helper(&mut m.clone())
}

/// Checks whether `m` is in reduced row echelon form
///
/// That is: every nonzero row has leading entry 1, which is the only nonzero entry in its
/// column; leading entries move strictly to the right going down; zero rows come last.
pub fn is_rref(m: &impl RowOps) -> bool {
    let mut last_pcol: Option<usize> = None;
    let mut seen_zero_row = false;

    for i in 0..m.height() {
        match vector::leading_coefficient(m.row(i)) {
            None => seen_zero_row = true,
            Some((col, c)) => {
                if seen_zero_row || c != 1.0 || last_pcol.is_some_and(|p| col <= p) {
                    return false;
                }
                if (0..m.height()).any(|k| k != i && m.row(k)[col] != 0.0) {
                    return false;
                }
                last_pcol = Some(col);
            }
        }
    }

    true
}

impl Matrix {
    /// Returns the reduced row echelon form of the matrix
    #[inline]
    pub fn rref(&self) -> Matrix {
        reduce(self)
    }

    /// Compute the rank of the matrix, i.e. the number of pivots in its reduced row echelon form
    #[inline]
    pub fn rank(&self) -> usize {
        pivot_columns(self).len()
    }

    #[inline]
    pub fn pivot_columns(&self) -> Vec<usize> {
        pivot_columns(self)
    }

    #[inline]
    pub fn is_rref(&self) -> bool {
        is_rref(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::SmallRng, SeedableRng};

    fn m(rows: &[[f64; 3]]) -> Matrix {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn random_rref() {
        let mut rng = SmallRng::seed_from_u64(1);
        let a = Matrix::random(&mut rng, 8, 20);
        let r = a.rref();
        assert!(r.is_rref());
        assert_eq!(r.pivot_columns(), (0..8).collect::<Vec<_>>());
        assert_eq!(r.submatrix(.., ..8), Matrix::identity(8));
    }

    #[test]
    fn full_rank_square() {
        let mut rng = SmallRng::seed_from_u64(1);
        for sz in [1, 2, 5, 30] {
            let a = Matrix::random(&mut rng, sz, sz);
            assert_eq!(a.rank(), sz);
        }
    }

    #[test]
    fn first_matching_row_is_pivot() {
        // the smaller entry in column 0 is chosen because its row comes first
        let a = Matrix::from_rows(&[[0.0, 1.0], [2.0, 4.0], [8.0, 0.0]]).unwrap();
        let r = a.rref();
        assert_eq!(r, Matrix::from_rows(&[[1.0, 0.0], [0.0, 1.0], [0.0, 0.0]]).unwrap());
        assert_eq!(r.pivot_columns(), vec![0, 1]);
    }

    #[test]
    fn skips_columns_without_pivot() {
        let a = m(&[[0.0, 2.0, 4.0], [0.0, 1.0, 3.0]]);
        let r = a.rref();
        assert_eq!(r, m(&[[0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]));
        assert_eq!(r.pivot_columns(), vec![1, 2]);
        assert!(r.is_rref());
    }

    #[test]
    fn wide_and_tall() {
        let wide = Matrix::from_rows(&[[2.0, 4.0, 6.0, 8.0]]).unwrap();
        assert_eq!(wide.rref(), Matrix::from_rows(&[[1.0, 2.0, 3.0, 4.0]]).unwrap());

        let tall = Matrix::from_rows(&[[0.0], [3.0], [-6.0]]).unwrap();
        assert_eq!(tall.rref(), Matrix::from_rows(&[[1.0], [0.0], [0.0]]).unwrap());
        assert_eq!(tall.rank(), 1);
    }

    #[test]
    fn empty_matrices() {
        for (h, w) in [(0, 0), (0, 4), (3, 0)] {
            let a = Matrix::zeros(h, w);
            let r = a.rref();
            assert_eq!(r.shape(), (h, w));
            assert_eq!(r.rank(), 0);
            assert!(r.is_rref());
        }
    }

    #[test]
    fn rref_predicate() {
        assert!(Matrix::identity(4).is_rref());
        assert!(m(&[[1.0, 2.0, 0.0], [0.0, 0.0, 1.0], [0.0, 0.0, 0.0]]).is_rref());

        // leading entry not 1
        assert!(!m(&[[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]).is_rref());
        // pivot column not cleared
        assert!(!m(&[[1.0, 1.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.0]]).is_rref());
        // pivots out of order
        assert!(!m(&[[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]]).is_rref());
        // zero row above a pivot
        assert!(!m(&[[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).is_rref());
    }
}
