//! Primitive operations on rows of `f64`s
//!
//! Every function here is pure: arguments are borrowed as slices and never modified, and
//! results are freshly allocated. These are the building blocks [`crate::gauss_jordan`] uses
//! to normalise and combine rows.

use crate::error::MatrixError;

#[inline]
fn check_lengths(a: &[f64], b: &[f64]) -> Result<(), MatrixError> {
    if a.len() != b.len() {
        return Err(MatrixError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Computes the dot product of two vectors of the same length
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] if `a` and `b` differ in length.
#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> Result<f64, MatrixError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x * y).sum())
}

/// Elementwise sum of two vectors of the same length
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] if `a` and `b` differ in length.
#[inline]
pub fn add(a: &[f64], b: &[f64]) -> Result<Vec<f64>, MatrixError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Elementwise difference `a - b` of two vectors of the same length
///
/// # Errors
///
/// Returns [`MatrixError::LengthMismatch`] if `a` and `b` differ in length.
#[inline]
pub fn subtract(a: &[f64], b: &[f64]) -> Result<Vec<f64>, MatrixError> {
    check_lengths(a, b)?;
    Ok(a.iter().zip(b).map(|(x, y)| x - y).collect())
}

/// Multiplies every entry of `v` by `s`
#[inline]
pub fn scale(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|x| x * s).collect()
}

/// Divides every entry of `v` by `s`
///
/// Dividing by zero follows IEEE 754 and fills the result with infinities and NaNs, so
/// callers are expected to pass a nonzero `s`.
#[inline]
pub fn divide(v: &[f64], s: f64) -> Vec<f64> {
    v.iter().map(|x| x / s).collect()
}

/// Returns the index and value of the first nonzero entry of `v`, or `None` if every entry
/// is zero
///
/// Only exact zeros are skipped, so `-0.0` counts as zero while NaN counts as nonzero.
#[inline]
pub fn leading_coefficient(v: &[f64]) -> Option<(usize, f64)> {
    v.iter().copied().enumerate().find(|&(_, x)| x != 0.0)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dot_product() {
        assert_eq!(dot(&[1.0, 2.0, 3.0], &[4.0, -5.0, 6.0]), Ok(12.0));
        assert_eq!(dot(&[], &[]), Ok(0.0));
        assert_eq!(
            dot(&[1.0], &[1.0, 2.0]),
            Err(MatrixError::LengthMismatch { left: 1, right: 2 })
        );
    }

    #[test]
    fn add_subtract() {
        let a = [1.0, 2.0, 3.0];
        let b = [0.5, -2.0, 10.0];
        assert_eq!(add(&a, &b), Ok(vec![1.5, 0.0, 13.0]));
        assert_eq!(subtract(&a, &b), Ok(vec![0.5, 4.0, -7.0]));
        assert!(add(&a, &b[..2]).is_err());
        assert!(subtract(&a[..1], &b).is_err());

        // arguments are untouched
        assert_eq!(a, [1.0, 2.0, 3.0]);
        assert_eq!(b, [0.5, -2.0, 10.0]);
    }

    #[test]
    fn scale_divide() {
        let v = [2.0, -4.0, 0.0];
        assert_eq!(scale(&v, 1.5), vec![3.0, -6.0, 0.0]);
        assert_eq!(divide(&v, 2.0), vec![1.0, -2.0, 0.0]);
        assert_eq!(scale(&[], 3.0), Vec::<f64>::new());
    }

    #[test]
    fn leading() {
        assert_eq!(leading_coefficient(&[0.0, 0.0, 3.5, 1.0]), Some((2, 3.5)));
        assert_eq!(leading_coefficient(&[-1.0, 0.0]), Some((0, -1.0)));
        assert_eq!(leading_coefficient(&[0.0, -0.0, 0.0]), None);
        assert_eq!(leading_coefficient(&[]), None);
    }
}
