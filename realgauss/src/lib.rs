//! `realgauss` is a Rust library for dense linear algebra over `f64`s. Some features include:
//! - building matrices from rows, row-major buffers, or a function of the indices
//! - row and column access, row replacement and swapping, and submatrix extraction
//! - cellwise maps, addition and subtraction
//! - cache-friendly matrix multiplication
//! - Gauss-Jordan elimination to reduced row echelon form, and related methods (e.g. rank)
//!
//! The main data structure is [`Matrix`], a row-major matrix that implements [`RowOps`], the
//! row-level interface [`gauss_jordan::reduce`] works against. Plain vectors are `&[f64]`
//! slices, with primitive operations in [`vector`].
//!
//! ```
//! use realgauss::Matrix;
//!
//! let m = Matrix::from_rows(&[[1.0, 1.0, 1.0], [1.0, 1.0, 1.0], [-1.0, 0.0, 1.0]]).unwrap();
//! let r = m.rref();
//! assert_eq!(r.rank(), 2);
//! assert_eq!(r.submatrix(..2, ..2), Matrix::identity(2));
//! ```

#![allow(
    clippy::needless_range_loop,
    clippy::uninlined_format_args,
    clippy::float_cmp,
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]
pub mod error;
pub mod gauss_jordan;
pub mod matrix;
pub mod vector;

pub use error::MatrixError;
pub use gauss_jordan::reduce;
pub use matrix::{Matrix, RowOps};
