//! Dense matrix helpers shared by the operator constructors.
//!
//! Matrices are plain `ndarray::Array2<Complex64>` values. Numeric inversion
//! goes through `nalgebra`'s LU-based `try_inverse`; everything else is exact
//! index manipulation.

use nalgebra as na;
use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    c,
    config::Tolerance,
    error::{ QuditError, QuditResult },
};

/// A dense complex matrix.
pub type Matrix = nd::Array2<C64>;

/// Return the `n×n` identity.
pub fn identity(n: usize) -> Matrix { nd::Array2::eye(n) }

/// Cyclically roll the rows of `mat` by `shift`, so that row `r` of the output
/// is row `(r - shift) mod n` of the input.
///
/// Positive shifts move rows down. Rolling the identity by `s` gives the
/// permutation `|x⟩ ↦ |x + s mod n⟩`.
pub fn roll_rows(mat: &Matrix, shift: isize) -> Matrix {
    let n = mat.nrows();
    if n == 0 { return mat.clone(); }
    let s = shift.rem_euclid(n as isize) as usize;
    let mut out: Matrix = nd::Array2::zeros(mat.raw_dim());
    for (r, row) in mat.rows().into_iter().enumerate() {
        out.row_mut((r + s) % n).assign(&row);
    }
    out
}

/// Return the Kronecker product `a ⊗ b`.
pub fn kron(a: &Matrix, b: &Matrix) -> Matrix { nd::linalg::kron(a, b) }

/// Return the conjugate transpose of `mat`.
pub fn dagger(mat: &Matrix) -> Matrix {
    mat.t().mapv(|z| z.conj())
}

/// Return the numeric inverse of a square matrix.
///
/// This is an LU solve, not an exact operation; for unitaries prefer
/// [`dagger`].
pub fn inverse(mat: &Matrix) -> QuditResult<Matrix> {
    let (n, m) = mat.dim();
    let dm: na::DMatrix<C64> = na::DMatrix::from_fn(n, m, |i, j| mat[[i, j]]);
    let inv = dm.try_inverse().ok_or(QuditError::Singular)?;
    Ok(nd::Array2::from_shape_fn((n, m), |(i, j)| inv[(i, j)]))
}

/// Return `true` if `a` and `b` have the same shape and agree entrywise within
/// `tol`.
pub fn approx_eq(a: &Matrix, b: &Matrix, tol: Tolerance) -> bool {
    a.dim() == b.dim()
        && a.iter().zip(b.iter()).all(|(x, y)| tol.eq_c64(*x, *y))
}

/// Return `true` if `mat · mat† ≈ I` within `tol`.
pub fn is_unitary(mat: &Matrix, tol: Tolerance) -> bool {
    let (n, m) = mat.dim();
    n == m && approx_eq(&mat.dot(&dagger(mat)), &identity(n), tol)
}

/// Return `true` if every row and every column of `mat` holds exactly one
/// entry equal to 1, with all others 0.
pub fn is_permutation(mat: &Matrix) -> bool {
    let one = c!(1.0);
    let zero = c!(0.0);
    let entries_ok = mat.iter().all(|z| *z == one || *z == zero);
    let rows_ok =
        mat.rows().into_iter()
        .all(|row| row.iter().filter(|z| **z == one).count() == 1);
    let cols_ok =
        mat.columns().into_iter()
        .all(|col| col.iter().filter(|z| **z == one).count() == 1);
    entries_ok && rows_ok && cols_ok
}

/// Place `blocks` along the diagonal of an otherwise zero matrix.
///
/// All blocks must be square; they need not share a size.
pub fn block_diag<'a, I>(blocks: I) -> Matrix
where I: IntoIterator<Item = &'a Matrix>
{
    let blocks: Vec<&Matrix> = blocks.into_iter().collect();
    let total: usize = blocks.iter().map(|b| b.nrows()).sum();
    let mut out: Matrix = nd::Array2::zeros((total, total));
    let mut offs: usize = 0;
    for block in blocks.into_iter() {
        let n = block.nrows();
        out.slice_mut(nd::s![offs..offs + n, offs..offs + n]).assign(block);
        offs += n;
    }
    out
}
