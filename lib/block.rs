//! Conditional two-register gates built as block-diagonal permutations.
//!
//! For a control register of size `m` and a target of size `n`, each gate is
//! an `(m·n)×(m·n)` matrix with `m` diagonal `n×n` blocks; block `c` acts on the
//! target when the control is in state ∣*c*⟩. Writing `R(s)` for the `n×n`
//! identity with its rows rolled by `s` (∣*t*⟩ ↦ ∣*t* + *s* mod *n*⟩):
//!
//! | gate      | block `c`                         |
//! |-----------|-----------------------------------|
//! | SUM       | `R(c)`                            |
//! | MIN       | `R(-c)`                           |
//! | CShift    | `R(0)` for `c = 0`, `R(1)` otherwise |
//!
//! SUM⁻¹ and SUM† are the numeric inverse and exact conjugate transpose of SUM.

use crate::{
    adjoint::View,
    error::{ QuditError, QuditResult },
    linalg::{ self, Matrix },
};

fn check_dims(m: usize, n: usize) -> QuditResult<()> {
    if m < 1 || n < 1 {
        Err(QuditError::BlockDimension { m, n })
    } else {
        Ok(())
    }
}

// assemble `m` rolled identities of size `n` along the diagonal
fn rolled_blocks<F>(m: usize, n: usize, roll: F) -> QuditResult<Matrix>
where F: Fn(usize) -> isize
{
    check_dims(m, n)?;
    let id = linalg::identity(n);
    let blocks: Vec<Matrix> =
        (0..m).map(|c| linalg::roll_rows(&id, roll(c))).collect();
    Ok(linalg::block_diag(&blocks))
}

/// SUM gate: ∣*c*⟩∣*t*⟩ ↦ ∣*c*⟩∣*t* + *c* mod *n*⟩.
///
/// ```
/// # use qudit_ops::{ block::sum, c };
/// let s = sum(2, 2).unwrap();
/// assert_eq!(s[[2, 3]], c!(1.0));
/// assert_eq!(s[[3, 2]], c!(1.0));
/// assert_eq!(s[[2, 2]], c!(0.0));
/// ```
pub fn sum(m: usize, n: usize) -> QuditResult<Matrix> {
    rolled_blocks(m, n, |c| c as isize)
}

/// Numeric inverse of [`sum`].
pub fn sum_inv(m: usize, n: usize) -> QuditResult<Matrix> {
    View::Inverse.apply(sum(m, n)?)
}

/// Conjugate transpose of [`sum`].
pub fn sum_dag(m: usize, n: usize) -> QuditResult<Matrix> {
    View::Dagger.apply(sum(m, n)?)
}

/// MIN gate: ∣*c*⟩∣*t*⟩ ↦ ∣*c*⟩∣*t* − *c* mod *n*⟩.
pub fn min(m: usize, n: usize) -> QuditResult<Matrix> {
    rolled_blocks(m, n, |c| -(c as isize))
}

/// Controlled shift: ∣*c*⟩∣*t*⟩ ↦ ∣*c*⟩∣*t* + 1 mod *n*⟩ for every *c* ≠ 0, and
/// the identity for *c* = 0.
///
/// Unlike [`sum`], the shift does not grow with the control value.
pub fn cshift(m: usize, n: usize) -> QuditResult<Matrix> {
    rolled_blocks(m, n, |c| if c == 0 { 0 } else { 1 })
}
