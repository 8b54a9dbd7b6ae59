//! Adjoint and inverse views of constructed operators.
//!
//! Every gate family can be materialized as the operator itself, its exact
//! conjugate transpose, or its numeric matrix inverse. For unitaries the last
//! two agree up to rounding; the conjugate transpose is exact and should be
//! preferred, while the numeric inverse is kept as a distinct view for hosts
//! that expect LU-inverted output.

use crate::{
    error::QuditResult,
    linalg::{ self, Matrix },
};

/// Which view of an operator to materialize.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    /// The operator as constructed.
    #[default]
    Plain,
    /// Exact conjugate transpose.
    Dagger,
    /// Numeric matrix inverse.
    Inverse,
}

impl View {
    /// Return `true` if `self` is `Plain`.
    pub fn is_plain(&self) -> bool { matches!(self, Self::Plain) }

    /// Return `true` if `self` is `Dagger`.
    pub fn is_dagger(&self) -> bool { matches!(self, Self::Dagger) }

    /// Return `true` if `self` is `Inverse`.
    pub fn is_inverse(&self) -> bool { matches!(self, Self::Inverse) }

    /// Return the view of the adjoint of an operator already seen through
    /// `self`.
    ///
    /// For unitary operators `(M⁻¹)† = M`, so `Inverse` maps back to `Plain`.
    pub fn adjoint(self) -> Self {
        match self {
            Self::Plain => Self::Dagger,
            Self::Dagger => Self::Plain,
            Self::Inverse => Self::Plain,
        }
    }

    /// Transform `mat` according to `self`.
    ///
    /// Fails only for `Inverse` on a singular matrix.
    pub fn apply(self, mat: Matrix) -> QuditResult<Matrix> {
        match self {
            Self::Plain => Ok(mat),
            Self::Dagger => Ok(linalg::dagger(&mat)),
            Self::Inverse => linalg::inverse(&mat),
        }
    }
}
