//! Elementary `d×d` qudit operators.
//!
//! With *ω* = e<sup>2πi/*d*</sup>, the constructors here produce
//!
//! | function             | action                                  |
//! |----------------------|-----------------------------------------|
//! | [`shift`]            | ∣*x*⟩ ↦ ∣*x* − *a* mod *d*⟩             |
//! | [`clock`]            | ∣*k*⟩ ↦ *ω*<sup>*kb* mod *d*</sup>∣*k*⟩ |
//! | [`quadratic_phase`]  | ∣*i*⟩ ↦ *ω*<sup>*i*²*γ*/2</sup>∣*i*⟩    |
//! | [`multiplication`]   | ∣*x*⟩ ↦ ∣*xg* mod *d*⟩                  |
//! | [`qft`]              | ∣*b*⟩ ↦ Σ<sub>*a*</sub> *ω*<sup>*ab*</sup>∣*a*⟩ / √*d* |
//! | [`y`]                | `shift(d, a) · clock(d, b)`             |
//!
//! All phases are evaluated exactly as rational fractions of a turn before
//! conversion to floating point.

use ndarray as nd;
use num_complex::Complex64 as C64;
use crate::{
    c,
    error::{ QuditError, QuditResult },
    linalg::{ self, Matrix },
    phase::{ self, Phase },
};

fn check_shift_dim(d: usize) -> QuditResult<()> {
    if d < 2 { Err(QuditError::ShiftDimension(d)) } else { Ok(()) }
}

fn check_phase_dim(d: usize) -> QuditResult<()> {
    if d < 1 { Err(QuditError::PhaseDimension(d)) } else { Ok(()) }
}

/// Return the `d×d` identity.
pub fn identity(d: usize) -> Matrix { linalg::identity(d) }

/// Generalized Pauli-X: the permutation ∣*x*⟩ ↦ ∣*x* − *a* mod *d*⟩, i.e. the
/// identity with its rows rolled by `-a`.
///
/// Requires `d >= 2` and `0 < a <= d`; `a == d` is accepted and gives the
/// identity.
pub fn shift(d: usize, a: usize) -> QuditResult<Matrix> {
    check_shift_dim(d)?;
    if a == 0 || a > d { return Err(QuditError::ShiftAmount { a, d }); }
    Ok(linalg::roll_rows(&identity(d), -(a as isize)))
}

/// Generalized Pauli-Z: diagonal with entries *ω*<sup>(*k* · *b*) mod *d*</sup>.
///
/// Requires `d >= 1` and `0 < b <= d`; `b == d` is accepted and gives the
/// identity.
pub fn clock(d: usize, b: usize) -> QuditResult<Matrix> {
    check_phase_dim(d)?;
    if b == 0 || b > d { return Err(QuditError::RootIndex { b, d }); }
    let w = Phase::root(b as i64, d as i64);
    let diag: nd::Array1<C64> =
        (0..d).map(|k| (w * k as i64).cis()).collect();
    Ok(nd::Array2::from_diag(&diag))
}

/// Quadratic phase gate: diagonal with entries *ω*<sup>*i*²*γ*/2</sup>.
///
/// The exponent is taken as the exact rational *i*²*γ*/(2*d*) turns, which is
/// the principal branch of *ω*<sup>*i*²*γ*/2</sup> when *i*²*γ* is odd. `γ`
/// is otherwise unrestricted; only its value modulo 2*d* matters.
pub fn quadratic_phase(d: usize, gamma: i64) -> QuditResult<Matrix> {
    check_phase_dim(d)?;
    let d = d as i64;
    // γ and i² are both taken mod 2d before the product
    let step = Phase::new(gamma.rem_euclid(2 * d), 2 * d);
    let diag: nd::Array1<C64> =
        (0..d).map(|i| (step * ((i * i) % (2 * d))).cis()).collect();
    Ok(nd::Array2::from_diag(&diag))
}

/// Multiplication gate: the map ∣*x*⟩ ↦ ∣*xg* mod *d*⟩.
///
/// Requires `1 <= g < d`. The result is a permutation (and hence unitary) only
/// when `gcd(g, d) == 1`, which is not checked here; see [`is_coprime`].
pub fn multiplication(d: usize, g: usize) -> QuditResult<Matrix> {
    if g < 1 || g >= d { return Err(QuditError::Multiplier { g, d }); }
    let mut mat: Matrix = nd::Array2::zeros((d, d));
    for i in 0..d {
        mat[[(i * g) % d, i]] = c!(1.0);
    }
    Ok(mat)
}

/// Return `true` if `g` and `d` are coprime, i.e. if [`multiplication`]`(d, g)`
/// is invertible.
pub fn is_coprime(g: usize, d: usize) -> bool {
    phase::gcd(g as i64, d as i64) == 1
}

/// Discrete Fourier transform over ℤ<sub>*d*</sub>, with entries
/// *ω*<sup>*ab*</sup>/√*d*.
pub fn qft(d: usize) -> QuditResult<Matrix> {
    check_phase_dim(d)?;
    let norm = (d as f64).sqrt().recip();
    let mat: Matrix =
        nd::Array2::from_shape_fn(
            (d, d),
            |(a, b)| (Phase::root(a as i64, d as i64) * b as i64).as_polar(norm),
        );
    Ok(mat)
}

/// Generalized Pauli-Y: the ordered product `shift(d, a) · clock(d, b)`.
pub fn y(d: usize, a: usize, b: usize) -> QuditResult<Matrix> {
    let x = shift(d, a)?;
    let z = clock(d, b)?;
    Ok(x.dot(&z))
}
