//! Numerically exact, real phases backed by rational numbers.
//!
//! A [`Phase`] stores the fraction *φ* of a full turn, so that the phase as a
//! whole is 2*π* × *φ*. All arithmetic is performed modulo one turn. Roots of
//! unity for a `d`-level register are built here and only converted to
//! floating point when a matrix entry is written, so that e.g. *ω*<sup>*d*</sup>
//! comes out as exactly 1.

use std::f64::consts::TAU;
use num_complex::Complex64 as C64;
use num_rational::Rational64 as R64;
use num_traits::{ One, Zero };

// via Euclid's algorithm
pub(crate) fn gcd(mut a: i64, mut b: i64) -> i64 {
    let mut t: i64;
    while b != 0 {
        t = b;
        b = a % b;
        a = t;
    }
    a.abs()
}

fn lcm(a: i64, b: i64) -> i64 { (a / gcd(a, b)) * b }

// return the reduction of `a` modulo `m`, constrained to positive values
pub(crate) fn rempos(a: R64, m: R64) -> R64 {
    let d = lcm(*a.denom(), *m.denom());
    let b = (*(a * d).numer()).rem_euclid(*(m * d).numer());
    R64::new(b, d)
}

/// A phase as a rational fraction of a full turn.
///
/// ```
/// # use qudit_ops::phase::Phase;
/// assert_eq!( Phase::root(3, 3),     Phase::root(0, 1)  );
/// assert_eq!( Phase::root(4, 3),     Phase::root(1, 3)  );
/// assert_eq!( Phase::root(-1, 4),    Phase::root(3, 4)  );
/// assert_eq!( Phase::root(1, 3) * 2, Phase::root(2, 3)  );
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Phase(pub R64);

impl PartialEq for Phase {
    fn eq(&self, other: &Self) -> bool {
        rempos(self.0 - other.0, R64::one()) == R64::zero()
    }
}

impl Eq for Phase { }

impl From<Phase> for f64 {
    fn from(ph: Phase) -> Self {
        TAU * (*ph.0.numer() as f64 / *ph.0.denom() as f64)
    }
}

impl Phase {
    /// Construct a new `Phase` as `(numer / denom)` turns.
    ///
    /// *Panics if `denom` is zero.*
    pub fn new(numer: i64, denom: i64) -> Self {
        Self(rempos(R64::new(numer, denom), R64::one()))
    }

    /// Return the phase of *ω*<sup>`k`</sup>, where *ω* = e<sup>2πi/`d`</sup>
    /// is the primitive `d`-th root of unity.
    ///
    /// *Panics if `d` is zero.*
    pub fn root(k: i64, d: i64) -> Self { Self::new(k, d) }

    // exact values at multiples of a quarter turn
    fn quarter(self) -> Option<C64> {
        let red = rempos(self.0, R64::one());
        match (*red.numer(), *red.denom()) {
            (0, _) => Some(C64::new(1.0, 0.0)),
            (1, 4) => Some(C64::new(0.0, 1.0)),
            (1, 2) => Some(C64::new(-1.0, 0.0)),
            (3, 4) => Some(C64::new(0.0, -1.0)),
            _ => None,
        }
    }

    /// Convert to a complex number with modulus 1 and argument equal to `self`.
    ///
    /// Multiples of π/2 are returned exactly.
    pub fn cis(self) -> C64 {
        self.quarter().unwrap_or_else(|| C64::cis(self.into()))
    }

    /// Convert to a complex number with modulus `r` and argument equal to
    /// `self`.
    pub fn as_polar(self, r: f64) -> C64 {
        self.quarter()
            .map(|z| z * r)
            .unwrap_or_else(|| C64::from_polar(r, self.into()))
    }
}

impl std::ops::Mul<i64> for Phase {
    type Output = Phase;

    fn mul(self, rhs: i64) -> Self::Output {
        Self(rempos(self.0 * rhs, R64::one()))
    }
}
