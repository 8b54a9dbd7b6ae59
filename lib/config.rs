//! Numerical precision and comparison tolerance shared by every constructor.
//!
//! All matrices are computed in double precision. [`Precision::Single`] rounds
//! the finished entries through single-precision complex numbers, which is how
//! gates were historically handed to hosts expecting `complex64` arrays.

use ndarray as nd;
use num_complex::{ Complex32 as C32, Complex64 as C64 };

/// Tolerance used for unitarity and normalization checks unless overridden.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Storage precision of returned matrix entries.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Precision {
    /// Entries rounded to the nearest `Complex32` value.
    Single,
    /// Entries left as computed.
    #[default]
    Double,
}

impl Precision {
    /// Return `true` if `self` is `Single`.
    pub fn is_single(&self) -> bool { matches!(self, Self::Single) }

    /// Return `true` if `self` is `Double`.
    pub fn is_double(&self) -> bool { matches!(self, Self::Double) }

    /// Round a single entry to this precision.
    pub fn round(self, z: C64) -> C64 {
        match self {
            Self::Single => {
                let r = C32::new(z.re as f32, z.im as f32);
                C64::new(r.re as f64, r.im as f64)
            },
            Self::Double => z,
        }
    }

    /// Round every entry of a matrix to this precision in place.
    pub fn apply(self, mat: &mut nd::Array2<C64>) {
        if self.is_single() {
            mat.mapv_inplace(|z| self.round(z));
        }
    }
}

/// Absolute tolerance for approximate comparisons.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tolerance(pub f64);

impl Default for Tolerance {
    fn default() -> Self { Self(DEFAULT_TOLERANCE) }
}

impl Tolerance {
    /// Return `true` if `a` and `b` differ by at most the tolerance.
    pub fn eq_f64(self, a: f64, b: f64) -> bool { (a - b).abs() <= self.0 }

    /// Return `true` if `a` and `b` differ in modulus by at most the
    /// tolerance.
    pub fn eq_c64(self, a: C64, b: C64) -> bool { (a - b).norm() <= self.0 }
}

/// Configuration applied when a gate or channel is materialized.
///
/// ```
/// # use qudit_ops::config::{ OpConfig, Precision };
/// let cfg = OpConfig::default().with_precision(Precision::Single);
/// assert!(cfg.precision.is_single());
/// assert_eq!(cfg.tolerance.0, 1e-6);
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct OpConfig {
    pub precision: Precision,
    pub tolerance: Tolerance,
}

impl OpConfig {
    /// Set the storage precision.
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Set the comparison tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Tolerance(tolerance);
        self
    }
}
