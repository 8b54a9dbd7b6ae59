#![allow(non_snake_case, non_upper_case_globals)]

//! This package builds the matrix operators and noise channels of
//! *d*-dimensional quantum systems ([qudits][qudit]) for use by circuit
//! simulators.
//!
//! - [`ops`] constructs the single-register families: the generalized Pauli
//! [shift and clock][gen-pauli] operators, quadratic phases, multiplication
//! permutations, the quantum Fourier transform, and their Y composite.
//! - [`adjoint`] gives every family an exact conjugate-transpose view and a
//! numeric inverse view.
//! - [`pauli`] enumerates the generalized Pauli basis of one register and the
//! product basis of two.
//! - [`channel`] turns those bases into depolarizing and bit-flip mixtures.
//! - [`block`] implements the conditional two-register SUM, MIN, and
//! controlled-shift gates.
//! - [`gate`] wraps all of the above in tagged descriptions that a hosting
//! framework can query for shapes, labels, and matrices, and [`batch`] builds
//! many of them in parallel.
//!
//! Matrices are [`ndarray`] arrays of [`Complex64`][num_complex::Complex64]
//! with row-major indexing, so that entry `[[i, j]]` is ⟨*i*∣*U*∣*j*⟩.
//!
//! [qudit]: https://en.wikipedia.org/wiki/Qubit#Qudits_and_qutrits
//! [gen-pauli]: https://en.wikipedia.org/wiki/Generalizations_of_Pauli_matrices
//!
//! # Further reading
//! - D. Gottesman, "Fault-tolerant quantum computation with higher-dimensional
//! systems." [arXiv:quant-ph/9802007](https://arxiv.org/abs/quant-ph/9802007)
//! - Y. Wang *et al.*, "Qudits and high-dimensional quantum computing."
//! [arXiv:2008.00959](https://arxiv.org/abs/2008.00959)

pub mod error;
pub use error::{ QuditError, QuditResult };
pub mod phase;
pub mod config;
pub mod linalg;
pub mod ops;
pub mod adjoint;
pub mod pauli;
pub mod channel;
pub mod block;
pub mod gate;
pub mod batch;

pub extern crate num_complex;
/// Handy macro to create `num_complex::Complex64`s from more natural and
/// succinct syntax.
///
/// ```
/// use std::f64::consts::PI;
/// use num_complex::Complex64;
/// use qudit_ops::c;
///
/// assert_eq!( c!(i (-1.0)),    Complex64::new(0.0, -1.0)      );
/// assert_eq!( c!(e PI),        Complex64::cis(PI)             );
/// assert_eq!( c!(1.0),         Complex64::new(1.0, 0.0)       );
/// assert_eq!( c!(1.0 + i 1.0), Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0 - i 1.0), Complex64::new(1.0, -1.0)      );
/// assert_eq!( c!(1.0 + 1.0 i), Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0 - 1.0 i), Complex64::new(1.0, -1.0)      );
/// assert_eq!( c!(1.0, 1.0),    Complex64::new(1.0, 1.0)       );
/// assert_eq!( c!(1.0, e PI),   Complex64::from_polar(1.0, PI) );
/// ```
#[macro_export]
macro_rules! c {
    ( i $im:expr )
        => { $crate::num_complex::Complex64::new(0.0, $im) };
    ( e $ph:expr )
        => { $crate::num_complex::Complex64::cis($ph) };
    ( $re:expr )
        => { $crate::num_complex::Complex64::new($re, 0.0) };
    ( $re:literal + i $im:literal )
        => { $crate::num_complex::Complex64::new($re, $im) };
    ( $re:literal - i $im:literal )
        => { $crate::num_complex::Complex64::new($re, -$im) };
    ( $re:literal + $im:literal i )
        => { $crate::num_complex::Complex64::new($re, $im) };
    ( $re:literal - $im:literal i )
        => { $crate::num_complex::Complex64::new($re, -$im) };
    ( $r:expr, e $ph:expr )
        => { $crate::num_complex::Complex64::from_polar($r, $ph) };
    ( $re:expr, $im:expr )
        => { $crate::num_complex::Complex64::new($re, $im) };
}
