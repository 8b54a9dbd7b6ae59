//! Generalized Pauli labels and their enumeration.
//!
//! For a `d`-level register the generalized Pauli basis is
//! ```text
//! { I } ∪ { X_j } ∪ { Z_j } ∪ { Y_jk },    j, k = 1, ..., d - 1
//! ```
//! with `X_j = shift(d, j)`, `Z_j = clock(d, j)`, and `Y_jk = X_j · Z_k`, for
//! `1 + 2(d - 1) + (d - 1)² = d²` labels in total.
//!
//! Two-register labels attach a register index `i ∈ {0, 1}` to each factor.
//! The two-register basis is the identity, every single factor (identity
//! implied on the other register), and every unordered pair of factors on
//! different registers, for `1 + 2(d² - 1) + (d² - 1)² = d⁴` labels.
//!
//! Labels render and parse in a compact text form with single-digit
//! subscripts: `X1`, `Z2`, `Y12` for one register; `X10`, `Y121`, and
//! `X10 Z21` for two. The text form therefore only covers `d <= 10`; the typed
//! labels themselves have no such limit.

use std::{ fmt, str::FromStr };
use itertools::Itertools;
use tracing::debug;
use crate::{
    error::{ QuditError, QuditResult },
    linalg::Matrix,
    ops,
};

/// Number of registers addressed by two-register labels.
pub const NUM_REGISTERS: usize = 2;

/// A generalized Pauli operator on a single register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Pauli {
    /// Identity.
    I,
    /// `shift(d, j)`.
    X(usize),
    /// `clock(d, j)`.
    Z(usize),
    /// `shift(d, j) · clock(d, k)`.
    Y(usize, usize),
}

impl Pauli {
    /// Return `true` if `self` is `I`.
    pub fn is_i(&self) -> bool { matches!(self, Self::I) }

    /// Return `true` if `self` is `X`.
    pub fn is_x(&self) -> bool { matches!(self, Self::X(..)) }

    /// Return `true` if `self` is `Z`.
    pub fn is_z(&self) -> bool { matches!(self, Self::Z(..)) }

    /// Return `true` if `self` is `Y`.
    pub fn is_y(&self) -> bool { matches!(self, Self::Y(..)) }

    /// Materialize `self` as a `d×d` matrix.
    pub fn matrix(&self, d: usize) -> QuditResult<Matrix> {
        match *self {
            Self::I => Ok(ops::identity(d)),
            Self::X(j) => ops::shift(d, j),
            Self::Z(j) => ops::clock(d, j),
            Self::Y(j, k) => ops::y(d, j, k),
        }
    }

    /// Attach a register index.
    pub fn on(self, reg: usize) -> Factor { Factor { op: self, reg } }
}

impl fmt::Display for Pauli {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I => write!(f, "I"),
            Self::X(j) => write!(f, "X{}", j),
            Self::Z(j) => write!(f, "Z{}", j),
            Self::Y(j, k) => write!(f, "Y{}{}", j, k),
        }
    }
}

fn digit(part: &str, c: char) -> QuditResult<usize> {
    c.to_digit(10)
        .map(|x| x as usize)
        .ok_or_else(|| QuditError::LabelDigit(part.to_string()))
}

// split a label part into its leading letter and the digits that follow,
// checking the length expected for that letter; `extra` is the number of
// trailing digits beyond the subscripts
fn letter_digits(part: &str, extra: usize) -> QuditResult<(char, Vec<usize>)> {
    let chars: Vec<char> = part.chars().collect();
    let letter =
        *chars.first()
        .ok_or_else(|| QuditError::LabelLength {
            part: part.to_string(),
            expected: 2 + extra,
        })?;
    let expected =
        match letter {
            'X' | 'Z' => 2 + extra,
            'Y' => 3 + extra,
            _ => {
                return Err(QuditError::LabelLetter {
                    letter,
                    part: part.to_string(),
                });
            },
        };
    if chars.len() != expected {
        return Err(QuditError::LabelLength { part: part.to_string(), expected });
    }
    let digits: Vec<usize> =
        chars[1..].iter()
        .map(|c| digit(part, *c))
        .collect::<QuditResult<_>>()?;
    Ok((letter, digits))
}

fn pauli_from(letter: char, subs: &[usize]) -> Pauli {
    match letter {
        'X' => Pauli::X(subs[0]),
        'Z' => Pauli::Z(subs[0]),
        _ => Pauli::Y(subs[0], subs[1]),
    }
}

impl FromStr for Pauli {
    type Err = QuditError;

    fn from_str(s: &str) -> QuditResult<Self> {
        if s == "I" { return Ok(Self::I); }
        let (letter, digits) = letter_digits(s, 0)?;
        Ok(pauli_from(letter, &digits))
    }
}

/// A non-identity Pauli operator acting on register `reg` of a two-register
/// system.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Factor {
    pub op: Pauli,
    pub reg: usize,
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.op, self.reg)
    }
}

impl FromStr for Factor {
    type Err = QuditError;

    /// Parse a single part: `X`/`Z` parts are exactly three characters
    /// (letter, subscript, register), `Y` parts exactly four (letter, two
    /// subscripts, register).
    fn from_str(s: &str) -> QuditResult<Self> {
        let (letter, digits) = letter_digits(s, 1)?;
        let (subs, reg) = digits.split_at(digits.len() - 1);
        let reg = reg[0];
        if reg >= NUM_REGISTERS {
            return Err(QuditError::LabelRegister { reg, part: s.to_string() });
        }
        Ok(pauli_from(letter, subs).on(reg))
    }
}

/// A label from the two-register generalized Pauli basis.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PairLabel {
    /// Identity on both registers.
    I,
    /// One factor, identity on the other register.
    Single(Factor),
    /// Two factors on different registers, in label order.
    Pair(Factor, Factor),
}

impl PairLabel {
    /// Return `true` if `self` is `I`.
    pub fn is_i(&self) -> bool { matches!(self, Self::I) }

    /// Return `true` if `self` is `Single`.
    pub fn is_single(&self) -> bool { matches!(self, Self::Single(..)) }

    /// Return `true` if `self` is `Pair`.
    pub fn is_pair(&self) -> bool { matches!(self, Self::Pair(..)) }

    /// Return the factors named by `self`, in label order.
    pub fn parts(&self) -> Vec<Factor> {
        match *self {
            Self::I => Vec::new(),
            Self::Single(a) => vec![a],
            Self::Pair(a, b) => vec![a, b],
        }
    }
}

impl fmt::Display for PairLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::I => write!(f, "I"),
            Self::Single(a) => write!(f, "{}", a),
            Self::Pair(a, b) => write!(f, "{} {}", a, b),
        }
    }
}

impl FromStr for PairLabel {
    type Err = QuditError;

    fn from_str(s: &str) -> QuditResult<Self> {
        if s.trim() == "I" { return Ok(Self::I); }
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [a] => Ok(Self::Single(a.parse()?)),
            [a, b] => {
                let a: Factor = a.parse()?;
                let b: Factor = b.parse()?;
                if a.reg == b.reg {
                    return Err(QuditError::LabelDuplicateRegister {
                        reg: a.reg,
                        label: s.to_string(),
                    });
                }
                Ok(Self::Pair(a, b))
            },
            _ => Err(QuditError::LabelPartCount {
                count: parts.len(),
                label: s.to_string(),
            }),
        }
    }
}

fn check_basis_dim(d: usize) -> QuditResult<()> {
    if d < 2 { Err(QuditError::ShiftDimension(d)) } else { Ok(()) }
}

/// Enumerate the `d²` one-register labels.
///
/// Order: `I`, then for each `j` in `1..d`: `X_j`, `Z_j`, `Y_j1`, ...,
/// `Y_j(d-1)`.
///
/// ```
/// # use qudit_ops::pauli::single_basis;
/// let labels: Vec<String> =
///     single_basis(2).unwrap().iter().map(|p| p.to_string()).collect();
/// assert_eq!(labels, ["I", "X1", "Z1", "Y11"]);
/// ```
pub fn single_basis(d: usize) -> QuditResult<Vec<Pauli>> {
    check_basis_dim(d)?;
    let mut labels: Vec<Pauli> = Vec::with_capacity(d * d);
    labels.push(Pauli::I);
    for j in 1..d {
        labels.push(Pauli::X(j));
        labels.push(Pauli::Z(j));
        labels.extend((1..d).map(|k| Pauli::Y(j, k)));
    }
    debug!(d, count = labels.len(), "enumerated one-register pauli basis");
    Ok(labels)
}

/// Enumerate the per-register factor pool of size `2(d² - 1)`.
///
/// Order: for each `j` in `1..d`, for each register `i` in `{0, 1}`:
/// `X_j^i`, `Z_j^i`, `Y_j1^i`, ..., `Y_j(d-1)^i`.
pub fn register_pool(d: usize) -> QuditResult<Vec<Factor>> {
    check_basis_dim(d)?;
    let mut pool: Vec<Factor> =
        Vec::with_capacity(NUM_REGISTERS * (d * d - 1));
    for j in 1..d {
        for i in 0..NUM_REGISTERS {
            pool.push(Pauli::X(j).on(i));
            pool.push(Pauli::Z(j).on(i));
            pool.extend((1..d).map(|k| Pauli::Y(j, k).on(i)));
        }
    }
    Ok(pool)
}

/// Enumerate the `d⁴` two-register labels.
///
/// Order: `I`, then every pool factor alone (see [`register_pool`]), then
/// every unordered pair of pool factors on different registers, taken in
/// lexicographic order of their pool positions.
pub fn two_register_basis(d: usize) -> QuditResult<Vec<PairLabel>> {
    let pool = register_pool(d)?;
    let mut labels: Vec<PairLabel> = Vec::with_capacity(d.pow(4));
    labels.push(PairLabel::I);
    labels.extend(pool.iter().copied().map(PairLabel::Single));
    labels.extend(
        pool.iter().copied()
        .tuple_combinations::<(_, _)>()
        .filter(|(a, b)| a.reg != b.reg)
        .map(|(a, b)| PairLabel::Pair(a, b))
    );
    debug!(
        d,
        pool = pool.len(),
        count = labels.len(),
        "enumerated two-register pauli basis"
    );
    Ok(labels)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet as HashSet;
    use super::*;

    #[test]
    fn single_basis_cardinality() {
        for d in 2..9 {
            let labels = single_basis(d).unwrap();
            assert_eq!(labels.len(), d * d);
            assert_eq!(labels.iter().filter(|p| p.is_i()).count(), 1);
            let distinct: HashSet<Pauli> =
                labels.iter().copied().filter(|p| !p.is_i()).collect();
            assert_eq!(distinct.len(), d * d - 1);
        }
        assert!(matches!(single_basis(1), Err(QuditError::ShiftDimension(1))));
    }

    #[test]
    fn single_basis_order() {
        let labels: Vec<String> =
            single_basis(3).unwrap().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            labels,
            ["I", "X1", "Z1", "Y11", "Y12", "X2", "Z2", "Y21", "Y22"],
        );
    }

    #[test]
    fn pool_order_and_size() {
        let pool: Vec<String> =
            register_pool(2).unwrap().iter().map(|f| f.to_string()).collect();
        assert_eq!(pool, ["X10", "Z10", "Y110", "X11", "Z11", "Y111"]);
        for d in 2..6 {
            assert_eq!(register_pool(d).unwrap().len(), 2 * (d * d - 1));
        }
    }

    #[test]
    fn two_register_cardinality() {
        for d in 2..5 {
            let labels = two_register_basis(d).unwrap();
            assert_eq!(labels.len(), d.pow(4));
            assert_eq!(labels.iter().filter(|l| l.is_i()).count(), 1);
            assert_eq!(
                labels.iter().filter(|l| l.is_single()).count(),
                2 * (d * d - 1),
            );
            assert_eq!(
                labels.iter().filter(|l| l.is_pair()).count(),
                (d * d - 1).pow(2),
            );
            let distinct: HashSet<PairLabel> = labels.iter().copied().collect();
            assert_eq!(distinct.len(), labels.len());
            assert!(
                labels.iter()
                .filter_map(|l| match l {
                    PairLabel::Pair(a, b) => Some((a, b)),
                    _ => None,
                })
                .all(|(a, b)| a.reg != b.reg)
            );
        }
    }

    #[test]
    fn two_register_pair_order() {
        let labels = two_register_basis(2).unwrap();
        assert_eq!(labels[0].to_string(), "I");
        assert_eq!(labels[7].to_string(), "X10 X11");
        assert_eq!(labels[8].to_string(), "X10 Z11");
        assert_eq!(labels[9].to_string(), "X10 Y111");
        assert_eq!(labels[15].to_string(), "Y110 Y111");
    }

    #[test]
    fn parse_round_trip_text() {
        for d in 2..5 {
            for label in two_register_basis(d).unwrap() {
                let text = label.to_string();
                let parsed: PairLabel = text.parse().unwrap();
                assert_eq!(parsed, label);
            }
            for p in single_basis(d).unwrap() {
                assert_eq!(p.to_string().parse::<Pauli>().unwrap(), p);
            }
        }
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "X1".parse::<Factor>(),
            Err(QuditError::LabelLength { expected: 3, .. }),
        ));
        assert!(matches!(
            "Y120".parse::<Factor>().map(|f| f.op),
            Ok(Pauli::Y(1, 2)),
        ));
        assert!(matches!(
            "Y10".parse::<Factor>(),
            Err(QuditError::LabelLength { expected: 4, .. }),
        ));
        assert!(matches!(
            "W10".parse::<Factor>(),
            Err(QuditError::LabelLetter { letter: 'W', .. }),
        ));
        assert!(matches!(
            "Xa0".parse::<Factor>(),
            Err(QuditError::LabelDigit(..)),
        ));
        assert!(matches!(
            "X12".parse::<Factor>(),
            Err(QuditError::LabelRegister { reg: 2, .. }),
        ));
        assert!(matches!(
            "X10 Z11 Y111".parse::<PairLabel>(),
            Err(QuditError::LabelPartCount { count: 3, .. }),
        ));
        assert!(matches!(
            "".parse::<PairLabel>(),
            Err(QuditError::LabelPartCount { count: 0, .. }),
        ));
        assert!(matches!(
            "X10 Z10".parse::<PairLabel>(),
            Err(QuditError::LabelDuplicateRegister { reg: 0, .. }),
        ));
    }

    #[test]
    fn pauli_matrices() {
        assert_eq!(Pauli::I.matrix(3).unwrap(), ops::identity(3));
        assert_eq!(Pauli::X(2).matrix(3).unwrap(), ops::shift(3, 2).unwrap());
        assert_eq!(Pauli::Z(1).matrix(3).unwrap(), ops::clock(3, 1).unwrap());
        assert_eq!(Pauli::Y(1, 2).matrix(3).unwrap(), ops::y(3, 1, 2).unwrap());
        assert!(Pauli::X(0).matrix(3).is_err());
    }
}
