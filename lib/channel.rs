//! Probability-weighted operator mixtures for qudit error channels.
//!
//! A [`Mixture`] is an ordered list of `(probability, operator)` pairs. The
//! depolarizing channels give every non-identity label of the generalized
//! Pauli basis (see [`pauli`][crate::pauli]) the same weight and put the
//! remainder on the identity:
//! ```text
//! one register:   p / d²  each,   1 - p (d² - 1) / d²  on I
//! two registers:  p / d⁴  each,   1 - p (d⁴ - 1) / d⁴  on I
//! ```
//! Two-register labels are resolved into one `d×d` factor per register and
//! joined with a Kronecker product, `factor[0] ⊗ factor[1]`.

use rustc_hash::FxHashMap as HashMap;
use tracing::{ debug, trace };
use crate::{
    config::{ Precision, Tolerance },
    error::{ QuditError, QuditResult },
    linalg::{ self, Matrix },
    ops,
    pauli::{ self, NUM_REGISTERS, PairLabel, Pauli },
};

/// An ordered collection of `(probability, operator)` pairs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mixture {
    terms: Vec<(f64, Matrix)>,
}

impl FromIterator<(f64, Matrix)> for Mixture {
    fn from_iter<I>(iter: I) -> Self
    where I: IntoIterator<Item = (f64, Matrix)>
    {
        Self { terms: iter.into_iter().collect() }
    }
}

impl IntoIterator for Mixture {
    type Item = (f64, Matrix);
    type IntoIter = std::vec::IntoIter<(f64, Matrix)>;

    fn into_iter(self) -> Self::IntoIter { self.terms.into_iter() }
}

impl<'a> IntoIterator for &'a Mixture {
    type Item = &'a (f64, Matrix);
    type IntoIter = std::slice::Iter<'a, (f64, Matrix)>;

    fn into_iter(self) -> Self::IntoIter { self.terms.iter() }
}

impl Mixture {
    /// Create a new, empty `Mixture`.
    pub fn new() -> Self { Self::default() }

    /// Append a term.
    pub fn push(&mut self, prob: f64, op: Matrix) { self.terms.push((prob, op)); }

    /// Return the number of terms.
    pub fn len(&self) -> usize { self.terms.len() }

    /// Return `true` if there are no terms.
    pub fn is_empty(&self) -> bool { self.terms.is_empty() }

    /// Iterate over all terms in order.
    pub fn iter(&self) -> std::slice::Iter<'_, (f64, Matrix)> {
        self.terms.iter()
    }

    /// Return the `k`-th term.
    pub fn get(&self, k: usize) -> Option<&(f64, Matrix)> { self.terms.get(k) }

    /// Return all probabilities in order.
    pub fn probabilities(&self) -> Vec<f64> {
        self.terms.iter().map(|(p, _)| *p).collect()
    }

    /// Return the sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.terms.iter().map(|(p, _)| *p).sum()
    }

    /// Return `true` if all probabilities are non-negative and sum to 1 within
    /// `tol`.
    pub fn is_normalized(&self, tol: Tolerance) -> bool {
        self.terms.iter().all(|(p, _)| *p >= -tol.0)
            && tol.eq_f64(self.total_probability(), 1.0)
    }

    /// Return `true` if every operator is unitary within `tol`.
    pub fn is_unitary(&self, tol: Tolerance) -> bool {
        self.terms.iter().all(|(_, op)| linalg::is_unitary(op, tol))
    }

    /// Round every operator to `precision`.
    pub fn apply_precision(&mut self, precision: Precision) {
        self.terms.iter_mut().for_each(|(_, op)| precision.apply(op));
    }
}

/// Return an error if `p` is not a probability.
pub fn check_probability(p: f64) -> QuditResult<()> {
    if (0.0..=1.0).contains(&p) { Ok(()) } else { Err(QuditError::Probability(p)) }
}

/// An ordered label → probability table with constant-time lookup.
#[derive(Clone, Debug)]
pub struct ErrorTable<L> {
    entries: Vec<(L, f64)>,
    index: HashMap<L, usize>,
}

impl<L> ErrorTable<L>
where L: Copy + Eq + std::hash::Hash
{
    fn from_labels<I>(labels: I, p_identity: f64, p_error: f64, is_id: fn(&L) -> bool)
        -> Self
    where I: IntoIterator<Item = L>
    {
        let entries: Vec<(L, f64)> =
            labels.into_iter()
            .map(|l| if is_id(&l) { (l, p_identity) } else { (l, p_error) })
            .collect();
        let index: HashMap<L, usize> =
            entries.iter().enumerate()
            .map(|(k, (l, _))| (*l, k))
            .collect();
        Self { entries, index }
    }

    /// Return the number of labels.
    pub fn len(&self) -> usize { self.entries.len() }

    /// Return `true` if there are no labels.
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Iterate over `(label, probability)` pairs in enumeration order.
    pub fn iter(&self) -> std::slice::Iter<'_, (L, f64)> { self.entries.iter() }

    /// Return the probability assigned to `label`, if it is in the table.
    pub fn probability_of(&self, label: &L) -> Option<f64> {
        self.index.get(label).map(|k| self.entries[*k].1)
    }

    /// Return the sum of all probabilities.
    pub fn total_probability(&self) -> f64 {
        self.entries.iter().map(|(_, p)| *p).sum()
    }
}

/// Build the one-register depolarizing table for error probability `p`.
pub fn single_table(p: f64, d: usize) -> QuditResult<ErrorTable<Pauli>> {
    check_probability(p)?;
    let labels = pauli::single_basis(d)?;
    let d2 = (d * d) as f64;
    let p_error = p / d2;
    let p_identity = 1.0 - p * (d2 - 1.0) / d2;
    Ok(ErrorTable::from_labels(labels, p_identity, p_error, Pauli::is_i))
}

/// Build the two-register depolarizing table for error probability `p`.
pub fn two_register_table(p: f64, d: usize)
    -> QuditResult<ErrorTable<PairLabel>>
{
    check_probability(p)?;
    let labels = pauli::two_register_basis(d)?;
    let d4 = (d as f64).powi(4);
    let p_error = p / d4;
    let p_identity = 1.0 - p * (d4 - 1.0) / d4;
    Ok(ErrorTable::from_labels(labels, p_identity, p_error, PairLabel::is_i))
}

/// Bit-flip channel: the identity with probability `1 - p`, `shift(d, 1)`
/// with probability `p`.
pub fn bit_flip(p: f64, d: usize) -> QuditResult<Mixture> {
    check_probability(p)?;
    let flip = ops::shift(d, 1)?;
    let mut mix = Mixture::new();
    mix.push(1.0 - p, ops::identity(d));
    mix.push(p, flip);
    Ok(mix)
}

/// One-register depolarizing channel as a mixture of `d²` generalized Pauli
/// operators.
pub fn depolarizing(p: f64, d: usize) -> QuditResult<Mixture> {
    let table = single_table(p, d)?;
    let mix: Mixture =
        table.iter()
        .map(|(label, prob)| Ok((*prob, label.matrix(d)?)))
        .collect::<QuditResult<_>>()?;
    debug!(
        p,
        d,
        terms = mix.len(),
        p_identity = table.probability_of(&Pauli::I).unwrap_or(0.0),
        "built one-register depolarizing mixture"
    );
    Ok(mix)
}

/// Resolve a two-register label into its per-register factors.
///
/// Each register has its own slot, written at most once by the part that names
/// it; registers no part names hold the `d×d` identity. The result does not
/// depend on the order of parts in the label.
pub fn register_factors(label: &PairLabel, d: usize)
    -> QuditResult<[Matrix; NUM_REGISTERS]>
{
    let mut slots: [Option<Matrix>; NUM_REGISTERS] = [None, None];
    for part in label.parts() {
        let slot =
            slots.get_mut(part.reg)
            .ok_or_else(|| QuditError::LabelRegister {
                reg: part.reg,
                part: part.to_string(),
            })?;
        if slot.is_some() {
            return Err(QuditError::LabelDuplicateRegister {
                reg: part.reg,
                label: label.to_string(),
            });
        }
        *slot = Some(part.op.matrix(d)?);
    }
    Ok(slots.map(|slot| slot.unwrap_or_else(|| ops::identity(d))))
}

/// Resolve a two-register label into the `d²×d²` operator it denotes.
pub fn resolve_pair(label: &PairLabel, d: usize) -> QuditResult<Matrix> {
    let [f0, f1] = register_factors(label, d)?;
    trace!(%label, d, "resolved two-register label");
    Ok(linalg::kron(&f0, &f1))
}

/// Parse a two-register label from text and resolve it.
///
/// ```
/// # use qudit_ops::{ channel::resolve_label, linalg::kron, ops };
/// let m = resolve_label("Z11 X10", 3).unwrap();
/// let expected = kron(&ops::shift(3, 1).unwrap(), &ops::clock(3, 1).unwrap());
/// assert_eq!(m, expected);
/// ```
pub fn resolve_label(text: &str, d: usize) -> QuditResult<Matrix> {
    let label: PairLabel = text.parse()?;
    resolve_pair(&label, d)
}

/// Two-register depolarizing channel as a mixture of `d⁴` generalized Pauli
/// products.
pub fn depolarizing_two(p: f64, d: usize) -> QuditResult<Mixture> {
    let table = two_register_table(p, d)?;
    let mix: Mixture =
        table.iter()
        .map(|(label, prob)| Ok((*prob, resolve_pair(label, d)?)))
        .collect::<QuditResult<_>>()?;
    debug!(
        p,
        d,
        terms = mix.len(),
        p_identity = table.probability_of(&PairLabel::I).unwrap_or(0.0),
        "built two-register depolarizing mixture"
    );
    Ok(mix)
}

#[cfg(test)]
mod tests {
    use rand::{ Rng, SeedableRng, rngs::StdRng };
    use crate::pauli::Factor;
    use super::*;

    #[test]
    fn bit_flip_example() {
        let mix = bit_flip(0.3, 3).unwrap();
        assert_eq!(mix.len(), 2);
        let (p0, m0) = mix.get(0).unwrap();
        let (p1, m1) = mix.get(1).unwrap();
        assert!((p0 - 0.7).abs() < 1e-12);
        assert!((p1 - 0.3).abs() < 1e-12);
        assert_eq!(*m0, ops::identity(3));
        assert_eq!(*m1, ops::shift(3, 1).unwrap());
        assert!(mix.is_normalized(Tolerance::default()));
    }

    #[test]
    fn bad_probability() {
        assert!(matches!(bit_flip(1.5, 3), Err(QuditError::Probability(..))));
        assert!(matches!(depolarizing(-0.1, 3), Err(QuditError::Probability(..))));
        assert!(matches!(depolarizing_two(f64::NAN, 2), Err(QuditError::Probability(..))));
    }

    #[test]
    fn single_weights() {
        let table = single_table(0.4, 3).unwrap();
        assert_eq!(table.len(), 9);
        assert!((table.probability_of(&Pauli::I).unwrap() - (1.0 - 0.4 * 8.0 / 9.0)).abs() < 1e-12);
        assert!((table.probability_of(&Pauli::Y(2, 1)).unwrap() - 0.4 / 9.0).abs() < 1e-12);
        assert_eq!(table.probability_of(&Pauli::X(3)), None);
    }

    #[test]
    fn single_mixture_matches_basis() {
        let d = 3;
        let mix = depolarizing(0.2, d).unwrap();
        let labels = pauli::single_basis(d).unwrap();
        assert_eq!(mix.len(), d * d);
        for ((_, op), label) in mix.iter().zip(labels.iter()) {
            assert_eq!(*op, label.matrix(d).unwrap());
        }
        assert!(mix.is_unitary(Tolerance::default()));
    }

    #[test]
    fn normalization() {
        let tol = Tolerance::default();
        let mut rng = StdRng::seed_from_u64(2024);
        for _ in 0..20 {
            let p: f64 = rng.gen_range(0.0..=1.0);
            let d: usize = rng.gen_range(2..5);
            assert!(depolarizing(p, d).unwrap().is_normalized(tol));
            assert!(bit_flip(p, d).unwrap().is_normalized(tol));
            assert!(two_register_table(p, d).unwrap().total_probability() > 1.0 - tol.0);
        }
        assert!(depolarizing_two(0.7, 2).unwrap().is_normalized(tol));
        assert!(depolarizing_two(1.0, 3).unwrap().is_normalized(tol));
        assert!(depolarizing(0.0, 4).unwrap().get(0).map(|(p, _)| *p) == Some(1.0));
    }

    #[test]
    fn two_register_mixture() {
        let d = 2;
        let mix = depolarizing_two(0.5, d).unwrap();
        assert_eq!(mix.len(), 16);
        let (p_id, id) = mix.get(0).unwrap();
        assert!((p_id - (1.0 - 0.5 * 15.0 / 16.0)).abs() < 1e-12);
        assert_eq!(*id, ops::identity(4));
        assert!(mix.iter().skip(1).all(|(p, _)| (p - 0.5 / 16.0).abs() < 1e-12));
        assert!(mix.is_unitary(Tolerance::default()));
        assert!(mix.iter().all(|(_, op)| op.dim() == (4, 4)));
    }

    #[test]
    fn slot_isolation() {
        let d = 3;
        let x = ops::shift(d, 2).unwrap();
        let z = ops::clock(d, 1).unwrap();
        let expected = linalg::kron(&x, &z);
        let fwd = PairLabel::Pair(Pauli::X(2).on(0), Pauli::Z(1).on(1));
        let rev = PairLabel::Pair(Pauli::Z(1).on(1), Pauli::X(2).on(0));
        assert_eq!(resolve_pair(&fwd, d).unwrap(), expected);
        assert_eq!(resolve_pair(&rev, d).unwrap(), expected);
        assert_eq!(resolve_label("X20 Z11", d).unwrap(), expected);
        assert_eq!(resolve_label("Z11 X20", d).unwrap(), expected);

        // single parts leave identity in the other slot
        let [f0, f1] = register_factors(&PairLabel::Single(Pauli::Y(1, 2).on(1)), d).unwrap();
        assert_eq!(f0, ops::identity(d));
        assert_eq!(f1, ops::y(d, 1, 2).unwrap());
        let [f0, f1] = register_factors(&PairLabel::Single(Pauli::Z(2).on(0)), d).unwrap();
        assert_eq!(f0, ops::clock(d, 2).unwrap());
        assert_eq!(f1, ops::identity(d));
    }

    #[test]
    fn resolve_errors() {
        let same = PairLabel::Pair(Pauli::X(1).on(0), Pauli::Z(1).on(0));
        assert!(matches!(
            register_factors(&same, 3),
            Err(QuditError::LabelDuplicateRegister { reg: 0, .. }),
        ));
        let oob = PairLabel::Single(Factor { op: Pauli::X(1), reg: 5 });
        assert!(matches!(
            register_factors(&oob, 3),
            Err(QuditError::LabelRegister { reg: 5, .. }),
        ));
        assert!(matches!(resolve_label("Q10", 3), Err(QuditError::LabelLetter { .. })));
        assert!(matches!(resolve_label("X10 Z11 Z10", 3), Err(QuditError::LabelPartCount { .. })));
        assert!(matches!(resolve_label("X40", 3), Err(QuditError::ShiftAmount { a: 4, d: 3 })));
    }
}
