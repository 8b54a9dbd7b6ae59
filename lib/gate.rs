//! Host-facing gate and channel descriptions.
//!
//! A circuit framework sees every operation through the same small set of
//! capabilities, collected in [`QuditOperation`]: the register dimensions it
//! acts on, a short display label, and either a unitary matrix or a mixture.
//! [`Gate`] covers the deterministic families and [`Channel`] the noisy ones;
//! [`Operation`] holds either.

use std::fmt;
use crate::{
    adjoint::View,
    block,
    channel::{ self, Mixture },
    config::OpConfig,
    error::QuditResult,
    linalg::Matrix,
    ops,
};

/// Register dimensions an operation acts on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A single register of the given dimension.
    One(usize),
    /// Two registers, in order.
    Two(usize, usize),
}

impl Shape {
    /// Return the dimensions as a list.
    pub fn dims(&self) -> Vec<usize> {
        match *self {
            Self::One(d) => vec![d],
            Self::Two(m, n) => vec![m, n],
        }
    }

    /// Return the number of registers.
    pub fn num_registers(&self) -> usize {
        match self {
            Self::One(_) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Return the dimension of the joint space, i.e. the side length of the
    /// operation's matrices.
    pub fn total_dim(&self) -> usize { self.dims().into_iter().product() }
}

/// Text annotation for diagram rendering, one token per register.
///
/// Two-register channels repeat their token on both wires.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    One(String),
    Two(String, String),
}

impl Label {
    /// Return the per-register tokens.
    pub fn wires(&self) -> Vec<&str> {
        match self {
            Self::One(a) => vec![a.as_str()],
            Self::Two(a, b) => vec![a.as_str(), b.as_str()],
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(a) => write!(f, "{}", a),
            Self::Two(a, b) => write!(f, "{}, {}", a, b),
        }
    }
}

/// What an operation does when materialized.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    /// A deterministic unitary.
    Unitary(Matrix),
    /// A probabilistic mixture of unitaries.
    Mixture(Mixture),
}

impl Action {
    /// Return `true` if `self` is `Unitary`.
    pub fn is_unitary(&self) -> bool { matches!(self, Self::Unitary(_)) }

    /// Return `true` if `self` is `Mixture`.
    pub fn is_mixture(&self) -> bool { matches!(self, Self::Mixture(_)) }
}

/// Capabilities every gate or channel exposes to a hosting framework.
pub trait QuditOperation {
    /// Return the register dimensions acted on.
    fn shape(&self) -> Shape;

    /// Return the diagram label.
    fn label(&self) -> Label;

    /// Return `true` if the operation is a single unitary.
    fn has_unitary(&self) -> bool;

    /// Return `true` if the operation is a probabilistic mixture.
    fn has_mixture(&self) -> bool { !self.has_unitary() }

    /// Materialize the operation under `cfg`.
    fn action_with(&self, cfg: &OpConfig) -> QuditResult<Action>;

    /// Materialize the operation with the default configuration.
    fn action(&self) -> QuditResult<Action> {
        self.action_with(&OpConfig::default())
    }
}

/// A deterministic qudit gate.
///
/// Parameters are checked when the gate is materialized, not when it is
/// constructed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Gate {
    /// `d×d` identity.
    Id { d: usize },
    /// Generalized X, [`ops::shift`].
    Shift { d: usize, a: usize, view: View },
    /// Generalized Z, [`ops::clock`].
    Phase { d: usize, b: usize, view: View },
    /// Quadratic phase, [`ops::quadratic_phase`].
    QuadPhase { d: usize, gamma: i64, view: View },
    /// Multiplication, [`ops::multiplication`].
    Mul { d: usize, g: usize, view: View },
    /// Fourier transform, [`ops::qft`].
    Qft { d: usize, view: View },
    /// Generalized Y, [`ops::y`].
    Y { d: usize, a: usize, b: usize, view: View },
    /// Conditional sum, [`block::sum`].
    Sum { m: usize, n: usize, view: View },
    /// Conditional difference, [`block::min`].
    Min { m: usize, n: usize, view: View },
    /// Controlled shift, [`block::cshift`].
    CShift { m: usize, n: usize, view: View },
}

impl Gate {
    /// Create an identity gate.
    pub fn id(d: usize) -> Self { Self::Id { d } }

    /// Create a shift gate.
    pub fn shift(d: usize, a: usize) -> Self {
        Self::Shift { d, a, view: View::Plain }
    }

    /// Create a phase (clock) gate.
    pub fn phase(d: usize, b: usize) -> Self {
        Self::Phase { d, b, view: View::Plain }
    }

    /// Create a quadratic phase gate.
    pub fn quad_phase(d: usize, gamma: i64) -> Self {
        Self::QuadPhase { d, gamma, view: View::Plain }
    }

    /// Create a multiplication gate.
    pub fn mul(d: usize, g: usize) -> Self {
        Self::Mul { d, g, view: View::Plain }
    }

    /// Create a Fourier transform gate.
    pub fn qft(d: usize) -> Self { Self::Qft { d, view: View::Plain } }

    /// Create a Y gate.
    pub fn y(d: usize, a: usize, b: usize) -> Self {
        Self::Y { d, a, b, view: View::Plain }
    }

    /// Create a SUM gate with control size `m` and target size `n`.
    pub fn sum(m: usize, n: usize) -> Self {
        Self::Sum { m, n, view: View::Plain }
    }

    /// Create a MIN gate with control size `m` and target size `n`.
    pub fn min(m: usize, n: usize) -> Self {
        Self::Min { m, n, view: View::Plain }
    }

    /// Create a controlled-shift gate with control size `m` and target size
    /// `n`.
    pub fn cshift(m: usize, n: usize) -> Self {
        Self::CShift { m, n, view: View::Plain }
    }

    /// Return the view the gate is materialized through.
    pub fn view(&self) -> View {
        match *self {
            Self::Id { .. } => View::Plain,
            Self::Shift { view, .. }
            | Self::Phase { view, .. }
            | Self::QuadPhase { view, .. }
            | Self::Mul { view, .. }
            | Self::Qft { view, .. }
            | Self::Y { view, .. }
            | Self::Sum { view, .. }
            | Self::Min { view, .. }
            | Self::CShift { view, .. } => view,
        }
    }

    /// Return a copy of `self` materialized through `new_view` instead.
    ///
    /// The identity has only one view and is returned unchanged.
    pub fn with_view(mut self, new_view: View) -> Self {
        match &mut self {
            Self::Id { .. } => { },
            Self::Shift { view, .. }
            | Self::Phase { view, .. }
            | Self::QuadPhase { view, .. }
            | Self::Mul { view, .. }
            | Self::Qft { view, .. }
            | Self::Y { view, .. }
            | Self::Sum { view, .. }
            | Self::Min { view, .. }
            | Self::CShift { view, .. } => { *view = new_view; },
        }
        self
    }

    /// Return the conjugate-transpose variant of `self`.
    pub fn dagger(self) -> Self { self.with_view(View::Dagger) }

    /// Return the numeric-inverse variant of `self`.
    pub fn inverse(self) -> Self { self.with_view(View::Inverse) }

    /// Return the adjoint of `self`.
    pub fn adjoint(self) -> Self {
        let view = self.view().adjoint();
        self.with_view(view)
    }

    /// Return `true` if `self` acts on two registers.
    pub fn is_two_register(&self) -> bool {
        matches!(self, Self::Sum { .. } | Self::Min { .. } | Self::CShift { .. })
    }

    // the operator before any adjoint or inverse is taken
    fn base_matrix(&self) -> QuditResult<Matrix> {
        match *self {
            Self::Id { d } => Ok(ops::identity(d)),
            Self::Shift { d, a, .. } => ops::shift(d, a),
            Self::Phase { d, b, .. } => ops::clock(d, b),
            Self::QuadPhase { d, gamma, .. } => ops::quadratic_phase(d, gamma),
            Self::Mul { d, g, .. } => ops::multiplication(d, g),
            Self::Qft { d, .. } => ops::qft(d),
            Self::Y { d, a, b, .. } => ops::y(d, a, b),
            Self::Sum { m, n, .. } => block::sum(m, n),
            Self::Min { m, n, .. } => block::min(m, n),
            Self::CShift { m, n, .. } => block::cshift(m, n),
        }
    }

    /// Return the unitary matrix of `self` under `cfg`.
    pub fn unitary_with(&self, cfg: &OpConfig) -> QuditResult<Matrix> {
        let mut mat = self.view().apply(self.base_matrix()?)?;
        cfg.precision.apply(&mut mat);
        Ok(mat)
    }

    /// Return the unitary matrix of `self` in double precision.
    pub fn unitary(&self) -> QuditResult<Matrix> {
        self.unitary_with(&OpConfig::default())
    }
}

impl QuditOperation for Gate {
    fn shape(&self) -> Shape {
        match *self {
            Self::Id { d }
            | Self::Shift { d, .. }
            | Self::Phase { d, .. }
            | Self::QuadPhase { d, .. }
            | Self::Mul { d, .. }
            | Self::Qft { d, .. }
            | Self::Y { d, .. } => Shape::One(d),
            Self::Sum { m, n, .. }
            | Self::Min { m, n, .. }
            | Self::CShift { m, n, .. } => Shape::Two(m, n),
        }
    }

    fn label(&self) -> Label {
        use View::*;
        let one = |s: String| Label::One(s);
        let two = |s: &str| Label::Two("o".to_string(), s.to_string());
        match *self {
            Self::Id { .. } => one("[I]".to_string()),
            Self::Shift { a, view, .. } => match view {
                Plain => one(format!("[X({})]", a)),
                Dagger => one(format!("[X*({})]", a)),
                Inverse => one(format!("[X-({})]", a)),
            },
            Self::Phase { b, view, .. } => match view {
                Plain => one(format!("[Z({})]", b)),
                Dagger => one(format!("[Z*({})]", b)),
                Inverse => one(format!("[Z-({})]", b)),
            },
            Self::QuadPhase { view, .. } => match view {
                Plain => one("[Pγ]".to_string()),
                Dagger | Inverse => one("[Pγ-]".to_string()),
            },
            Self::Mul { g, view, .. } => match view {
                Plain => one(format!("[x{}]", g)),
                Dagger | Inverse => one(format!("[x{}-]", g)),
            },
            Self::Qft { view, .. } => match view {
                Plain => one("[F]".to_string()),
                Dagger => one("[F*]".to_string()),
                Inverse => one("[F-]".to_string()),
            },
            Self::Y { a, b, view, .. } => match view {
                Plain => one(format!("[Y(({}, {}))]", a, b)),
                Dagger => one(format!("[Y*(({}, {}))]", a, b)),
                Inverse => one(format!("[Y-(({}, {}))]", a, b)),
            },
            Self::Sum { view, .. } => match view {
                Plain => two("[+]"),
                Dagger => two("[+*]"),
                Inverse => two("[-]"),
            },
            Self::Min { view, .. } => match view {
                Plain => two("[-]"),
                Dagger => two("[-*]"),
                Inverse => two("[-]-"),
            },
            Self::CShift { view, .. } => match view {
                Plain => two("[+]"),
                Dagger => two("[+*]"),
                Inverse => two("[+]-"),
            },
        }
    }

    fn has_unitary(&self) -> bool { true }

    fn action_with(&self, cfg: &OpConfig) -> QuditResult<Action> {
        self.unitary_with(cfg).map(Action::Unitary)
    }
}

/// A probabilistic error channel.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Channel {
    /// [`channel::bit_flip`].
    BitFlip { p: f64, d: usize },
    /// [`channel::depolarizing`].
    Depolarizing { p: f64, d: usize },
    /// [`channel::depolarizing_two`].
    DepolarizingTwo { p: f64, d: usize },
}

impl Channel {
    /// Create a bit-flip channel.
    pub fn bit_flip(p: f64, d: usize) -> Self { Self::BitFlip { p, d } }

    /// Create a one-register depolarizing channel.
    pub fn depolarizing(p: f64, d: usize) -> Self { Self::Depolarizing { p, d } }

    /// Create a two-register depolarizing channel.
    pub fn depolarizing_two(p: f64, d: usize) -> Self {
        Self::DepolarizingTwo { p, d }
    }

    /// Return the error probability.
    pub fn p(&self) -> f64 {
        match *self {
            Self::BitFlip { p, .. }
            | Self::Depolarizing { p, .. }
            | Self::DepolarizingTwo { p, .. } => p,
        }
    }

    /// Return the mixture of `self` under `cfg`.
    pub fn mixture_with(&self, cfg: &OpConfig) -> QuditResult<Mixture> {
        let mut mix =
            match *self {
                Self::BitFlip { p, d } => channel::bit_flip(p, d),
                Self::Depolarizing { p, d } => channel::depolarizing(p, d),
                Self::DepolarizingTwo { p, d } => channel::depolarizing_two(p, d),
            }?;
        mix.apply_precision(cfg.precision);
        Ok(mix)
    }

    /// Return the mixture of `self` in double precision.
    pub fn mixture(&self) -> QuditResult<Mixture> {
        self.mixture_with(&OpConfig::default())
    }
}

// shortest round-trip text for `p`, with scientific notation below 1e-4 and a
// signed, two-digit exponent (`1e-05`, `2.5e-07`)
fn prob_text(p: f64) -> String {
    let a = p.abs();
    if a != 0.0 && a.is_finite() && !(1e-4..1e16).contains(&a) {
        let sci = format!("{:e}", p);
        match sci.split_once('e') {
            Some((mant, exp)) => {
                let exp: i32 = exp.parse().unwrap_or(0);
                let sign = if exp < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mant, sign, exp.abs())
            },
            None => sci,
        }
    } else {
        format!("{:?}", p)
    }
}

impl QuditOperation for Channel {
    fn shape(&self) -> Shape {
        match *self {
            Self::BitFlip { d, .. } | Self::Depolarizing { d, .. } => Shape::One(d),
            Self::DepolarizingTwo { d, .. } => Shape::Two(d, d),
        }
    }

    fn label(&self) -> Label {
        match *self {
            Self::BitFlip { p, .. } => Label::One(format!("BFd({})", prob_text(p))),
            Self::Depolarizing { p, .. } => Label::One(format!("D({})", prob_text(p))),
            Self::DepolarizingTwo { p, .. } => {
                let tok = format!("D2({})", prob_text(p));
                Label::Two(tok.clone(), tok)
            },
        }
    }

    fn has_unitary(&self) -> bool { false }

    fn action_with(&self, cfg: &OpConfig) -> QuditResult<Action> {
        self.mixture_with(cfg).map(Action::Mixture)
    }
}

/// Either a [`Gate`] or a [`Channel`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Operation {
    Gate(Gate),
    Channel(Channel),
}

impl Operation {
    /// Return `true` if `self` is `Gate`.
    pub fn is_gate(&self) -> bool { matches!(self, Self::Gate(_)) }

    /// Return `true` if `self` is `Channel`.
    pub fn is_channel(&self) -> bool { matches!(self, Self::Channel(_)) }
}

impl From<Gate> for Operation {
    fn from(gate: Gate) -> Self { Self::Gate(gate) }
}

impl From<Channel> for Operation {
    fn from(chan: Channel) -> Self { Self::Channel(chan) }
}

impl QuditOperation for Operation {
    fn shape(&self) -> Shape {
        match self {
            Self::Gate(g) => g.shape(),
            Self::Channel(c) => c.shape(),
        }
    }

    fn label(&self) -> Label {
        match self {
            Self::Gate(g) => g.label(),
            Self::Channel(c) => c.label(),
        }
    }

    fn has_unitary(&self) -> bool {
        match self {
            Self::Gate(g) => g.has_unitary(),
            Self::Channel(c) => c.has_unitary(),
        }
    }

    fn action_with(&self, cfg: &OpConfig) -> QuditResult<Action> {
        match self {
            Self::Gate(g) => g.action_with(cfg),
            Self::Channel(c) => c.action_with(cfg),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        config::{ Precision, Tolerance },
        error::QuditError,
        linalg::{ self, approx_eq, is_unitary },
    };
    use super::*;

    fn all_gates(d: usize) -> Vec<Gate> {
        vec![
            Gate::id(d),
            Gate::shift(d, 1),
            Gate::phase(d, d - 1),
            Gate::quad_phase(d, 1),
            Gate::mul(d, d - 1),
            Gate::qft(d),
            Gate::y(d, 1, 1),
            Gate::sum(d, d),
            Gate::min(2, d),
            Gate::cshift(d, 2),
        ]
    }

    #[test]
    fn shapes() {
        assert_eq!(Gate::shift(3, 1).shape(), Shape::One(3));
        assert_eq!(Gate::sum(2, 5).shape(), Shape::Two(2, 5));
        assert_eq!(Gate::sum(2, 5).shape().total_dim(), 10);
        assert_eq!(Channel::depolarizing_two(0.1, 3).shape(), Shape::Two(3, 3));
        assert_eq!(Channel::bit_flip(0.1, 4).shape().dims(), vec![4]);
        for d in 2..5 {
            for gate in all_gates(d) {
                let n = gate.shape().total_dim();
                assert_eq!(gate.unitary().unwrap().dim(), (n, n));
                assert_eq!(gate.is_two_register(), gate.shape().num_registers() == 2);
            }
        }
    }

    #[test]
    fn labels() {
        assert_eq!(Gate::shift(3, 2).label().to_string(), "[X(2)]");
        assert_eq!(Gate::shift(3, 2).dagger().label().to_string(), "[X*(2)]");
        assert_eq!(Gate::phase(3, 1).dagger().label().to_string(), "[Z*(1)]");
        assert_eq!(Gate::quad_phase(3, 1).label().to_string(), "[Pγ]");
        assert_eq!(Gate::mul(5, 2).inverse().label().to_string(), "[x2-]");
        assert_eq!(Gate::qft(3).inverse().label().to_string(), "[F-]");
        assert_eq!(Gate::qft(3).dagger().label().to_string(), "[F*]");
        assert_eq!(Gate::y(3, 1, 2).label().to_string(), "[Y((1, 2))]");
        assert_eq!(Gate::id(3).label().to_string(), "[I]");
        assert_eq!(Gate::sum(2, 2).label().wires(), vec!["o", "[+]"]);
        assert_eq!(Gate::sum(2, 2).inverse().label().wires(), vec!["o", "[-]"]);
        assert_eq!(Gate::sum(2, 2).dagger().label().wires(), vec!["o", "[+*]"]);
        assert_eq!(Gate::min(2, 2).label().wires(), vec!["o", "[-]"]);
        assert_eq!(Channel::depolarizing(0.3, 3).label().to_string(), "D(0.3)");
        assert_eq!(Channel::bit_flip(0.25, 3).label().to_string(), "BFd(0.25)");
    }

    #[test]
    fn channel_label_wires() {
        for chan in [
            Channel::bit_flip(0.1, 3),
            Channel::depolarizing(0.1, 3),
            Channel::depolarizing_two(0.1, 3),
        ] {
            assert_eq!(chan.label().wires().len(), chan.shape().num_registers());
        }
        assert_eq!(
            Channel::depolarizing_two(1.0, 3).label().wires(),
            vec!["D2(1.0)", "D2(1.0)"],
        );
    }

    #[test]
    fn channel_label_numbers() {
        let text = |p: f64| Channel::depolarizing(p, 2).label().to_string();
        assert_eq!(text(0.0), "D(0.0)");
        assert_eq!(text(1.0), "D(1.0)");
        assert_eq!(text(0.0001), "D(0.0001)");
        assert_eq!(text(1e-5), "D(1e-05)");
        assert_eq!(text(2.5e-7), "D(2.5e-07)");
        assert_eq!(text(1e-123), "D(1e-123)");
        assert_eq!(Channel::bit_flip(3e-6, 2).label().to_string(), "BFd(3e-06)");
    }

    #[test]
    fn gate_unitarity() {
        let tol = Tolerance::default();
        for d in 2..6 {
            for gate in all_gates(d) {
                for g in [gate, gate.dagger(), gate.inverse()] {
                    assert!(is_unitary(&g.unitary().unwrap(), tol), "{:?}", g);
                }
            }
        }
    }

    #[test]
    fn adjoint_round_trip() {
        for gate in all_gates(4) {
            let m = gate.unitary().unwrap();
            let back = gate.dagger().adjoint().unitary().unwrap();
            assert_eq!(back, m);
            let dag = gate.adjoint().unitary().unwrap();
            assert_eq!(dag, linalg::dagger(&m));
        }
    }

    #[test]
    fn y_dagger_is_direct_conjugate_transpose() {
        let ydag = Gate::y(3, 1, 2).dagger().unitary().unwrap();
        let y = ops::y(3, 1, 2).unwrap();
        assert_eq!(ydag, linalg::dagger(&y));
        let reversed =
            linalg::dagger(&ops::clock(3, 2).unwrap())
            .dot(&linalg::dagger(&ops::shift(3, 1).unwrap()));
        assert!(approx_eq(&ydag, &reversed, Tolerance::default()));
    }

    #[test]
    fn precision_config() {
        let single = OpConfig::default().with_precision(Precision::Single);
        let q64 = Gate::qft(3).unitary().unwrap();
        let q32 = Gate::qft(3).unitary_with(&single).unwrap();
        assert_ne!(q64, q32);
        assert!(approx_eq(&q64, &q32, Tolerance(1e-6)));
        let mix = Channel::depolarizing(0.1, 3).mixture_with(&single).unwrap();
        assert!(mix.iter().all(|(_, op)| op.iter().all(|z| z.re == (z.re as f32) as f64)));
    }

    #[test]
    fn errors_surface_on_materialize() {
        assert!(matches!(Gate::shift(1, 1).unitary(), Err(QuditError::ShiftDimension(1))));
        assert!(matches!(Gate::mul(4, 4).unitary(), Err(QuditError::Multiplier { .. })));
        assert!(matches!(Gate::mul(4, 2).inverse().unitary(), Err(QuditError::Singular)));
        assert!(matches!(Gate::sum(0, 3).action(), Err(QuditError::BlockDimension { .. })));
        assert!(matches!(Channel::bit_flip(2.0, 3).action(), Err(QuditError::Probability(..))));
    }

    #[test]
    fn operation_dispatch() {
        let ops: Vec<Operation> = vec![
            Gate::qft(3).into(),
            Channel::depolarizing(0.2, 2).into(),
            Channel::depolarizing_two(0.2, 2).into(),
        ];
        assert!(ops[0].is_gate() && ops[0].has_unitary() && !ops[0].has_mixture());
        assert!(ops[1].is_channel() && ops[1].has_mixture());
        let tol = Tolerance::default();
        for op in ops.iter() {
            match op.action().unwrap() {
                Action::Unitary(m) => assert!(is_unitary(&m, tol)),
                Action::Mixture(mix) => {
                    assert!(mix.is_normalized(tol));
                    let n = op.shape().total_dim();
                    assert!(mix.iter().all(|(_, m)| m.dim() == (n, n)));
                },
            }
        }
        assert_eq!(Channel::depolarizing(0.2, 2).p(), 0.2);
    }
}
