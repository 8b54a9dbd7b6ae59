use thiserror::Error;

/// Precondition violations raised while constructing operators, labels, or
/// mixtures.
///
/// Nothing is ever clamped or defaulted: every bad parameter surfaces as one of
/// these variants and no partial matrix is returned.
#[derive(Debug, Error)]
pub enum QuditError {
    /// `shift-family operators require dimension d >= 2`
    #[error("shift-family operators require dimension d >= 2; got {0}")]
    ShiftDimension(usize),

    /// `phase-family operators require dimension d >= 1`
    #[error("phase-family operators require dimension d >= 1; got {0}")]
    PhaseDimension(usize),

    /// `shift amount must satisfy 0 < a <= d`
    #[error("shift amount must satisfy 0 < a <= d; got a = {a}, d = {d}")]
    ShiftAmount { a: usize, d: usize },

    /// `root-of-unity index must satisfy 0 < b <= d`
    #[error("root-of-unity index must satisfy 0 < b <= d; got b = {b}, d = {d}")]
    RootIndex { b: usize, d: usize },

    /// `multiplier must satisfy 1 <= g < d`
    #[error("multiplier must satisfy 1 <= g < d; got g = {g}, d = {d}")]
    Multiplier { g: usize, d: usize },

    /// `block gate registers must both have size >= 1`
    #[error("block gate registers must both have size >= 1; got m = {m}, n = {n}")]
    BlockDimension { m: usize, n: usize },

    /// `channel probability must lie in [0, 1]`
    #[error("channel probability must lie in [0, 1]; got {0}")]
    Probability(f64),

    /// `pauli label part has the wrong length for its leading letter`
    #[error("invalid length for label part '{part}': expected {expected}")]
    LabelLength { part: String, expected: usize },

    /// `pauli label part starts with an unrecognized letter`
    #[error("unexpected letter '{letter}' in label part '{part}'")]
    LabelLetter { letter: char, part: String },

    /// `pauli label part contains a non-digit where a subscript was expected`
    #[error("expected a decimal digit in label part '{0}'")]
    LabelDigit(String),

    /// `pauli label part targets a register other than 0 or 1`
    #[error("unexpected register index {reg} in label part '{part}'")]
    LabelRegister { reg: usize, part: String },

    /// `two-register label must have one or two parts`
    #[error("unexpected number of parts ({count}) in label '{label}'")]
    LabelPartCount { count: usize, label: String },

    /// `both parts of a two-register label target the same register`
    #[error("both parts of label '{label}' target register {reg}")]
    LabelDuplicateRegister { reg: usize, label: String },

    /// `numeric inverse requested for a singular matrix`
    #[error("matrix is singular and has no numeric inverse")]
    Singular,
}
pub type QuditResult<T> = Result<T, QuditError>;
