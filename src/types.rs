//! Core types shared by the kernels, the routers and the batch evaluator.

use thiserror::Error;

/// Scaling option for the Airy functions.
///
/// The `Exponential` variant returns `factor · f(x)`, where factor is:
/// - Ai, Ai': `exp(ζ)` for `x > 0`, 1 otherwise
/// - Bi, Bi': `exp(-ζ)` for `x > 0`, 1 otherwise
///
/// with `ζ = (2/3) · x^{3/2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scaling {
    /// No scaling applied.
    Unscaled,
    /// Exponential scaling to prevent overflow/underflow.
    Exponential,
}

/// Selects Airy function value or its derivative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiryDerivative {
    /// Ai(x) or Bi(x).
    Value,
    /// Ai'(x) or Bi'(x).
    Derivative,
}

/// Selects the Airy function of the first (Ai) or second (Bi) kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AiryKind {
    /// Ai, recessive as x → +∞.
    Ai,
    /// Bi, dominant as x → +∞.
    Bi,
}

/// Order of a Debye function, restricted to 1..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebyeOrder {
    One,
    Two,
    Three,
    Four,
    Five,
    Six,
}

impl DebyeOrder {
    /// All supported orders, lowest first.
    pub const ALL: [DebyeOrder; 6] = [
        DebyeOrder::One,
        DebyeOrder::Two,
        DebyeOrder::Three,
        DebyeOrder::Four,
        DebyeOrder::Five,
        DebyeOrder::Six,
    ];

    /// The order as an integer.
    #[inline]
    pub fn get(self) -> u32 {
        match self {
            DebyeOrder::One => 1,
            DebyeOrder::Two => 2,
            DebyeOrder::Three => 3,
            DebyeOrder::Four => 4,
            DebyeOrder::Five => 5,
            DebyeOrder::Six => 6,
        }
    }
}

impl TryFrom<u32> for DebyeOrder {
    type Error = Error;

    fn try_from(order: u32) -> Result<Self> {
        match order {
            1 => Ok(DebyeOrder::One),
            2 => Ok(DebyeOrder::Two),
            3 => Ok(DebyeOrder::Three),
            4 => Ok(DebyeOrder::Four),
            5 => Ok(DebyeOrder::Five),
            6 => Ok(DebyeOrder::Six),
            _ => Err(Error::InvalidOrder(order)),
        }
    }
}

/// Real-valued functions reachable through [`evaluate_batch`](crate::evaluate_batch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealFunction {
    AiryAi,
    AiryAiScaled,
    AiryAiDeriv,
    AiryAiDerivScaled,
    AiryBi,
    AiryBiScaled,
    AiryBiDeriv,
    AiryBiDerivScaled,
    /// s-th zero of Ai; input elements are zero indices.
    AiryZeroAi,
    /// s-th zero of Ai'.
    AiryZeroAiDeriv,
    /// s-th zero of Bi.
    AiryZeroBi,
    /// s-th zero of Bi'.
    AiryZeroBiDeriv,
    Clausen,
    /// Debye function of order [`EvalContext::order`].
    Debye,
    /// Real part of the dilogarithm on the real line.
    Dilog,
}

/// Complex-valued functions reachable through
/// [`evaluate_complex_batch`](crate::evaluate_complex_batch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplexFunction {
    /// Principal branch of the natural logarithm.
    Log,
    /// Dilogarithm Li₂(z).
    Dilog,
}

/// Configuration of a single batch call.
///
/// Built per call and consumed by the batch evaluator; nothing in it is
/// retained afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalContext {
    /// Split large batches across worker threads.
    pub threaded: bool,
    /// Debye order, only read by [`RealFunction::Debye`].
    pub order: u32,
    /// Minimum batch length that is split across workers.
    pub parallel_threshold: usize,
}

impl EvalContext {
    /// Default minimum batch length for parallel evaluation.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

    pub fn new() -> Self {
        EvalContext {
            threaded: true,
            order: 1,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    pub fn threaded(mut self, threaded: bool) -> Self {
        self.threaded = threaded;
        self
    }

    pub fn order(mut self, order: u32) -> Self {
        self.order = order;
        self
    }

    pub fn parallel_threshold(mut self, len: usize) -> Self {
        self.parallel_threshold = len;
        self
    }
}

impl Default for EvalContext {
    fn default() -> Self {
        EvalContext::new()
    }
}

/// Error type for invalid call configuration.
///
/// Mathematically undefined inputs never produce an error; they evaluate
/// to NaN element by element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Error {
    /// Debye order outside 1..=6.
    #[error("invalid Debye order {0}: must be between 1 and 6")]
    InvalidOrder(u32),
    /// Split real/imaginary (or modulus/argument) inputs of different lengths.
    #[error("length mismatch: {left} elements vs {right} elements")]
    LengthMismatch {
        /// Length of the first component slice.
        left: usize,
        /// Length of the second component slice.
        right: usize,
    },
}

/// Result alias using this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;
