//! Special functions in double precision with batch evaluation.
//!
//! This crate provides:
//!
//! - Airy functions Ai, Bi and their derivatives, unscaled and exponentially
//!   scaled, plus the zeros of Ai, Ai', Bi and Bi'
//! - the Clausen function Cl₂
//! - Debye functions D₁ through D₆
//! - the dilogarithm Li₂ on the real line and in the complex plane
//! - the principal branch of the complex logarithm
//!
//! Every function is available as a scalar call and through the batch
//! evaluator ([`evaluate_batch`] and friends), which maps the same kernel over
//! a slice and splits large slices across the rayon thread pool.
//!
//! # Domain errors
//!
//! Mathematically undefined inputs evaluate to NaN; they never fail a call
//! or a batch. Only an invalid configuration (a Debye order outside 1..=6,
//! split inputs of unequal length) is reported as an [`Error`].
//!
//! # Quick start
//!
//! ```
//! use scify::{airy_ai, clausen, dilog, EvalContext, RealFunction, evaluate_batch};
//!
//! assert!((airy_ai(0.42) - 0.250046304012225).abs() < 1e-14);
//! assert!((dilog(1.0) - std::f64::consts::PI.powi(2) / 6.0).abs() < 1e-15);
//! assert!(clausen(0.0) == 0.0);
//!
//! let ctx = EvalContext::new().order(3);
//! let d3 = evaluate_batch(RealFunction::Debye, &[0.5, 1.0, 2.0], &ctx).unwrap();
//! assert_eq!(d3.len(), 3);
//! ```
//!
//! # Cargo features
//!
//! - `rayon` (default): parallel batch evaluation. Without it the
//!   [`EvalContext::threaded`] flag is accepted and ignored.

pub mod machine;
pub mod types;

mod airy;
mod airy_zero;
mod algo;
mod batch;
mod clausen;
mod debye;
mod dilog;
mod log;
mod scaling;
mod utils;

pub use batch::{evaluate_batch, evaluate_complex_batch, evaluate_dilog_polar, evaluate_split_batch};
pub use num_complex::Complex64;
pub use types::{
    AiryDerivative, AiryKind, ComplexFunction, DebyeOrder, Error, EvalContext, RealFunction,
    Result, Scaling,
};

// ── Airy functions ──

/// Airy function selected by kind, derivative and scaling.
///
/// With [`Scaling::Exponential`] and `x > 0` the Ai family is multiplied by
/// `exp(ζ)` and the Bi family by `exp(−ζ)`, `ζ = ⅔x^{3/2}`. For `x ≤ 0` both
/// scalings return the same value.
#[inline]
pub fn airy(kind: AiryKind, deriv: AiryDerivative, scaling: Scaling, x: f64) -> f64 {
    airy::airy_eval(kind, deriv, scaling, x)
}

/// Ai(x).
pub fn airy_ai(x: f64) -> f64 {
    airy(AiryKind::Ai, AiryDerivative::Value, Scaling::Unscaled, x)
}

/// exp(ζ)·Ai(x) for x > 0, Ai(x) otherwise.
pub fn airy_ai_scaled(x: f64) -> f64 {
    airy(AiryKind::Ai, AiryDerivative::Value, Scaling::Exponential, x)
}

/// Ai'(x).
pub fn airy_ai_deriv(x: f64) -> f64 {
    airy(AiryKind::Ai, AiryDerivative::Derivative, Scaling::Unscaled, x)
}

/// exp(ζ)·Ai'(x) for x > 0, Ai'(x) otherwise.
pub fn airy_ai_deriv_scaled(x: f64) -> f64 {
    airy(AiryKind::Ai, AiryDerivative::Derivative, Scaling::Exponential, x)
}

/// Bi(x).
pub fn airy_bi(x: f64) -> f64 {
    airy(AiryKind::Bi, AiryDerivative::Value, Scaling::Unscaled, x)
}

/// exp(−ζ)·Bi(x) for x > 0, Bi(x) otherwise.
pub fn airy_bi_scaled(x: f64) -> f64 {
    airy(AiryKind::Bi, AiryDerivative::Value, Scaling::Exponential, x)
}

/// Bi'(x).
pub fn airy_bi_deriv(x: f64) -> f64 {
    airy(AiryKind::Bi, AiryDerivative::Derivative, Scaling::Unscaled, x)
}

/// exp(−ζ)·Bi'(x) for x > 0, Bi'(x) otherwise.
pub fn airy_bi_deriv_scaled(x: f64) -> f64 {
    airy(AiryKind::Bi, AiryDerivative::Derivative, Scaling::Exponential, x)
}

// ── Airy zeros ──

/// s-th zero of Ai, counting from s = 1. `s = 0` yields NaN.
///
/// ```
/// assert!((scify::airy_zero_ai(1) + 2.338107410459767).abs() < 1e-14);
/// ```
pub fn airy_zero_ai(s: u32) -> f64 {
    airy_zero::airy_zero(AiryKind::Ai, AiryDerivative::Value, s as f64)
}

/// s-th zero of Ai'.
pub fn airy_zero_ai_deriv(s: u32) -> f64 {
    airy_zero::airy_zero(AiryKind::Ai, AiryDerivative::Derivative, s as f64)
}

/// s-th zero of Bi.
pub fn airy_zero_bi(s: u32) -> f64 {
    airy_zero::airy_zero(AiryKind::Bi, AiryDerivative::Value, s as f64)
}

/// s-th zero of Bi'.
pub fn airy_zero_bi_deriv(s: u32) -> f64 {
    airy_zero::airy_zero(AiryKind::Bi, AiryDerivative::Derivative, s as f64)
}

// ── Clausen ──

/// Clausen function Cl₂(x). Non-finite input yields NaN.
pub fn clausen(x: f64) -> f64 {
    clausen::clausen(x)
}

// ── Debye ──

/// Debye function of the given order. `x < 0` yields NaN.
pub fn debye(order: DebyeOrder, x: f64) -> f64 {
    debye::debye(order, x)
}

/// Debye function with the order given as an integer.
///
/// Fails with [`Error::InvalidOrder`] unless `1 <= order <= 6`.
///
/// ```
/// assert!(scify::debye_n(1.0, 7).is_err());
/// assert_eq!(scify::debye_n(1.0, 2).unwrap(), scify::debye_2(1.0));
/// ```
pub fn debye_n(x: f64, order: u32) -> Result<f64> {
    let order = DebyeOrder::try_from(order).map_err(|e| {
        tracing::debug!(order, "rejected Debye order");
        e
    })?;
    Ok(debye(order, x))
}

/// D₁(x).
pub fn debye_1(x: f64) -> f64 {
    debye(DebyeOrder::One, x)
}

/// D₂(x).
pub fn debye_2(x: f64) -> f64 {
    debye(DebyeOrder::Two, x)
}

/// D₃(x).
pub fn debye_3(x: f64) -> f64 {
    debye(DebyeOrder::Three, x)
}

/// D₄(x).
pub fn debye_4(x: f64) -> f64 {
    debye(DebyeOrder::Four, x)
}

/// D₅(x).
pub fn debye_5(x: f64) -> f64 {
    debye(DebyeOrder::Five, x)
}

/// D₆(x).
pub fn debye_6(x: f64) -> f64 {
    debye(DebyeOrder::Six, x)
}

// ── Dilogarithm ──

/// Real part of Li₂(x) for real x.
pub fn dilog(x: f64) -> f64 {
    dilog::dilog(x)
}

/// Imaginary part of Li₂(x) on the real line: `−π ln x` for `x > 1`, else 0.
pub fn dilog_imag(x: f64) -> f64 {
    dilog::dilog_imag(x)
}

/// Li₂(z) for `z = r·e^{iθ}`, principal branch.
pub fn dilog_complex(r: f64, theta: f64) -> Complex64 {
    dilog::dilog_polar(r, theta)
}

// ── Logarithm ──

/// Principal complex logarithm, `arg ∈ (−π, π]`. `log(0)` is NaN + NaN·i.
pub fn complex_log(z: Complex64) -> Complex64 {
    log::complex_log(z)
}
