//! Zeros of Ai, Ai', Bi and Bi' on the negative real axis.
//!
//! The s-th zero is seeded from the asymptotic forms (A&S 10.4.94–10.4.105)
//!   `a_s = −T(3π(4s−1)/8)`, `b_s = −T(3π(4s−3)/8)`,
//!   `a'_s = −U(3π(4s−3)/8)`, `b'_s = −U(3π(4s−1)/8)`,
//! and refined by a safeguarded Newton iteration. Beyond s = 100 the seed
//! alone is exact to double precision.

#![allow(clippy::excessive_precision)]

use crate::airy::airy_quad;
use crate::algo::constants::PI;
use crate::machine::tol;
use crate::types::{AiryDerivative, AiryKind, Scaling};

/// T(t) = t^{2/3} Σ T_k t^{−2k}
const T_COEF: [f64; 5] = [
    1.0,
    5.0 / 48.0,
    -5.0 / 36.0,
    77125.0 / 82944.0,
    -108056875.0 / 6967296.0,
];

/// U(t) = t^{2/3} Σ U_k t^{−2k}
const U_COEF: [f64; 5] = [
    1.0,
    -7.0 / 48.0,
    35.0 / 288.0,
    -181223.0 / 207360.0,
    18683371.0 / 1244160.0,
];

/// Indices above this return the seed unrefined.
const SEED_EXACT: f64 = 100.0;

const MAX_ITER: usize = 50;

/// Sum the T or U series while its terms keep shrinking.
fn seed_series(coef: &[f64; 5], t: f64) -> f64 {
    let r = 1.0 / (t * t);
    let mut sum = 0.0;
    let mut p = 1.0;
    let mut prev = f64::INFINITY;
    for &c in coef {
        let term = c * p;
        if term.abs() > prev {
            break;
        }
        sum += term;
        prev = term.abs();
        p *= r;
    }
    t.powf(2.0 / 3.0) * sum
}

fn seed(kind: AiryKind, deriv: AiryDerivative, s: f64) -> f64 {
    let (coef, m) = match (kind, deriv) {
        (AiryKind::Ai, AiryDerivative::Value) => (&T_COEF, 4.0 * s - 1.0),
        (AiryKind::Bi, AiryDerivative::Value) => (&T_COEF, 4.0 * s - 3.0),
        (AiryKind::Ai, AiryDerivative::Derivative) => (&U_COEF, 4.0 * s - 3.0),
        (AiryKind::Bi, AiryDerivative::Derivative) => (&U_COEF, 4.0 * s - 1.0),
    };
    -seed_series(coef, 3.0 * PI * m / 8.0)
}

/// `(f, f')` for the function whose zeros are sought.
/// The second derivatives come from the Airy equation `w'' = x·w`.
fn newton_pair(kind: AiryKind, deriv: AiryDerivative, x: f64) -> (f64, f64) {
    let q = airy_quad(x, Scaling::Unscaled);
    match (kind, deriv) {
        (AiryKind::Ai, AiryDerivative::Value) => (q.ai, q.aip),
        (AiryKind::Bi, AiryDerivative::Value) => (q.bi, q.bip),
        (AiryKind::Ai, AiryDerivative::Derivative) => (q.aip, x * q.ai),
        (AiryKind::Bi, AiryDerivative::Derivative) => (q.bip, x * q.bi),
    }
}

/// s-th zero (s = 1, 2, ...) of the selected Airy function.
///
/// `s` that is not a finite integer ≥ 1 yields NaN.
pub(crate) fn airy_zero(kind: AiryKind, deriv: AiryDerivative, s: f64) -> f64 {
    if !(s >= 1.0) || !s.is_finite() || s.fract() != 0.0 {
        return f64::NAN;
    }

    let x0 = seed(kind, deriv, s);
    if s > SEED_EXACT {
        return x0;
    }

    // Zeros are spaced roughly π/√|x| apart, so this bracket holds exactly
    // one of them around an accurate seed.
    let half = 0.4 * PI / x0.abs().sqrt();
    let mut lo = x0 - half;
    let mut hi = x0 + half;
    let lo_negative = newton_pair(kind, deriv, lo).0 < 0.0;

    let tol = 4.0 * tol();
    let mut x = x0;
    for _ in 0..MAX_ITER {
        let (f, df) = newton_pair(kind, deriv, x);
        if f == 0.0 {
            return x;
        }
        if (f < 0.0) == lo_negative {
            lo = x;
        } else {
            hi = x;
        }

        let mut next = x - f / df;
        if !(next > lo && next < hi) {
            next = 0.5 * (lo + hi);
        }
        if (next - x).abs() < tol * x.abs().max(1.0) {
            return next;
        }
        x = next;
    }

    tracing::debug!(
        ?kind,
        ?deriv,
        index = s,
        estimate = x,
        "airy zero refinement hit its iteration cap"
    );
    x
}
