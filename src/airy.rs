//! Airy functions Ai(x), Bi(x) and their derivatives on the real line.
//!
//! The real axis is split into five regions, each served by one kernel from
//! [`crate::algo`]:
//!
//! | region              | kernel                              | native scaling |
//! |---------------------|-------------------------------------|----------------|
//! | `x < −10`           | oscillatory asymptotic expansion    | unscaled       |
//! | `−10 ≤ x < −2.1`    | J, Y of order 1/3                   | unscaled       |
//! | `−2.1 ≤ x ≤ 1`      | Maclaurin series                    | unscaled       |
//! | `1 < x ≤ 10`        | K, I of order 1/3 and 2/3           | scaled         |
//! | `x > 10`            | exponential asymptotic expansion    | scaled         |
//!
//! Adjacent kernels agree to a few ulps at each boundary.

use crate::algo::airy_asym::{airy_asymptotic_negative, airy_asymptotic_positive};
use crate::algo::airy_series::airy_maclaurin;
use crate::algo::bessel::{airy_bessel_negative, airy_bessel_positive};
use crate::algo::AiryQuad;
use crate::scaling::rescale;
use crate::types::{AiryDerivative, AiryKind, Scaling};

const NEG_ASYMPTOTIC: f64 = -10.0;
const NEG_BESSEL: f64 = -2.1;
const SERIES_MAX: f64 = 1.0;
const POS_ASYMPTOTIC: f64 = 10.0;

/// All four of `(Ai, Ai', Bi, Bi')` at `x`, in the requested scaling.
pub(crate) fn airy_quad(x: f64, scaling: Scaling) -> AiryQuad {
    if x.is_nan() {
        return AiryQuad::NAN;
    }
    if x.is_infinite() {
        return airy_at_infinity(x, scaling);
    }

    let (q, native) = if x < NEG_ASYMPTOTIC {
        (airy_asymptotic_negative(x), Scaling::Unscaled)
    } else if x < NEG_BESSEL {
        (airy_bessel_negative(x), Scaling::Unscaled)
    } else if x <= SERIES_MAX {
        (airy_maclaurin(x), Scaling::Unscaled)
    } else if x <= POS_ASYMPTOTIC {
        (airy_bessel_positive(x), Scaling::Exponential)
    } else {
        (airy_asymptotic_positive(x), Scaling::Exponential)
    };
    rescale(x, q, native, scaling)
}

/// Limits at ±∞. On the negative side Ai and Bi decay like `|x|^{−1/4}` while
/// the derivatives oscillate with growing amplitude and have no limit.
fn airy_at_infinity(x: f64, scaling: Scaling) -> AiryQuad {
    if x < 0.0 {
        return AiryQuad {
            ai: 0.0,
            aip: f64::NAN,
            bi: 0.0,
            bip: f64::NAN,
        };
    }
    match scaling {
        Scaling::Unscaled => AiryQuad {
            ai: 0.0,
            aip: -0.0,
            bi: f64::INFINITY,
            bip: f64::INFINITY,
        },
        Scaling::Exponential => AiryQuad {
            ai: 0.0,
            aip: f64::NEG_INFINITY,
            bi: 0.0,
            bip: f64::INFINITY,
        },
    }
}

/// Select one member of the Airy family.
#[inline]
pub(crate) fn airy_eval(kind: AiryKind, deriv: AiryDerivative, scaling: Scaling, x: f64) -> f64 {
    let q = airy_quad(x, scaling);
    match (kind, deriv) {
        (AiryKind::Ai, AiryDerivative::Value) => q.ai,
        (AiryKind::Ai, AiryDerivative::Derivative) => q.aip,
        (AiryKind::Bi, AiryDerivative::Value) => q.bi,
        (AiryKind::Bi, AiryDerivative::Derivative) => q.bip,
    }
}
