//! Asymptotic expansions for |x| > 10 (DLMF 9.7.5–9.7.12).
//!
//! Coefficients follow
//!   `u_0 = v_0 = 1`,
//!   `u_k = u_{k−1} (6k−5)(6k−3)(6k−1) / ((2k−1) 216 k)`,
//!   `v_k = −(6k+1)/(6k−1) · u_k`.
//! The series are asymptotic, not convergent; for ζ ≥ 21 the terms shrink
//! below ε long before they start to grow again, so summation stops on size.

use super::constants::{INV_SQRT_PI, PI, TTH};
use super::AiryQuad;
use crate::machine::tol;

const MAX_TERMS: usize = 60;

/// Walk the `u_k r^k`, `v_k r^k` terms until both drop below ε, handing each
/// pair to `add` together with its index.
fn for_each_term(r: f64, mut add: impl FnMut(usize, f64, f64)) {
    let tol = tol();
    let mut u = 1.0;
    let mut p = 1.0;
    add(0, 1.0, 1.0);
    for k in 1..MAX_TERMS {
        let kf = k as f64;
        u *= (6.0 * kf - 5.0) * (6.0 * kf - 3.0) * (6.0 * kf - 1.0) / ((2.0 * kf - 1.0) * 216.0 * kf);
        let v = -(6.0 * kf + 1.0) / (6.0 * kf - 1.0) * u;
        p *= r;
        let tu = u * p;
        let tv = v * p;
        add(k, tu, tv);
        if tu.abs() < tol && tv.abs() < tol {
            break;
        }
    }
}

/// Scaled quadruple for `x > 10`: `e^{ζ}Ai, e^{ζ}Ai', e^{−ζ}Bi, e^{−ζ}Bi'`.
pub(crate) fn airy_asymptotic_positive(x: f64) -> AiryQuad {
    let x14 = x.sqrt().sqrt();
    let zeta = TTH * x * x.sqrt();

    let mut u_alt = 0.0;
    let mut u_sum = 0.0;
    let mut v_alt = 0.0;
    let mut v_sum = 0.0;
    for_each_term(1.0 / zeta, |k, tu, tv| {
        let s = if k % 2 == 0 { 1.0 } else { -1.0 };
        u_alt += s * tu;
        v_alt += s * tv;
        u_sum += tu;
        v_sum += tv;
    });

    AiryQuad {
        ai: 0.5 * INV_SQRT_PI / x14 * u_alt,
        aip: -0.5 * INV_SQRT_PI * x14 * v_alt,
        bi: INV_SQRT_PI / x14 * u_sum,
        bip: INV_SQRT_PI * x14 * v_sum,
    }
}

/// Oscillatory quadruple for `x < −10`.
pub(crate) fn airy_asymptotic_negative(x: f64) -> AiryQuad {
    let t = -x;
    let t14 = t.sqrt().sqrt();
    let zeta = TTH * t * t.sqrt();

    // Even-index terms feed P, R; odd-index terms feed Q, S; the sign
    // alternates every pair.
    let (mut p, mut q, mut r, mut s) = (0.0, 0.0, 0.0, 0.0);
    for_each_term(1.0 / zeta, |k, tu, tv| {
        let sign = if (k / 2) % 2 == 0 { 1.0 } else { -1.0 };
        if k % 2 == 0 {
            p += sign * tu;
            r += sign * tv;
        } else {
            q += sign * tu;
            s += sign * tv;
        }
    });

    let (sn, cs) = (zeta - 0.25 * PI).sin_cos();
    AiryQuad {
        ai: INV_SQRT_PI / t14 * (cs * p + sn * q),
        aip: INV_SQRT_PI * t14 * (sn * r - cs * s),
        bi: INV_SQRT_PI / t14 * (cs * q - sn * p),
        bip: INV_SQRT_PI * t14 * (cs * r + sn * s),
    }
}
