//! Bessel functions of order 1/3 and 2/3 for the intermediate Airy regions.
//!
//! - `1 < x ≤ 10`: Ai and Bi through `K_ν(ζ)` and `I_ν(ζ)`, ν ∈ {1/3, 2/3}.
//!   K comes from trapezoidal quadrature of
//!   `e^{ζ} K_ν(ζ) = ∫₀^∞ exp(−ζ(cosh t − 1)) cosh(νt) dt`, which converges
//!   geometrically in the step; I comes from the ratio `I'_ν/I_ν` (CF1) and
//!   the Wronskian `I_ν K'_ν − I'_ν K_ν = −1/ζ`.
//! - `-10 ≤ x < -2.1`: Ai and Bi through `J_{1/3}(ζ)` and `Y_{1/3}(ζ)`,
//!   obtained from CF1 (`J'/J`), the complex CF2 (`(H¹)'/H¹ = p + iq`) and the
//!   Wronskian `J Y' − J' Y = 2/(πζ)`.
//!
//! Both continued fractions are evaluated with the modified Lentz method.

use num_complex::Complex64;

use super::constants::{AI_COEF, PI, SQRT3, TTH};
use super::AiryQuad;
use crate::machine::{tol, FPMIN};

const MAX_ITER: usize = 10_000;

/// Quadrature step for the K integrals. With ζ ≥ 2/3 the trapezoidal
/// error at this step is far below ε.
const QUAD_STEP: f64 = 0.125;

/// Relative size below which a quadrature node no longer contributes.
const QUAD_CUTOFF: f64 = 1.0e-18;

/// `(e^{ζ} K_{1/3}(ζ), e^{ζ} K_{2/3}(ζ))` for `ζ ≥ 2/3`.
pub(crate) fn k_third_scaled(zeta: f64) -> (f64, f64) {
    // f(0) = 1 for both orders, with trapezoidal weight ½
    let mut s13 = 0.5;
    let mut s23 = 0.5;
    let mut j = 1.0;
    loop {
        let t = j * QUAD_STEP;
        let e = (-zeta * (t.cosh() - 1.0)).exp();
        let c = (t / 3.0).cosh();
        let a13 = e * c;
        // cosh(2t/3) = 2cosh²(t/3) − 1
        let a23 = e * (2.0 * c * c - 1.0);
        s13 += a13;
        s23 += a23;
        if a23 < QUAD_CUTOFF * s23 {
            break;
        }
        j += 1.0;
    }
    (s13 * QUAD_STEP, s23 * QUAD_STEP)
}

/// CF1 for the modified Bessel ratio `I'_ν(x)/I_ν(x)`.
pub(crate) fn cf1_i(nu: f64, x: f64) -> f64 {
    let tol = tol();
    let xi = 1.0 / x;
    let xi2 = 2.0 * xi;
    let mut h = (nu * xi).max(FPMIN);
    let mut b = xi2 * nu;
    let mut d = 0.0;
    let mut c = h;
    for _ in 0..MAX_ITER {
        b += xi2;
        d = 1.0 / (b + d);
        c = b + 1.0 / c;
        let del = c * d;
        h *= del;
        if (del - 1.0).abs() < tol {
            break;
        }
    }
    h
}

/// CF1 for `J'_ν(x)/J_ν(x)`, together with the sign of `J_ν(x)` relative to
/// the backward-recursed seed.
pub(crate) fn cf1_j(nu: f64, x: f64) -> (f64, f64) {
    let tol = tol();
    let xi = 1.0 / x;
    let xi2 = 2.0 * xi;
    let mut h = (nu * xi).max(FPMIN);
    let mut b = xi2 * nu;
    let mut d = 0.0;
    let mut c = h;
    let mut sign = 1.0;
    for _ in 0..MAX_ITER {
        b += xi2;
        d = b - d;
        if d.abs() < FPMIN {
            d = FPMIN;
        }
        c = b - 1.0 / c;
        if c.abs() < FPMIN {
            c = FPMIN;
        }
        d = 1.0 / d;
        let del = c * d;
        h *= del;
        if d < 0.0 {
            sign = -sign;
        }
        if (del - 1.0).abs() < tol {
            break;
        }
    }
    (h, sign)
}

/// CF2: `p + iq = (J'_ν + iY'_ν)/(J_ν + iY_ν)` for `x ≥ 2`.
pub(crate) fn cf2_jy(nu: f64, x: f64) -> Complex64 {
    let tol = tol();
    let xi = 1.0 / x;
    let mu2 = nu * nu;
    let mut f = Complex64::new(-0.5 * xi, 1.0);
    let mut c = f;
    let mut d = Complex64::new(0.0, 0.0);
    for k in 1..MAX_ITER {
        let kf = k as f64;
        let ak = (kf - 0.5) * (kf - 0.5) - mu2;
        let a = if k == 1 {
            Complex64::new(0.0, ak * xi)
        } else {
            Complex64::new(ak, 0.0)
        };
        let b = Complex64::new(2.0 * x, 2.0 * kf);
        d = b + a * d;
        if d.re.abs() + d.im.abs() < FPMIN {
            d = Complex64::new(FPMIN, 0.0);
        }
        d = d.inv();
        c = b + a / c;
        if c.re.abs() + c.im.abs() < FPMIN {
            c = Complex64::new(FPMIN, 0.0);
        }
        let del = c * d;
        f *= del;
        if (del.re - 1.0).abs() + del.im.abs() < tol {
            break;
        }
    }
    f
}

/// `(J_ν, J'_ν, Y_ν, Y'_ν)` at `x ≥ 2`.
pub(crate) fn bessel_jy(nu: f64, x: f64) -> (f64, f64, f64, f64) {
    let (fj, sign) = cf1_j(nu, x);
    let pq = cf2_jy(nu, x);
    let (p, q) = (pq.re, pq.im);
    let w = 2.0 / (PI * x);
    let gam = (p - fj) / q;
    let j = sign * (w / ((p - fj) * gam + q)).sqrt();
    let y = gam * j;
    (j, fj * j, y, p * y + q * j)
}

/// Scaled Airy quadruple on `1 < x ≤ 10` from K and I of order 1/3, 2/3.
pub(crate) fn airy_bessel_positive(x: f64) -> AiryQuad {
    let sx = x.sqrt();
    let zeta = TTH * x * sx;
    let (k13, k23) = k_third_scaled(zeta);

    // K'_{1/3} and K'_{2/3} from the order recurrences
    let dk13 = -k23 - k13 / (3.0 * zeta);
    let dk23 = -k13 - 2.0 * k23 / (3.0 * zeta);

    // e^{-ζ} I_ν = 1 / (ζ (f_ν K_ν − K'_ν)) with everything scaled by e^{ζ}
    let i13 = 1.0 / (zeta * (cf1_i(1.0 / 3.0, zeta) * k13 - dk13));
    let i23 = 1.0 / (zeta * (cf1_i(2.0 / 3.0, zeta) * k23 - dk23));

    let e2 = (-2.0 * zeta).exp();
    AiryQuad {
        ai: sx * k13 * AI_COEF,
        aip: -x * k23 * AI_COEF,
        bi: sx * (2.0 * i13 / SQRT3 + k13 * e2 / PI),
        bip: x * (2.0 * i23 / SQRT3 + k23 * e2 / PI),
    }
}

/// Airy quadruple on `-10 ≤ x < -2.1` from J and Y of order 1/3.
pub(crate) fn airy_bessel_negative(x: f64) -> AiryQuad {
    let t = -x;
    let st = t.sqrt();
    let zeta = TTH * t * st;
    let (j, jp, y, yp) = bessel_jy(1.0 / 3.0, zeta);

    let ai = 0.5 * st * (j - y / SQRT3);
    let aip = -(ai / (2.0 * t) + 0.5 * t * (jp - yp / SQRT3));
    let bi = -0.5 * st * (j / SQRT3 + y);
    let bip = -bi / (2.0 * t) + 0.5 * t * (jp / SQRT3 + yp);
    AiryQuad { ai, aip, bi, bip }
}
