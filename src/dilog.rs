//! Dilogarithm `Li₂(z) = −∫₀^z ln(1−t)/t dt` on the real line and in the
//! complex plane.
//!
//! Both paths reduce to the Bernoulli series
//!   `Li₂(w) = Σ_{k≥0} B_k u^{k+1}/(k+1)!`, `u = −ln(1−w)`,
//! which converges fast whenever `|w| ≤ 1` and `Re w ≤ ½`. The reflection
//! `w = 1 − z` and the inversion `w = 1/z` map every other point there.

use core::ops::Mul;

use num_complex::Complex64;
use num_traits::NumOps;

use crate::algo::constants::{PI, PI2_6};
use crate::algo::zeta::{tables, N_ZETA};
use crate::log::complex_log;
use crate::machine::tol;
use crate::utils::zabs;

/// `u − u²/4 + Σ_{k≥1} B_{2k}/(2k)! · u^{2k+1}/(2k+1)`
///
/// `umag = |u|` drives the stopping test; the sum is of the same order as
/// `u` on the whole reduced domain, so the test is effectively relative.
fn bernoulli_series<T>(u: T, umag: f64) -> T
where
    T: Copy + NumOps + Mul<f64, Output = T>,
{
    let tol = tol();
    let b = &tables().bernoulli;
    let u2 = u * u;
    let umag2 = umag * umag;
    let mut p = u;
    let mut pmag = 1.0;
    let mut s = u - u2 * 0.25_f64;
    for k in 1..=N_ZETA {
        let c = b[k - 1] / (2 * k + 1) as f64;
        p = p * u2;
        pmag *= umag2;
        s = s + p * c;
        if (c * pmag).abs() < tol {
            break;
        }
    }
    s
}

/// Li₂(x) for `−1 ≤ x ≤ ½`.
fn dilog_reduced(x: f64) -> f64 {
    let u = -(-x).ln_1p();
    bernoulli_series(u, u.abs())
}

/// Real part of Li₂(x) for real x.
pub(crate) fn dilog(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == 1.0 {
        return PI2_6;
    }
    if x == 0.0 {
        return 0.0;
    }

    if x < -1.0 {
        let l = (-x).ln();
        -PI2_6 - 0.5 * l * l - dilog_reduced(1.0 / x)
    } else if x <= 0.5 {
        dilog_reduced(x)
    } else if x < 1.0 {
        PI2_6 - x.ln() * (-x).ln_1p() - dilog_reduced(1.0 - x)
    } else if x <= 2.0 {
        PI2_6 - x.ln() * (x - 1.0).ln() - dilog_reduced(1.0 - x)
    } else {
        let l = x.ln();
        2.0 * PI2_6 - 0.5 * l * l - dilog_reduced(1.0 / x)
    }
}

/// Imaginary part of Li₂(x + i0) on the cut: `−π ln x` for `x > 1`, else 0.
pub(crate) fn dilog_imag(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x > 1.0 {
        -PI * x.ln()
    } else {
        0.0
    }
}

/// Li₂(z) for `z = r e^{iθ}`.
pub(crate) fn dilog_polar(r: f64, theta: f64) -> Complex64 {
    if r.is_nan() || theta.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }
    if r == 0.0 {
        return Complex64::new(0.0, 0.0);
    }
    let (sin, cos) = theta.sin_cos();
    dilog_complex(Complex64::new(r * cos, r * sin))
}

/// Li₂(z), principal branch.
pub(crate) fn dilog_complex(z: Complex64) -> Complex64 {
    if z.re.is_nan() || z.im.is_nan() {
        return Complex64::new(f64::NAN, f64::NAN);
    }
    if z.im == 0.0 && z.re == 0.0 {
        return Complex64::new(0.0, 0.0);
    }
    if z.im == 0.0 && z.re == 1.0 {
        return Complex64::new(PI2_6, 0.0);
    }

    let one = Complex64::new(1.0, 0.0);
    let norm2 = z.norm_sqr();
    if z.re <= 0.5 && norm2 <= 1.0 {
        let u = -complex_log(one - z);
        bernoulli_series(u, zabs(u))
    } else if z.re > 0.5 && norm2 <= 2.0 * z.re {
        // |z − 1| ≤ 1: reflect through 1 − z
        let u = -complex_log(z);
        let rest = u * complex_log(one - z) + PI2_6;
        rest - bernoulli_series(u, zabs(u))
    } else {
        let u = -complex_log(one - z.inv());
        let l = complex_log(-z);
        -bernoulli_series(u, zabs(u)) - PI2_6 - l * l * 0.5
    }
}
