//! Debye functions `D_n(x) = n/xⁿ ∫₀ˣ tⁿ/(eᵗ − 1) dt`, n = 1..=6.
//!
//! Below [`SERIES_MAX`] the Bernoulli expansion of `t/(eᵗ − 1)` is
//! integrated term by term; above it the integral is taken as
//! `n! ζ(n+1)` minus the exponentially small tail `∫ₓ^∞`.

use crate::algo::zeta::{tables, zeta_small, N_ZETA};
use crate::machine::{tol, LOG_MACH_HUGE};
use crate::types::DebyeOrder;

/// Switch point between the small-x series and the tail form.
const SERIES_MAX: f64 = 3.0;

const FACTORIAL: [f64; 7] = [1.0, 1.0, 2.0, 6.0, 24.0, 120.0, 720.0];

pub(crate) fn debye(order: DebyeOrder, x: f64) -> f64 {
    if x.is_nan() || x < 0.0 {
        return f64::NAN;
    }
    if x == 0.0 {
        return 1.0;
    }
    let n = order.get();
    if x < SERIES_MAX {
        debye_series(n, x)
    } else {
        debye_tail(n, x)
    }
}

/// `1 − n x/(2(n+1)) + n Σ B_{2k} x^{2k} / ((2k+n) (2k)!)`
fn debye_series(n: u32, x: f64) -> f64 {
    let tol = tol();
    let nf = n as f64;
    let b = &tables().bernoulli;
    let x2 = x * x;
    let mut p = 1.0;
    let mut s = 0.0;
    for k in 1..=N_ZETA {
        p *= x2;
        let term = b[k - 1] * p / (2.0 * k as f64 + nf);
        s += term;
        if term.abs() < tol * s.abs() {
            break;
        }
    }
    1.0 - nf * x / (2.0 * (nf + 1.0)) + nf * s
}

/// `n/xⁿ [n! ζ(n+1) − Σ_k e^{−kx} Σ_j n!/(n−j)! x^{n−j}/k^{j+1}]`
fn debye_tail(n: u32, x: f64) -> f64 {
    let tol = tol();
    let nf = n as f64;
    let full = FACTORIAL[n as usize] * zeta_small(n + 1);
    let xn = x.powi(n as i32);

    let mut tail = 0.0;
    let mut k = 1.0;
    while k * x < LOG_MACH_HUGE {
        let ek = (-k * x).exp();
        let mut inner = 0.0;
        let mut c = 1.0;
        let mut xp = xn;
        let mut kp = k;
        for j in 0..=n {
            inner += c * xp / kp;
            c *= (n - j) as f64;
            xp /= x;
            kp *= k;
        }
        let term = ek * inner;
        tail += term;
        if term < tol * tail {
            break;
        }
        k += 1.0;
    }

    nf / xn * (full - tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    /// Reference by composite Simpson on the defining integral.
    fn quadrature(n: u32, x: f64) -> f64 {
        let m = 20_000;
        let h = x / m as f64;
        let f = |t: f64| {
            if t == 0.0 {
                if n == 1 {
                    1.0
                } else {
                    0.0
                }
            } else {
                t.powi(n as i32) / t.exp_m1()
            }
        };
        let mut s = f(0.0) + f(x);
        for i in 1..m {
            let w = if i % 2 == 1 { 4.0 } else { 2.0 };
            s += w * f(i as f64 * h);
        }
        n as f64 / x.powi(n as i32) * s * h / 3.0
    }

    #[test]
    fn reference_value() {
        assert!(rel(debye(DebyeOrder::One, 1.0), 0.777504634112248) < 1e-14);
    }

    #[test]
    fn origin_and_domain() {
        for order in DebyeOrder::ALL {
            assert_eq!(debye(order, 0.0), 1.0);
            assert!(debye(order, -1.0).is_nan());
            assert!(debye(order, f64::NAN).is_nan());
        }
    }

    #[test]
    fn matches_quadrature() {
        for order in DebyeOrder::ALL {
            for &x in &[0.25, 1.0, 2.5, 3.5, 8.0, 20.0] {
                let d = debye(order, x);
                let q = quadrature(order.get(), x);
                assert!(rel(d, q) < 1e-10, "n={} x={x}: {d} vs {q}", order.get());
            }
        }
    }

    #[test]
    fn switch_point_agreement() {
        for order in DebyeOrder::ALL {
            let n = order.get();
            let a = debye_series(n, SERIES_MAX);
            let b = debye_tail(n, SERIES_MAX);
            assert!(rel(a, b) < 1e-14, "n={n}");
        }
    }

    #[test]
    fn large_x_limit() {
        // D_n(x) → n! ζ(n+1) n / xⁿ
        let x: f64 = 800.0;
        for order in DebyeOrder::ALL {
            let n = order.get();
            let limit = n as f64 * FACTORIAL[n as usize] * zeta_small(n + 1) / x.powi(n as i32);
            assert!(rel(debye(order, x), limit) < 1e-14);
        }
        assert_eq!(debye(DebyeOrder::Six, f64::INFINITY), 0.0);
    }

    #[test]
    fn decreasing() {
        for order in DebyeOrder::ALL {
            let mut prev = 1.0;
            for i in 1..60 {
                let d = debye(order, 0.5 * i as f64);
                assert!(d < prev);
                prev = d;
            }
        }
    }
}
