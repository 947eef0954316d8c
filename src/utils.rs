//! Overflow-safe complex magnitude helpers and argument reduction.

use num_complex::Complex64;

use crate::algo::constants::{TWO_PI_HI, TWO_PI_LO};

/// Overflow-safe complex absolute value.
///
/// Computes `|z| = sqrt(re² + im²)` without intermediate overflow by
/// factoring out the larger component:
///   `max * sqrt(1 + (min/max)²)`
#[inline]
pub(crate) fn zabs(z: Complex64) -> f64 {
    let u = z.re.abs();
    let v = z.im.abs();
    let s = u + v;
    if s == 0.0 {
        return 0.0;
    }
    if u > v {
        let q = v / u;
        u * (1.0 + q * q).sqrt()
    } else {
        let q = u / v;
        v * (1.0 + q * q).sqrt()
    }
}

/// `ln|z|` without forming `|z|`.
///
/// Splits into `ln(max) + ½·ln(1 + (min/max)²)`, which keeps full relative
/// accuracy when `|z|` is near 1 and never overflows. Returns `-inf` for
/// `z = 0`; callers decide how to treat the origin.
#[inline]
pub(crate) fn log_abs(z: Complex64) -> f64 {
    let u = z.re.abs();
    let v = z.im.abs();
    let (max, min) = if u > v { (u, v) } else { (v, u) };
    if max == 0.0 {
        return f64::NEG_INFINITY;
    }
    let q = min / max;
    max.ln() + 0.5 * (q * q).ln_1p()
}

/// Reduce `x` into `[0, 2π)`.
///
/// 2π is split into a high part exact in binary64 and a low correction,
/// so the multiple subtracted carries roughly twice the working precision.
/// Non-finite input yields NaN.
#[inline]
pub(crate) fn reduce_two_pi(x: f64) -> f64 {
    if !x.is_finite() {
        return f64::NAN;
    }
    let n = (x / TWO_PI_HI).floor();
    let mut r = (x - n * TWO_PI_HI) - n * TWO_PI_LO;
    // Rounding can leave r a hair outside the interval.
    if r < 0.0 {
        r += TWO_PI_HI;
    } else if r >= TWO_PI_HI {
        r -= TWO_PI_HI;
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::PI;

    // ── zabs tests ──

    #[test]
    fn zabs_zero() {
        assert_eq!(zabs(Complex64::new(0.0, 0.0)), 0.0);
    }

    #[test]
    fn zabs_real_only() {
        let z = Complex64::new(3.0, 0.0);
        assert!((zabs(z) - 3.0).abs() < 1e-15);

        let z = Complex64::new(-5.0, 0.0);
        assert!((zabs(z) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn zabs_3_4_triangle() {
        let z = Complex64::new(3.0, 4.0);
        assert!((zabs(z) - 5.0).abs() < 1e-15);
    }

    #[test]
    fn zabs_large_values_no_overflow() {
        // Values near sqrt(f64::MAX) would overflow with naive re²+im²
        let big = 1.0e154;
        let z = Complex64::new(big, big);
        let result = zabs(z);
        let expected = big * 2.0_f64.sqrt();
        assert!((result - expected).abs() / expected < 1e-15);
    }

    #[test]
    fn zabs_tiny_values_no_underflow() {
        let tiny = 1.0e-308;
        let z = Complex64::new(tiny, tiny);
        let result = zabs(z);
        assert!(result > 0.0);
    }

    // ── log_abs tests ──

    #[test]
    fn log_abs_matches_naive() {
        let z = Complex64::new(2.0, -3.14159265358979);
        let naive = (z.re * z.re + z.im * z.im).sqrt().ln();
        assert!((log_abs(z) - naive).abs() < 1e-15);
    }

    #[test]
    fn log_abs_huge() {
        let z = Complex64::new(1.0e300, 1.0e300);
        let expected = 300.0 * 10.0_f64.ln() + 0.5 * 2.0_f64.ln();
        assert!((log_abs(z) - expected).abs() / expected < 1e-15);
    }

    #[test]
    fn log_abs_origin() {
        assert_eq!(log_abs(Complex64::new(0.0, 0.0)), f64::NEG_INFINITY);
    }

    #[test]
    fn log_abs_nan() {
        assert!(log_abs(Complex64::new(f64::NAN, 1.0)).is_nan());
    }

    // ── reduce_two_pi tests ──

    #[test]
    fn reduce_in_range_is_identity() {
        for &x in &[0.0, 0.5, PI, 6.0] {
            assert_eq!(reduce_two_pi(x), x);
        }
    }

    #[test]
    fn reduce_negative() {
        let r = reduce_two_pi(-PI / 3.0);
        assert!((r - 5.0 * PI / 3.0).abs() < 4e-15);
    }

    #[test]
    fn reduce_many_periods() {
        let r = reduce_two_pi(100.0 * PI + PI / 3.0);
        assert!((r - PI / 3.0).abs() < 1e-13);
        let r = reduce_two_pi(-20.0 * PI + 1.0);
        assert!((r - 1.0).abs() < 1e-13);
    }

    #[test]
    fn reduce_non_finite() {
        assert!(reduce_two_pi(f64::NAN).is_nan());
        assert!(reduce_two_pi(f64::INFINITY).is_nan());
    }
}
