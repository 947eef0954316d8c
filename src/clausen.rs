//! Clausen function `Cl₂(x) = −∫₀ˣ ln|2 sin(t/2)| dt`.
//!
//! After reduction to `[0, π]` the series
//!   `Cl₂(θ) = θ − θ ln θ + Σ_{k≥1} ζ(2k) θ^{2k+1} / (k (2k+1) (2π)^{2k})`
//! has term ratio at most 1/4, so a fixed-length Horner sweep suffices.

use crate::algo::constants::PI;
use crate::algo::zeta::tables;
use crate::utils::reduce_two_pi;

pub(crate) fn clausen(x: f64) -> f64 {
    let mut theta = reduce_two_pi(x);
    if theta.is_nan() {
        return f64::NAN;
    }

    // Cl₂(2π − θ) = −Cl₂(θ)
    let sign = if theta > PI {
        theta = 2.0 * PI - theta;
        -1.0
    } else {
        1.0
    };
    if theta == 0.0 {
        return 0.0;
    }

    let t2 = theta * theta;
    let mut s = 0.0;
    for &c in tables().clausen.iter().rev() {
        s = s * t2 + c;
    }
    // The loop leaves s = Σ c_k θ^{2k−2}.
    sign * theta * (1.0 - theta.ln() + t2 * s)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALAN: f64 = 0.915965594177219015;
    const CL2_PI_3: f64 = 1.014941606409653625;

    #[test]
    fn special_values() {
        assert!((clausen(PI / 3.0) - CL2_PI_3).abs() < 1e-15);
        assert!((clausen(PI / 2.0) - CATALAN).abs() < 1e-15);
        assert!((clausen(2.0 * PI / 3.0) - 2.0 / 3.0 * CL2_PI_3).abs() < 1e-15);
    }

    #[test]
    fn zeros() {
        assert_eq!(clausen(0.0), 0.0);
        assert!(clausen(PI).abs() < 1e-15);
        assert!(clausen(2.0 * PI).abs() < 1e-15);
    }

    #[test]
    fn odd_and_periodic() {
        for &x in &[0.3, 1.0, 2.5, 3.0] {
            assert!((clausen(-x) + clausen(x)).abs() < 1e-14);
            assert!((clausen(x + 2.0 * PI) - clausen(x)).abs() < 1e-14);
            assert!((clausen(x - 10.0 * PI) - clausen(x)).abs() < 1e-13);
        }
    }

    #[test]
    fn duplication() {
        // Cl₂(2θ) = 2Cl₂(θ) − 2Cl₂(π − θ)
        for &t in &[0.1, 0.7, 1.2, 2.9] {
            let lhs = clausen(2.0 * t);
            let rhs = 2.0 * clausen(t) - 2.0 * clausen(PI - t);
            assert!((lhs - rhs).abs() < 1e-14, "θ={t}");
        }
    }

    #[test]
    fn maximum() {
        // Cl₂ peaks at π/3 on (0, π).
        assert!(clausen(PI / 3.0 - 1e-3) < CL2_PI_3);
        assert!(clausen(PI / 3.0 + 1e-3) < CL2_PI_3);
    }

    #[test]
    fn non_finite() {
        assert!(clausen(f64::NAN).is_nan());
        assert!(clausen(f64::INFINITY).is_nan());
        assert!(clausen(f64::NEG_INFINITY).is_nan());
    }
}
