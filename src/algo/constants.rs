//! Shared constants used by multiple algorithm modules.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// 2/3
pub(crate) const TTH: f64 = 6.66666666666666667e-01;

/// √3
pub(crate) const SQRT3: f64 = 1.73205080756887729e+00;

/// 1/√π
pub(crate) const INV_SQRT_PI: f64 = 5.64189583547756287e-01;

/// 1/(π√3)
pub(crate) const AI_COEF: f64 = 1.83776298473930683e-01;

/// π²/6 = ζ(2) = Li₂(1)
pub(crate) const PI2_6: f64 = 1.64493406684822644e+00;

/// High part of 2π, exactly representable.
pub(crate) const TWO_PI_HI: f64 = 6.283185307179586;

/// 2π − TWO_PI_HI
pub(crate) const TWO_PI_LO: f64 = 2.4492935982947064e-16;

// Airy initial values at the origin:
//   Ai(0) = AI_C1, Ai'(0) = -AI_C2, Bi(0) = BI_C1, Bi'(0) = BI_C2
pub(crate) const AI_C1: f64 = 3.55028053887817240e-01;
pub(crate) const AI_C2: f64 = 2.58819403792806799e-01;
pub(crate) const BI_C1: f64 = 6.14926627446000736e-01; // sqrt(3) * AI_C1
pub(crate) const BI_C2: f64 = 4.48288357353826359e-01; // sqrt(3) * AI_C2

/// ζ(3), ζ(5), ζ(7): odd zeta values used by the Debye tail.
pub(crate) const ZETA3: f64 = 1.20205690315959429e+00;
pub(crate) const ZETA5: f64 = 1.03692775514336993e+00;
pub(crate) const ZETA7: f64 = 1.00834927738192283e+00;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_pi_split() {
        assert_eq!(TWO_PI_HI, 2.0 * core::f64::consts::PI);
        assert!(TWO_PI_LO > 0.0 && TWO_PI_LO < 1e-15);
    }

    #[test]
    fn derived_constants() {
        assert!((SQRT3 * SQRT3 - 3.0).abs() < 1e-15);
        assert!((AI_COEF - 1.0 / (PI * SQRT3)).abs() < 1e-16);
        assert!((INV_SQRT_PI * INV_SQRT_PI * PI - 1.0).abs() < 1e-15);
        assert!((BI_C1 - SQRT3 * AI_C1).abs() < 1e-15);
        assert!((BI_C2 - SQRT3 * AI_C2).abs() < 1e-15);
        assert!((PI2_6 - PI * PI / 6.0).abs() < 1e-15);
    }
}
