//! Machine constants for IEEE 754 binary64.
//!
//! Every kernel in this crate works in `f64`; the thresholds below are the
//! D1MACH-style values the kernels use for convergence and range tests.

/// Machine epsilon.
pub const MACH_EPSILON: f64 = 2.220446049250313e-16;
/// Smallest positive normal number.
pub const MACH_TINY: f64 = 2.2250738585072014e-308;
/// Largest representable number.
pub const MACH_HUGE: f64 = 1.7976931348623157e+308;
/// ln(MACH_HUGE).
pub const LOG_MACH_HUGE: f64 = 7.0978271289338397e+02;
/// ln(MACH_TINY).
pub const LOG_MACH_TINY: f64 = -7.0839641853226408e+02;

/// Guard used by the modified Lentz method in place of an exact zero.
pub(crate) const FPMIN: f64 = 1.0e-300;

/// Convergence tolerance for series and continued fractions.
#[inline]
pub(crate) fn tol() -> f64 {
    MACH_EPSILON
}
