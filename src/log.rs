//! Principal branch of the complex natural logarithm.

use num_complex::Complex64;

use crate::algo::constants::PI;
use crate::utils::log_abs;

/// `ln|z| + i arg z` with `arg z ∈ (−π, π]`. The origin maps to NaN + NaN·i.
///
/// A signed-zero imaginary part on the negative real axis would give
/// `arg = −π`; it is folded onto `+π` so the branch cut belongs to the upper
/// half-plane.
pub(crate) fn complex_log(z: Complex64) -> Complex64 {
    if z.re == 0.0 && z.im == 0.0 {
        return Complex64::new(f64::NAN, f64::NAN);
    }
    let mut arg = z.im.atan2(z.re);
    if arg == -PI {
        arg = PI;
    }
    Complex64::new(log_abs(z), arg)
}
