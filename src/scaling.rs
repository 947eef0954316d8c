//! Conversion between unscaled and exponentially scaled Airy values.
//!
//! For `x > 0` the scaled forms are `e^{ζ}Ai`, `e^{ζ}Ai'`, `e^{−ζ}Bi`,
//! `e^{−ζ}Bi'` with `ζ = ⅔x^{3/2}`. For `x ≤ 0` both forms coincide.

use crate::algo::constants::TTH;
use crate::algo::AiryQuad;
use crate::types::Scaling;

/// `ζ = ⅔ x^{3/2}` for `x ≥ 0`.
#[inline]
pub(crate) fn zeta(x: f64) -> f64 {
    TTH * x * x.sqrt()
}

/// Re-express a quadruple computed at `x` under `from` scaling in `to`.
pub(crate) fn rescale(x: f64, q: AiryQuad, from: Scaling, to: Scaling) -> AiryQuad {
    if from == to || !(x > 0.0) {
        return q;
    }
    let z = zeta(x);
    // Factor applied to the Ai family; the Bi family gets its inverse.
    let (fa, fb) = match to {
        Scaling::Exponential => (z.exp(), (-z).exp()),
        Scaling::Unscaled => ((-z).exp(), z.exp()),
    };
    AiryQuad {
        ai: q.ai * fa,
        aip: q.aip * fa,
        bi: q.bi * fb,
        bip: q.bip * fb,
    }
}
