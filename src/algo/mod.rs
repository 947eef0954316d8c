//! Internal kernels for the special-function routers.
//!
//! Every routine here is `pub(crate)` and works on a single `f64` (or
//! `Complex64`) argument. Kernels assume the router has already picked the
//! region they are valid in; they do not re-check their domain.
//!
//! # Return value convention
//!
//! The Airy kernels return all four of `(Ai, Ai', Bi, Bi')` as an
//! [`AiryQuad`], since every method produces the four together at almost
//! no extra cost. Kernels on the positive axis return exponentially scaled
//! values; the caller converts with [`crate::scaling`].

pub(crate) mod constants;
pub(crate) mod zeta;

// Airy region kernels
pub(crate) mod airy_asym;
pub(crate) mod airy_series;
pub(crate) mod bessel;

/// `(Ai, Ai', Bi, Bi')` at one point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AiryQuad {
    pub ai: f64,
    pub aip: f64,
    pub bi: f64,
    pub bip: f64,
}

impl AiryQuad {
    pub(crate) const NAN: AiryQuad = AiryQuad {
        ai: f64::NAN,
        aip: f64::NAN,
        bi: f64::NAN,
        bip: f64::NAN,
    };
}
