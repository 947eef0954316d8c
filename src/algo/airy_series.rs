//! Maclaurin series for Ai, Ai', Bi, Bi' on `-2.1 ≤ x ≤ 1`.
//!
//! With the two fundamental solutions of `w'' = x·w`
//!   `f(x) = Σ 3^k (1/3)_k x^{3k} / (3k)!`,
//!   `g(x) = Σ 3^k (2/3)_k x^{3k+1} / (3k+1)!`
//! the Airy functions are
//!   `Ai = c1·f − c2·g`, `Bi = √3 (c1·f + c2·g)`.
//! Every term ratio is a rational function of `x³`, so each series runs on a
//! single multiply per step.

use super::constants::{AI_C1, AI_C2, BI_C1, BI_C2};
use super::AiryQuad;
use crate::machine::tol;

/// Hard cap on terms; at |x| = 2.1 the sums settle after ~15.
const MAX_TERMS: usize = 60;

pub(crate) fn airy_maclaurin(x: f64) -> AiryQuad {
    if x == 0.0 {
        return AiryQuad {
            ai: AI_C1,
            aip: -AI_C2,
            bi: BI_C1,
            bip: BI_C2,
        };
    }

    let tol = tol();
    let x3 = x * x * x;

    // f, g and their derivatives
    let mut f = 1.0;
    let mut g = x;
    let mut df = 0.5 * x * x;
    let mut dg = 1.0;
    let mut tf = f;
    let mut tg = g;
    let mut tdf = df;
    let mut tdg = dg;

    for k in 1..MAX_TERMS {
        let k3 = 3.0 * k as f64;
        tf *= x3 / ((k3 - 1.0) * k3);
        tg *= x3 / (k3 * (k3 + 1.0));
        tdf *= x3 / (k3 * (k3 + 2.0));
        tdg *= x3 / ((k3 - 2.0) * k3);
        f += tf;
        g += tg;
        df += tdf;
        dg += tdg;

        let delta = tf.abs() + tg.abs() + tdf.abs() + tdg.abs();
        if delta < tol * (f.abs() + g.abs() + df.abs() + dg.abs()) {
            break;
        }
    }

    AiryQuad {
        ai: AI_C1 * f - AI_C2 * g,
        aip: AI_C1 * df - AI_C2 * dg,
        bi: BI_C1 * f + BI_C2 * g,
        bip: BI_C1 * df + BI_C2 * dg,
    }
}
