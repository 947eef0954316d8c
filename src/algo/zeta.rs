//! Even zeta values and the series coefficients derived from them.
//!
//! ζ(2k) for k = 1..=N_ZETA is computed once per process: a direct sum
//! over n < 32 plus an Euler–Maclaurin tail, which is exact to the last
//! bit for every even argument. The Bernoulli ratios `B_{2k}/(2k)!` and the
//! Clausen coefficients follow from
//!   `B_{2k}/(2k)! = (-1)^{k+1} · 2ζ(2k) / (2π)^{2k}`.

use std::sync::OnceLock;

use super::constants::{PI, PI2_6};

/// Number of tabulated even zeta values. Every series that reads the table
/// has a term ratio of at most (3/2π)², so 40 terms is well past ε.
pub(crate) const N_ZETA: usize = 40;

/// Terms of the Clausen series kept in the Horner evaluation.
pub(crate) const N_CLAUSEN: usize = 30;

pub(crate) struct ZetaTables {
    /// `zeta_even[k - 1] = ζ(2k)`
    pub zeta_even: [f64; N_ZETA],
    /// `bernoulli[k - 1] = B_{2k} / (2k)!`
    pub bernoulli: [f64; N_ZETA],
    /// `clausen[k - 1] = ζ(2k) / (k (2k+1) (2π)^{2k})`
    pub clausen: [f64; N_CLAUSEN],
}

static TABLES: OnceLock<ZetaTables> = OnceLock::new();

/// Process-wide tables, built on first use.
#[inline]
pub(crate) fn tables() -> &'static ZetaTables {
    TABLES.get_or_init(build)
}

fn build() -> ZetaTables {
    let mut zeta_even = [0.0; N_ZETA];
    let mut bernoulli = [0.0; N_ZETA];
    let mut clausen = [0.0; N_CLAUSEN];

    let tpi2 = 4.0 * PI * PI;
    let mut tpi_pow = 1.0;
    for k in 1..=N_ZETA {
        let z = if k == 1 { PI2_6 } else { zeta_direct(2 * k as i32) };
        tpi_pow *= tpi2;
        zeta_even[k - 1] = z;
        let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
        bernoulli[k - 1] = sign * 2.0 * z / tpi_pow;
        if k <= N_CLAUSEN {
            let kf = k as f64;
            clausen[k - 1] = z / (kf * (2.0 * kf + 1.0) * tpi_pow);
        }
    }

    ZetaTables {
        zeta_even,
        bernoulli,
        clausen,
    }
}

/// ζ(s) for integer s ≥ 4.
fn zeta_direct(s: i32) -> f64 {
    const N: i32 = 32;
    let mut sum = 0.0;
    for n in 2..N {
        sum += (n as f64).powi(-s);
    }
    sum += 1.0;

    // Euler–Maclaurin remainder Σ_{n≥N} n^{-s}
    let nf = N as f64;
    let sf = s as f64;
    let ns = nf.powi(-s);
    let tail = nf * ns / (sf - 1.0) + 0.5 * ns + sf * ns / nf / 12.0
        - sf * (sf + 1.0) * (sf + 2.0) * ns / nf.powi(3) / 720.0
        + sf * (sf + 1.0) * (sf + 2.0) * (sf + 3.0) * (sf + 4.0) * ns / nf.powi(5) / 30240.0;
    sum + tail
}

/// ζ(2k), k ≥ 1.
#[inline]
pub(crate) fn zeta_even(k: usize) -> f64 {
    tables().zeta_even[k - 1]
}

/// ζ(n) for integer 2 ≤ n ≤ 7.
pub(crate) fn zeta_small(n: u32) -> f64 {
    use super::constants::{ZETA3, ZETA5, ZETA7};
    match n {
        3 => ZETA3,
        5 => ZETA5,
        7 => ZETA7,
        _ => zeta_even(n as usize / 2),
    }
}
