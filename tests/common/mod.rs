//! Common test utilities
#![allow(dead_code)]

/// Assert two f64 slices agree: `|a − b| <= tol · max(1, |b|)`.
pub fn assert_close(actual: &[f64], expected: &[f64], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "Length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        let diff = (a - e).abs();
        assert!(
            diff <= tol * e.abs().max(1.0),
            "Mismatch at index {}: actual={}, expected={}, diff={}",
            i,
            a,
            e,
            diff
        );
    }
}

/// Scalar form of [`assert_close`].
pub fn assert_close1(actual: f64, expected: f64, tol: f64) {
    assert_close(&[actual], &[expected], tol);
}

/// `start, start + step, ...` while below `stop`, like `numpy.arange`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil() as usize;
    (0..n).map(|i| start + i as f64 * step).collect()
}

/// Bitwise equality, treating every NaN pattern as its own value.
pub fn assert_bits_eq(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len(), "Length mismatch");
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        assert_eq!(x.to_bits(), y.to_bits(), "index {}: {} vs {}", i, x, y);
    }
}
