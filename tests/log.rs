//! Complex logarithm fixtures.

use scify::{complex_log, evaluate_complex_batch, evaluate_split_batch, Complex64, ComplexFunction, EvalContext};

const TOL: f64 = 1e-9;

fn fixtures() -> Vec<(Complex64, Complex64)> {
    let c = Complex64::new;
    vec![
        (c(-1.5, -3.14159265358979), c(1.24741216996716, -2.01625382070549)),
        (c(0.0, -3.14159265358979), c(1.1447298858494, -1.5707963267949)),
        (c(2.0, -3.14159265358979), c(1.31484985600431, -1.00388482185389)),
        (c(-1.5, 0.0), c(0.40546510810816, 3.14159265358979)),
        (c(2.0, 0.0), c(0.693147180559945, 0.0)),
        (c(-1.5, 2.71828182845905), c(1.13291159438989, 2.07503513405872)),
        (c(0.0, 2.71828182845905), c(1.0, 1.5707963267949)),
        (c(2.0, 2.71828182845905), c(1.2163264514959, 0.93647200756652)),
    ]
}

fn assert_complex_close(a: Complex64, b: Complex64) {
    assert!(
        (a.re - b.re).abs() < TOL && (a.im - b.im).abs() < TOL,
        "{a} vs {b}"
    );
}

#[test]
fn scalar_fixtures() {
    for (z, expected) in fixtures() {
        assert_complex_close(complex_log(z), expected);
    }
}

#[test]
fn origin_is_nan() {
    let w = complex_log(Complex64::new(0.0, 0.0));
    assert!(w.re.is_nan());
    assert!(w.im.is_nan());
}

#[test]
fn ln_two() {
    let w = complex_log(Complex64::new(2.0, 0.0));
    assert!((w.re - std::f64::consts::LN_2).abs() < 1e-15);
    assert_eq!(w.im, 0.0);
}

#[test]
fn batch_fixtures_with_origin() {
    let mut input: Vec<Complex64> = fixtures().iter().map(|f| f.0).collect();
    input.insert(4, Complex64::new(0.0, 0.0));
    let out = evaluate_complex_batch(ComplexFunction::Log, &input, &EvalContext::default()).unwrap();
    assert_eq!(out.len(), 9);
    assert!(out[4].re.is_nan() && out[4].im.is_nan());

    let rest: Vec<Complex64> = out.iter().enumerate().filter(|(i, _)| *i != 4).map(|(_, w)| *w).collect();
    for (w, (_, expected)) in rest.into_iter().zip(fixtures()) {
        assert_complex_close(w, expected);
    }
}

#[test]
fn split_components() {
    let (re, im): (Vec<f64>, Vec<f64>) = fixtures().iter().map(|f| (f.0.re, f.0.im)).unzip();
    let out = evaluate_split_batch(ComplexFunction::Log, &re, &im, &EvalContext::default()).unwrap();
    for (w, (_, expected)) in out.into_iter().zip(fixtures()) {
        assert_complex_close(w, expected);
    }
}
