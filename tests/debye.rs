//! Debye dispatch and order validation.

mod common;

use common::assert_close1;
use scify::{
    debye, debye_1, debye_2, debye_3, debye_4, debye_5, debye_6, debye_n, evaluate_batch,
    DebyeOrder, Error, EvalContext, RealFunction,
};

const FIXED: [fn(f64) -> f64; 6] = [debye_1, debye_2, debye_3, debye_4, debye_5, debye_6];

#[test]
fn invalid_orders() {
    assert_eq!(debye_n(1.0, 0), Err(Error::InvalidOrder(0)));
    assert_eq!(debye_n(1.0, 7), Err(Error::InvalidOrder(7)));
}

#[test]
fn dispatch_matches_fixed_order() {
    for &x in &[0.0, 0.3, 1.0, 2.999, 3.0, 4.5, 12.0, 100.0] {
        for (i, f) in FIXED.iter().enumerate() {
            let order = i as u32 + 1;
            assert_eq!(debye_n(x, order).unwrap().to_bits(), f(x).to_bits());
            assert_eq!(debye(DebyeOrder::ALL[i], x).to_bits(), f(x).to_bits());
        }
    }
}

#[test]
fn reference_values() {
    assert_close1(debye_1(1.0), 0.777504634112248, 1e-14);
    // D_n(x) for x = 2.5, from direct quadrature
    assert_close1(debye_1(2.5), 0.5387895690778559, 1e-13);
    assert_close1(debye_2(2.5), 0.4107941357974967, 1e-13);
    assert_close1(debye_3(2.5), 0.3541360348104239, 1e-13);
    assert_close1(debye_4(10.0), 0.009673675560271159, 1e-13);
    assert_close1(debye_6(10.0), 0.0037938493294615955, 1e-13);
}

#[test]
fn domain() {
    for f in FIXED {
        assert_eq!(f(0.0), 1.0);
        assert!(f(-0.5).is_nan());
        assert!(f(f64::NAN).is_nan());
    }
}

#[test]
fn batch_order_from_context() {
    let xs = [0.5, 1.0, 5.0];
    for order in 1..=6 {
        let ctx = EvalContext::new().order(order);
        let out = evaluate_batch(RealFunction::Debye, &xs, &ctx).unwrap();
        for (x, y) in xs.iter().zip(&out) {
            assert_eq!(y.to_bits(), FIXED[order as usize - 1](*x).to_bits());
        }
    }
}

#[test]
fn batch_rejects_invalid_order() {
    for order in [0, 7, 100] {
        let ctx = EvalContext::new().order(order);
        assert_eq!(
            evaluate_batch(RealFunction::Debye, &[1.0; 10], &ctx),
            Err(Error::InvalidOrder(order))
        );
    }
}
