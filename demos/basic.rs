use scify::*;

fn main() {
    let x = 0.42;

    // -- Airy functions --
    println!("=== Airy functions at x = {x} ===");
    println!("Ai({x})  = {}", airy_ai(x));
    println!("Ai'({x}) = {}", airy_ai_deriv(x));
    println!("Bi({x})  = {}", airy_bi(x));
    println!("Bi'({x}) = {}", airy_bi_deriv(x));

    // -- Scaled computation --
    println!("\n=== Scaled functions at x = 200 ===");
    println!("Ai(200)          = {}  (underflows)", airy_ai(200.0));
    println!("exp(ζ)·Ai(200)   = {}", airy_ai_scaled(200.0));
    println!("Bi(200)          = {}  (overflows)", airy_bi(200.0));
    println!("exp(-ζ)·Bi(200)  = {}", airy_bi_scaled(200.0));

    // -- Zeros --
    println!("\n=== First zeros ===");
    for s in 1..=3 {
        println!(
            "s={s}: a_s = {:.15}  a'_s = {:.15}  b_s = {:.15}  b'_s = {:.15}",
            airy_zero_ai(s),
            airy_zero_ai_deriv(s),
            airy_zero_bi(s),
            airy_zero_bi_deriv(s)
        );
    }

    // -- Clausen, Debye, dilogarithm --
    println!("\n=== Other real functions ===");
    println!("Cl2(π/2) = {}  (Catalan's constant)", clausen(std::f64::consts::FRAC_PI_2));
    for order in DebyeOrder::ALL {
        println!("D{}(1.0) = {}", order.get(), debye(order, 1.0));
    }
    match debye_n(1.0, 9) {
        Ok(v) => println!("D9(1.0) = {v}"),
        Err(e) => println!("debye_n(1.0, 9): {e}"),
    }
    println!("Li2(3) = {} + {}i", dilog(3.0), dilog_imag(3.0));

    // -- Complex functions --
    println!("\n=== Complex functions ===");
    let z = Complex64::new(-1.5, 2.718281828459045);
    println!("log({z}) = {}", complex_log(z));
    println!("Li2(i) = {}", dilog_complex(1.0, std::f64::consts::FRAC_PI_2));

    // -- Batch evaluation --
    println!("\n=== Batch: Ai on 100 000 points ===");
    let xs: Vec<f64> = (0..100_000).map(|i| -20.0 + 4.0e-4 * i as f64).collect();
    let ctx = EvalContext::default();
    let ys = evaluate_batch(RealFunction::AiryAi, &xs, &ctx).unwrap();
    let seq = evaluate_batch(RealFunction::AiryAi, &xs, &ctx.threaded(false)).unwrap();
    println!("len = {}, threaded == sequential: {}", ys.len(), ys == seq);

    let err = evaluate_batch(RealFunction::Debye, &xs, &EvalContext::new().order(0));
    println!("Debye with order 0: {err:?}");
}
