//! Element-wise evaluation over slices.
//!
//! Every entry point resolves its scalar kernel (validating the context)
//! before touching the input, then maps the kernel over the batch. Batches
//! of at least [`EvalContext::parallel_threshold`] elements are split into
//! contiguous chunks evaluated on the rayon pool when threading is enabled;
//! each chunk writes only its own slice of the output. The kernels are
//! pure, so both paths produce bit-identical output.

use num_complex::Complex64;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::airy::airy_eval;
use crate::airy_zero::airy_zero;
use crate::clausen::clausen;
use crate::debye::debye;
use crate::dilog::{dilog, dilog_complex, dilog_polar};
use crate::log::complex_log;
use crate::types::{
    AiryDerivative, AiryKind, ComplexFunction, DebyeOrder, Error, EvalContext, RealFunction,
    Result, Scaling,
};

/// Smallest chunk handed to a worker.
#[cfg(feature = "rayon")]
const MIN_CHUNK: usize = 256;

/// Fill `out[i] = f(i)` for `i in 0..len`, in parallel when `ctx` allows.
fn map_indexed<O, F>(len: usize, ctx: &EvalContext, f: F) -> Vec<O>
where
    O: Copy + Default + Send,
    F: Fn(usize) -> O + Sync,
{
    let mut out = vec![O::default(); len];

    #[cfg(feature = "rayon")]
    if ctx.threaded && len > 0 && len >= ctx.parallel_threshold {
        let workers = rayon::current_num_threads().max(1);
        let chunk = ((len + workers - 1) / workers).max(MIN_CHUNK);
        tracing::trace!(len, chunk, workers, "parallel batch");
        out.par_chunks_mut(chunk)
            .enumerate()
            .for_each(|(c, slice)| {
                let base = c * chunk;
                for (j, o) in slice.iter_mut().enumerate() {
                    *o = f(base + j);
                }
            });
        return out;
    }

    tracing::trace!(len, threaded = ctx.threaded, "sequential batch");
    for (i, o) in out.iter_mut().enumerate() {
        *o = f(i);
    }
    out
}

fn debye_kernel(order: DebyeOrder) -> fn(f64) -> f64 {
    match order {
        DebyeOrder::One => |x| debye(DebyeOrder::One, x),
        DebyeOrder::Two => |x| debye(DebyeOrder::Two, x),
        DebyeOrder::Three => |x| debye(DebyeOrder::Three, x),
        DebyeOrder::Four => |x| debye(DebyeOrder::Four, x),
        DebyeOrder::Five => |x| debye(DebyeOrder::Five, x),
        DebyeOrder::Six => |x| debye(DebyeOrder::Six, x),
    }
}

/// Resolve a real function to its scalar kernel.
///
/// Fails with [`Error::InvalidOrder`] when `func` is [`RealFunction::Debye`]
/// and the context carries an order outside 1..=6.
pub(crate) fn real_kernel(func: RealFunction, ctx: &EvalContext) -> Result<fn(f64) -> f64> {
    use AiryDerivative::{Derivative, Value};
    use AiryKind::{Ai, Bi};
    use Scaling::{Exponential, Unscaled};

    let kernel: fn(f64) -> f64 = match func {
        RealFunction::AiryAi => |x| airy_eval(Ai, Value, Unscaled, x),
        RealFunction::AiryAiScaled => |x| airy_eval(Ai, Value, Exponential, x),
        RealFunction::AiryAiDeriv => |x| airy_eval(Ai, Derivative, Unscaled, x),
        RealFunction::AiryAiDerivScaled => |x| airy_eval(Ai, Derivative, Exponential, x),
        RealFunction::AiryBi => |x| airy_eval(Bi, Value, Unscaled, x),
        RealFunction::AiryBiScaled => |x| airy_eval(Bi, Value, Exponential, x),
        RealFunction::AiryBiDeriv => |x| airy_eval(Bi, Derivative, Unscaled, x),
        RealFunction::AiryBiDerivScaled => |x| airy_eval(Bi, Derivative, Exponential, x),
        RealFunction::AiryZeroAi => |s| airy_zero(Ai, Value, s),
        RealFunction::AiryZeroAiDeriv => |s| airy_zero(Ai, Derivative, s),
        RealFunction::AiryZeroBi => |s| airy_zero(Bi, Value, s),
        RealFunction::AiryZeroBiDeriv => |s| airy_zero(Bi, Derivative, s),
        RealFunction::Clausen => clausen,
        RealFunction::Dilog => dilog,
        RealFunction::Debye => {
            let order = DebyeOrder::try_from(ctx.order).map_err(|e| {
                tracing::debug!(order = ctx.order, "rejected Debye order");
                e
            })?;
            debye_kernel(order)
        }
    };
    Ok(kernel)
}

fn complex_kernel(func: ComplexFunction) -> fn(Complex64) -> Complex64 {
    match func {
        ComplexFunction::Log => complex_log,
        ComplexFunction::Dilog => dilog_complex,
    }
}

/// Evaluate a real function over `input`.
///
/// `out[i]` is the scalar function applied to `input[i]`. Undefined inputs
/// produce NaN in their slot; only an invalid context is an error, and it is
/// reported before any element is evaluated.
///
/// # Example
///
/// ```
/// use scify::{evaluate_batch, EvalContext, RealFunction};
///
/// let y = evaluate_batch(RealFunction::AiryAi, &[0.0, 0.42], &EvalContext::default()).unwrap();
/// assert!((y[1] - 0.250046304012225).abs() < 1e-14);
/// ```
pub fn evaluate_batch(func: RealFunction, input: &[f64], ctx: &EvalContext) -> Result<Vec<f64>> {
    let kernel = real_kernel(func, ctx)?;
    Ok(map_indexed(input.len(), ctx, |i| kernel(input[i])))
}

/// Evaluate a complex function over `input`.
pub fn evaluate_complex_batch(
    func: ComplexFunction,
    input: &[Complex64],
    ctx: &EvalContext,
) -> Result<Vec<Complex64>> {
    let kernel = complex_kernel(func);
    Ok(map_indexed(input.len(), ctx, |i| kernel(input[i])))
}

/// Evaluate a complex function over inputs given as separate real and
/// imaginary slices.
pub fn evaluate_split_batch(
    func: ComplexFunction,
    re: &[f64],
    im: &[f64],
    ctx: &EvalContext,
) -> Result<Vec<Complex64>> {
    check_lengths(re, im)?;
    let kernel = complex_kernel(func);
    Ok(map_indexed(re.len(), ctx, |i| kernel(Complex64::new(re[i], im[i]))))
}

/// Li₂(r e^{iθ}) over paired modulus and argument slices.
pub fn evaluate_dilog_polar(r: &[f64], theta: &[f64], ctx: &EvalContext) -> Result<Vec<Complex64>> {
    check_lengths(r, theta)?;
    Ok(map_indexed(r.len(), ctx, |i| dilog_polar(r[i], theta[i])))
}

fn check_lengths(a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}
