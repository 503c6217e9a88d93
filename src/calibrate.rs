//! Calibrating the error budget for an exact point count.

use tracing::debug;

use crate::error::{DomainError, Result, SamplingError};
use crate::options::SamplerOptions;
use crate::sampler::{check_interval, sample_points};
use crate::sequence::SampleSequence;

/// Finds `n` points sampling `f` on `[x0, xf]`, using the default
/// [`SamplerOptions`].
///
/// The error budget is found by bisection over
/// [`SamplerOptions::error_bracket`]. The point count is an integer valued
/// step function of the budget, so some counts may not be reachable; the
/// search then fails with [`SamplingError::CalibrationNonConvergence`].
///
/// The upper end of the bracket is sampled once up front. If it already gives
/// more than `n` points the call fails with
/// [`DomainError::BracketExcludesCount`]; widen the bracket in that case. If it
/// gives exactly `n` points, that sequence is returned with the upper end as
/// its budget.
///
/// # Arguments
/// * `f` - The function to sample.
/// * `x0` - Start sampling from this point.
/// * `xf` - Stop sampling at this point.
/// * `n` - The number of points to return, at least 2.
pub fn sample_for_count<F>(f: F, x0: f64, xf: f64, n: usize) -> Result<SampleSequence>
where
    F: Fn(f64) -> f64,
{
    sample_for_count_with_options(f, x0, xf, n, &SamplerOptions::default())
}

/// Like [`sample_for_count`], with explicit options.
pub fn sample_for_count_with_options<F>(
    f: F,
    x0: f64,
    xf: f64,
    n: usize,
    options: &SamplerOptions,
) -> Result<SampleSequence>
where
    F: Fn(f64) -> f64,
{
    check_interval(x0, xf)?;
    if n < 2 {
        return Err(DomainError::UnreachableCount(n).into());
    }
    let (mut error_inf, mut error_sup) = options.checked_bracket()?;

    let upper_points = sample_points(&f, x0, xf, error_sup, options)?;
    let upper_count = upper_points.len();
    if upper_count == n {
        debug!(error = error_sup, "upper end of the bracket gives the target count");
        return SampleSequence::new(upper_points, error_sup);
    }
    if upper_count > n {
        return Err(DomainError::BracketExcludesCount {
            upper: error_sup,
            count: upper_count,
            target: n,
        }
        .into());
    }

    let mut error = error_sup;
    let mut count = upper_count;
    for iteration in 0..options.max_bisection_iterations {
        error = 0.5 * (error_inf + error_sup);
        if error <= error_inf || error >= error_sup {
            // bracket collapsed
            break;
        }

        let points = sample_points(&f, x0, xf, error, options)?;
        count = points.len();
        debug!(iteration, error, count, target = n, "bisection step");

        if count > n {
            error_inf = error;
        } else if count < n {
            error_sup = error;
        } else {
            debug!(error, "calibrated error budget");
            return SampleSequence::new(points, error);
        }
    }

    Err(SamplingError::CalibrationNonConvergence {
        target: n,
        iterations: options.max_bisection_iterations,
        last_count: count,
        last_error: error,
    })
}
