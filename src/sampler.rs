//! Sampling an interval for a fixed error budget.

use tracing::trace;

use crate::error::{DomainError, Result, SamplingError};
use crate::options::SamplerOptions;
use crate::sequence::SampleSequence;
use crate::step::next_point;

/// Finds the fewest points sampling `f` on `[x0, xf]` within the error budget
/// `error`, using the default [`SamplerOptions`].
///
/// # Arguments
/// * `f` - The function to sample.
/// * `x0` - Start sampling from this point.
/// * `xf` - Stop sampling at this point.
/// * `error` - The local error budget. Smaller budgets give more points.
pub fn sample_for_error<F>(f: F, x0: f64, xf: f64, error: f64) -> Result<SampleSequence>
where
    F: Fn(f64) -> f64,
{
    sample_for_error_with_options(f, x0, xf, error, &SamplerOptions::default())
}

/// Like [`sample_for_error`], with explicit options.
pub fn sample_for_error_with_options<F>(
    f: F,
    x0: f64,
    xf: f64,
    error: f64,
    options: &SamplerOptions,
) -> Result<SampleSequence>
where
    F: Fn(f64) -> f64,
{
    check_interval(x0, xf)?;
    if !(error.is_finite() && error >= 0.0) {
        return Err(DomainError::InvalidErrorBudget(error).into());
    }
    let points = sample_points(&f, x0, xf, error, options)?;
    SampleSequence::new(points, error)
}

pub(crate) fn check_interval(x0: f64, xf: f64) -> Result<()> {
    if !(x0.is_finite() && xf.is_finite()) {
        return Err(DomainError::NonFiniteBound {
            lower: x0,
            upper: xf,
        }
        .into());
    }
    if x0 >= xf {
        return Err(DomainError::EmptyInterval {
            lower: x0,
            upper: xf,
        }
        .into());
    }
    Ok(())
}

/// Arguments are assumed to be checked already.
pub(crate) fn sample_points<F>(
    f: &F,
    x0: f64,
    xf: f64,
    error: f64,
    options: &SamplerOptions,
) -> Result<Vec<f64>>
where
    F: Fn(f64) -> f64,
{
    let c = options.model.step_constant(error);
    let mut points = vec![x0];
    // The seed must land strictly below `x0` whatever its magnitude.
    let mut t_prev = x0 - options.seed_offset.max(4.0 * f64::EPSILON * x0.abs());
    let mut t_curr = x0;

    while t_curr < xf {
        if points.len() >= options.max_points {
            return Err(SamplingError::TooManyPoints {
                limit: options.max_points,
            });
        }
        let t_next = next_point(f, t_prev, t_curr, c, options)?;
        trace!(t_curr, t_next, "accepted step");
        t_prev = t_curr;
        t_curr = t_next;
        points.push(t_next);
    }

    // The last step overshoots the upper bound.
    let last = points.len() - 1;
    points[last] = xf;
    Ok(points)
}
