//! Sampling in log10 space.
//!
//! Functions that vary over several orders of magnitude, such as modulus
//! reduction curves plotted against strain, are better sampled in log10 space.
//! The functions here transform the interval and the function, sample the
//! transformed problem and map the points back to the original scale.

use crate::calibrate::sample_for_count_with_options;
use crate::error::{DomainError, Result};
use crate::options::SamplerOptions;
use crate::sampler::sample_for_error_with_options;
use crate::sequence::SampleSequence;

/// Finds `n` points sampling `g` on `[xmin, xmax]` in log10 space, using the
/// default [`SamplerOptions`].
///
/// The returned points are in the original (linear) scale and are denser
/// towards `xmin` than a linear sampling would be.
///
/// # Arguments
/// * `g` - The function to sample.
/// * `xmin` - Start sampling from this point. Must be positive.
/// * `xmax` - Stop sampling at this point.
/// * `n` - The number of points to return, at least 2.
pub fn sample_log_for_count<G>(g: G, xmin: f64, xmax: f64, n: usize) -> Result<SampleSequence>
where
    G: Fn(f64) -> f64,
{
    sample_log_for_count_with_options(g, xmin, xmax, n, &SamplerOptions::default())
}

/// Like [`sample_log_for_count`], with explicit options.
pub fn sample_log_for_count_with_options<G>(
    g: G,
    xmin: f64,
    xmax: f64,
    n: usize,
    options: &SamplerOptions,
) -> Result<SampleSequence>
where
    G: Fn(f64) -> f64,
{
    let (x0, xf) = log_bounds(xmin, xmax)?;
    let seq = sample_for_count_with_options(|x| g(exp10(x)), x0, xf, n, options)?;
    seq.map_points(exp10, xmin, xmax)
}

/// Samples `g` on `[xmin, xmax]` in log10 space for a fixed error budget,
/// using the default [`SamplerOptions`].
pub fn sample_log_for_error<G>(g: G, xmin: f64, xmax: f64, error: f64) -> Result<SampleSequence>
where
    G: Fn(f64) -> f64,
{
    sample_log_for_error_with_options(g, xmin, xmax, error, &SamplerOptions::default())
}

/// Like [`sample_log_for_error`], with explicit options.
pub fn sample_log_for_error_with_options<G>(
    g: G,
    xmin: f64,
    xmax: f64,
    error: f64,
    options: &SamplerOptions,
) -> Result<SampleSequence>
where
    G: Fn(f64) -> f64,
{
    let (x0, xf) = log_bounds(xmin, xmax)?;
    let seq = sample_for_error_with_options(|x| g(exp10(x)), x0, xf, error, options)?;
    seq.map_points(exp10, xmin, xmax)
}

fn log_bounds(xmin: f64, xmax: f64) -> Result<(f64, f64)> {
    if !(xmin.is_finite() && xmax.is_finite()) {
        return Err(DomainError::NonFiniteBound {
            lower: xmin,
            upper: xmax,
        }
        .into());
    }
    if xmin <= 0.0 {
        return Err(DomainError::NonPositiveLowerBound(xmin).into());
    }
    if xmin >= xmax {
        return Err(DomainError::EmptyInterval {
            lower: xmin,
            upper: xmax,
        }
        .into());
    }
    Ok((xmin.log10(), xmax.log10()))
}

fn exp10(x: f64) -> f64 {
    10f64.powf(x)
}
