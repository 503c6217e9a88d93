//! autosampler is a crate for choosing where to sample a function of one
//! variable so that a piecewise interpolant through the samples follows the
//! function closely, using as few points as possible. It is meant for plotting
//! and tabulation pipelines that need to render smooth but possibly steep
//! functions without oversampling the flat parts.
//!
//! # Installing
//!
//! Add the following line to your Cargo.toml file:
//!
//! ```text
//! autosampler = "0.1"
//! ```
//!
//! To load [`SamplerOptions`] from configuration files with serde:
//!
//! ```text
//! autosampler = { version = "0.1", features = ["serde"] }
//! ```
//!
//! # Adaptive step size
//!
//! Starting at the lower bound, each step length _h_ is chosen so that the
//! product of the step and the change of the function over it matches a
//! constant derived from the error budget,
//!
//! ```text
//! h · |f(t + h) − f(t)| = C,   C = error · sqrt(120)
//! ```
//!
//! The equation is solved by fixed point iteration starting from the previous
//! step length (see [`ErrorModel`]). Steep regions therefore get short steps
//! and flat regions long ones. The last point always equals the upper bound
//! exactly.
//!
//! Asking for an exact number of points instead of an error budget runs a
//! bisection over the budget until the sampler returns that many points.
//! Functions spanning several orders of magnitude can be sampled in log10
//! space with [`sample_log_for_count`].
//!
//! # Basic usage
//!
//! ```
//! use autosampler::sample_for_count;
//!
//! // Five points sampling f(x) = x on [0, 1]
//! let points = sample_for_count(|x| x, 0.0, 1.0, 5).unwrap();
//! assert_eq!(points.len(), 5);
//! assert_eq!(points.first(), 0.0);
//! assert_eq!(points.last(), 1.0);
//! // A linear function is sampled uniformly, except for the last step.
//! assert!((points[2] - 2.0 * points[1]).abs() < 1e-6);
//! ```
//!
//! Sampling for a given error budget:
//!
//! ```
//! use autosampler::sample_for_error;
//!
//! let coarse = sample_for_error(|x| x * x, 0.0, 1.0, 1e-2).unwrap();
//! let fine = sample_for_error(|x| x * x, 0.0, 1.0, 1e-4).unwrap();
//! assert!(fine.len() > coarse.len());
//! ```
//!
//! # Failures
//!
//! Every call either returns a complete [`SampleSequence`] or a
//! [`SamplingError`]. All iterations are bounded by [`SamplerOptions`], so a
//! function that is flat or for which the requested count is unreachable fails
//! instead of looping.
//!
//! ```
//! use autosampler::{sample_for_error, SamplingError};
//!
//! let res = sample_for_error(|_| 5.0, 0.0, 1.0, 0.1);
//! assert!(matches!(res, Err(SamplingError::FlatRegion { .. })));
//! ```
//!
//! # Logging
//!
//! Accepted steps are reported with [`tracing`] at `trace` level and bisection
//! steps at `debug` level. No subscriber is installed by the crate.

pub mod calibrate;
mod error;
pub mod log_scale;
mod model;
mod options;
pub mod sampler;
mod sequence;
pub mod step;

pub use calibrate::{sample_for_count, sample_for_count_with_options};
pub use error::{DomainError, Result, SamplingError};
pub use log_scale::{
    sample_log_for_count, sample_log_for_count_with_options, sample_log_for_error,
    sample_log_for_error_with_options,
};
pub use model::ErrorModel;
pub use options::SamplerOptions;
pub use sampler::{sample_for_error, sample_for_error_with_options};
pub use sequence::SampleSequence;

#[cfg(test)]
mod tests {
    use super::*;

    fn is_strictly_increasing(points: &[f64]) -> bool {
        points.windows(2).all(|w| w[0] < w[1])
    }

    #[test]
    fn test_operations_agree_on_budget() {
        // The count calibrated sequence is the error sequence for the budget found.
        let f = |x: f64| x.powi(3) + x;
        let by_count = sample_for_count(f, -1.0, 1.0, 12).unwrap();
        let by_error = sample_for_error(f, -1.0, 1.0, by_count.error_budget()).unwrap();
        assert_eq!(by_count, by_error);
    }

    #[test]
    fn test_log_matches_manual_transform() {
        let g = |x: f64| x.sqrt();
        let log_seq = sample_log_for_error(g, 1e-2, 1e2, 1e-3).unwrap();
        let manual = sample_for_error(|u| g(10f64.powf(u)), -2.0, 2.0, 1e-3).unwrap();
        assert_eq!(log_seq.len(), manual.len());
        assert!(is_strictly_increasing(&log_seq));
        for (x, u) in log_seq.iter().zip(manual.iter()).skip(1).take(log_seq.len() - 2) {
            assert!((x.log10() - u).abs() < 1e-12);
        }
    }

    #[test]
    fn test_custom_error_model() {
        let opts = SamplerOptions {
            model: ErrorModel::new(4, 1.0),
            ..Default::default()
        };
        let seq = sample_for_error_with_options(|x| x, 0.0, 1.0, 0.0064, &opts).unwrap();
        // h = sqrt(C) = 0.08
        assert_eq!(seq.len(), 14);
        assert!(is_strictly_increasing(&seq));
    }
}
