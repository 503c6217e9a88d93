//! Single step adaptation.
//!
//! Given the two most recently accepted points, the next point is found by
//! solving _h · |f(t_curr + h) − f(t_curr)| = C_ for the step length _h_ with
//! the fixed point update of [`ErrorModel`](crate::ErrorModel), starting from
//! the previous step length.

use crate::error::{Result, SamplingError};
use crate::options::SamplerOptions;

/// Successive candidates closer than this many units in the last place are
/// treated as converged.
const STAGNATION_ULPS: f64 = 4.0;

/// Computes the point following `t_curr`.
///
/// # Arguments
/// * `f` - The function being sampled.
/// * `t_prev` - The previously accepted point, `t_prev < t_curr`.
/// * `t_curr` - The current point.
/// * `c` - The step constant, see [`ErrorModel::step_constant`](crate::ErrorModel::step_constant).
/// * `options` - Convergence tolerance, iteration limit and error model.
///
/// # Errors
/// * [`SamplingError::FlatRegion`] if `f` takes the same value at `t_curr` and a candidate point.
/// * [`SamplingError::StepNonConvergence`] if the update does not converge in
///   `options.max_step_iterations` iterations.
/// * [`SamplingError::NonFiniteValue`] if `f` or the update produce NaN or infinity.
/// * [`SamplingError::StepStalled`] if the converged point is not greater than `t_curr`.
pub fn next_point<F>(
    f: &F,
    t_prev: f64,
    t_curr: f64,
    c: f64,
    options: &SamplerOptions,
) -> Result<f64>
where
    F: Fn(f64) -> f64,
{
    let model = &options.model;
    let f_curr = finite(t_curr, f(t_curr))?;

    let mut t_next = t_curr + (t_curr - t_prev);
    let mut diff_f = finite(t_next, f(t_next))? - f_curr;
    let mut residual = f64::INFINITY;

    for _ in 0..options.max_step_iterations {
        if diff_f == 0.0 {
            return Err(SamplingError::FlatRegion { t_curr, t_next });
        }

        let t_last = t_next;
        t_next = t_curr + model.refine(c, t_next - t_curr, diff_f);
        if !t_next.is_finite() {
            return Err(SamplingError::NonFiniteValue { t: t_next });
        }
        diff_f = finite(t_next, f(t_next))? - f_curr;

        residual = ((t_next - t_curr) * diff_f.abs() - c).abs();
        // Far from the origin the step is quantized to the float spacing at
        // `t_curr` and the residual may never drop below the tolerance.
        let stagnant =
            (t_next - t_last).abs() <= STAGNATION_ULPS * f64::EPSILON * t_next.abs();
        if residual < options.step_tolerance || stagnant {
            if t_next <= t_curr {
                return Err(SamplingError::StepStalled { t_curr });
            }
            return Ok(t_next);
        }
    }

    Err(SamplingError::StepNonConvergence {
        t_curr,
        iterations: options.max_step_iterations,
        residual,
    })
}

fn finite(t: f64, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SamplingError::NonFiniteValue { t })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_step_is_sqrt_c() {
        let opts = SamplerOptions::default();
        let c = 0.09;
        let t = next_point(&|x: f64| x, -1e-8, 0.0, c, &opts).unwrap();
        assert_relative_eq!(t, 0.3, max_relative = 1e-6);
    }

    #[test]
    fn test_step_satisfies_tolerance() {
        let opts = SamplerOptions::default();
        let f = |x: f64| x.sin() + x * x;
        let c = 0.01;
        let t_curr = 0.4;
        let t_next = next_point(&f, 0.35, t_curr, c, &opts).unwrap();
        assert!(t_next > t_curr);
        let residual = ((t_next - t_curr) * (f(t_next) - f(t_curr)).abs() - c).abs();
        assert!(residual < opts.step_tolerance);
    }

    #[test]
    fn test_steeper_function_takes_smaller_step() {
        let opts = SamplerOptions::default();
        let c = 0.01;
        let shallow = next_point(&|x: f64| x, 0.9, 1.0, c, &opts).unwrap();
        let steep = next_point(&|x: f64| 50.0 * x, 0.9, 1.0, c, &opts).unwrap();
        assert!(steep - 1.0 < shallow - 1.0);
    }

    #[test]
    fn test_converges_far_from_origin() {
        // At 1e10 the float spacing is ~2e-6, so h^2 = C cannot be met to 1e-8.
        let opts = SamplerOptions::default();
        let t_curr = 1e10;
        let t_next = next_point(&|x: f64| x, t_curr - 1.0, t_curr, 0.09, &opts).unwrap();
        assert_relative_eq!(t_next - t_curr, 0.3, max_relative = 1e-4);
    }

    #[test]
    fn test_flat_function() {
        let opts = SamplerOptions::default();
        let res = next_point(&|_| 5.0, -1e-8, 0.0, 1.0, &opts);
        assert!(matches!(res, Err(SamplingError::FlatRegion { .. })));
    }

    #[test]
    fn test_iteration_limit() {
        let opts = SamplerOptions {
            max_step_iterations: 1,
            ..Default::default()
        };
        let res = next_point(&|x: f64| x, -1e-8, 0.0, 0.5, &opts);
        assert!(matches!(
            res,
            Err(SamplingError::StepNonConvergence { iterations: 1, .. })
        ));
    }

    #[test]
    fn test_zero_constant_stalls() {
        let opts = SamplerOptions::default();
        let res = next_point(&|x: f64| x, -1e-8, 0.0, 0.0, &opts);
        assert_eq!(res, Err(SamplingError::StepStalled { t_curr: 0.0 }));
    }

    #[test]
    fn test_non_finite_function_value() {
        let opts = SamplerOptions::default();
        let res = next_point(&|x: f64| 1.0 / x, -1e-8, 0.0, 0.1, &opts);
        assert!(matches!(res, Err(SamplingError::NonFiniteValue { .. })));
    }
}
