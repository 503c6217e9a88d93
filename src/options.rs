//! Tuning knobs shared by every sampling layer.

use crate::error::{DomainError, Result};
use crate::model::ErrorModel;

/// Options for the `*_with_options` sampling functions.
///
/// The defaults reproduce the plain `sample_for_*` functions. Every loop in
/// the crate is bounded by one of the limits below.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SamplerOptions {
    /// Local error model. Default: [`ErrorModel::QUINTIC`].
    pub model: ErrorModel,

    /// A step is accepted once `|h · |Δf| − C|` falls below this. Default: 1e-8.
    pub step_tolerance: f64,

    /// Maximum fixed point updates per step. Default: 1000.
    pub max_step_iterations: usize,

    /// Distance of the virtual point placed before the lower bound so that
    /// the first step has a previous point to extrapolate from. Default: 1e-8.
    pub seed_offset: f64,

    /// Maximum length of a single sample sequence. Default: 1,000,000.
    pub max_points: usize,

    /// Initial `(lower, upper)` bracket of the error budget searched when
    /// calibrating for a point count. Default: `(0.0, 1.0)`.
    ///
    /// The lower end is assumed to give at least the requested number of
    /// points and the upper end at most that many. This is not checked.
    pub error_bracket: (f64, f64),

    /// Maximum bisection steps when calibrating for a point count. Default: 200.
    pub max_bisection_iterations: usize,
}

impl Default for SamplerOptions {
    fn default() -> Self {
        Self {
            model: ErrorModel::QUINTIC,
            step_tolerance: 1e-8,
            max_step_iterations: 1000,
            seed_offset: 1e-8,
            max_points: 1_000_000,
            error_bracket: (0.0, 1.0),
            max_bisection_iterations: 200,
        }
    }
}

impl SamplerOptions {
    pub(crate) fn checked_bracket(&self) -> Result<(f64, f64)> {
        let (lower, upper) = self.error_bracket;
        if !(lower.is_finite() && upper.is_finite() && 0.0 <= lower && lower < upper) {
            return Err(DomainError::InvalidBracket { lower, upper }.into());
        }
        Ok((lower, upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SamplingError;

    #[test]
    fn test_defaults() {
        let opts = SamplerOptions::default();
        assert_eq!(opts.model, ErrorModel::QUINTIC);
        assert_eq!(opts.step_tolerance, 1e-8);
        assert_eq!(opts.seed_offset, 1e-8);
        assert_eq!(opts.error_bracket, (0.0, 1.0));
    }

    #[test]
    fn test_bracket_validation() {
        let mut opts = SamplerOptions::default();
        assert_eq!(opts.checked_bracket().unwrap(), (0.0, 1.0));

        opts.error_bracket = (0.5, 0.5);
        assert!(matches!(
            opts.checked_bracket(),
            Err(SamplingError::Domain(DomainError::InvalidBracket { .. }))
        ));

        opts.error_bracket = (-1.0, 1.0);
        assert!(opts.checked_bracket().is_err());

        opts.error_bracket = (0.0, f64::INFINITY);
        assert!(opts.checked_bracket().is_err());
    }
}
