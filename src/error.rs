//! Error types for autosampler.

use thiserror::Error;

/// Invalid arguments, rejected before any function evaluation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("empty interval: lower bound {lower} must be less than upper bound {upper}")]
    EmptyInterval { lower: f64, upper: f64 },

    #[error("interval bounds must be finite, got [{lower}, {upper}]")]
    NonFiniteBound { lower: f64, upper: f64 },

    #[error("log scale sampling needs a positive lower bound, got {0}")]
    NonPositiveLowerBound(f64),

    #[error("error budget must be finite and non-negative, got {0}")]
    InvalidErrorBudget(f64),

    #[error("a sequence of {0} points cannot contain both interval bounds")]
    UnreachableCount(usize),

    #[error("invalid error budget bracket [{lower}, {upper}]")]
    InvalidBracket { lower: f64, upper: f64 },

    /// The largest budget of the bracket already gives more points than
    /// requested, so no budget inside the bracket can reach the target.
    #[error("error budget {upper} gives {count} points, more than the {target} requested")]
    BracketExcludesCount {
        upper: f64,
        count: usize,
        target: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    /// The function takes the same value at `t_curr` and `t_next`, so the
    /// step update would divide by zero.
    #[error("function is flat between {t_curr} and {t_next}")]
    FlatRegion { t_curr: f64, t_next: f64 },

    #[error(
        "step from {t_curr} did not converge after {iterations} iterations (residual {residual})"
    )]
    StepNonConvergence {
        t_curr: f64,
        iterations: usize,
        residual: f64,
    },

    /// The step converged but does not move past `t_curr`.
    #[error("step from {t_curr} does not advance")]
    StepStalled { t_curr: f64 },

    #[error("non-finite value encountered at {t}")]
    NonFiniteValue { t: f64 },

    #[error("sample sequence exceeds {limit} points")]
    TooManyPoints { limit: usize },

    /// Point `index` is not greater than its predecessor, e.g. after mapping
    /// log space points back to a linear scale where two of them round to
    /// the same value.
    #[error("sample point {index} ({value}) does not exceed the previous point")]
    NotIncreasing { index: usize, value: f64 },

    #[error(
        "no error budget yields exactly {target} points after {iterations} bisection steps \
         (last budget {last_error} gave {last_count} points)"
    )]
    CalibrationNonConvergence {
        target: usize,
        iterations: usize,
        last_count: usize,
        last_error: f64,
    },

    #[error("invalid domain: {0}")]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, SamplingError>;
