//! The immutable result of every sampling operation.

use core::fmt;
use core::ops::Deref;

use crate::error::{DomainError, Result, SamplingError};

/// An immutable, strictly increasing sequence of sample points.
///
/// The first point is the lower bound of the sampled interval and the last
/// point is the upper bound, exactly. A sequence always holds at least two
/// points.
#[derive(Clone, PartialEq)]
pub struct SampleSequence {
    points: Vec<f64>,
    /// The error budget the sequence was generated with.
    error_budget: f64,
}

impl SampleSequence {
    /// Fails unless `points` holds at least two strictly increasing values.
    pub(crate) fn new(points: Vec<f64>, error_budget: f64) -> Result<Self> {
        if points.len() < 2 {
            return Err(DomainError::UnreachableCount(points.len()).into());
        }
        if let Some(index) = points.windows(2).position(|w| w[0] >= w[1]) {
            return Err(SamplingError::NotIncreasing {
                index: index + 1,
                value: points[index + 1],
            });
        }
        Ok(SampleSequence {
            points,
            error_budget,
        })
    }

    /// Applies `f` to every point and overwrites the bounds with `lower` and
    /// `upper`. Fails if the mapped points are no longer strictly increasing,
    /// which happens when `f` rounds neighbouring points to the same value.
    pub(crate) fn map_points<F>(self, f: F, lower: f64, upper: f64) -> Result<Self>
    where
        F: Fn(f64) -> f64,
    {
        let mut points: Vec<f64> = self.points.into_iter().map(f).collect();
        let last = points.len() - 1;
        points[0] = lower;
        points[last] = upper;
        SampleSequence::new(points, self.error_budget)
    }

    /// The sample points in increasing order.
    pub fn points(&self) -> &[f64] {
        &self.points
    }

    /// The error budget used to generate the points. For count calibrated
    /// sequences this is the budget found by the bisection.
    pub fn error_budget(&self) -> f64 {
        self.error_budget
    }

    /// The lower bound of the sampled interval.
    pub fn first(&self) -> f64 {
        self.points[0]
    }

    /// The upper bound of the sampled interval.
    pub fn last(&self) -> f64 {
        self.points[self.points.len() - 1]
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.points
    }
}

impl Deref for SampleSequence {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.points
    }
}

impl From<SampleSequence> for Vec<f64> {
    fn from(seq: SampleSequence) -> Self {
        seq.points
    }
}

impl<'a> IntoIterator for &'a SampleSequence {
    type Item = &'a f64;
    type IntoIter = core::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl fmt::Display for SampleSequence {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        writeln!(fmt, "SampleSequence {{")?;
        writeln!(fmt, "  len: {},", self.len())?;
        writeln!(fmt, "  error_budget: {},", self.error_budget)?;
        writeln!(fmt, "  points: {:?}", self.points)?;
        writeln!(fmt, "}}")?;
        Ok(())
    }
}

impl fmt::Debug for SampleSequence {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("SampleSequence")
            .field("error_budget", &self.error_budget)
            .field("points", &self.points)
            .finish()
    }
}
