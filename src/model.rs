//! Local error model driving the step size.

/// The local interpolation error model used to size each step.
///
/// A step of length _h_ is accepted when _h · |f(t + h) − f(t)| = C_, where
/// `C = error · scale`. `order` is the exponent _p_ of the fixed point update
///
/// ```text
/// h ← (C · h^(p−1) / |Δf|)^(1/p)
/// ```
///
/// Larger orders damp the update more strongly.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorModel {
    /// The exponent _p_ of the fixed point update.
    pub order: i32,
    /// Multiplies the error budget to give the step constant `C`.
    pub scale: f64,
}

impl ErrorModel {
    /// Quintic local truncation error model: `p = 8`, `scale = sqrt(120)`.
    pub const QUINTIC: ErrorModel = ErrorModel::new(8, 10.954_451_150_103_322);

    pub const fn new(order: i32, scale: f64) -> Self {
        ErrorModel { order, scale }
    }

    /// The step constant `C` for a given error budget.
    pub fn step_constant(&self, error: f64) -> f64 {
        error * self.scale
    }

    /// One fixed point update of the step length `h` given the observed
    /// function change `diff_f`, which must be non-zero.
    pub(crate) fn refine(&self, c: f64, h: f64, diff_f: f64) -> f64 {
        let p = f64::from(self.order);
        (c * h.abs().powi(self.order - 1) / diff_f.abs()).powf(p.recip())
    }
}

impl Default for ErrorModel {
    fn default() -> Self {
        ErrorModel::QUINTIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_quintic_scale() {
        assert_eq!(ErrorModel::QUINTIC.order, 8);
        assert_relative_eq!(ErrorModel::QUINTIC.scale, 120.0_f64.sqrt(), max_relative = 1e-15);
        assert_eq!(ErrorModel::default(), ErrorModel::QUINTIC);
    }

    #[test]
    fn test_refine_fixed_point() {
        // For f(x) = x the fixed point is h = sqrt(C).
        let model = ErrorModel::QUINTIC;
        let c = model.step_constant(0.01);
        let h = c.sqrt();
        assert_relative_eq!(model.refine(c, h, h), h, max_relative = 1e-12);
    }

    #[test]
    fn test_refine_contracts_towards_fixed_point() {
        let model = ErrorModel::QUINTIC;
        let c: f64 = 0.25;
        let target = c.sqrt();
        let mut h = 1e-3;
        for _ in 0..200 {
            h = model.refine(c, h, h);
        }
        assert_relative_eq!(h, target, max_relative = 1e-9);
    }
}
