//! The evaluation interface shared by every curve.

use crate::state::KinematicState1D;

/// A curve in one variable over time, evaluable at any derivative order.
///
/// Evaluation is a pure function of `(t, order)`. Times outside
/// `[start_time, end_time]` are extrapolated, never clamped; callers
/// that need domain checks perform them themselves.
pub trait Curve {
    /// Evaluate the `order`-th time derivative at `t`.
    ///
    /// Orders beyond the polynomial degree return `0.0`.
    fn evaluate(&self, t: f64, order: usize) -> f64;

    /// Start of the curve's domain.
    fn start_time(&self) -> f64;

    /// End of the curve's domain.
    fn end_time(&self) -> f64;

    /// Length of the domain.
    fn duration(&self) -> f64 {
        self.end_time() - self.start_time()
    }

    /// Value, first and second derivative at `t`.
    fn state_at(&self, t: f64) -> KinematicState1D {
        KinematicState1D::new(
            self.evaluate(t, 0),
            self.evaluate(t, 1),
            self.evaluate(t, 2),
        )
    }

    /// Evaluate the `order`-th derivative at every time in `times`.
    fn evaluate_many(&self, times: &[f64], order: usize) -> Vec<f64> {
        times.iter().map(|&t| self.evaluate(t, order)).collect()
    }
}

impl<C: Curve + ?Sized> Curve for &C {
    #[inline]
    fn evaluate(&self, t: f64, order: usize) -> f64 {
        (**self).evaluate(t, order)
    }

    #[inline]
    fn start_time(&self) -> f64 {
        (**self).start_time()
    }

    #[inline]
    fn end_time(&self) -> f64 {
        (**self).end_time()
    }
}
