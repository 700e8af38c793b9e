//! Quartic boundary-value polynomial.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::polynomial;
use crate::state::KinematicState1D;

/// Degree-4 polynomial in time with a free terminal value.
///
/// Fitted to the full start state plus the first and second derivative at
/// `t = end_time`. The terminal value is whatever the solve produces, which
/// suits speed keeping where the target velocity matters and the final
/// position does not.
///
/// # Example
///
/// ```
/// use trajsample_curves::{Curve, KinematicState1D, QuarticPolynomial};
///
/// // Accelerate from 10 m/s to 15 m/s over 5 seconds, ending at zero acceleration.
/// let curve = QuarticPolynomial::from_kinematic_states(
///     KinematicState1D::new(0.0, 10.0, 0.0),
///     15.0,
///     0.0,
///     5.0,
/// )?;
///
/// assert!((curve.evaluate(5.0, 1) - 15.0).abs() < 1e-9);
/// assert!(curve.evaluate(5.0, 2).abs() < 1e-9);
/// # Ok::<(), trajsample_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuarticPolynomialFields")]
pub struct QuarticPolynomial {
    coefficients: [f64; 5],
    end_time: f64,
}

impl QuarticPolynomial {
    /// Polynomial degree.
    pub const DEGREE: usize = 4;

    /// Solve the five boundary equations.
    ///
    /// # Arguments
    ///
    /// * `start` - Value and derivatives at `t = 0`
    /// * `end_first_derivative` - First derivative at `t = end_time`
    /// * `end_second_derivative` - Second derivative at `t = end_time`
    /// * `end_time` - Duration of the curve (must be finite and > 0)
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] if `end_time` is not finite and positive.
    pub fn from_kinematic_states(
        start: KinematicState1D,
        end_first_derivative: f64,
        end_second_derivative: f64,
        end_time: f64,
    ) -> Result<Self, CurveError> {
        let t = CurveError::check_duration("end_time", end_time)?;
        let t2 = t * t;

        let c0 = start.value;
        let c1 = start.first_derivative;
        let c2 = 0.5 * start.second_derivative;

        let velocity_gap = end_first_derivative - (c1 + 2.0 * c2 * t);
        let accel_gap = end_second_derivative - 2.0 * c2;

        let c3 = (3.0 * velocity_gap - t * accel_gap) / (3.0 * t2);
        let c4 = (t * accel_gap - 2.0 * velocity_gap) / (4.0 * t2 * t);

        Ok(Self {
            coefficients: [c0, c1, c2, c3, c4],
            end_time: t,
        })
    }

    /// Wrap precomputed coefficients (ascending power order).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] if `end_time` is not finite and positive.
    pub fn from_coefficients(coefficients: [f64; 5], end_time: f64) -> Result<Self, CurveError> {
        let end_time = CurveError::check_duration("end_time", end_time)?;
        Ok(Self {
            coefficients,
            end_time,
        })
    }

    /// Coefficients in ascending power order.
    #[inline]
    pub fn coefficients(&self) -> &[f64; 5] {
        &self.coefficients
    }
}

/// Serialized form of [`QuarticPolynomial`], checked on the way in.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuarticPolynomialFields {
    coefficients: [f64; 5],
    end_time: f64,
}

impl TryFrom<QuarticPolynomialFields> for QuarticPolynomial {
    type Error = CurveError;

    fn try_from(fields: QuarticPolynomialFields) -> Result<Self, CurveError> {
        Self::from_coefficients(fields.coefficients, fields.end_time)
    }
}

impl Curve for QuarticPolynomial {
    #[inline]
    fn evaluate(&self, t: f64, order: usize) -> f64 {
        polynomial::evaluate(&self.coefficients, t, order)
    }

    #[inline]
    fn start_time(&self) -> f64 {
        0.0
    }

    #[inline]
    fn end_time(&self) -> f64 {
        self.end_time
    }
}
