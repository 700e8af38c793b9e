//! Quintic boundary-value polynomial.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::polynomial;
use crate::state::KinematicState1D;

/// Degree-5 polynomial in time fitted to start and end kinematic states.
///
/// The six coefficients satisfy value, first and second derivative at
/// `t = 0` and at `t = end_time` exactly (up to floating-point rounding).
///
/// # Example
///
/// ```
/// use trajsample_curves::{Curve, KinematicState1D, QuinticPolynomial};
///
/// // Lateral offset change from 0 to 1.5 over 3 seconds, ending level.
/// let curve = QuinticPolynomial::from_kinematic_states(
///     KinematicState1D::new(0.0, 0.0, 0.0),
///     KinematicState1D::stationary(1.5),
///     3.0,
/// )?;
///
/// let end = curve.state_at(3.0);
/// assert!((end.value - 1.5).abs() < 1e-9);
/// assert!(end.first_derivative.abs() < 1e-9);
/// # Ok::<(), trajsample_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuinticPolynomialFields")]
pub struct QuinticPolynomial {
    coefficients: [f64; 6],
    end_time: f64,
}

impl QuinticPolynomial {
    /// Polynomial degree.
    pub const DEGREE: usize = 5;

    /// Solve the six boundary equations for the given start and end states.
    ///
    /// # Arguments
    ///
    /// * `start` - Value and derivatives at `t = 0`
    /// * `end` - Value and derivatives at `t = end_time`
    /// * `end_time` - Duration of the curve (must be finite and > 0)
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] if `end_time` is not finite and positive.
    pub fn from_kinematic_states(
        start: KinematicState1D,
        end: KinematicState1D,
        end_time: f64,
    ) -> Result<Self, CurveError> {
        let t = CurveError::check_duration("end_time", end_time)?;
        let t2 = t * t;
        let t3 = t2 * t;

        let c0 = start.value;
        let c1 = start.first_derivative;
        let c2 = 0.5 * start.second_derivative;

        // Residuals the cubic, quartic and quintic terms must cover at t = T.
        let value_gap = end.value - (c0 + c1 * t + c2 * t2);
        let velocity_gap = end.first_derivative - (c1 + 2.0 * c2 * t);
        let accel_gap = end.second_derivative - 2.0 * c2;

        let c3 = (10.0 * value_gap - 4.0 * t * velocity_gap + 0.5 * t2 * accel_gap) / t3;
        let c4 = (-15.0 * value_gap + 7.0 * t * velocity_gap - t2 * accel_gap) / (t3 * t);
        let c5 = (6.0 * value_gap - 3.0 * t * velocity_gap + 0.5 * t2 * accel_gap) / (t3 * t2);

        Ok(Self {
            coefficients: [c0, c1, c2, c3, c4, c5],
            end_time: t,
        })
    }

    /// Wrap precomputed coefficients (ascending power order).
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] if `end_time` is not finite and positive.
    pub fn from_coefficients(coefficients: [f64; 6], end_time: f64) -> Result<Self, CurveError> {
        let end_time = CurveError::check_duration("end_time", end_time)?;
        Ok(Self {
            coefficients,
            end_time,
        })
    }

    /// Coefficients in ascending power order.
    #[inline]
    pub fn coefficients(&self) -> &[f64; 6] {
        &self.coefficients
    }
}

/// Serialized form of [`QuinticPolynomial`], checked on the way in.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct QuinticPolynomialFields {
    coefficients: [f64; 6],
    end_time: f64,
}

impl TryFrom<QuinticPolynomialFields> for QuinticPolynomial {
    type Error = CurveError;

    fn try_from(fields: QuinticPolynomialFields) -> Result<Self, CurveError> {
        Self::from_coefficients(fields.coefficients, fields.end_time)
    }
}

impl Curve for QuinticPolynomial {
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

#[cfg(test)]
mod tests {
    use super::*;
    use trajsample_test_helpers::prelude::*;

    fn assert_state(actual: KinematicState1D, expected: KinematicState1D) {
        assert!(
            (actual.value - expected.value).abs() < TOLERANCE,
            "value {} != {}",
            actual.value,
            expected.value
        );
        assert!(
            (actual.first_derivative - expected.first_derivative).abs() < TOLERANCE,
            "first derivative {} != {}",
            actual.first_derivative,
            expected.first_derivative
        );
        assert!(
            (actual.second_derivative - expected.second_derivative).abs() < TOLERANCE,
            "second derivative {} != {}",
            actual.second_derivative,
            expected.second_derivative
        );
    }

    #[test]
    fn test_quintic_reference_scenario() -> Result<(), CurveError> {
        let start = KinematicState1D::new(0.0, -0.1, 0.0);
        let curve = QuinticPolynomial::from_kinematic_states(
            start,
            KinematicState1D::stationary(5.0),
            2.0,
        )?;

        assert_state(curve.state_at(0.0), start);
        assert_state(curve.state_at(2.0), KinematicState1D::stationary(5.0));
        Ok(())
    }

    #[test]
    fn test_quintic_unit_step_coefficients() -> Result<(), CurveError> {
        let curve = QuinticPolynomial::from_kinematic_states(
            KinematicState1D::default(),
            KinematicState1D::stationary(1.0),
            1.0,
        )?;
        // Classic minimum-jerk profile 10t^3 - 15t^4 + 6t^5.
        assert_sequence_close!(
            curve.coefficients(),
            &[0.0, 0.0, 0.0, 10.0, -15.0, 6.0],
            TOLERANCE
        );
        Ok(())
    }

    #[test]
    fn test_quintic_nonzero_terminal_derivatives() -> Result<(), CurveError> {
        let start = KinematicState1D::new(1.0, 2.0, -0.5);
        let end = KinematicState1D::new(-3.0, 0.75, 1.25);
        let curve = QuinticPolynomial::from_kinematic_states(start, end, 4.5)?;

        assert_state(curve.state_at(0.0), start);
        assert_state(curve.state_at(4.5), end);
        Ok(())
    }

    #[test]
    fn test_quintic_rejects_non_positive_end_time() {
        for end_time in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = QuinticPolynomial::from_kinematic_states(
                KinematicState1D::default(),
                KinematicState1D::stationary(1.0),
                end_time,
            );
            assert!(
                matches!(
                    result,
                    Err(CurveError::InvalidDomain {
                        parameter: "end_time",
                        ..
                    })
                ),
                "end_time {} should be rejected",
                end_time
            );
        }
    }

    #[test]
    fn test_quintic_high_orders() {
        let curve = must(QuinticPolynomial::from_coefficients(
            [1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
            1.0,
        ));
        // Fifth derivative of t^5 is 120.
        assert!((curve.evaluate(0.3, 5) - 120.0).abs() < TOLERANCE);
        assert!(curve.evaluate(0.3, 6).abs() < TOLERANCE);
    }

    #[test]
    fn test_quintic_extrapolates_past_end() {
        let curve = must(QuinticPolynomial::from_kinematic_states(
            KinematicState1D::default(),
            KinematicState1D::stationary(1.0),
            1.0,
        ));
        // 10*8 - 15*16 + 6*32 = 32
        assert!((curve.evaluate(2.0, 0) - 32.0).abs() < TOLERANCE);
        assert!((curve.duration() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_quintic_serialization() -> Result<(), serde_json::Error> {
        let curve = must(QuinticPolynomial::from_kinematic_states(
            KinematicState1D::new(0.0, 1.0, 0.0),
            KinematicState1D::stationary(2.0),
            3.0,
        ));
        let json = serde_json::to_string(&curve)?;
        let restored: QuinticPolynomial = serde_json::from_str(&json)?;
        assert_sequence_close!(curve.coefficients(), restored.coefficients(), TOLERANCE);
        assert!((curve.end_time() - restored.end_time()).abs() < TOLERANCE);
        Ok(())
    }

    #[test]
    fn test_quintic_deserialize_validates_end_time() {
        let json = r#"{"coefficients":[1.0,0.0,0.0,0.0,0.0,0.0],"end_time":-1.0}"#;
        let result: Result<QuinticPolynomial, _> = serde_json::from_str(json);
        let err = must_some(result.err(), "negative end_time decoded");
        assert!(err.to_string().contains("got -1"));
    }
}
