//! Kinematic state and knot types.

use serde::{Deserialize, Serialize};

/// Value and first two time derivatives along one planning axis.
///
/// Typically position, velocity and acceleration along the longitudinal
/// or lateral axis at the start of a planning cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState1D {
    /// Value (e.g. position).
    pub value: f64,
    /// First time derivative (e.g. velocity).
    pub first_derivative: f64,
    /// Second time derivative (e.g. acceleration).
    pub second_derivative: f64,
}

impl KinematicState1D {
    /// Create a state from value, first and second derivative.
    #[inline]
    pub const fn new(value: f64, first_derivative: f64, second_derivative: f64) -> Self {
        Self {
            value,
            first_derivative,
            second_derivative,
        }
    }

    /// State at rest at `value` (both derivatives zero).
    #[inline]
    pub const fn stationary(value: f64) -> Self {
        Self::new(value, 0.0, 0.0)
    }

    /// Derivative of the given order: 0 is the value, 1 and 2 the derivatives.
    ///
    /// Orders above 2 are not tracked and return `None`.
    pub fn derivative(&self, order: usize) -> Option<f64> {
        match order {
            0 => Some(self.value),
            1 => Some(self.first_derivative),
            2 => Some(self.second_derivative),
            _ => None,
        }
    }
}

impl From<(f64, f64, f64)> for KinematicState1D {
    fn from((value, first_derivative, second_derivative): (f64, f64, f64)) -> Self {
        Self::new(value, first_derivative, second_derivative)
    }
}

impl From<[f64; 3]> for KinematicState1D {
    fn from([value, first_derivative, second_derivative]: [f64; 3]) -> Self {
        Self::new(value, first_derivative, second_derivative)
    }
}

impl From<KinematicState1D> for [f64; 3] {
    fn from(state: KinematicState1D) -> Self {
        [state.value, state.first_derivative, state.second_derivative]
    }
}

/// A knot of a piecewise curve: a time and the kinematic state there.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    /// Knot time.
    pub time: f64,
    /// Value at the knot.
    pub value: f64,
    /// First derivative at the knot.
    pub first_derivative: f64,
    /// Second derivative at the knot.
    pub second_derivative: f64,
}

impl Waypoint {
    /// Create a waypoint from its four components.
    #[inline]
    pub const fn new(time: f64, value: f64, first_derivative: f64, second_derivative: f64) -> Self {
        Self {
            time,
            value,
            first_derivative,
            second_derivative,
        }
    }

    /// Waypoint carrying `state` at `time`.
    #[inline]
    pub const fn from_state(time: f64, state: KinematicState1D) -> Self {
        Self::new(
            time,
            state.value,
            state.first_derivative,
            state.second_derivative,
        )
    }

    /// Stationary knot: `value` at `time` with zero first and second derivative.
    #[inline]
    pub const fn stationary(time: f64, value: f64) -> Self {
        Self::new(time, value, 0.0, 0.0)
    }

    /// The kinematic state at this knot, without its time.
    #[inline]
    pub const fn state(&self) -> KinematicState1D {
        KinematicState1D::new(self.value, self.first_derivative, self.second_derivative)
    }
}

impl From<[f64; 4]> for Waypoint {
    fn from([time, value, first_derivative, second_derivative]: [f64; 4]) -> Self {
        Self::new(time, value, first_derivative, second_derivative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_conversions() {
        let from_tuple = KinematicState1D::from((1.0, -0.5, 0.25));
        let from_array = KinematicState1D::from([1.0, -0.5, 0.25]);
        assert_eq!(from_tuple, from_array);

        let back: [f64; 3] = from_tuple.into();
        assert_eq!(back, [1.0, -0.5, 0.25]);
    }

    #[test]
    fn test_state_derivative_orders() {
        let state = KinematicState1D::new(3.0, 2.0, 1.0);
        assert_eq!(state.derivative(0), Some(3.0));
        assert_eq!(state.derivative(1), Some(2.0));
        assert_eq!(state.derivative(2), Some(1.0));
        assert_eq!(state.derivative(3), None);
    }

    #[test]
    fn test_waypoint_stationary() {
        let knot = Waypoint::stationary(10.0, -2.0);
        assert_eq!(knot.state(), KinematicState1D::stationary(-2.0));
        assert!((knot.time - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_waypoint_from_state_round_trip() {
        let state = KinematicState1D::new(0.0, -0.1, 0.0);
        let knot = Waypoint::from_state(0.0, state);
        assert_eq!(knot.state(), state);
        assert_eq!(Waypoint::from([0.0, 0.0, -0.1, 0.0]), knot);
    }

    #[test]
    fn test_state_serialization() -> Result<(), serde_json::Error> {
        let state = KinematicState1D::new(1.5, 0.5, -0.25);
        let json = serde_json::to_string(&state)?;
        let restored: KinematicState1D = serde_json::from_str(&json)?;
        assert_eq!(state, restored);
        Ok(())
    }
}
