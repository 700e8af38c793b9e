//! Error types for curve construction.

/// Error type for curve construction.
///
/// Curve evaluation never fails; every variant is raised while solving
/// boundary conditions or assembling a knot table.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    /// A duration parameter is not strictly positive and finite.
    ///
    /// Raised for a terminal time candidate `<= 0` or for a knot table
    /// whose consecutive knot times do not strictly increase.
    #[error("Invalid curve domain: {parameter} must be finite and > 0, got {value}")]
    InvalidDomain {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// The invalid value.
        value: f64,
    },

    /// A knot table holds fewer than the two knots a segment needs.
    #[error("Piecewise curve needs at least 2 knots, got {count}")]
    InsufficientKnots {
        /// Number of knots supplied.
        count: usize,
    },

    /// A decoded piecewise curve lists a segment count its knots do not fit.
    #[error("Piecewise curve with {knots} knots cannot hold {segments} segments")]
    SegmentMismatch {
        /// Number of knots decoded.
        knots: usize,
        /// Number of segments decoded.
        segments: usize,
    },
}

impl CurveError {
    /// Check that a duration is finite and strictly positive.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] naming `parameter` otherwise.
    pub fn check_duration(parameter: &'static str, value: f64) -> Result<f64, CurveError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(CurveError::InvalidDomain { parameter, value })
        }
    }
}
