//! Piecewise quintic curve over a knot table.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::quintic::QuinticPolynomial;
use crate::state::Waypoint;

/// Sequence of quintic segments joined at knots.
///
/// Segment `i` is solved independently from knots `i` and `i + 1`, in local
/// time starting at 0. Both sides of a shared knot are fitted to the same
/// value, first and second derivative, so the composite curve is C2 at
/// every internal knot.
///
/// Global evaluation dispatches to the segment whose interval
/// `[knot_i.time, knot_{i+1}.time)` contains the query time. Queries before
/// the first knot use the first segment and queries at or after the last
/// knot use the last one, extrapolating in both cases.
///
/// # Example
///
/// ```
/// use trajsample_curves::{Curve, PiecewiseQuinticPolynomial, Waypoint};
///
/// let curve = PiecewiseQuinticPolynomial::from_knots(&[
///     Waypoint::new(0.0, 0.0, -0.1, 0.0),
///     Waypoint::stationary(10.0, 1.0),
///     Waypoint::stationary(20.0, -1.0),
/// ])?;
///
/// assert_eq!(curve.segment_count(), 2);
/// assert!((curve.evaluate(10.0, 0) - 1.0).abs() < 1e-9);
/// assert!((curve.evaluate(20.0, 0) + 1.0).abs() < 1e-9);
/// # Ok::<(), trajsample_curves::CurveError>(())
/// ```
///
/// Deserialization re-solves every segment from the knot table, so a
/// decoded curve always agrees with its knots.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PiecewiseFields")]
pub struct PiecewiseQuinticPolynomial {
    knots: Vec<Waypoint>,
    segments: Vec<QuinticPolynomial>,
}

impl PiecewiseQuinticPolynomial {
    /// Build one quintic segment per consecutive knot pair.
    ///
    /// # Errors
    ///
    /// * [`CurveError::InsufficientKnots`] if fewer than two knots are given
    /// * [`CurveError::InvalidDomain`] if knot times do not strictly increase
    pub fn from_knots(knots: &[Waypoint]) -> Result<Self, CurveError> {
        if knots.len() < 2 {
            return Err(CurveError::InsufficientKnots { count: knots.len() });
        }

        let segments = knots
            .windows(2)
            .map(|pair| match pair {
                [from, to] => QuinticPolynomial::from_kinematic_states(
                    from.state(),
                    to.state(),
                    CurveError::check_duration("segment_duration", to.time - from.time)?,
                ),
                _ => Err(CurveError::InsufficientKnots { count: pair.len() }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            knots: knots.to_vec(),
            segments,
        })
    }

    /// The knot table the curve was built from.
    #[inline]
    pub fn knots(&self) -> &[Waypoint] {
        &self.knots
    }

    /// Segments in knot order, each in local time.
    #[inline]
    pub fn segments(&self) -> &[QuinticPolynomial] {
        &self.segments
    }

    /// Number of segments (one less than the number of knots).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Index of the segment that evaluates global time `t`.
    pub fn segment_index_at(&self, t: f64) -> usize {
        // Knots after the first whose time is <= t.
        let passed = self
            .knots
            .get(1..)
            .map_or(0, |rest| rest.partition_point(|knot| knot.time <= t));
        passed.min(self.segments.len().saturating_sub(1))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PiecewiseFields {
    knots: Vec<Waypoint>,
    segments: Vec<QuinticPolynomial>,
}

impl TryFrom<PiecewiseFields> for PiecewiseQuinticPolynomial {
    type Error = CurveError;

    fn try_from(fields: PiecewiseFields) -> Result<Self, CurveError> {
        let curve = Self::from_knots(&fields.knots)?;
        if fields.segments.len() != curve.segment_count() {
            return Err(CurveError::SegmentMismatch {
                knots: fields.knots.len(),
                segments: fields.segments.len(),
            });
        }
        Ok(curve)
    }
}

impl Curve for PiecewiseQuinticPolynomial {
    fn evaluate(&self, t: f64, order: usize) -> f64 {
        let index = self.segment_index_at(t);
        match (self.segments.get(index), self.knots.get(index)) {
            (Some(segment), Some(knot)) => segment.evaluate(t - knot.time, order),
            _ => 0.0,
        }
    }

    #[inline]
    fn start_time(&self) -> f64 {
        self.knots.first().map_or(0.0, |knot| knot.time)
    }

    #[inline]
    fn end_time(&self) -> f64 {
        self.knots.last().map_or(0.0, |knot| knot.time)
    }
}
