//! Multi-segment sampler over uniformly spaced stationary knots.

use serde::{Deserialize, Serialize};
use tracing::debug;
use trajsample_curves::{CurveError, KinematicState1D, PiecewiseQuinticPolynomial, Waypoint};

use crate::grid::{self, ProductIter};
use crate::lazy::LazySequence;
use crate::sampler::{CurveSet, SampleMode, Sampler};

/// Piecewise quintic candidates with 1 to `max_segment_count` segments.
///
/// For `k` segments the knot times are `0, delta_t, ..., k·delta_t`. Knot 0 is
/// the start state; each later knot takes a value from `x_candidates` and has
/// zero first and second derivatives. Every `k`-fold assignment is produced,
/// so the candidate count is `Σ |x_candidates|^k`.
///
/// # Example
///
/// ```
/// use trajsample_curves::KinematicState1D;
/// use trajsample_sampler::{PiecewiseQuinticSampler, SampleMode, Sampler};
///
/// let sampler = PiecewiseQuinticSampler::new(10.0, 2, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
/// assert_eq!(sampler.candidate_count(), 30);
///
/// let set = sampler.sample(KinematicState1D::new(0.0, -0.1, 0.0), SampleMode::Lazy)?;
/// assert_eq!(set.len(), 30);
/// # Ok::<(), trajsample_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PiecewiseQuinticSampler {
    delta_t: f64,
    max_segment_count: usize,
    x_candidates: Vec<f64>,
}

impl PiecewiseQuinticSampler {
    /// Configure segment duration, segment limit and knot value candidates.
    pub fn new(delta_t: f64, max_segment_count: usize, x_candidates: Vec<f64>) -> Self {
        Self {
            delta_t,
            max_segment_count,
            x_candidates,
        }
    }

    /// Duration of every segment.
    pub fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Largest segment count sampled.
    pub fn max_segment_count(&self) -> usize {
        self.max_segment_count
    }

    /// Values each non-initial knot ranges over.
    pub fn x_candidates(&self) -> &[f64] {
        &self.x_candidates
    }

    /// Number of candidates with exactly `segments` segments.
    pub fn count_for(&self, segments: usize) -> usize {
        grid::product_len(self.x_candidates.len(), segments)
    }

    /// Every knot table in enumeration order.
    ///
    /// Segment count ascends; within one count the last knot varies fastest.
    pub fn knot_tables(
        &self,
        start: KinematicState1D,
    ) -> impl Iterator<Item = Vec<Waypoint>> + '_ {
        let max = if self.x_candidates.is_empty() {
            0
        } else {
            self.max_segment_count
        };
        (1..=max).flat_map(move |segments| {
            ProductIter::new(&self.x_candidates, segments)
                .map(move |values| self.knot_table(start, &values))
        })
    }

    fn knot_table(&self, start: KinematicState1D, values: &[f64]) -> Vec<Waypoint> {
        let mut knots = Vec::with_capacity(values.len().saturating_add(1));
        knots.push(Waypoint::from_state(0.0, start));
        let mut step = 0.0_f64;
        for &value in values {
            step += 1.0;
            knots.push(Waypoint::stationary(step * self.delta_t, value));
        }
        knots
    }
}

impl Sampler for PiecewiseQuinticSampler {
    type Curve = PiecewiseQuinticPolynomial;

    fn sample(
        &self,
        start: KinematicState1D,
        mode: SampleMode,
    ) -> Result<CurveSet<PiecewiseQuinticPolynomial>, CurveError> {
        let count = self.candidate_count();
        debug!(
            sampler = "piecewise_quintic",
            ?mode,
            candidates = count,
            max_segment_count = self.max_segment_count,
            "Sampling candidates"
        );

        match mode {
            SampleMode::Eager => self
                .knot_tables(start)
                .map(|knots| PiecewiseQuinticPolynomial::from_knots(&knots))
                .collect::<Result<Vec<_>, _>>()
                .map(CurveSet::Eager),
            SampleMode::Lazy => {
                let mut seq = LazySequence::with_capacity(count);
                for knots in self.knot_tables(start) {
                    seq.push(move || PiecewiseQuinticPolynomial::from_knots(&knots));
                }
                Ok(CurveSet::Lazy(seq))
            }
        }
    }

    fn candidate_count(&self) -> usize {
        match self.x_candidates.len() {
            0 => return 0,
            1 => return self.max_segment_count,
            _ => {}
        }
        // For two or more candidates the sum overflows within 64 terms.
        (1..=self.max_segment_count)
            .map(|segments| self.count_for(segments))
            .try_fold(0usize, |total, n| total.checked_add(n))
            .unwrap_or(usize::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trajsample_curves::Curve;
    use trajsample_test_helpers::prelude::*;

    fn reference() -> PiecewiseQuinticSampler {
        PiecewiseQuinticSampler::new(10.0, 2, vec![-2.0, -1.0, 0.0, 1.0, 2.0])
    }

    fn start() -> KinematicState1D {
        KinematicState1D::new(0.0, -0.1, 0.0)
    }

    #[test]
    fn test_reference_counts() -> TestResult {
        let curves = reference().sample(start(), SampleMode::Eager)?.into_curves()?;
        assert_eq!(curves.len(), 30);
        assert_eq!(curves.iter().filter(|c| c.segment_count() == 1).count(), 5);
        assert_eq!(curves.iter().filter(|c| c.segment_count() == 2).count(), 25);
        Ok(())
    }

    #[test]
    fn test_two_segment_curves_rest_on_knot_one() -> TestResult {
        let sampler = reference();
        let curves = sampler.sample(start(), SampleMode::Eager)?.into_curves()?;
        for (curve, knots) in curves.iter().zip(sampler.knot_tables(start())).skip(5) {
            let knot = must_some(knots.get(1), "knot 1");
            assert_approx_eq!(curve.evaluate(10.0, 0), knot.value, 1e-9);
            assert_approx_eq!(curve.evaluate(10.0, 1), 0.0, 1e-9);
            assert_approx_eq!(curve.evaluate(10.0, 2), 0.0, 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_knot_table_order() {
        let sampler = PiecewiseQuinticSampler::new(1.0, 2, vec![0.0, 1.0]);
        let values: Vec<Vec<f64>> = sampler
            .knot_tables(KinematicState1D::default())
            .map(|knots| knots.iter().skip(1).map(|k| k.value).collect())
            .collect();
        assert_eq!(
            values,
            vec![
                vec![0.0],
                vec![1.0],
                vec![0.0, 0.0],
                vec![0.0, 1.0],
                vec![1.0, 0.0],
                vec![1.0, 1.0],
            ]
        );
    }

    #[test]
    fn test_knot_times_and_start() {
        let sampler = PiecewiseQuinticSampler::new(2.5, 3, vec![4.0]);
        let tables: Vec<Vec<Waypoint>> = sampler.knot_tables(start()).collect();
        assert_eq!(tables.len(), 3);
        let longest = must_some(tables.last(), "three-segment table");
        let times: Vec<f64> = longest.iter().map(|k| k.time).collect();
        assert_eq!(times, vec![0.0, 2.5, 5.0, 7.5]);
        assert_eq!(longest.first().map(Waypoint::state), Some(start()));
        assert!(
            longest
                .iter()
                .skip(1)
                .all(|k| k.first_derivative == 0.0 && k.second_derivative == 0.0)
        );
    }

    #[test]
    fn test_empty_configurations() -> TestResult {
        let no_segments = PiecewiseQuinticSampler::new(10.0, 0, vec![1.0]);
        assert_eq!(no_segments.candidate_count(), 0);
        assert!(no_segments.sample(start(), SampleMode::Eager)?.is_empty());

        let no_values = PiecewiseQuinticSampler::new(10.0, 3, vec![]);
        assert_eq!(no_values.candidate_count(), 0);
        assert!(no_values.sample(start(), SampleMode::Lazy)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_bad_delta_t() -> TestResult {
        let sampler = PiecewiseQuinticSampler::new(0.0, 1, vec![1.0]);
        assert!(matches!(
            sampler.sample(start(), SampleMode::Eager),
            Err(CurveError::InvalidDomain { .. })
        ));
        let set = sampler.sample(start(), SampleMode::Lazy)?;
        assert_eq!(set.len(), 1);
        assert!(set.get(0).is_some_and(|r| r.is_err()));
        Ok(())
    }

    #[test]
    fn test_no_values_with_unbounded_segments() -> TestResult {
        let sampler = PiecewiseQuinticSampler::new(1.0, usize::MAX, vec![]);
        assert_eq!(sampler.candidate_count(), 0);
        assert_eq!(sampler.knot_tables(start()).count(), 0);
        assert!(sampler.sample(start(), SampleMode::Eager)?.is_empty());
        assert!(sampler.sample(start(), SampleMode::Lazy)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_single_value_count_is_segment_limit() {
        let sampler = PiecewiseQuinticSampler::new(1.0, usize::MAX, vec![3.0]);
        assert_eq!(sampler.candidate_count(), usize::MAX);
        let sampler = PiecewiseQuinticSampler::new(1.0, 1_000_000, vec![3.0]);
        assert_eq!(sampler.candidate_count(), 1_000_000);
    }

    #[test]
    fn test_candidate_count_saturates() {
        let sampler = PiecewiseQuinticSampler::new(1.0, 200, vec![0.0, 1.0, 2.0]);
        assert_eq!(sampler.candidate_count(), usize::MAX);
    }
}
