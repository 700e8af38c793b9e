//! Speed-keeping sampler: terminal first derivative is the controlled quantity.

use serde::{Deserialize, Serialize};
use tracing::debug;
use trajsample_curves::{CurveError, KinematicState1D, QuarticPolynomial};

use crate::grid;
use crate::lazy::LazySequence;
use crate::sampler::{CurveSet, SampleMode, Sampler, TerminalCondition};

/// Single-segment quartic candidates over `end_dx_candidates × end_t_candidates`.
///
/// Enumeration is derivative-major, time-minor. The terminal value is free
/// and the terminal second derivative is 0.
///
/// # Example
///
/// ```
/// use trajsample_curves::KinematicState1D;
/// use trajsample_sampler::{QuarticSampler, SampleMode, Sampler};
///
/// let sampler = QuarticSampler::new(vec![10.0, 15.0], vec![3.0, 5.0]);
/// let set = sampler.sample(KinematicState1D::new(0.0, 12.0, 0.0), SampleMode::Eager)?;
/// assert_eq!(set.len(), 4);
/// # Ok::<(), trajsample_curves::CurveError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuarticSampler {
    end_dx_candidates: Vec<f64>,
    end_t_candidates: Vec<f64>,
}

impl QuarticSampler {
    /// Configure the candidate sets.
    pub fn new(end_dx_candidates: Vec<f64>, end_t_candidates: Vec<f64>) -> Self {
        Self {
            end_dx_candidates,
            end_t_candidates,
        }
    }

    /// Terminal first-derivative candidates (outer loop).
    pub fn end_dx_candidates(&self) -> &[f64] {
        &self.end_dx_candidates
    }

    /// Terminal time candidates (inner loop).
    pub fn end_t_candidates(&self) -> &[f64] {
        &self.end_t_candidates
    }

    /// The candidate grid in enumeration order; `target` is the terminal derivative.
    pub fn terminal_conditions(&self) -> impl Iterator<Item = TerminalCondition> + '_ {
        grid::pairs(&self.end_dx_candidates, &self.end_t_candidates).map(|(dx, t)| {
            TerminalCondition {
                end_time: t,
                target: dx,
            }
        })
    }

    /// Build one candidate directly.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] if `end_time` is not positive.
    pub fn sample_one(
        &self,
        start: KinematicState1D,
        end_time: f64,
        end_first_derivative: f64,
    ) -> Result<QuarticPolynomial, CurveError> {
        QuarticPolynomial::from_kinematic_states(start, end_first_derivative, 0.0, end_time)
    }
}

impl Sampler for QuarticSampler {
    type Curve = QuarticPolynomial;

    fn sample(
        &self,
        start: KinematicState1D,
        mode: SampleMode,
    ) -> Result<CurveSet<QuarticPolynomial>, CurveError> {
        let count = self.candidate_count();
        debug!(sampler = "quartic", ?mode, candidates = count, "Sampling candidates");

        match mode {
            SampleMode::Eager => self
                .terminal_conditions()
                .map(|c| self.sample_one(start, c.end_time, c.target))
                .collect::<Result<Vec<_>, _>>()
                .map(CurveSet::Eager),
            SampleMode::Lazy => {
                let mut seq = LazySequence::with_capacity(count);
                for c in self.terminal_conditions() {
                    seq.push(move || {
                        QuarticPolynomial::from_kinematic_states(start, c.target, 0.0, c.end_time)
                    });
                }
                Ok(CurveSet::Lazy(seq))
            }
        }
    }

    fn candidate_count(&self) -> usize {
        self.end_dx_candidates
            .len()
            .saturating_mul(self.end_t_candidates.len())
    }
}
