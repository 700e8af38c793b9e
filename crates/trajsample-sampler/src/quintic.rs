//! Offset sampler: terminal value is the controlled quantity.

use serde::{Deserialize, Serialize};
use tracing::debug;
use trajsample_curves::{CurveError, KinematicState1D, QuinticPolynomial};

use crate::grid;
use crate::lazy::LazySequence;
use crate::sampler::{CurveSet, SampleMode, Sampler, TerminalCondition};

/// Single-segment quintic candidates over `end_x_candidates × end_t_candidates`.
///
/// Enumeration is value-major, time-minor. Each curve comes to rest at its
/// target: terminal first and second derivatives are 0.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuinticSampler {
    end_x_candidates: Vec<f64>,
    end_t_candidates: Vec<f64>,
}

impl QuinticSampler {
    /// Configure the candidate sets.
    pub fn new(end_x_candidates: Vec<f64>, end_t_candidates: Vec<f64>) -> Self {
        Self {
            end_x_candidates,
            end_t_candidates,
        }
    }

    /// Terminal value candidates (outer loop).
    pub fn end_x_candidates(&self) -> &[f64] {
        &self.end_x_candidates
    }

    /// Terminal time candidates (inner loop).
    pub fn end_t_candidates(&self) -> &[f64] {
        &self.end_t_candidates
    }

    /// The candidate grid in enumeration order; `target` is the terminal value.
    pub fn terminal_conditions(&self) -> impl Iterator<Item = TerminalCondition> + '_ {
        grid::pairs(&self.end_x_candidates, &self.end_t_candidates).map(|(x, t)| {
            TerminalCondition {
                end_time: t,
                target: x,
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
        end_value: f64,
    ) -> Result<QuinticPolynomial, CurveError> {
        build(start, end_time, end_value)
    }
}

fn build(
    start: KinematicState1D,
    end_time: f64,
    end_value: f64,
) -> Result<QuinticPolynomial, CurveError> {
    QuinticPolynomial::from_kinematic_states(
        start,
        KinematicState1D::stationary(end_value),
        end_time,
    )
}

impl Sampler for QuinticSampler {
    type Curve = QuinticPolynomial;

    fn sample(
        &self,
        start: KinematicState1D,
        mode: SampleMode,
    ) -> Result<CurveSet<QuinticPolynomial>, CurveError> {
        let count = self.candidate_count();
        debug!(sampler = "quintic", ?mode, candidates = count, "Sampling candidates");

        match mode {
            SampleMode::Eager => self
                .terminal_conditions()
                .map(|c| build(start, c.end_time, c.target))
                .collect::<Result<Vec<_>, _>>()
                .map(CurveSet::Eager),
            SampleMode::Lazy => {
                let mut seq = LazySequence::with_capacity(count);
                for c in self.terminal_conditions() {
                    seq.push(move || build(start, c.end_time, c.target));
                }
                Ok(CurveSet::Lazy(seq))
            }
        }
    }

    fn candidate_count(&self) -> usize {
        self.end_x_candidates
            .len()
            .saturating_mul(self.end_t_candidates.len())
    }
}
