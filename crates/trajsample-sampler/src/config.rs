//! Serializable sampler configuration.
//!
//! ```yaml
//! kind: piecewise_quintic
//! delta_t: 10.0
//! max_segment_count: 2
//! x_candidates: [-2.0, -1.0, 0.0, 1.0, 2.0]
//! ```

use serde::{Deserialize, Serialize};
use trajsample_curves::CurveError;

use crate::any::AnySampler;
use crate::piecewise::PiecewiseQuinticSampler;
use crate::quartic::QuarticSampler;
use crate::quintic::QuinticSampler;

/// Sampler selection plus its candidate sets, tagged by `kind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SamplerConfig {
    /// `end_dx_candidates` and `end_t_candidates`.
    Quartic(QuarticSampler),
    /// `end_x_candidates` and `end_t_candidates`.
    Quintic(QuinticSampler),
    /// `delta_t`, `max_segment_count` and `x_candidates`.
    PiecewiseQuintic(PiecewiseQuinticSampler),
}

impl SamplerConfig {
    /// Instantiate the configured sampler.
    pub fn build(&self) -> AnySampler {
        match self {
            SamplerConfig::Quartic(s) => AnySampler::Quartic(s.clone()),
            SamplerConfig::Quintic(s) => AnySampler::Quintic(s.clone()),
            SamplerConfig::PiecewiseQuintic(s) => AnySampler::PiecewiseQuintic(s.clone()),
        }
    }

    /// Check every duration the sampler would build with.
    ///
    /// Samplers do not call this; without it, a bad duration fails at
    /// construction time instead.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidDomain`] for the first time candidate
    /// or `delta_t` that is not finite and positive.
    pub fn validate(&self) -> Result<(), CurveError> {
        match self {
            SamplerConfig::Quartic(s) => check_all(s.end_t_candidates()),
            SamplerConfig::Quintic(s) => check_all(s.end_t_candidates()),
            SamplerConfig::PiecewiseQuintic(s) => {
                CurveError::check_duration("delta_t", s.delta_t()).map(|_| ())
            }
        }
    }
}

fn check_all(end_times: &[f64]) -> Result<(), CurveError> {
    end_times
        .iter()
        .try_for_each(|&t| CurveError::check_duration("end_time", t).map(|_| ()))
}
