//! Runtime-selected sampler and curve.

use serde::{Deserialize, Serialize};
use trajsample_curves::{
    Curve, CurveError, KinematicState1D, PiecewiseQuinticPolynomial, QuarticPolynomial,
    QuinticPolynomial,
};

use crate::piecewise::PiecewiseQuinticSampler;
use crate::quartic::QuarticSampler;
use crate::quintic::QuinticSampler;
use crate::sampler::{CurveSet, SampleMode, Sampler};

/// A curve produced by any of the samplers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnyCurve {
    /// Quartic polynomial.
    Quartic(QuarticPolynomial),
    /// Quintic polynomial.
    Quintic(QuinticPolynomial),
    /// Piecewise quintic curve.
    PiecewiseQuintic(PiecewiseQuinticPolynomial),
}

impl Curve for AnyCurve {
    fn evaluate(&self, t: f64, order: usize) -> f64 {
        match self {
            AnyCurve::Quartic(curve) => curve.evaluate(t, order),
            AnyCurve::Quintic(curve) => curve.evaluate(t, order),
            AnyCurve::PiecewiseQuintic(curve) => curve.evaluate(t, order),
        }
    }

    fn start_time(&self) -> f64 {
        match self {
            AnyCurve::Quartic(curve) => curve.start_time(),
            AnyCurve::Quintic(curve) => curve.start_time(),
            AnyCurve::PiecewiseQuintic(curve) => curve.start_time(),
        }
    }

    fn end_time(&self) -> f64 {
        match self {
            AnyCurve::Quartic(curve) => curve.end_time(),
            AnyCurve::Quintic(curve) => curve.end_time(),
            AnyCurve::PiecewiseQuintic(curve) => curve.end_time(),
        }
    }
}

impl From<QuarticPolynomial> for AnyCurve {
    fn from(curve: QuarticPolynomial) -> Self {
        AnyCurve::Quartic(curve)
    }
}

impl From<QuinticPolynomial> for AnyCurve {
    fn from(curve: QuinticPolynomial) -> Self {
        AnyCurve::Quintic(curve)
    }
}

impl From<PiecewiseQuinticPolynomial> for AnyCurve {
    fn from(curve: PiecewiseQuinticPolynomial) -> Self {
        AnyCurve::PiecewiseQuintic(curve)
    }
}

/// One of the three samplers, chosen at runtime.
#[derive(Clone, Debug, PartialEq)]
pub enum AnySampler {
    /// Terminal-derivative sampling.
    Quartic(QuarticSampler),
    /// Terminal-value sampling.
    Quintic(QuinticSampler),
    /// Multi-segment sampling.
    PiecewiseQuintic(PiecewiseQuinticSampler),
}

impl AnySampler {
    /// Short name used in logs and reports.
    pub fn kind(&self) -> &'static str {
        match self {
            AnySampler::Quartic(_) => "quartic",
            AnySampler::Quintic(_) => "quintic",
            AnySampler::PiecewiseQuintic(_) => "piecewise_quintic",
        }
    }
}

impl Sampler for AnySampler {
    type Curve = AnyCurve;

    fn sample(
        &self,
        start: KinematicState1D,
        mode: SampleMode,
    ) -> Result<CurveSet<AnyCurve>, CurveError> {
        Ok(match self {
            AnySampler::Quartic(s) => s.sample(start, mode)?.map(AnyCurve::from),
            AnySampler::Quintic(s) => s.sample(start, mode)?.map(AnyCurve::from),
            AnySampler::PiecewiseQuintic(s) => s.sample(start, mode)?.map(AnyCurve::from),
        })
    }

    fn candidate_count(&self) -> usize {
        match self {
            AnySampler::Quartic(s) => s.candidate_count(),
            AnySampler::Quintic(s) => s.candidate_count(),
            AnySampler::PiecewiseQuintic(s) => s.candidate_count(),
        }
    }
}
