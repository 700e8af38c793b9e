//! Prelude for the sampler crate.
//!
//! Re-exports the samplers, their result types and the curve types they
//! produce.

pub use crate::any::{AnyCurve, AnySampler};
pub use crate::config::SamplerConfig;
pub use crate::error::SamplerError;
pub use crate::lazy::LazySequence;
pub use crate::observation::{KinematicsAdapter, ObservationKind, PlanarStartState};
pub use crate::piecewise::PiecewiseQuinticSampler;
pub use crate::quartic::QuarticSampler;
pub use crate::quintic::QuinticSampler;
pub use crate::sampler::{CurveSet, SampleMode, Sampler, TerminalCondition};

pub use trajsample_curves::prelude::*;
