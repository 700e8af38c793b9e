//! Candidate Trajectory Samplers for trajsample
//!
//! This crate enumerates bounded sets of candidate curves from a start
//! state, for a downstream selector to score and filter.
//!
//! # Samplers
//!
//! - [`QuarticSampler`]: terminal first derivative × terminal time
//! - [`QuinticSampler`]: terminal value × terminal time
//! - [`PiecewiseQuinticSampler`]: 1 to `max_segment_count` segments of
//!   fixed duration, every knot value drawn from one candidate set
//!
//! Candidate order is part of the contract: single-segment samplers are
//! target-major and time-minor, the piecewise sampler orders by segment
//! count and then by knot assignment with the last knot varying fastest.
//!
//! # Eager and Lazy Production
//!
//! [`SampleMode::Eager`] builds every curve during `sample` and fails on
//! the first invalid candidate. [`SampleMode::Lazy`] returns a
//! [`LazySequence`] of builders; each access rebuilds its curve and
//! construction errors surface per element.
//!
//! # Example
//!
//! ```
//! use trajsample_sampler::prelude::*;
//!
//! let sampler = QuinticSampler::new(vec![5.0], vec![2.0]);
//! let start = KinematicState1D::new(0.0, -0.1, 0.0);
//!
//! for curve in sampler.sample(start, SampleMode::Lazy)?.iter() {
//!     let curve = curve?;
//!     assert!((curve.evaluate(2.0, 0) - 5.0).abs() < 1e-9);
//! }
//! # Ok::<(), CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod any;
pub mod config;
pub mod error;
pub mod grid;
pub mod lazy;
pub mod observation;
pub mod piecewise;
pub mod prelude;
pub mod quartic;
pub mod quintic;
pub mod sampler;

pub use any::{AnyCurve, AnySampler};
pub use config::SamplerConfig;
pub use error::SamplerError;
pub use lazy::LazySequence;
pub use observation::{KinematicsAdapter, ObservationKind, PlanarStartState};
pub use piecewise::PiecewiseQuinticSampler;
pub use quartic::QuarticSampler;
pub use quintic::QuinticSampler;
pub use sampler::{CurveSet, CurveSetIter, SampleMode, Sampler, TerminalCondition};
