//! Boundary-Value Polynomial Curves for trajsample
//!
//! This crate implements the closed-form polynomial curves that the
//! trajectory samplers produce: single-segment quartic and quintic
//! polynomials in time, and piecewise quintic curves joined at knots.
//!
//! # Overview
//!
//! The curve family supports:
//! - **Quartic**: start value/velocity/acceleration plus terminal velocity and acceleration
//! - **Quintic**: start and terminal value/velocity/acceleration
//! - **Piecewise quintic**: a knot table of [`Waypoint`]s, one quintic per knot pair
//!
//! All curves implement [`Curve`], which evaluates any derivative order at
//! any time. Evaluation outside `[start_time, end_time]` extrapolates the
//! polynomial; no clamping is applied.
//!
//! # Construction Cost
//!
//! Coefficients are closed-form functions of the boundary scalars and the
//! segment duration. Construction is O(1) per segment and only fails when
//! a duration is not strictly positive and finite.
//!
//! # Example
//!
//! ```
//! use trajsample_curves::{Curve, KinematicState1D, QuinticPolynomial};
//!
//! let start = KinematicState1D::new(0.0, -0.1, 0.0);
//! let end = KinematicState1D::new(5.0, 0.0, 0.0);
//! let curve = QuinticPolynomial::from_kinematic_states(start, end, 2.0)?;
//!
//! assert!((curve.evaluate(0.0, 1) + 0.1).abs() < 1e-9);
//! assert!((curve.evaluate(2.0, 0) - 5.0).abs() < 1e-9);
//! # Ok::<(), trajsample_curves::CurveError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod curve;
pub mod error;
pub mod piecewise;
pub mod polynomial;
pub mod prelude;
pub mod quartic;
pub mod quintic;
pub mod state;

pub use curve::Curve;
pub use error::CurveError;
pub use piecewise::PiecewiseQuinticPolynomial;
pub use quartic::QuarticPolynomial;
pub use quintic::QuinticPolynomial;
pub use state::{KinematicState1D, Waypoint};
