//! Prelude for the curves crate.
//!
//! This module re-exports the most commonly used types and traits.
//!
//! # Example
//!
//! ```
//! use trajsample_curves::prelude::*;
//!
//! let start = KinematicState1D::new(0.0, 1.0, 0.0);
//! let curve = QuarticPolynomial::from_kinematic_states(start, 2.0, 0.0, 4.0)?;
//! assert!((curve.evaluate(4.0, 1) - 2.0).abs() < 1e-9);
//! # Ok::<(), CurveError>(())
//! ```

pub use crate::curve::Curve;
pub use crate::error::CurveError;
pub use crate::piecewise::PiecewiseQuinticPolynomial;
pub use crate::quartic::QuarticPolynomial;
pub use crate::quintic::QuinticPolynomial;
pub use crate::state::{KinematicState1D, Waypoint};
