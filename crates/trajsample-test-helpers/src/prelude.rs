//! Convenience re-exports for common test utilities.
//!
//! ```rust,ignore
//! use trajsample_test_helpers::prelude::*;
//! ```

pub use crate::must::{must, must_some, must_with};
pub use crate::{assert_approx_eq, assert_close_rel, assert_sequence_close};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Default absolute tolerance for boundary-condition checks.
pub const TOLERANCE: f64 = 1e-9;
