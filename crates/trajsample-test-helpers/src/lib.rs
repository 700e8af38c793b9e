//! Shared test utilities for trajsample.
//!
//! This crate provides common test helpers and assertions to reduce code
//! duplication across the test suite.
//!
//! # Modules
//!
//! - [`mod@must`] - Unwrap helpers with good error messages and `#[track_caller]`
//! - [`assertions`] - Floating-point and ordering assertion macros
//! - [`prelude`] - Convenience re-exports
//!
//! # Usage
//!
//! ```toml
//! [dev-dependencies]
//! trajsample-test-helpers = { workspace = true }
//! ```
//!
//! ```rust,ignore
//! use trajsample_test_helpers::prelude::*;
//! ```

#![deny(unsafe_op_in_unsafe_fn)]
#![allow(clippy::unwrap_used, clippy::panic)]

pub mod assertions;
pub mod must;
pub mod prelude;

pub use must::*;
