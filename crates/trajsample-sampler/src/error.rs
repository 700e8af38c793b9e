//! Error types for sampling and start-state extraction.

use trajsample_curves::CurveError;

/// Errors raised around the samplers.
///
/// Curve construction failures surface unchanged as [`SamplerError::Curve`];
/// the other variants come from the observation adapter.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplerError {
    /// Curve construction failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// The observation or output representation is recognised but not implemented.
    #[error("Unsupported mode: {0}")]
    UnsupportedMode(String),

    /// The observation type string is not recognised at all.
    #[error("Unknown observation type '{0}'")]
    UnknownObservation(String),

    /// A feature required to build a start state is absent from the layout.
    #[error("Observation layout is missing required feature '{0}'")]
    MissingFeature(&'static str),

    /// An observation row does not match the feature layout.
    #[error("Observation row has {actual} values, layout expects {expected}")]
    RowLength {
        /// Features in the layout.
        expected: usize,
        /// Values in the row.
        actual: usize,
    },
}
