//! Error types for the trajsample CLI

use thiserror::Error;
use trajsample_curves::CurveError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Unsupported config format '{0}' (expected .yaml, .yml or .json)")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Curve(#[from] CurveError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

impl CliError {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::UnsupportedFormat(_)
            | CliError::IoError(_)
            | CliError::JsonError(_)
            | CliError::YamlError(_) => 2,
            CliError::Curve(CurveError::InvalidDomain { .. }) => 3,
            CliError::Curve(_) => 1,
        }
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(error: &anyhow::Error) -> u8 {
    match error.downcast_ref::<CliError>() {
        Some(cli) => cli.exit_code(),
        None => match error.downcast_ref::<CurveError>() {
            Some(CurveError::InvalidDomain { .. }) => 3,
            _ => 1,
        },
    }
}
