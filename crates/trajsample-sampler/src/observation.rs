//! Start states from simulator observations.
//!
//! A kinematics observation is a table with one row per vehicle, the ego
//! vehicle first, and one column per named feature (`x`, `y`, `vx`, ...).
//! [`KinematicsAdapter`] turns the ego row into the per-axis start states
//! the samplers consume.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};
use trajsample_curves::KinematicState1D;

use crate::error::SamplerError;

/// Observation representations a simulator may emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObservationKind {
    /// Per-vehicle feature table.
    Kinematics,
    /// Stacked grayscale frames.
    GrayscaleObservation,
    /// Ego-centred occupancy grid.
    OccupancyGrid,
    /// Time-to-collision tensor.
    TimeToCollision,
}

impl ObservationKind {
    /// The simulator's type string.
    pub fn as_str(self) -> &'static str {
        match self {
            ObservationKind::Kinematics => "Kinematics",
            ObservationKind::GrayscaleObservation => "GrayscaleObservation",
            ObservationKind::OccupancyGrid => "OccupancyGrid",
            ObservationKind::TimeToCollision => "TimeToCollision",
        }
    }
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationKind {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kinematics" => Ok(ObservationKind::Kinematics),
            "GrayscaleObservation" => Ok(ObservationKind::GrayscaleObservation),
            "OccupancyGrid" => Ok(ObservationKind::OccupancyGrid),
            "TimeToCollision" => Ok(ObservationKind::TimeToCollision),
            other => Err(SamplerError::UnknownObservation(other.to_string())),
        }
    }
}

/// Ego start state split into a longitudinal and a lateral axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlanarStartState {
    /// `(x, vx, 0)`.
    pub longitudinal: KinematicState1D,
    /// `(y, vy, 0)`.
    pub lateral: KinematicState1D,
    /// Heading in radians.
    pub heading: f64,
}

/// Maps kinematics observation rows to start states.
#[derive(Clone, Debug, PartialEq)]
pub struct KinematicsAdapter {
    kind: ObservationKind,
    features: Vec<String>,
}

impl KinematicsAdapter {
    /// Create an adapter for observations of `kind` with the given column layout.
    ///
    /// # Errors
    ///
    /// Returns [`SamplerError::MissingFeature`] if `x` or `y` is absent.
    pub fn new<S: Into<String>>(
        kind: ObservationKind,
        features: impl IntoIterator<Item = S>,
    ) -> Result<Self, SamplerError> {
        let features: Vec<String> = features.into_iter().map(Into::into).collect();
        for required in ["x", "y"] {
            if !features.iter().any(|f| f == required) {
                return Err(SamplerError::MissingFeature(required));
            }
        }
        Ok(Self { kind, features })
    }

    /// Observation representation.
    pub fn kind(&self) -> ObservationKind {
        self.kind
    }

    /// Column names in row order.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// Start state from a single vehicle row.
    ///
    /// Missing optional features read as 0. Heading comes from `heading`,
    /// then `cos_h`, then `sin_h`, then the velocity direction.
    ///
    /// # Errors
    ///
    /// * [`SamplerError::UnsupportedMode`] for non-kinematics observations
    /// * [`SamplerError::RowLength`] if the row does not match the layout
    pub fn start_state(&self, row: &[f64]) -> Result<PlanarStartState, SamplerError> {
        if self.kind != ObservationKind::Kinematics {
            return Err(SamplerError::UnsupportedMode(self.kind.to_string()));
        }
        if row.len() != self.features.len() {
            return Err(SamplerError::RowLength {
                expected: self.features.len(),
                actual: row.len(),
            });
        }

        let feature = |name: &str| {
            self.features
                .iter()
                .position(|f| f == name)
                .and_then(|i| row.get(i).copied())
        };
        let x = feature("x").unwrap_or(0.0);
        let y = feature("y").unwrap_or(0.0);
        let vx = feature("vx").unwrap_or(0.0);
        let vy = feature("vy").unwrap_or(0.0);

        let heading = feature("heading")
            .or_else(|| feature("cos_h").map(f64::acos))
            .or_else(|| feature("sin_h").map(f64::asin))
            .or_else(|| match (feature("vx"), feature("vy")) {
                (Some(vx), Some(vy)) => Some(vy.atan2(vx)),
                _ => None,
            })
            .unwrap_or(0.0);

        Ok(PlanarStartState {
            longitudinal: KinematicState1D::new(x, vx, 0.0),
            lateral: KinematicState1D::new(y, vy, 0.0),
            heading,
        })
    }

    /// Start state of the ego vehicle, the first row of `observation`.
    ///
    /// # Errors
    ///
    /// As [`KinematicsAdapter::start_state`]; an empty observation reports
    /// a zero-length row.
    pub fn ego_start_state<R: AsRef<[f64]>>(
        &self,
        observation: &[R],
    ) -> Result<PlanarStartState, SamplerError> {
        let row: &[f64] = observation.first().map(AsRef::as_ref).unwrap_or_default();
        self.start_state(row)
    }
}
