//! Robot-relative measurement primitives.
//!
//! The vision front end reports each detection as a polar estimate (distance
//! and bearing from the robot) plus its pixel position. Distances can be
//! flagged unreliable, e.g. a goal post whose bottom is cut off by the frame
//! edge; such measurements must never be used as triangulation anchors.

use serde::{Deserialize, Serialize};

/// Errors for measurement math that needs information a detection may lack.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasureError {
    /// A screen point has no ground-plane back-projection, so no metric
    /// distance can be derived from it.
    #[error("screen point has no ground-plane projection")]
    MissingGroundProjection,
}

/// A robot-relative polar estimate: how far away and at what bearing.
///
/// Bearing is in radians, zero straight ahead, positive to the robot's left.
/// Distance is in centimeters on the field plane.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Polar {
    pub distance: f32,
    pub bearing: f32,
    /// False when the distance estimate should not be trusted for
    /// triangulation (the bearing may still be fine).
    pub reliable: bool,
}

impl Polar {
    pub fn new(distance: f32, bearing: f32) -> Self {
        Self {
            distance,
            bearing,
            reliable: true,
        }
    }

    pub fn unreliable(distance: f32, bearing: f32) -> Self {
        Self {
            distance,
            bearing,
            reliable: false,
        }
    }
}

/// A pixel-space location with an optional ground-plane back-projection.
///
/// The back-projection is filled in by the upstream pose estimation when the
/// pixel lies on the field plane; points above the horizon carry `None`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub ground: Option<Polar>,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y, ground: None }
    }

    pub fn with_ground(x: i32, y: i32, ground: Polar) -> Self {
        Self {
            x,
            y,
            ground: Some(ground),
        }
    }

    /// The ground-plane polar estimate, or an error if the point has none.
    pub fn ground_polar(&self) -> Result<Polar, MeasureError> {
        self.ground.ok_or(MeasureError::MissingGroundProjection)
    }
}
