//! Core types for field landmark disambiguation.
//!
//! This crate is intentionally small and purely geometric. It holds the
//! static field map (every fixed landmark with its world coordinates), the
//! robot-relative measurement primitives, and nothing frame-specific.

mod field;
mod logger;
mod measure;

pub use field::{
    corners_matching_class, landmark, landmarks_of_class, ConcreteLandmark, CornerClass,
    LandmarkClass, LandmarkId, FIELD_LANDMARKS, FIELD_LENGTH, FIELD_WIDTH, GOAL_BOX_DEPTH,
    GOAL_BOX_WIDTH, GOAL_WIDTH, PENALTY_CROSS_FROM_ENDLINE,
};
pub use measure::{MeasureError, Polar, ScreenPoint};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
