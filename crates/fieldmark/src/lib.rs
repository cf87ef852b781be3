//! High-level facade crate for the `fieldmark-*` workspace.
//!
//! This crate provides:
//! - stable re-exports of the field map and classifier crates
//! - an end-to-end `classify_frame` helper that runs one frame of detections
//!   through the classifier and returns the per-frame landmark summary
//! - (feature `cli`) a small binary that reads a frame as JSON and writes
//!   the annotated corners and summary back as JSON.
//!
//! ## Quickstart
//!
//! ```
//! use fieldmark::{classify_frame, ClassifierParams, Frame};
//! use fieldmark::classify::{CornerShape, VisualCorner};
//! use fieldmark::core::{Polar, ScreenPoint};
//!
//! let mut frame = Frame {
//!     corners: vec![VisualCorner::new(
//!         CornerShape::T,
//!         Polar::new(250.0, 0.3),
//!         ScreenPoint::new(160, 120),
//!     )],
//!     objects: Vec::new(),
//! };
//! let summary = classify_frame(&mut frame, &ClassifierParams::default());
//! assert_eq!(summary.ambiguous, 1);
//! ```
//!
//! ## API map
//! - `fieldmark::core`: field map, landmark ids, measurement primitives.
//! - `fieldmark::classify`: distance estimator, visibility selector, corner
//!   classifier, frame context.

pub use fieldmark_classify as classify;
pub use fieldmark_core as core;

pub use fieldmark_classify::{Classifier, ClassifierParams, FrameContext};
pub use fieldmark_core::{ConcreteLandmark, LandmarkClass, LandmarkId, FIELD_LANDMARKS};

mod frame;

pub use frame::{classify_frame, Frame, FrameIoError, FrameSummary};
