//! One frame of detections and its classification summary.

use serde::{Deserialize, Serialize};

use fieldmark_classify::{Classifier, ClassifierParams, FrameContext, VisualCorner, VisualObject};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors from reading or writing frames as JSON.
#[derive(thiserror::Error, Debug)]
pub enum FrameIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// One camera frame's raw detections, as handed over by the vision front
/// end. Corners are annotated in place by `classify_frame`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    #[serde(default)]
    pub corners: Vec<VisualCorner>,
    #[serde(default)]
    pub objects: Vec<VisualObject>,
}

impl Frame {
    /// Read a frame from JSON.
    pub fn from_json_reader(reader: impl std::io::Read) -> Result<Self, FrameIoError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

/// What one classified frame hands to downstream localization: the landmark
/// presence summary plus how decisively each corner resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameSummary {
    pub context: FrameContext,
    /// Corners narrowed to exactly one concrete landmark.
    pub resolved: usize,
    /// Corners with several surviving candidates.
    pub ambiguous: usize,
    /// Corners whose candidate set emptied: no localization evidence.
    pub unresolved: usize,
}

/// Run one frame of detections through the classifier.
///
/// Corners in `frame` are narrowed (and possibly reshaped) in place; the
/// returned summary snapshots the frame context and the match outcomes.
#[cfg_attr(
    feature = "tracing",
    instrument(
        level = "info",
        skip(frame, params),
        fields(corners = frame.corners.len(), objects = frame.objects.len())
    )
)]
pub fn classify_frame(frame: &mut Frame, params: &ClassifierParams) -> FrameSummary {
    let classifier = Classifier::new(*params);
    let mut context = FrameContext::new();
    classifier.classify_frame(&mut frame.corners, &frame.objects, &mut context);

    let mut summary = FrameSummary {
        context,
        resolved: 0,
        ambiguous: 0,
        unresolved: 0,
    };
    for corner in &frame.corners {
        match corner.possible.len() {
            0 => summary.unresolved += 1,
            1 => summary.resolved += 1,
            _ => summary.ambiguous += 1,
        }
    }
    summary
}
