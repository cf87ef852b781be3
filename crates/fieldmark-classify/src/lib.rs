//! Per-frame disambiguation of ambiguous field corner detections.
//!
//! Given one camera frame's raw detections (corners of uncertain identity,
//! goal posts, penalty crosses, a ball), decide which fixed field landmark
//! each corner corresponds to, using relative geometry between
//! simultaneously visible landmarks:
//! 1. Filter the field map to corners compatible with the detected shape.
//! 2. Pick the visible field objects usable as triangulation anchors.
//! 3. Keep a candidate only if its ground-truth distance to *every* anchor
//!    agrees with the triangulated detection-to-anchor distance.
//! 4. Cross-prune corner pairs seen in the same frame by their separation.
//!
//! Zero survivors (unresolved), one (confident match) and several
//! (still ambiguous) are all valid terminal outcomes; nothing here is fatal.

mod classifier;
mod context;
mod distance;
mod types;
mod visibility;

pub use classifier::{Classifier, ClassifierParams};
pub use context::FrameContext;
pub use distance::{
    allowed_error, corner_object_separation, real_separation, separation, separation_on_screen,
};
pub use types::{CornerShape, ObjectKind, VisualCorner, VisualObject};
pub use visibility::{all_visible, post_suits_pixel_estimate, visible_anchors};
