//! Per-frame detection types.
//!
//! These are the mutable, frame-scoped counterparts of the static field map:
//! a `VisualCorner` starts with every shape-compatible concrete corner as a
//! candidate and is narrowed in place by the classifier; a `VisualObject` is
//! read-only evidence. Candidate sets hold `LandmarkId`s into the immutable
//! field map, never copies of its entries.

use serde::{Deserialize, Serialize};

use fieldmark_core::{
    corners_matching_class, CornerClass, LandmarkClass, LandmarkId, Polar, ScreenPoint,
    FIELD_LANDMARKS,
};

/// Shape of a detected corner as inferred from local edge geometry.
///
/// Inner vs. outer L distinguishes which side of the angle faces the robot;
/// both match concrete L corners. The shape may be revised by classification
/// when geometric evidence contradicts it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CornerShape {
    InnerL,
    OuterL,
    T,
    Circle,
    Unknown,
}

impl CornerShape {
    /// The concrete corner class this shape matches, if the shape is known.
    pub fn class(self) -> Option<CornerClass> {
        match self {
            CornerShape::InnerL | CornerShape::OuterL => Some(CornerClass::L),
            CornerShape::T => Some(CornerClass::T),
            CornerShape::Circle => Some(CornerClass::Circle),
            CornerShape::Unknown => None,
        }
    }
}

/// Candidate identity of a detected field object.
///
/// Posts may be resolved to a side or left unknown; crosses to a colour or
/// left unknown. Unknown variants widen tolerances rather than excluding the
/// object outright.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    BlueGoalLeftPost,
    BlueGoalRightPost,
    BlueGoalUnknownPost,
    YellowGoalLeftPost,
    YellowGoalRightPost,
    YellowGoalUnknownPost,
    BlueCross,
    YellowCross,
    UnknownCross,
    Ball,
}

impl ObjectKind {
    pub fn is_post(self) -> bool {
        matches!(
            self,
            ObjectKind::BlueGoalLeftPost
                | ObjectKind::BlueGoalRightPost
                | ObjectKind::BlueGoalUnknownPost
                | ObjectKind::YellowGoalLeftPost
                | ObjectKind::YellowGoalRightPost
                | ObjectKind::YellowGoalUnknownPost
        )
    }

    pub fn is_cross(self) -> bool {
        matches!(
            self,
            ObjectKind::BlueCross | ObjectKind::YellowCross | ObjectKind::UnknownCross
        )
    }

    /// True when the detection is pinned to exactly one concrete landmark.
    pub fn identity_certain(self) -> bool {
        self.possible_landmarks().len() == 1
    }

    /// The concrete landmarks this detection could be, in field-map order.
    /// Empty for the ball, which is not a fixed landmark.
    pub fn possible_landmarks(self) -> &'static [LandmarkId] {
        match self {
            ObjectKind::BlueGoalLeftPost => &[LandmarkId::BlueGoalLeftPost],
            ObjectKind::BlueGoalRightPost => &[LandmarkId::BlueGoalRightPost],
            ObjectKind::BlueGoalUnknownPost => {
                &[LandmarkId::BlueGoalLeftPost, LandmarkId::BlueGoalRightPost]
            }
            ObjectKind::YellowGoalLeftPost => &[LandmarkId::YellowGoalLeftPost],
            ObjectKind::YellowGoalRightPost => &[LandmarkId::YellowGoalRightPost],
            ObjectKind::YellowGoalUnknownPost => &[
                LandmarkId::YellowGoalLeftPost,
                LandmarkId::YellowGoalRightPost,
            ],
            ObjectKind::BlueCross => &[LandmarkId::BlueCross],
            ObjectKind::YellowCross => &[LandmarkId::YellowCross],
            ObjectKind::UnknownCross => &[LandmarkId::BlueCross, LandmarkId::YellowCross],
            ObjectKind::Ball => &[],
        }
    }
}

/// One detected field object in the current frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualObject {
    pub kind: ObjectKind,
    pub polar: Polar,
    /// Pixel position of the object's ground contact point.
    pub screen: ScreenPoint,
}

impl VisualObject {
    pub fn new(kind: ObjectKind, polar: Polar, screen: ScreenPoint) -> Self {
        Self {
            kind,
            polar,
            screen,
        }
    }
}

/// One detected corner, ambiguous until classified.
///
/// `possible` lists the concrete corners still consistent with the evidence,
/// in field-map enumeration order. Classification only ever narrows it
/// (shape revision aside); empty means unresolved, a singleton is a
/// confident match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VisualCorner {
    pub shape: CornerShape,
    pub polar: Polar,
    pub screen: ScreenPoint,
    pub possible: Vec<LandmarkId>,
}

impl VisualCorner {
    /// A fresh detection: candidates start as every corner matching `shape`.
    pub fn new(shape: CornerShape, polar: Polar, screen: ScreenPoint) -> Self {
        Self {
            shape,
            polar,
            screen,
            possible: shape_candidates(shape),
        }
    }

    /// True once the candidate set has been narrowed to a single landmark.
    pub fn is_resolved(&self) -> bool {
        self.possible.len() == 1
    }
}

/// Every concrete corner compatible with `shape`, in field-map order.
/// An unknown shape matches any corner class.
pub(crate) fn shape_candidates(shape: CornerShape) -> Vec<LandmarkId> {
    match shape.class() {
        Some(class) => corners_matching_class(class),
        None => FIELD_LANDMARKS
            .iter()
            .filter(|l| matches!(l.class, LandmarkClass::Corner(_)))
            .map(|l| l.id)
            .collect(),
    }
}
