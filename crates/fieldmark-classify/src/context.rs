//! Per-frame landmark summary.
//!
//! `FrameContext` is a plain accumulator constructed fresh each vision cycle
//! (or `reset` at its start) and filled while the frame's detections are
//! processed. Downstream localization reads the counts and flags after the
//! cycle completes; nothing here survives into the next frame.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::types::{CornerShape, ObjectKind};

/// Counters and presence flags for one frame's detections.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameContext {
    t_corners: u32,
    l_corners: u32,
    inner_l_corners: u32,
    outer_l_corners: u32,
    right_yellow_post: bool,
    left_yellow_post: bool,
    unknown_yellow_post: bool,
    yellow_post: bool,
    right_blue_post: bool,
    left_blue_post: bool,
    unknown_blue_post: bool,
    blue_post: bool,
    yellow_cross: bool,
    blue_cross: bool,
    unknown_cross: bool,
    cross: bool,
    ball: bool,
    goal_box_lines: bool,
}

impl FrameContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every counter and clear every flag.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Count one classified corner by its final shape.
    /// Inner and outer L both also count as generic L.
    pub fn record_corner_shape(&mut self, shape: CornerShape) {
        match shape {
            CornerShape::T => self.t_corners += 1,
            CornerShape::InnerL => {
                self.inner_l_corners += 1;
                self.l_corners += 1;
            }
            CornerShape::OuterL => {
                self.outer_l_corners += 1;
                self.l_corners += 1;
            }
            CornerShape::Circle | CornerShape::Unknown => {}
        }
    }

    /// Flag one detected field object. Side- and colour-specific flags set
    /// the colour-generic flag as well.
    pub fn record_object(&mut self, kind: ObjectKind) {
        match kind {
            ObjectKind::YellowGoalRightPost => {
                self.right_yellow_post = true;
                self.yellow_post = true;
            }
            ObjectKind::YellowGoalLeftPost => {
                self.left_yellow_post = true;
                self.yellow_post = true;
            }
            ObjectKind::YellowGoalUnknownPost => {
                self.unknown_yellow_post = true;
                self.yellow_post = true;
            }
            ObjectKind::BlueGoalRightPost => {
                self.right_blue_post = true;
                self.blue_post = true;
            }
            ObjectKind::BlueGoalLeftPost => {
                self.left_blue_post = true;
                self.blue_post = true;
            }
            ObjectKind::BlueGoalUnknownPost => {
                self.unknown_blue_post = true;
                self.blue_post = true;
            }
            ObjectKind::YellowCross => {
                self.yellow_cross = true;
                self.cross = true;
            }
            ObjectKind::BlueCross => {
                self.blue_cross = true;
                self.cross = true;
            }
            ObjectKind::UnknownCross => {
                self.unknown_cross = true;
                self.cross = true;
            }
            ObjectKind::Ball => self.ball = true,
        }
    }

    /// Flag that goal box lines were seen this frame. Diagnostic only; the
    /// classifier does not consume it.
    pub fn record_goal_box_lines(&mut self) {
        if !self.goal_box_lines {
            debug!("goal box lines visible this frame");
        }
        self.goal_box_lines = true;
    }

    pub fn t_corners(&self) -> u32 {
        self.t_corners
    }

    pub fn l_corners(&self) -> u32 {
        self.l_corners
    }

    pub fn inner_l_corners(&self) -> u32 {
        self.inner_l_corners
    }

    pub fn outer_l_corners(&self) -> u32 {
        self.outer_l_corners
    }

    pub fn right_yellow_post(&self) -> bool {
        self.right_yellow_post
    }

    pub fn left_yellow_post(&self) -> bool {
        self.left_yellow_post
    }

    pub fn unknown_yellow_post(&self) -> bool {
        self.unknown_yellow_post
    }

    pub fn yellow_post(&self) -> bool {
        self.yellow_post
    }

    pub fn right_blue_post(&self) -> bool {
        self.right_blue_post
    }

    pub fn left_blue_post(&self) -> bool {
        self.left_blue_post
    }

    pub fn unknown_blue_post(&self) -> bool {
        self.unknown_blue_post
    }

    pub fn blue_post(&self) -> bool {
        self.blue_post
    }

    pub fn yellow_cross(&self) -> bool {
        self.yellow_cross
    }

    pub fn blue_cross(&self) -> bool {
        self.blue_cross
    }

    pub fn unknown_cross(&self) -> bool {
        self.unknown_cross
    }

    pub fn cross(&self) -> bool {
        self.cross
    }

    pub fn ball(&self) -> bool {
        self.ball
    }

    pub fn goal_box_lines(&self) -> bool {
        self.goal_box_lines
    }
}
