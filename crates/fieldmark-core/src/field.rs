//! Static field map.
//!
//! World coordinates are in centimeters on the field plane. The blue goal
//! sits on the `x = 0` end line, the yellow goal on `x = FIELD_LENGTH`.
//! "Left"/"right" name the side as seen by a robot on the field facing the
//! goal in question.
//!
//! `FIELD_LANDMARKS` is the single source of truth for landmark enumeration
//! order: candidate sets are always reported in this order, and it is the
//! explicit tie-breaking order between otherwise equally plausible matches.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

/// Field length along x, end line to end line (cm).
pub const FIELD_LENGTH: f32 = 605.0;
/// Field width along y, side line to side line (cm).
pub const FIELD_WIDTH: f32 = 405.0;
/// Distance between the two posts of one goal (cm).
pub const GOAL_WIDTH: f32 = 140.0;
/// Goal box extent along x from the end line (cm).
pub const GOAL_BOX_DEPTH: f32 = 60.0;
/// Goal box extent along y (cm).
pub const GOAL_BOX_WIDTH: f32 = 300.0;
/// Penalty cross distance from its end line (cm).
pub const PENALTY_CROSS_FROM_ENDLINE: f32 = 180.0;

const MID_X: f32 = FIELD_LENGTH / 2.0;
const MID_Y: f32 = FIELD_WIDTH / 2.0;

/// Shape class of a concrete field corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum CornerClass {
    /// Two line segments meeting at roughly a right angle.
    L,
    /// A line ending on another line.
    T,
    /// A point on the center circle.
    Circle,
}

/// Broad landmark category, matching what the vision front end can report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum LandmarkClass {
    Corner(CornerClass),
    GoalPost,
    Cross,
}

/// Identity of one fixed landmark on the field.
///
/// Declaration order matches `FIELD_LANDMARKS` and defines the natural
/// enumeration order used everywhere candidate sets are reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum LandmarkId {
    // Outer field corners (L).
    FieldCornerBlueLeft,
    FieldCornerBlueRight,
    FieldCornerYellowLeft,
    FieldCornerYellowRight,
    // Goal box front corners (L).
    GoalBoxCornerBlueLeft,
    GoalBoxCornerBlueRight,
    GoalBoxCornerYellowLeft,
    GoalBoxCornerYellowRight,
    // Goal box T junctions on the end lines.
    GoalBoxTBlueLeft,
    GoalBoxTBlueRight,
    GoalBoxTYellowLeft,
    GoalBoxTYellowRight,
    // Center line T junctions on the side lines, named facing the blue goal.
    CenterTLeft,
    CenterTRight,
    // Center circle, treated as a corner of its own class.
    CenterCircle,
    // Goal posts.
    BlueGoalLeftPost,
    BlueGoalRightPost,
    YellowGoalLeftPost,
    YellowGoalRightPost,
    // Penalty crosses.
    BlueCross,
    YellowCross,
}

/// One fixed landmark: identity, class tag, and ground-truth position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConcreteLandmark {
    pub id: LandmarkId,
    pub class: LandmarkClass,
    pub position: Point2<f32>,
}

const fn corner(id: LandmarkId, class: CornerClass, x: f32, y: f32) -> ConcreteLandmark {
    ConcreteLandmark {
        id,
        class: LandmarkClass::Corner(class),
        position: Point2::new(x, y),
    }
}

const fn post(id: LandmarkId, x: f32, y: f32) -> ConcreteLandmark {
    ConcreteLandmark {
        id,
        class: LandmarkClass::GoalPost,
        position: Point2::new(x, y),
    }
}

const fn cross(id: LandmarkId, x: f32, y: f32) -> ConcreteLandmark {
    ConcreteLandmark {
        id,
        class: LandmarkClass::Cross,
        position: Point2::new(x, y),
    }
}

/// Every fixed landmark, in natural enumeration order.
pub static FIELD_LANDMARKS: &[ConcreteLandmark] = &[
    corner(LandmarkId::FieldCornerBlueLeft, CornerClass::L, 0.0, 0.0),
    corner(
        LandmarkId::FieldCornerBlueRight,
        CornerClass::L,
        0.0,
        FIELD_WIDTH,
    ),
    corner(
        LandmarkId::FieldCornerYellowLeft,
        CornerClass::L,
        FIELD_LENGTH,
        FIELD_WIDTH,
    ),
    corner(
        LandmarkId::FieldCornerYellowRight,
        CornerClass::L,
        FIELD_LENGTH,
        0.0,
    ),
    corner(
        LandmarkId::GoalBoxCornerBlueLeft,
        CornerClass::L,
        GOAL_BOX_DEPTH,
        MID_Y - GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxCornerBlueRight,
        CornerClass::L,
        GOAL_BOX_DEPTH,
        MID_Y + GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxCornerYellowLeft,
        CornerClass::L,
        FIELD_LENGTH - GOAL_BOX_DEPTH,
        MID_Y + GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxCornerYellowRight,
        CornerClass::L,
        FIELD_LENGTH - GOAL_BOX_DEPTH,
        MID_Y - GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxTBlueLeft,
        CornerClass::T,
        0.0,
        MID_Y - GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxTBlueRight,
        CornerClass::T,
        0.0,
        MID_Y + GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxTYellowLeft,
        CornerClass::T,
        FIELD_LENGTH,
        MID_Y + GOAL_BOX_WIDTH / 2.0,
    ),
    corner(
        LandmarkId::GoalBoxTYellowRight,
        CornerClass::T,
        FIELD_LENGTH,
        MID_Y - GOAL_BOX_WIDTH / 2.0,
    ),
    corner(LandmarkId::CenterTLeft, CornerClass::T, MID_X, 0.0),
    corner(LandmarkId::CenterTRight, CornerClass::T, MID_X, FIELD_WIDTH),
    corner(LandmarkId::CenterCircle, CornerClass::Circle, MID_X, MID_Y),
    post(
        LandmarkId::BlueGoalLeftPost,
        0.0,
        MID_Y - GOAL_WIDTH / 2.0,
    ),
    post(
        LandmarkId::BlueGoalRightPost,
        0.0,
        MID_Y + GOAL_WIDTH / 2.0,
    ),
    post(
        LandmarkId::YellowGoalLeftPost,
        FIELD_LENGTH,
        MID_Y + GOAL_WIDTH / 2.0,
    ),
    post(
        LandmarkId::YellowGoalRightPost,
        FIELD_LENGTH,
        MID_Y - GOAL_WIDTH / 2.0,
    ),
    cross(LandmarkId::BlueCross, PENALTY_CROSS_FROM_ENDLINE, MID_Y),
    cross(
        LandmarkId::YellowCross,
        FIELD_LENGTH - PENALTY_CROSS_FROM_ENDLINE,
        MID_Y,
    ),
];

/// Look up a landmark by id.
pub fn landmark(id: LandmarkId) -> &'static ConcreteLandmark {
    // LandmarkId declaration order matches FIELD_LANDMARKS order; a test
    // below pins that invariant.
    &FIELD_LANDMARKS[id as usize]
}

/// All landmarks of a given class, in enumeration order.
pub fn landmarks_of_class(class: LandmarkClass) -> impl Iterator<Item = &'static ConcreteLandmark> {
    FIELD_LANDMARKS.iter().filter(move |l| l.class == class)
}

/// Ids of all concrete corners of the given shape class, in enumeration order.
pub fn corners_matching_class(class: CornerClass) -> Vec<LandmarkId> {
    landmarks_of_class(LandmarkClass::Corner(class))
        .map(|l| l.id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn every_id_resolves_to_itself() {
        for l in FIELD_LANDMARKS {
            assert_eq!(landmark(l.id).id, l.id);
        }
    }

    #[test]
    fn landmark_counts_per_class() {
        assert_eq!(corners_matching_class(CornerClass::L).len(), 8);
        assert_eq!(corners_matching_class(CornerClass::T).len(), 6);
        assert_eq!(corners_matching_class(CornerClass::Circle).len(), 1);
        assert_eq!(landmarks_of_class(LandmarkClass::GoalPost).count(), 4);
        assert_eq!(landmarks_of_class(LandmarkClass::Cross).count(), 2);
    }

    #[test]
    fn goal_posts_sit_on_their_end_lines() {
        assert_relative_eq!(landmark(LandmarkId::BlueGoalLeftPost).position.x, 0.0);
        assert_relative_eq!(
            landmark(LandmarkId::YellowGoalLeftPost).position.x,
            FIELD_LENGTH
        );
        let span = (landmark(LandmarkId::BlueGoalRightPost).position.y
            - landmark(LandmarkId::BlueGoalLeftPost).position.y)
            .abs();
        assert_relative_eq!(span, GOAL_WIDTH);
    }

    #[test]
    fn enumeration_order_matches_id_order() {
        let ids: Vec<LandmarkId> = FIELD_LANDMARKS.iter().map(|l| l.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
