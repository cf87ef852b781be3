//! End-to-end classification scenarios.
//!
//! Each scenario synthesizes exact detections for a known robot pose (facing
//! the yellow goal, bearings positive to the robot's left) and checks how
//! decisively the classifier resolves them.

use nalgebra::Point2;

use fieldmark::classify::{CornerShape, ObjectKind, VisualCorner, VisualObject};
use fieldmark::core::{landmark, LandmarkId, Polar, ScreenPoint};
use fieldmark::{classify_frame, ClassifierParams, Frame};

const ROBOT: Point2<f32> = Point2::new(300.0, 150.0);

fn polar_to(target: Point2<f32>) -> Polar {
    let v = target - ROBOT;
    Polar::new(v.norm(), v.y.atan2(v.x))
}

fn corner_at(shape: CornerShape, id: LandmarkId) -> VisualCorner {
    VisualCorner::new(shape, polar_to(landmark(id).position), ScreenPoint::new(160, 120))
}

fn object_as(kind: ObjectKind, at: LandmarkId) -> VisualObject {
    VisualObject::new(kind, polar_to(landmark(at).position), ScreenPoint::new(80, 100))
}

/// Scenario A: one T corner, one reliably identified post, exactly one
/// geometrically consistent concrete T corner.
#[test]
fn t_corner_with_identified_post_resolves_uniquely() {
    let mut frame = Frame {
        corners: vec![corner_at(CornerShape::T, LandmarkId::GoalBoxTYellowLeft)],
        objects: vec![object_as(
            ObjectKind::YellowGoalLeftPost,
            LandmarkId::YellowGoalLeftPost,
        )],
    };

    let summary = classify_frame(&mut frame, &ClassifierParams::default());

    assert_eq!(summary.resolved, 1);
    assert_eq!(frame.corners[0].possible, vec![LandmarkId::GoalBoxTYellowLeft]);
    assert_eq!(summary.context.t_corners(), 1);
    assert!(summary.context.left_yellow_post());
    assert!(summary.context.yellow_post());
}

/// Scenario B: same corner, but the post's distance is unreliable and it has
/// no ground contact point. The selector drops it and the corner keeps
/// whatever the shape filter alone produced.
#[test]
fn unreliable_post_leaves_corner_ambiguous() {
    let mut post = object_as(
        ObjectKind::YellowGoalLeftPost,
        LandmarkId::YellowGoalLeftPost,
    );
    post.polar.reliable = false;

    let mut frame = Frame {
        corners: vec![corner_at(CornerShape::T, LandmarkId::GoalBoxTYellowLeft)],
        objects: vec![post],
    };
    let shape_filter_only = frame.corners[0].possible.clone();

    let summary = classify_frame(&mut frame, &ClassifierParams::default());

    assert_eq!(summary.ambiguous, 1);
    assert_eq!(frame.corners[0].possible, shape_filter_only);
    // The post still shows up in the frame summary even though it could not
    // anchor anything.
    assert!(summary.context.yellow_post());
}

/// Scenario C: two goal box L corners plus one identified post. The post
/// leaves each corner with two candidates; the pairwise relation then prunes
/// both down to the one pair whose real separation matches the observed one.
#[test]
fn corner_pair_separation_resolves_both() {
    let mut frame = Frame {
        corners: vec![
            corner_at(CornerShape::OuterL, LandmarkId::GoalBoxCornerYellowLeft),
            corner_at(CornerShape::OuterL, LandmarkId::GoalBoxCornerYellowRight),
        ],
        objects: vec![object_as(
            ObjectKind::YellowGoalLeftPost,
            LandmarkId::YellowGoalLeftPost,
        )],
    };

    let summary = classify_frame(&mut frame, &ClassifierParams::default());

    assert_eq!(summary.resolved, 2);
    assert_eq!(
        frame.corners[0].possible,
        vec![LandmarkId::GoalBoxCornerYellowLeft]
    );
    assert_eq!(
        frame.corners[1].possible,
        vec![LandmarkId::GoalBoxCornerYellowRight]
    );
    assert_eq!(summary.context.l_corners(), 2);
    assert_eq!(summary.context.outer_l_corners(), 2);
    assert!(summary.context.left_yellow_post());
}

/// Scenario D: a corner tagged L whose L interpretation contradicts every
/// anchor while the T interpretation at the same spot fits: the shape is
/// corrected and the corner resolves as a T.
#[test]
fn l_corner_becomes_t_under_contradicting_evidence() {
    let mut frame = Frame {
        corners: vec![corner_at(CornerShape::InnerL, LandmarkId::GoalBoxTYellowLeft)],
        objects: vec![
            object_as(
                ObjectKind::YellowGoalLeftPost,
                LandmarkId::YellowGoalLeftPost,
            ),
            object_as(ObjectKind::YellowCross, LandmarkId::YellowCross),
        ],
    };

    let summary = classify_frame(&mut frame, &ClassifierParams::default());

    assert_eq!(frame.corners[0].shape, CornerShape::T);
    assert_eq!(frame.corners[0].possible, vec![LandmarkId::GoalBoxTYellowLeft]);
    assert_eq!(summary.resolved, 1);
    // Counted under its corrected shape.
    assert_eq!(summary.context.t_corners(), 1);
    assert_eq!(summary.context.l_corners(), 0);
}

#[test]
fn empty_frame_produces_clean_summary() {
    let mut frame = Frame::default();
    let summary = classify_frame(&mut frame, &ClassifierParams::default());
    assert_eq!(summary.resolved + summary.ambiguous + summary.unresolved, 0);
    assert_eq!(summary.context, fieldmark::FrameContext::default());
}

#[test]
fn frame_round_trips_through_json() {
    let frame = Frame {
        corners: vec![corner_at(CornerShape::T, LandmarkId::GoalBoxTYellowLeft)],
        objects: vec![object_as(ObjectKind::Ball, LandmarkId::YellowCross)],
    };
    let json = serde_json::to_string(&frame).unwrap();
    let back = Frame::from_json_reader(json.as_bytes()).unwrap();
    assert_eq!(back, frame);
}
