//! Visibility selection: which detections can anchor disambiguation.
//!
//! An anchor must supply a usable separation estimate. Goal posts qualify
//! with a reliable metric distance, or failing that with an in-frame ground
//! contact point that allows a screen-space estimate; crosses only with a
//! reliable metric distance; the ball never anchors.
//!
//! The returned order is deterministic: posts before crosses (fixed category
//! priority), insertion order within a category. Classification must not
//! depend on the order beyond this documented tie-break.

use crate::types::VisualObject;

/// True when a post with an unreliable metric distance can still be used
/// through its screen-space ground contact point.
pub fn post_suits_pixel_estimate(obj: &VisualObject) -> bool {
    obj.kind.is_post() && obj.screen.ground.is_some()
}

fn usable_as_anchor(obj: &VisualObject) -> bool {
    if obj.kind.is_post() {
        obj.polar.reliable || post_suits_pixel_estimate(obj)
    } else if obj.kind.is_cross() {
        obj.polar.reliable
    } else {
        false
    }
}

/// The detections usable as disambiguation anchors, posts first.
pub fn visible_anchors(objects: &[VisualObject]) -> Vec<&VisualObject> {
    let posts = objects.iter().filter(|o| o.kind.is_post() && usable_as_anchor(o));
    let crosses = objects.iter().filter(|o| o.kind.is_cross() && usable_as_anchor(o));
    posts.chain(crosses).collect()
}

/// Every detected landmark object, including ones unusable as anchors.
/// The ball is excluded; it is not a fixed landmark.
pub fn all_visible(objects: &[VisualObject]) -> Vec<&VisualObject> {
    objects
        .iter()
        .filter(|o| o.kind.is_post() || o.kind.is_cross())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ObjectKind;
    use fieldmark_core::{Polar, ScreenPoint};

    fn obj(kind: ObjectKind, polar: Polar) -> VisualObject {
        VisualObject::new(kind, polar, ScreenPoint::new(0, 0))
    }

    #[test]
    fn unreliable_cross_is_not_an_anchor() {
        let objects = vec![
            obj(ObjectKind::BlueCross, Polar::unreliable(200.0, 0.1)),
            obj(ObjectKind::YellowCross, Polar::new(350.0, -0.2)),
        ];
        let anchors = visible_anchors(&objects);
        assert_eq!(anchors.len(), 1);
        assert_eq!(anchors[0].kind, ObjectKind::YellowCross);
    }

    #[test]
    fn posts_come_before_crosses_regardless_of_detection_order() {
        let objects = vec![
            obj(ObjectKind::BlueCross, Polar::new(200.0, 0.1)),
            obj(ObjectKind::YellowGoalLeftPost, Polar::new(300.0, 0.4)),
        ];
        let anchors = visible_anchors(&objects);
        assert_eq!(anchors[0].kind, ObjectKind::YellowGoalLeftPost);
        assert_eq!(anchors[1].kind, ObjectKind::BlueCross);
    }

    #[test]
    fn unreliable_post_with_ground_point_still_anchors() {
        let mut post = obj(
            ObjectKind::BlueGoalUnknownPost,
            Polar::unreliable(400.0, 0.0),
        );
        assert!(visible_anchors(std::slice::from_ref(&post)).is_empty());

        post.screen = ScreenPoint::with_ground(160, 200, Polar::new(390.0, 0.0));
        assert_eq!(visible_anchors(std::slice::from_ref(&post)).len(), 1);
    }

    #[test]
    fn ball_never_appears() {
        let objects = vec![obj(ObjectKind::Ball, Polar::new(50.0, 0.0))];
        assert!(visible_anchors(&objects).is_empty());
        assert!(all_visible(&objects).is_empty());
    }
}
