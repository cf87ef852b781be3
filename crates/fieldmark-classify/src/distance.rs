//! Distance estimation.
//!
//! Pure functions, no shared state. The primitive is the law of cosines on
//! two robot-relative polar measurements; everything else reduces to it or
//! to ground-truth lookups in the field map.

use fieldmark_core::{landmark, LandmarkId, MeasureError, Polar, ScreenPoint};

use crate::classifier::ClassifierParams;
use crate::types::{VisualCorner, VisualObject};
use crate::visibility::post_suits_pixel_estimate;

/// Triangulated separation between two robot-relative measurements.
///
/// `d = sqrt(d1² + d2² − 2·d1·d2·cos(b1 − b2))`; symmetric in its arguments.
pub fn separation(a: Polar, b: Polar) -> f32 {
    let squared = a.distance * a.distance + b.distance * b.distance
        - 2.0 * a.distance * b.distance * (a.bearing - b.bearing).cos();
    // Rounding can push the radicand a hair below zero for near-identical
    // measurements.
    squared.max(0.0).sqrt()
}

/// Separation of two screen points via their ground-plane back-projections.
///
/// Fails when either point lies above the horizon and so has no metric
/// interpretation.
pub fn separation_on_screen(a: &ScreenPoint, b: &ScreenPoint) -> Result<f32, MeasureError> {
    Ok(separation(a.ground_polar()?, b.ground_polar()?))
}

/// Best available estimate of the corner-to-object separation.
///
/// Prefers the metric polar estimates; falls back to the screen-point route
/// for posts whose distance is unreliable but whose ground contact point is
/// in frame. `None` means the object cannot contribute distance evidence.
pub fn corner_object_separation(corner: &VisualCorner, obj: &VisualObject) -> Option<f32> {
    if corner.polar.reliable && obj.polar.reliable {
        return Some(separation(corner.polar, obj.polar));
    }
    if post_suits_pixel_estimate(obj) {
        return separation_on_screen(&corner.screen, &obj.screen).ok();
    }
    None
}

/// Ground-truth separation of two landmarks from the field map.
pub fn real_separation(a: LandmarkId, b: LandmarkId) -> f32 {
    nalgebra::distance(&landmark(a).position, &landmark(b).position)
}

/// Tolerance band for comparing an estimated separation against ground
/// truth, for one anchor object.
///
/// Grows linearly with the anchor's range (bearing and distance noise both
/// scale with it) and widens further when the anchor's identity is not fully
/// resolved, e.g. an unknown-side post.
pub fn allowed_error(obj: &VisualObject, params: &ClassifierParams) -> f32 {
    let base = (params.distance_error_frac * obj.polar.distance).max(params.min_allowed_error);
    if obj.kind.identity_certain() {
        base
    } else {
        base * params.unknown_identity_factor
    }
}

/// Tolerance for comparing the observed separation of two detected corners
/// against the ground-truth separation of a candidate pair.
pub(crate) fn pair_allowed_error(
    first: &VisualCorner,
    second: &VisualCorner,
    params: &ClassifierParams,
) -> f32 {
    let range = first.polar.distance.max(second.polar.distance);
    (params.distance_error_frac * range).max(params.min_allowed_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CornerShape, ObjectKind};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn separation_is_symmetric() {
        let cases = [
            (Polar::new(100.0, 0.3), Polar::new(250.0, -0.7)),
            (Polar::new(52.0, 1.2), Polar::new(52.0, 1.2)),
            (Polar::new(400.0, -1.0), Polar::new(10.0, 0.9)),
        ];
        for (a, b) in cases {
            assert_relative_eq!(separation(a, b), separation(b, a));
        }
    }

    #[test]
    fn separation_matches_right_triangle() {
        // 3-4-5 triangle: legs at right angles from the robot.
        let a = Polar::new(300.0, 0.0);
        let b = Polar::new(400.0, FRAC_PI_2);
        assert_relative_eq!(separation(a, b), 500.0, max_relative = 1e-5);
    }

    #[test]
    fn separation_of_identical_measurements_is_zero() {
        let p = Polar::new(123.0, 0.5);
        assert_relative_eq!(separation(p, p), 0.0);
    }

    #[test]
    fn screen_separation_needs_both_projections() {
        let grounded = ScreenPoint::with_ground(10, 200, Polar::new(150.0, 0.1));
        let sky = ScreenPoint::new(10, 3);
        assert!(separation_on_screen(&grounded, &sky).is_err());
        assert!(separation_on_screen(&grounded, &grounded).is_ok());
    }

    #[test]
    fn real_separation_goal_posts() {
        assert_relative_eq!(
            real_separation(
                LandmarkId::BlueGoalLeftPost,
                LandmarkId::BlueGoalRightPost
            ),
            fieldmark_core::GOAL_WIDTH
        );
    }

    #[test]
    fn allowed_error_widens_with_range_and_uncertain_identity() {
        let params = ClassifierParams::default();
        let near = VisualObject::new(
            ObjectKind::BlueGoalLeftPost,
            Polar::new(100.0, 0.0),
            ScreenPoint::new(0, 0),
        );
        let far = VisualObject {
            polar: Polar::new(400.0, 0.0),
            ..near
        };
        assert!(allowed_error(&far, &params) > allowed_error(&near, &params));

        let unknown = VisualObject {
            kind: ObjectKind::BlueGoalUnknownPost,
            ..far
        };
        assert_relative_eq!(
            allowed_error(&unknown, &params),
            allowed_error(&far, &params) * params.unknown_identity_factor
        );
    }

    #[test]
    fn unreliable_object_without_pixel_route_gives_no_estimate() {
        let corner = VisualCorner::new(
            CornerShape::T,
            Polar::new(150.0, 0.2),
            ScreenPoint::new(120, 180),
        );
        let obj = VisualObject::new(
            ObjectKind::UnknownCross,
            Polar::unreliable(300.0, -0.3),
            ScreenPoint::new(40, 100),
        );
        assert_eq!(corner_object_separation(&corner, &obj), None);
    }
}
