//! Corner classification against the field map.
//!
//! For each ambiguous corner the classifier keeps only the concrete corners
//! whose ground-truth distance to *every* visible anchor agrees with the
//! triangulated detection-to-anchor distance. One hard contradiction
//! eliminates a candidate regardless of how many anchors agree: the
//! triangulation errors are independent, so a strong disagreement is
//! disqualifying on its own.

use log::debug;
use serde::{Deserialize, Serialize};

use fieldmark_core::{LandmarkClass, LandmarkId};

use crate::context::FrameContext;
use crate::distance::{
    allowed_error, corner_object_separation, pair_allowed_error, real_separation, separation,
};
use crate::types::{shape_candidates, CornerShape, VisualCorner, VisualObject};
use crate::visibility::visible_anchors;

/// Tolerances for the geometric consistency tests.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassifierParams {
    /// Allowed error as a fraction of the anchor's estimated range.
    pub distance_error_frac: f32,
    /// Floor on the allowed error in centimeters, so nearby anchors do not
    /// demand impossible precision.
    pub min_allowed_error: f32,
    /// Extra widening factor for anchors whose identity is not fully
    /// resolved, e.g. a post of unknown side.
    pub unknown_identity_factor: f32,
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            distance_error_frac: 0.175,
            min_allowed_error: 20.0,
            unknown_identity_factor: 2.0,
        }
    }
}

/// Per-frame corner classifier. Stateless between frames.
#[derive(Clone, Debug, Default)]
pub struct Classifier {
    params: ClassifierParams,
}

impl Classifier {
    pub fn new(params: ClassifierParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &ClassifierParams {
        &self.params
    }

    /// Per-frame entry point: reset and fill the context, then narrow every
    /// corner. The context's corner counts use the *final* shapes, after any
    /// reclassification.
    pub fn classify_frame(
        &self,
        corners: &mut [VisualCorner],
        objects: &[VisualObject],
        ctx: &mut FrameContext,
    ) {
        ctx.reset();
        for obj in objects {
            ctx.record_object(obj.kind);
        }
        self.identify_corners(corners, objects);
        for corner in corners.iter() {
            ctx.record_corner_shape(corner.shape);
        }
    }

    /// Narrow every corner's candidate set in place: first against the
    /// visible anchors, then by cross-pruning each pair of corners seen in
    /// this frame.
    pub fn identify_corners(&self, corners: &mut [VisualCorner], objects: &[VisualObject]) {
        let anchors = visible_anchors(objects);
        for corner in corners.iter_mut() {
            self.classify_with_anchors(corner, &anchors);
        }
        for i in 0..corners.len() {
            let (head, tail) = corners.split_at_mut(i + 1);
            let first = &mut head[i];
            for second in tail.iter_mut() {
                self.relate_corner_pair(first, second);
            }
        }
    }

    /// Narrow one corner against the visible anchors, revising its shape
    /// once if the evidence demands it.
    pub fn classify_with_anchors(&self, corner: &mut VisualCorner, anchors: &[&VisualObject]) {
        let start: Vec<LandmarkId> = corner
            .possible
            .iter()
            .copied()
            .filter(|&id| id_matches_shape(id, corner.shape))
            .collect();

        let survivors = self.consistent_candidates(&start, corner, anchors);

        // An L set emptied by real evidence may mean the shape call was
        // wrong: try the T interpretation at the same location, once. A
        // corner that was already empty on arrival had no candidates to
        // contradict; regenerating a set for it would invent candidates
        // from nothing.
        if survivors.is_empty()
            && !start.is_empty()
            && matches!(corner.shape, CornerShape::InnerL | CornerShape::OuterL)
            && self.has_distance_evidence(corner, anchors)
        {
            let t_set = shape_candidates(CornerShape::T);
            let t_survivors = self.consistent_candidates(&t_set, corner, anchors);
            if !t_survivors.is_empty() {
                debug!(
                    "reclassifying {:?} corner as T ({} candidates)",
                    corner.shape,
                    t_survivors.len()
                );
                corner.shape = CornerShape::T;
                corner.possible = t_survivors;
                return;
            }
        }

        debug!("corner {:?} candidates: {:?}", corner.shape, survivors);
        corner.possible = survivors;
    }

    /// Cross-narrow two corners seen in the same frame by their observed
    /// separation: a candidate survives only as part of a candidate pair
    /// whose ground-truth separation matches. Corners without reliable
    /// distance, and empty (unresolved) corners, give no constraint.
    pub fn relate_corner_pair(&self, first: &mut VisualCorner, second: &mut VisualCorner) {
        if !first.polar.reliable || !second.polar.reliable {
            return;
        }
        if first.possible.is_empty() || second.possible.is_empty() {
            return;
        }

        let observed = separation(first.polar, second.polar);
        let tolerance = pair_allowed_error(first, second, &self.params);

        let mut keep_first = Vec::new();
        let mut keep_second = Vec::new();
        for &a in &first.possible {
            for &b in &second.possible {
                if a == b {
                    continue;
                }
                if (real_separation(a, b) - observed).abs() <= tolerance {
                    if !keep_first.contains(&a) {
                        keep_first.push(a);
                    }
                    if !keep_second.contains(&b) {
                        keep_second.push(b);
                    }
                }
            }
        }

        keep_first.sort();
        keep_second.sort();
        first.possible = keep_first;
        second.possible = keep_second;
    }

    /// The candidates consistent with every anchor that supplies a usable
    /// separation estimate, in field-map order. With no usable anchors this
    /// is the input set unchanged.
    fn consistent_candidates(
        &self,
        candidates: &[LandmarkId],
        corner: &VisualCorner,
        anchors: &[&VisualObject],
    ) -> Vec<LandmarkId> {
        let mut survivors: Vec<LandmarkId> = candidates
            .iter()
            .copied()
            .filter(|&candidate| {
                anchors
                    .iter()
                    .all(|anchor| self.consistent_with_anchor(candidate, corner, anchor))
            })
            .collect();
        survivors.sort();
        survivors
    }

    /// Whether one candidate agrees with one anchor. Anchors that cannot
    /// provide a separation estimate never eliminate anything. An anchor of
    /// uncertain identity accepts the candidate if any of its possible
    /// positions agrees; the tolerance is already widened for it.
    fn consistent_with_anchor(
        &self,
        candidate: LandmarkId,
        corner: &VisualCorner,
        anchor: &VisualObject,
    ) -> bool {
        let Some(estimated) = corner_object_separation(corner, anchor) else {
            return true;
        };
        let tolerance = allowed_error(anchor, &self.params);
        anchor
            .kind
            .possible_landmarks()
            .iter()
            .any(|&pos| (real_separation(candidate, pos) - estimated).abs() <= tolerance)
    }

    fn has_distance_evidence(&self, corner: &VisualCorner, anchors: &[&VisualObject]) -> bool {
        anchors
            .iter()
            .any(|a| corner_object_separation(corner, a).is_some())
    }
}

fn id_matches_shape(id: LandmarkId, shape: CornerShape) -> bool {
    match (fieldmark_core::landmark(id).class, shape.class()) {
        (LandmarkClass::Corner(class), Some(wanted)) => class == wanted,
        (LandmarkClass::Corner(_), None) => true,
        _ => false,
    }
}
