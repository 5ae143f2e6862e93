//! Bezier basis control points and the limit surface evaluator seam.
//!
//! Patches converted to the Bezier basis interpolate their four corner
//! control points, so those corners lie on the limit surface. Single crease
//! patches carry two extra positions per control point; which of the three
//! is active depends on where along the crease a point is evaluated.
use crate::far::{Edge, PatchParam};
use ultraviolet::Vec3;

/// A control point of a bicubic Bezier patch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BezierPoint {
    /// A plain control point.
    Smooth { p: Vec3 },
    /// A control point of a single crease patch.
    ///
    /// `p` is used while the crease segment parameter is at most
    /// `segments[0]`, `p1` up to `segments[1]` and `p2` beyond.
    Crease {
        p: Vec3,
        p1: Vec3,
        p2: Vec3,
        segments: [f32; 2],
    },
}

impl From<Vec3> for BezierPoint {
    fn from(p: Vec3) -> Self {
        BezierPoint::Smooth { p }
    }
}

impl BezierPoint {
    /// The smooth (uncreased) position.
    #[inline]
    pub fn position(&self) -> Vec3 {
        match *self {
            BezierPoint::Smooth { p } | BezierPoint::Crease { p, .. } => p,
        }
    }

    /// The position active at crease segment parameter `s`.
    pub fn at_segment(&self, s: f32) -> Vec3 {
        match *self {
            BezierPoint::Smooth { p } => p,
            BezierPoint::Crease {
                p,
                p1,
                p2,
                segments,
            } => {
                if s <= segments[0] {
                    p
                } else if s <= segments[1] {
                    p1
                } else {
                    p2
                }
            }
        }
    }
}

/// Position along the crease direction of a single crease patch.
///
/// The crease runs along the patch boundary given by the lowest set bit of
/// the boundary mask; `s` grows away from that boundary.
pub fn crease_segment_parameter(param: PatchParam, uv: [f32; 2]) -> f32 {
    let boundary = param.boundary();
    let [u, v] = uv;

    if boundary & Edge::Bottom.transition_bit() != 0 {
        1.0 - v
    } else if boundary & Edge::Right.transition_bit() != 0 {
        u
    } else if boundary & Edge::Top.transition_bit() != 0 {
        v
    } else if boundary & Edge::Left.transition_bit() != 0 {
        1.0 - u
    } else {
        0.0
    }
}

/// Evaluates a position on the limit surface of a Bezier patch.
///
/// This is a service provided by the surrounding pipeline. Any
/// `Fn(&[BezierPoint; 16], PatchParam, [f32; 2]) -> Vec3` closure
/// implements it.
pub trait LimitEvaluator {
    fn evaluate(&self, points: &[BezierPoint; 16], param: PatchParam, uv: [f32; 2]) -> Vec3;
}

impl<F> LimitEvaluator for F
where
    F: Fn(&[BezierPoint; 16], PatchParam, [f32; 2]) -> Vec3,
{
    #[inline]
    fn evaluate(&self, points: &[BezierPoint; 16], param: PatchParam, uv: [f32; 2]) -> Vec3 {
        self(points, param, uv)
    }
}
