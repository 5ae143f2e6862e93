//! # Outer Level Assembly
//!
//! Each patch edge gets two raw (unrounded) levels. `lo` covers the edge from
//! its first corner to the midpoint and `hi` from the midpoint to the second
//! corner. Only transition edges are split; all other edges keep the whole
//! level in `lo` and have `hi == 0`.
//!
//! Where the levels come from depends on the geometry at hand, so the
//! assembly is a trait, [`OuterLevelSource`], with one implementation per
//! kind of geometry:
//!
//! * [`Uniform`] – powers of two derived from the refinement depth.
//! * [`RefinedPoints`] – the 16 B-spline control points, refined once more
//!   with Catmull-Clark stencils along the edges.
//! * [`LimitPoints`] – 16 Bezier control points plus a limit surface
//!   evaluator. This is the most accurate source.
//! * [`QuadCorners`] – four corner points, for patches without a regular
//!   control point layout. Never splits edges.
//!
//! All sources clamp every level to [`TessConfig::level_ceiling()`].
use crate::far::{Edge, PatchParam};
use crate::osd::{
    crease_segment_parameter, edge_tess_level, BezierPoint, LimitEvaluator, TessConfig,
};
use bytemuck::{Pod, Zeroable};
use ultraviolet::Vec3;

/// Raw Lo/Hi levels of the four edges of a patch, in [`Edge`] order.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct OuterLevels {
    pub lo: [f32; 4],
    pub hi: [f32; 4],
}

impl OuterLevels {
    /// Levels of `edge` as `(lo, hi)`.
    #[inline]
    pub fn edge(&self, edge: Edge) -> (f32, f32) {
        (self.lo[edge.index()], self.hi[edge.index()])
    }

    #[inline]
    pub fn set_edge(&mut self, edge: Edge, lo: f32, hi: f32) {
        self.lo[edge.index()] = lo;
        self.hi[edge.index()] = hi;
    }

    /// Returns true if `edge` is split into two halves.
    #[inline]
    pub fn is_transition(&self, edge: Edge) -> bool {
        self.hi[edge.index()] > 0.0
    }

    /// Returns true if any edge is split.
    #[inline]
    pub fn has_transition(&self) -> bool {
        self.hi.iter().any(|&hi| hi > 0.0)
    }

    /// Per-edge sum of both halves.
    #[inline]
    pub fn combined(&self) -> [f32; 4] {
        std::array::from_fn(|i| self.lo[i] + self.hi[i])
    }
}

/// Geometry a patch's outer levels can be computed from.
pub trait OuterLevelSource {
    /// Raw Lo/Hi levels for the patch described by `param`.
    fn outer_levels(&self, param: PatchParam, config: &TessConfig) -> OuterLevels;
}

impl<S: OuterLevelSource + ?Sized> OuterLevelSource for &S {
    #[inline]
    fn outer_levels(&self, param: PatchParam, config: &TessConfig) -> OuterLevels {
        (**self).outer_levels(param, config)
    }
}

/// Levels from refinement depth alone.
///
/// Each level of refinement halves the global tessellation level.
/// Transition edges are raised to at least 2 so that both of their halves
/// have a segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Uniform;

impl OuterLevelSource for Uniform {
    fn outer_levels(&self, param: PatchParam, config: &TessConfig) -> OuterLevels {
        let depth = param.depth().max(1) as i32;
        let level = config.tess_level().min(config.max_tess_level()) / 2.0f32.powi(depth - 1);

        let mut levels = OuterLevels::default();
        for edge in Edge::ALL {
            let min_level = 1.0 + param.is_transition_edge(edge) as u8 as f32;
            levels.set_edge(edge, level.max(min_level).min(config.level_ceiling()), 0.0);
        }
        levels
    }
}

/// Levels from the 16 control points of a regular B-spline patch.
///
/// Transition edges are split at the edge point one refinement level down;
/// each half is measured from the nearby refined vertex point. Other edges
/// are measured between the two interior control points next to them.
#[derive(Debug, Clone, Copy)]
pub struct RefinedPoints<'a>(pub &'a [Vec3; 16]);

// Catmull-Clark stencil weights on a regular 4x4 grid.
const VERTEX_CENTER: f32 = 0.5625;
const VERTEX_EDGE: f32 = 0.09375;
const VERTEX_CORNER: f32 = 0.015625;
const EDGE_NEAR: f32 = 0.375;
const EDGE_FAR: f32 = 0.0625;

/// Vertex point of interior control point `c` (`c` is 5, 6, 9 or 10).
#[inline]
fn vertex_point(cp: &[Vec3; 16], c: usize) -> Vec3 {
    let corners = cp[c - 5] + cp[c - 3] + cp[c + 3] + cp[c + 5];
    let edges = cp[c - 4] + cp[c - 1] + cp[c + 1] + cp[c + 4];
    corners * VERTEX_CORNER + edges * VERTEX_EDGE + cp[c] * VERTEX_CENTER
}

/// Edge point between interior control points `a` and `b`.
#[inline]
fn edge_point(cp: &[Vec3; 16], a: usize, b: usize) -> Vec3 {
    // Neighbors one step across the edge on either side.
    let step = if b - a == 1 { 4 } else { 1 };
    let far = cp[a - step] + cp[b - step] + cp[a + step] + cp[b + step];
    (cp[a] + cp[b]) * EDGE_NEAR + far * EDGE_FAR
}

impl RefinedPoints<'_> {
    /// Interior control points at the two ends of `edge`, in the direction
    /// the edge's parameter grows.
    #[inline]
    fn interior(edge: Edge) -> (usize, usize) {
        match edge {
            Edge::Left => (5, 9),
            Edge::Bottom => (5, 6),
            Edge::Right => (6, 10),
            Edge::Top => (9, 10),
        }
    }
}

impl OuterLevelSource for RefinedPoints<'_> {
    fn outer_levels(&self, param: PatchParam, config: &TessConfig) -> OuterLevels {
        let cp = self.0;
        let mut levels = OuterLevels::default();

        for edge in Edge::ALL {
            let (a, b) = Self::interior(edge);
            if param.is_transition_edge(edge) {
                let ev = edge_point(cp, a, b);
                levels.set_edge(
                    edge,
                    edge_tess_level(config, vertex_point(cp, a), ev),
                    edge_tess_level(config, vertex_point(cp, b), ev),
                );
            } else {
                levels.set_edge(edge, edge_tess_level(config, cp[a], cp[b]), 0.0);
            }
        }
        levels
    }
}

/// Levels from the 16 Bezier control points of a patch, measured on the
/// limit surface.
///
/// Corners are read straight from the control points. Transition edges are
/// split at their limit surface midpoint, obtained from `evaluator`.
pub struct LimitPoints<'a, E> {
    pub points: &'a [BezierPoint; 16],
    pub evaluator: &'a E,
}

impl<'a, E: LimitEvaluator> LimitPoints<'a, E> {
    pub fn new(points: &'a [BezierPoint; 16], evaluator: &'a E) -> Self {
        Self { points, evaluator }
    }

    /// Limit position of the corner control point `index` at `uv`.
    #[inline]
    fn corner(&self, param: PatchParam, index: usize, uv: [f32; 2]) -> Vec3 {
        self.points[index].at_segment(crease_segment_parameter(param, uv))
    }
}

impl<E: LimitEvaluator> OuterLevelSource for LimitPoints<'_, E> {
    fn outer_levels(&self, param: PatchParam, config: &TessConfig) -> OuterLevels {
        let p0 = self.corner(param, 0, [0.0, 0.0]);
        let p3 = self.corner(param, 3, [1.0, 0.0]);
        let p12 = self.corner(param, 12, [0.0, 1.0]);
        let p15 = self.corner(param, 15, [1.0, 1.0]);

        let mut levels = OuterLevels::default();
        for edge in Edge::ALL {
            let (start, end, mid) = match edge {
                Edge::Left => (p0, p12, [0.0, 0.5]),
                Edge::Bottom => (p0, p3, [0.5, 0.0]),
                Edge::Right => (p3, p15, [1.0, 0.5]),
                Edge::Top => (p12, p15, [0.5, 1.0]),
            };

            if param.is_transition_edge(edge) {
                let ev = self.evaluator.evaluate(self.points, param, mid);
                levels.set_edge(
                    edge,
                    edge_tess_level(config, start, ev),
                    edge_tess_level(config, end, ev),
                );
            } else {
                levels.set_edge(edge, edge_tess_level(config, start, end), 0.0);
            }
        }
        levels
    }
}

/// Levels from the four corners of a patch, counter-clockwise from
/// `(0, 0)`.
///
/// Transition masks are ignored; every level lands in `lo`.
#[derive(Debug, Clone, Copy)]
pub struct QuadCorners(pub [Vec3; 4]);

impl OuterLevelSource for QuadCorners {
    fn outer_levels(&self, _param: PatchParam, config: &TessConfig) -> OuterLevels {
        let [c0, c1, c2, c3] = self.0;
        OuterLevels {
            lo: [
                edge_tess_level(config, c0, c3),
                edge_tess_level(config, c0, c1),
                edge_tess_level(config, c1, c2),
                edge_tess_level(config, c3, c2),
            ],
            hi: [0.0; 4],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> [Vec3; 16] {
        std::array::from_fn(|i| Vec3::new((i % 4) as f32, (i / 4) as f32, 0.0))
    }

    #[test]
    fn stencils_reproduce_a_flat_grid() {
        // On a uniform grid refined points land on the half lattice.
        let cp = grid();
        assert_eq!(vertex_point(&cp, 5), cp[5]);
        assert_eq!(vertex_point(&cp, 10), cp[10]);
        assert_eq!(edge_point(&cp, 5, 6), Vec3::new(1.5, 1.0, 0.0));
        assert_eq!(edge_point(&cp, 5, 9), Vec3::new(1.0, 1.5, 0.0));
        assert_eq!(edge_point(&cp, 6, 10), Vec3::new(2.0, 1.5, 0.0));
        assert_eq!(edge_point(&cp, 9, 10), Vec3::new(1.5, 2.0, 0.0));
    }

    #[test]
    fn stencil_weights_sum_to_one() {
        assert_eq!(VERTEX_CENTER + 4.0 * VERTEX_EDGE + 4.0 * VERTEX_CORNER, 1.0);
        assert_eq!(2.0 * EDGE_NEAR + 4.0 * EDGE_FAR, 1.0);
    }
}
