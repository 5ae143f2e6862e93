//! Screen space edge level estimation.
use crate::osd::TessConfig;
use ultraviolet::{Mat4, Vec3};

#[inline]
fn transform_point(matrix: &Mat4, p: Vec3) -> Vec3 {
    let p = *matrix * p.into_homogeneous_point();
    Vec3::new(p.x, p.y, p.z)
}

/// Projected size of a view space sphere, in normalized device units.
///
/// Uses the vertical focal scale of the projection so the result does not
/// depend on where the sphere is on screen.
pub fn post_projection_sphere_extent(config: &TessConfig, center: Vec3, diameter: f32) -> f32 {
    let projection = config.projection();
    let p = *projection * center.into_homogeneous_point();
    (diameter * projection.cols[1].y / p.w).abs()
}

/// Tessellation level for the edge `p0`-`p1`.
///
/// The diameter of the edge's bounding sphere is projected rather than the
/// edge itself. A projected edge shrinks to nothing when it points at the
/// camera even though the surface it bounds still covers pixels.
///
/// The result is at least `1` and at most [`TessConfig::level_ceiling()`].
/// Degenerate input (coincident points, a sphere centered on the eye plane)
/// saturates to one of these bounds.
///
/// # Examples
///
/// ```
/// use petite_tess::osd::{edge_tess_level, TessConfig};
/// use ultraviolet::Vec3;
///
/// let config = TessConfig::default();
/// let p = Vec3::new(0.5, 0.5, -2.0);
/// assert_eq!(edge_tess_level(&config, p, p), 1.0);
/// ```
pub fn edge_tess_level(config: &TessConfig, p0: Vec3, p1: Vec3) -> f32 {
    let p0 = transform_point(config.model_view(), p0);
    let p1 = transform_point(config.model_view(), p1);

    let center = (p0 + p1) * 0.5;
    let diameter = (p0 - p1).mag();
    let projected = post_projection_sphere_extent(config, center, diameter);

    // f32::max drops the NaN of a zero sized sphere on the eye plane.
    let level = 1.0f32.max(config.tess_level() * projected);

    level.min(config.level_ceiling())
}
