//! Shared helpers for the integration tests.
#![allow(dead_code)]

use petite_tess::far::PatchParam;
use petite_tess::osd::{crease_segment_parameter, BezierPoint};
use ultraviolet::{Mat4, Vec3, Vec4};

/// OpenGL style perspective projection with a square aspect ratio.
///
/// `focal` is `1 / tan(fov_y / 2)`. Clip space `w` equals the view space
/// distance in front of the eye.
pub fn perspective(focal: f32, near: f32, far: f32) -> Mat4 {
    Mat4::new(
        Vec4::new(focal, 0.0, 0.0, 0.0),
        Vec4::new(0.0, focal, 0.0, 0.0),
        Vec4::new(0.0, 0.0, (far + near) / (near - far), -1.0),
        Vec4::new(0.0, 0.0, 2.0 * far * near / (near - far), 0.0),
    )
}

/// 4x4 control points on the lattice `(scale * column, scale * row, 0)`.
pub fn grid(scale: f32) -> [Vec3; 16] {
    std::array::from_fn(|i| Vec3::new((i % 4) as f32 * scale, (i / 4) as f32 * scale, 0.0))
}

/// Same lattice as [`grid`] as smooth Bezier points.
pub fn bezier_grid(scale: f32) -> [BezierPoint; 16] {
    grid(scale).map(BezierPoint::from)
}

fn bernstein(t: f32) -> [f32; 4] {
    let s = 1.0 - t;
    [s * s * s, 3.0 * t * s * s, 3.0 * t * t * s, t * t * t]
}

/// Plain bicubic Bezier evaluation, standing in for the pipeline's limit
/// surface evaluator.
pub fn eval_bezier(points: &[BezierPoint; 16], param: PatchParam, uv: [f32; 2]) -> Vec3 {
    let s = crease_segment_parameter(param, uv);
    let bu = bernstein(uv[0]);
    let bv = bernstein(uv[1]);

    let mut p = Vec3::zero();
    for (row, wv) in bv.iter().enumerate() {
        for (col, wu) in bu.iter().enumerate() {
            p += points[4 * row + col].at_segment(s) * (wu * wv);
        }
    }
    p
}

/// Parameters `i / n` for `i` in `0..=n`.
pub fn samples(n: usize) -> Vec<f32> {
    (0..=n).map(|i| i as f32 / n as f32).collect()
}
