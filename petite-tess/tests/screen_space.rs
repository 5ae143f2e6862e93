//! Tests for screen space edge level estimation.

mod test_utils;

use approx::assert_relative_eq;
use petite_tess::osd::*;
use test_utils::perspective;
use ultraviolet::{Mat4, Vec3};

fn camera_config(tess_level: f32) -> TessConfig {
    TessConfig::builder()
        .tess_level(tess_level)
        .projection(perspective(2.0, 0.1, 100.0))
        .build()
        .expect("valid config")
}

#[test]
fn coincident_points_saturate_to_one() {
    let config = camera_config(10.0);
    let p = Vec3::new(0.3, -0.2, -5.0);

    let level = edge_tess_level(&config, p, p);
    assert_eq!(level, 1.0);
}

#[test]
fn degenerate_sphere_on_eye_plane_saturates_to_one() {
    // Zero diameter divided by zero depth.
    let config = camera_config(10.0);
    let p = Vec3::new(1.0, 1.0, 0.0);

    let level = edge_tess_level(&config, p, p);
    assert_eq!(level, 1.0);
    assert!(!level.is_nan());
}

#[test]
fn projected_bounding_sphere() {
    // Diameter 2 at distance 10 with a focal scale of 2.
    let config = camera_config(10.0);
    let level = edge_tess_level(
        &config,
        Vec3::new(-1.0, 0.0, -10.0),
        Vec3::new(1.0, 0.0, -10.0),
    );
    assert_relative_eq!(level, 4.0, max_relative = 1e-5);

    assert_relative_eq!(
        post_projection_sphere_extent(&config, Vec3::new(0.0, 0.0, -10.0), 2.0),
        0.4,
        max_relative = 1e-5
    );
}

#[test]
fn edges_facing_the_camera_keep_their_level() {
    // Same bounding sphere as `projected_bounding_sphere` even though the
    // projected edge is a single point.
    let config = camera_config(10.0);
    let level = edge_tess_level(
        &config,
        Vec3::new(0.0, 0.0, -9.0),
        Vec3::new(0.0, 0.0, -11.0),
    );
    assert_relative_eq!(level, 4.0, max_relative = 1e-5);
}

#[test]
fn level_falls_off_with_distance() {
    let config = camera_config(40.0);
    let near = edge_tess_level(
        &config,
        Vec3::new(-1.0, 0.0, -10.0),
        Vec3::new(1.0, 0.0, -10.0),
    );
    let far = edge_tess_level(
        &config,
        Vec3::new(-1.0, 0.0, -20.0),
        Vec3::new(1.0, 0.0, -20.0),
    );
    assert_relative_eq!(near, 2.0 * far, max_relative = 1e-5);
}

#[test]
fn model_view_moves_geometry_in_front_of_the_camera() {
    let config = TessConfig::builder()
        .tess_level(10.0)
        .projection(perspective(2.0, 0.1, 100.0))
        .model_view(Mat4::from_translation(Vec3::new(0.0, 0.0, -10.0)))
        .build()
        .unwrap();

    let level = edge_tess_level(&config, Vec3::new(-1.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
    assert_relative_eq!(level, 4.0, max_relative = 1e-5);
}

#[test]
fn level_is_clamped_to_half_the_device_maximum() {
    for max_tess_level in [2.0, 16.0, 64.0] {
        let config = TessConfig::builder()
            .tess_level(1000.0)
            .max_tess_level(max_tess_level)
            .projection(perspective(2.0, 0.1, 100.0))
            .build()
            .unwrap();

        let level = edge_tess_level(
            &config,
            Vec3::new(-5.0, 0.0, -1.0),
            Vec3::new(5.0, 0.0, -1.0),
        );
        assert_eq!(level, max_tess_level / 2.0);
    }
}
