//! Tests for batch evaluation.

mod test_utils;

use petite_tess::far::{Edge, PatchParam};
use petite_tess::osd::*;
use test_utils::{grid, perspective};
use ultraviolet::{Mat4, Vec3};

fn config(spacing: Spacing) -> TessConfig {
    TessConfig::builder()
        .tess_level(12.0)
        .spacing(spacing)
        .model_view(Mat4::from_translation(Vec3::new(-4.0, -4.0, -12.0)))
        .projection(perspective(1.7, 0.1, 100.0))
        .build()
        .unwrap()
}

fn control_points() -> Vec<[Vec3; 16]> {
    (0..12)
        .map(|i| grid(1.0 + i as f32 * 0.25).map(|p| p + Vec3::new(0.0, 0.0, -(i as f32))))
        .collect()
}

fn patches(cps: &[[Vec3; 16]]) -> Vec<PatchInput<RefinedPoints<'_>>> {
    cps.iter()
        .enumerate()
        .map(|(i, cp)| PatchInput {
            source: RefinedPoints(cp),
            param: PatchParam::new(1 + (i % 4) as u8, (i % 16) as u8),
        })
        .collect()
}

#[test]
fn batch_matches_single_patches() {
    let cps = control_points();
    let patches = patches(&cps);

    for spacing in [Spacing::Equal, Spacing::FractionalEven, Spacing::FractionalOdd] {
        let config = config(spacing);
        let batch = tess_levels_batch(&patches, &config);

        assert_eq!(batch.len(), patches.len());
        for (levels, patch) in batch.iter().zip(&patches) {
            assert_eq!(*levels, tess_levels(&patch.source, patch.param, &config));
        }
    }
}

#[test]
fn batch_over_mixed_sources() {
    let cp = grid(2.0);
    let refined = RefinedPoints(&cp);
    let corners = QuadCorners([cp[0], cp[3], cp[15], cp[12]]);
    let sources: [&dyn OuterLevelSource; 3] = [&Uniform, &refined, &corners];

    let patches: Vec<_> = sources
        .into_iter()
        .map(|source| PatchInput {
            source,
            param: PatchParam::new(2, 0),
        })
        .collect();

    let config = config(Spacing::Equal);
    let batch = tess_levels_batch(&patches, &config);
    assert_eq!(batch[0], tess_levels(&Uniform, PatchParam::new(2, 0), &config));
    assert_eq!(batch[2], tess_levels(&corners, PatchParam::new(2, 0), &config));
}

#[test]
fn correct_samples_in_place() {
    let mut levels = OuterLevels {
        lo: [2.0; 4],
        hi: [0.0; 4],
    };
    levels.set_edge(Edge::Bottom, 3.0, 1.0);

    let mut uvs = vec![[0.25, 0.0], [0.75, 0.0], [0.5, 0.5], [0.0, 0.5]];
    correct_samples(&mut uvs, &levels, Spacing::Equal);

    assert_eq!(uvs[0], [1.0 / 6.0, 0.0]);
    assert_eq!(uvs[1], [0.5, 0.0]);
    assert_eq!(uvs[2], [0.5, 0.5]);
    assert_eq!(uvs[3], [0.0, 0.5]);
}

#[cfg(feature = "rayon")]
#[test]
fn parallel_matches_sequential() {
    let cps = control_points();
    let patches = patches(&cps);
    let config = config(Spacing::FractionalOdd);

    assert_eq!(
        tess_levels_batch_par(&patches, &config),
        tess_levels_batch(&patches, &config)
    );

    let levels = tess_levels_batch(&patches, &config)[5].split;
    let mut uvs: Vec<[f32; 2]> = (0..=16)
        .flat_map(|i| (0..=16).map(move |j| [i as f32 / 16.0, j as f32 / 16.0]))
        .collect();
    let mut expected = uvs.clone();

    correct_samples_par(&mut uvs, &levels, Spacing::FractionalOdd);
    correct_samples(&mut expected, &levels, Spacing::FractionalOdd);
    assert_eq!(uvs, expected);
}
