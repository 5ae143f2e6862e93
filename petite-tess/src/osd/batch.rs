//! Evaluation of many patches at once.
//!
//! Patches are independent of each other, as are the samples of a single
//! patch. With the `rayon` feature the `_par` variants spread the work over
//! the global thread pool and produce the same results as the sequential
//! ones.
use crate::far::PatchParam;
use crate::osd::{
    tess_levels, tess_parameterization, OuterLevelSource, OuterLevels, Spacing, TessConfig,
    TessLevels,
};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Geometry and parameters of one patch.
#[derive(Debug, Clone, Copy)]
pub struct PatchInput<S> {
    pub source: S,
    pub param: PatchParam,
}

/// Tessellation levels of every patch in `patches`.
pub fn tess_levels_batch<S>(patches: &[PatchInput<S>], config: &TessConfig) -> Vec<TessLevels>
where
    S: OuterLevelSource,
{
    patches
        .iter()
        .map(|patch| tess_levels(&patch.source, patch.param, config))
        .collect()
}

/// Parallel version of [`tess_levels_batch()`].
///
/// This method is only available when the `rayon` feature is enabled.
#[cfg(feature = "rayon")]
pub fn tess_levels_batch_par<S>(patches: &[PatchInput<S>], config: &TessConfig) -> Vec<TessLevels>
where
    S: OuterLevelSource + Sync,
{
    patches
        .par_iter()
        .map(|patch| tess_levels(&patch.source, patch.param, config))
        .collect()
}

/// Correct all samples of one patch in place.
pub fn correct_samples(uvs: &mut [[f32; 2]], levels: &OuterLevels, spacing: Spacing) {
    uvs.iter_mut()
        .for_each(|uv| *uv = tess_parameterization(*uv, levels, spacing));
}

/// Parallel version of [`correct_samples()`].
///
/// This method is only available when the `rayon` feature is enabled.
#[cfg(feature = "rayon")]
pub fn correct_samples_par(uvs: &mut [[f32; 2]], levels: &OuterLevels, spacing: Spacing) {
    uvs.par_iter_mut()
        .for_each(|uv| *uv = tess_parameterization(*uv, levels, spacing));
}
