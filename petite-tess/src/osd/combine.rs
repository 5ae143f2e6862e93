//! Combining Lo/Hi levels into the levels handed to the tessellator.
use crate::far::{Edge, PatchParam};
use crate::osd::{
    tess_parameterization, OuterLevelSource, OuterLevels, Spacing, TessConfig, Uniform,
};
use bytemuck::{Pod, Zeroable};

/// Tessellation levels of one patch.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TessLevels {
    /// Outer levels for the tessellator, in [`Edge`] order.
    pub outer: [f32; 4],
    /// Inner levels for the tessellator: `[u direction, v direction]`.
    pub inner: [f32; 2],
    /// Segment count of each half of every edge after rounding.
    ///
    /// With fractional spacing only transition edges are rounded here;
    /// other edges keep their fractional level.
    pub rounded: OuterLevels,
    /// Lo/Hi levels the parameterization corrector expects.
    ///
    /// These are the rounded levels for equal spacing and the raw levels for
    /// fractional spacing, whose splits are recovered after tessellation.
    pub split: OuterLevels,
}

impl TessLevels {
    /// Correct a sample generated by the tessellator for these levels.
    #[inline]
    pub fn parameterization(&self, uv: [f32; 2], spacing: Spacing) -> [f32; 2] {
        tess_parameterization(uv, &self.split, spacing)
    }
}

/// Round and sum raw Lo/Hi levels according to `spacing`.
///
/// * Equal spacing rounds both halves to the nearest integer before adding
///   them.
/// * Fractional spacing rounds the halves of transition edges up to the
///   next even (odd) integer and adds them. Other edges pass their
///   fractional level through; the tessellator rounds it.
///
/// Inner levels average the two outer sums across each direction. For
/// fractional spacing these are the unrounded sums. Under odd spacing the
/// tessellator adds a segment to the even sum of two odd halves, so as soon
/// as an edge is split the sums feeding the inner levels are raised to at
/// least 3.
///
/// # Examples
///
/// ```
/// use petite_tess::osd::{combine_levels, OuterLevels, Spacing};
///
/// let levels = combine_levels(
///     &OuterLevels {
///         lo: [4.0; 4],
///         hi: [0.0; 4],
///     },
///     Spacing::Equal,
/// );
/// assert_eq!(levels.outer, [4.0; 4]);
/// assert_eq!(levels.inner, [4.0, 4.0]);
/// ```
pub fn combine_levels(levels: &OuterLevels, spacing: Spacing) -> TessLevels {
    let (outer, combined, rounded, split) = match spacing {
        Spacing::Equal => {
            let rounded = OuterLevels {
                lo: levels.lo.map(|lo| spacing.round_segment(lo)),
                hi: levels.hi.map(|hi| spacing.round_segment(hi)),
            };
            let combined = rounded.combined();
            (combined, combined, rounded, rounded)
        }
        Spacing::FractionalEven | Spacing::FractionalOdd => {
            let mut combined = levels.combined();
            let mut outer = combined;
            let mut rounded = *levels;

            for edge in Edge::ALL {
                if levels.is_transition(edge) {
                    let (lo, hi) = levels.edge(edge);
                    let (lo, hi) = (spacing.round_segment(lo), spacing.round_segment(hi));
                    rounded.set_edge(edge, lo, hi);
                    outer[edge.index()] = lo + hi;
                }
            }

            if spacing == Spacing::FractionalOdd && levels.has_transition() {
                combined = combined.map(|c| c.max(3.0));
            }

            (outer, combined, rounded, *levels)
        }
    };

    TessLevels {
        outer,
        inner: [
            (combined[1] + combined[3]) * 0.5,
            (combined[0] + combined[2]) * 0.5,
        ],
        rounded,
        split,
    }
}

/// Outer and inner levels for one patch.
///
/// Runs `source` (or [`Uniform`] when screen space tessellation is off)
/// and combines the result with the configured spacing.
///
/// # Examples
///
/// ```
/// use petite_tess::far::PatchParam;
/// use petite_tess::osd::{tess_levels, TessConfig, Uniform};
///
/// let config = TessConfig::builder().tess_level(8.0).build().unwrap();
/// let levels = tess_levels(&Uniform, PatchParam::new(2, 0), &config);
/// assert_eq!(levels.outer, [4.0; 4]);
/// ```
pub fn tess_levels<S>(source: &S, param: PatchParam, config: &TessConfig) -> TessLevels
where
    S: OuterLevelSource + ?Sized,
{
    let levels = if config.screen_space() {
        source.outer_levels(param, config)
    } else {
        Uniform.outer_levels(param, config)
    };

    combine_levels(&levels, config.spacing())
}
