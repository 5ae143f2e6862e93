//! Correction of tessellator generated domain coordinates.
use crate::far::Edge;
use crate::osd::{transition_split, OuterLevels, Spacing};

/// Move a tessellator sample on a transition edge to where it belongs.
///
/// A sample lying on the boundary of a transition edge gets its coordinate
/// along that edge remapped with [`transition_split()`]. Interior samples
/// and samples on other edges are returned unchanged. Boundaries are tested
/// in [`Edge`] order and at most one applies; at a corner both candidates
/// agree since the split pins `0` and `1`.
///
/// `levels` must be the Lo/Hi levels that the combiner handed on, see
/// [`TessLevels::split`](crate::osd::TessLevels::split).
///
/// # Examples
///
/// ```
/// use petite_tess::osd::{tess_parameterization, OuterLevels, Spacing};
///
/// let levels = OuterLevels {
///     lo: [3.0, 1.0, 1.0, 1.0],
///     hi: [1.0, 0.0, 0.0, 0.0],
/// };
/// // On the split left edge, v = 0.75 is the fourth of four samples.
/// assert_eq!(tess_parameterization([0.0, 0.75], &levels, Spacing::Equal), [0.0, 0.5]);
/// // The right edge is not split.
/// assert_eq!(tess_parameterization([1.0, 0.75], &levels, Spacing::Equal), [1.0, 0.75]);
/// ```
pub fn tess_parameterization(uv: [f32; 2], levels: &OuterLevels, spacing: Spacing) -> [f32; 2] {
    let [u, v] = uv;
    let split = |edge: Edge, t: f32| {
        let (lo, hi) = levels.edge(edge);
        transition_split(t, lo, hi, spacing)
    };

    if u == 0.0 && levels.is_transition(Edge::Left) {
        [u, split(Edge::Left, v)]
    } else if v == 0.0 && levels.is_transition(Edge::Bottom) {
        [split(Edge::Bottom, u), v]
    } else if u == 1.0 && levels.is_transition(Edge::Right) {
        [u, split(Edge::Right, v)]
    } else if v == 1.0 && levels.is_transition(Edge::Top) {
        [split(Edge::Top, u), v]
    } else {
        uv
    }
}
