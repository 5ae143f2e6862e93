//! # Fractional And Transition Splits
//!
//! The tessellator only ever sees rounded levels. These functions map a
//! parametric coordinate it generated on a rounded edge back to where the
//! sample belongs under the true, fractional level.
//!
//! Both functions pin `t == 0` and `t == 1` to themselves, so patch corners
//! and the midpoint of a transition edge come out exact no matter how the
//! intermediate arithmetic rounds.
use crate::osd::Spacing;

/// Remap `t` on an edge tessellated with `level_up` equal segments to its
/// position under the fractional `level` the edge was rounded up from.
///
/// Fractional tessellation of `level` produces `level_up` segments: all but
/// two have the same length, and the remaining two are shorter and placed
/// symmetrically about the midpoint. Which two depends on `level_up`; the
/// placement matches the hardware tessellator's fractional pattern.
///
/// `t` is returned unchanged for equal spacing and whenever no fractional
/// segment exists (`level <= 2` for even and `level <= 1` for odd spacing).
pub fn fractional_split(t: f32, level: f32, level_up: f32, spacing: Spacing) -> f32 {
    let base = 2.0f32.powf(level_up.log2().floor());
    let half_pattern = (2.0 * base - level_up) as i32 / 2;
    let period = (base / 2.0 - 1.0) as i32;

    let offset = match spacing {
        Spacing::Equal => return t,
        Spacing::FractionalEven => {
            if level <= 2.0 {
                return t;
            }
            1.0 / (half_pattern & period) as f32
        }
        Spacing::FractionalOdd => {
            if level <= 1.0 {
                return t;
            }
            1.0 / (((half_pattern + 1) & period) + 1) as f32
        }
    };

    if t == 0.0 || t == 1.0 {
        return t;
    }

    let dx0 = (1.0 - (level_up - level) / 2.0) / level_up;
    let dx1 = (1.0 - 2.0 * dx0) / (level_up - 2.0 * dx0.ceil());

    // Distance from the midpoint in segments, counting the short segment in
    // once it has been passed. An infinite offset means the short segments
    // sit right at the midpoint.
    let span = |x: f32| {
        let short = if x * offset > 1.0 { 1.0 } else { 0.0 };
        x * dx1 + short * (dx0 - dx1)
    };

    if t < 0.5 {
        let x = level_up / 2.0 - (t * level_up).round();
        0.5 - span(x)
    } else if t > 0.5 {
        let x = (t * level_up).round() - level_up / 2.0;
        0.5 + span(x)
    } else {
        t
    }
}

/// Remap `t` on a transition edge tessellated as one edge of `lo + hi`
/// (rounded) segments.
///
/// The rounded segment count along the whole edge tells which half a sample
/// falls in; the sample is then placed inside that half with
/// [`fractional_split()`] and scaled into `[0, 0.5]` or `[0.5, 1]`.
///
/// For equal spacing `lo` and `hi` must already be rounded; for fractional
/// spacing they are the raw levels. Odd spacing gets one extra segment from
/// the tessellator between the halves; both of its ends map to `0.5`.
///
/// # Examples
///
/// ```
/// use petite_tess::osd::{transition_split, Spacing};
///
/// // 3 + 1 segments: the fourth sample from the start is the split point.
/// assert_eq!(transition_split(0.75, 3.0, 1.0, Spacing::Equal), 0.5);
/// assert_eq!(transition_split(0.5, 3.0, 1.0, Spacing::Equal), 1.0 / 3.0);
/// ```
pub fn transition_split(t: f32, lo: f32, hi: f32, spacing: Spacing) -> f32 {
    if t == 0.0 || t == 1.0 {
        return t;
    }

    match spacing {
        Spacing::Equal => {
            let ti = (t * (lo + hi)).round();
            if ti <= lo {
                (ti / lo) * 0.5
            } else {
                ((ti - lo) / hi) * 0.5 + 0.5
            }
        }
        Spacing::FractionalEven => {
            let lo_up = spacing.round_segment(lo);
            let hi_up = spacing.round_segment(hi);

            let ti = (t * (lo_up + hi_up)).round();
            if ti <= lo_up {
                fractional_split(ti / lo_up, lo, lo_up, spacing) * 0.5
            } else {
                fractional_split((ti - lo_up) / hi_up, hi, hi_up, spacing) * 0.5 + 0.5
            }
        }
        Spacing::FractionalOdd => {
            let lo_up = spacing.round_segment(lo);
            let hi_up = spacing.round_segment(hi);

            // Two odd halves sum to an even count, which the tessellator
            // bumps to the next odd one.
            let ti = (t * (lo_up + hi_up + 1.0)).round();
            if ti <= lo_up {
                fractional_split(ti / lo_up, lo, lo_up, spacing) * 0.5
            } else if ti > lo_up + 1.0 {
                fractional_split((ti - (lo_up + 1.0)) / hi_up, hi, hi_up, spacing) * 0.5 + 0.5
            } else {
                0.5
            }
        }
    }
}
