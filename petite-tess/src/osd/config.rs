//! Tessellation configuration.
//!
//! Everything the tessellation functions would otherwise read from shader
//! uniforms or compile-time defines lives in an immutable [`TessConfig`]
//! that is passed by reference into every call.
use crate::{Error, Result};
use derive_more::Display;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use ultraviolet::{Mat4, Vec4};

/// Segment distribution used by the tessellator along an edge.
#[derive(Display, TryFromPrimitive, IntoPrimitive, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Spacing {
    /// Integer levels, segments of equal length.
    #[display("equal")]
    Equal = 0,
    /// Levels rounded up to even, two shorter segments absorb the fraction.
    #[display("fractional-even")]
    FractionalEven = 1,
    /// Levels rounded up to odd, two shorter segments absorb the fraction.
    #[display("fractional-odd")]
    FractionalOdd = 2,
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Equal
    }
}

impl Spacing {
    /// Decode a spacing mode from its raw value.
    ///
    /// ```
    /// use petite_tess::osd::Spacing;
    ///
    /// assert_eq!(Spacing::from_raw(2).unwrap(), Spacing::FractionalOdd);
    /// assert!(Spacing::from_raw(7).is_err());
    /// ```
    pub fn from_raw(value: u32) -> Result<Self> {
        Self::try_from(value).map_err(|e| Error::InvalidSpacing(e.number))
    }

    /// Returns true for the two fractional modes.
    #[inline]
    pub fn is_fractional(self) -> bool {
        self != Spacing::Equal
    }

    /// Round one segment's level the way the tessellator will.
    ///
    /// Equal spacing rounds to the nearest integer with halves away from
    /// zero.
    #[inline]
    pub fn round_segment(self, level: f32) -> f32 {
        match self {
            Spacing::Equal => level.round(),
            Spacing::FractionalEven => round_up_even(level),
            Spacing::FractionalOdd => round_up_odd(level),
        }
    }
}

/// Smallest even integer not less than `x`.
#[inline]
pub fn round_up_even(x: f32) -> f32 {
    2.0 * (x / 2.0).ceil()
}

/// Smallest odd integer not less than `x`.
#[inline]
pub fn round_up_odd(x: f32) -> f32 {
    2.0 * ((x + 1.0) / 2.0).ceil() - 1.0
}

/// Immutable tessellation settings shared by all patches of a frame.
///
/// Build one with [`TessConfig::builder()`]; the builder validates the
/// values and resolves the spacing mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TessConfig {
    tess_level: f32,
    max_tess_level: f32,
    spacing: Spacing,
    screen_space: bool,
    model_view: Mat4,
    projection: Mat4,
}

impl Default for TessConfig {
    /// The configuration [`TessConfigBuilder::default()`] builds.
    fn default() -> Self {
        let builder = TessConfigBuilder::default();
        Self {
            tess_level: builder.tess_level,
            max_tess_level: builder.max_tess_level,
            spacing: builder.spacing,
            screen_space: builder.screen_space,
            model_view: builder.model_view,
            projection: builder.projection,
        }
    }
}

impl TessConfig {
    /// Start building a configuration from the defaults.
    pub fn builder() -> TessConfigBuilder {
        TessConfigBuilder::default()
    }

    /// Global tessellation quality scale.
    #[inline]
    pub fn tess_level(&self) -> f32 {
        self.tess_level
    }

    /// Maximum level the tessellator accepts for one edge.
    #[inline]
    pub fn max_tess_level(&self) -> f32 {
        self.max_tess_level
    }

    /// Upper bound for any single Lo or Hi level.
    ///
    /// A transition edge is tessellated as Lo + Hi, so each half may use at
    /// most half of the device maximum.
    #[inline]
    pub fn level_ceiling(&self) -> f32 {
        self.max_tess_level * 0.5
    }

    /// Effective spacing mode.
    #[inline]
    pub fn spacing(&self) -> Spacing {
        self.spacing
    }

    /// True if levels are derived from projected geometry.
    #[inline]
    pub fn screen_space(&self) -> bool {
        self.screen_space
    }

    #[inline]
    pub fn model_view(&self) -> &Mat4 {
        &self.model_view
    }

    #[inline]
    pub fn projection(&self) -> &Mat4 {
        &self.projection
    }
}

/// Builder for [`TessConfig`].
///
/// | Property         | Default                         |
/// |------------------|---------------------------------|
/// | `tess_level`     | `8.0`                           |
/// | `max_tess_level` | `64.0`                          |
/// | `spacing`        | [`Equal`](Spacing::Equal)       |
/// | `screen_space`   | `true`                          |
/// | `model_view`     | identity                        |
/// | `projection`     | identity                        |
///
/// # Examples
///
/// ```
/// use petite_tess::osd::{Spacing, TessConfig};
///
/// let config = TessConfig::builder()
///     .tess_level(4.0)
///     .spacing(Spacing::FractionalOdd)
///     .build()
///     .unwrap();
/// assert_eq!(config.spacing(), Spacing::FractionalOdd);
/// assert_eq!(config.level_ceiling(), 32.0);
///
/// // Fractional spacing needs screen space tessellation.
/// let config = TessConfig::builder()
///     .spacing(Spacing::FractionalEven)
///     .screen_space(false)
///     .build()
///     .unwrap();
/// assert_eq!(config.spacing(), Spacing::Equal);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TessConfigBuilder {
    tess_level: f32,
    max_tess_level: f32,
    spacing: Spacing,
    screen_space: bool,
    model_view: Mat4,
    projection: Mat4,
}

impl Default for TessConfigBuilder {
    fn default() -> Self {
        Self {
            tess_level: 8.0,
            max_tess_level: 64.0,
            spacing: Spacing::Equal,
            screen_space: true,
            model_view: Mat4::identity(),
            projection: Mat4::identity(),
        }
    }
}

impl TessConfigBuilder {
    /// Set the global tessellation quality scale.
    pub fn tess_level(mut self, tess_level: f32) -> Self {
        self.tess_level = tess_level;
        self
    }

    /// Set the device tessellation level ceiling.
    pub fn max_tess_level(mut self, max_tess_level: f32) -> Self {
        self.max_tess_level = max_tess_level;
        self
    }

    /// Set the requested spacing mode.
    pub fn spacing(mut self, spacing: Spacing) -> Self {
        self.spacing = spacing;
        self
    }

    /// Enable or disable screen space adaptive levels.
    pub fn screen_space(mut self, screen_space: bool) -> Self {
        self.screen_space = screen_space;
        self
    }

    /// Set the object to view space transform.
    pub fn model_view(mut self, model_view: Mat4) -> Self {
        self.model_view = model_view;
        self
    }

    /// Set the view to clip space transform.
    pub fn projection(mut self, projection: Mat4) -> Self {
        self.projection = projection;
        self
    }

    /// Validate the settings and resolve the effective spacing mode.
    pub fn build(self) -> Result<TessConfig> {
        if !self.tess_level.is_finite() || self.tess_level <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "tess level must be positive and finite, got {}",
                self.tess_level
            )));
        }

        if !self.max_tess_level.is_finite() || self.max_tess_level < 2.0 {
            return Err(Error::InvalidConfig(format!(
                "max tess level must be at least 2, got {}",
                self.max_tess_level
            )));
        }

        if !is_finite(&self.model_view) {
            return Err(Error::InvalidConfig(
                "model view matrix has non-finite entries".into(),
            ));
        }

        if !is_finite(&self.projection) {
            return Err(Error::InvalidConfig(
                "projection matrix has non-finite entries".into(),
            ));
        }

        let spacing = if self.spacing.is_fractional() && !self.screen_space {
            log::warn!(
                "{} spacing requires screen space tessellation, using equal spacing",
                self.spacing
            );
            Spacing::Equal
        } else {
            self.spacing
        };

        log::debug!(
            "tessellation config: level {}, max {}, {} spacing, screen space {}",
            self.tess_level,
            self.max_tess_level,
            spacing,
            self.screen_space
        );

        Ok(TessConfig {
            tess_level: self.tess_level,
            max_tess_level: self.max_tess_level,
            spacing,
            screen_space: self.screen_space,
            model_view: self.model_view,
            projection: self.projection,
        })
    }
}

fn is_finite(matrix: &Mat4) -> bool {
    matrix
        .cols
        .iter()
        .all(|Vec4 { x, y, z, w }| x.is_finite() && y.is_finite() && z.is_finite() && w.is_finite())
}
