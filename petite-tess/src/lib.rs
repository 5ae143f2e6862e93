//! # Adaptive Tessellation Factors For Subdivision Surfaces
//!
//! This crate computes the per-edge and interior tessellation levels a
//! hardware (or software) tessellator needs to draw feature adaptive
//! [subdivision surfaces](https://en.wikipedia.org/wiki/Subdivision_surface)
//! crack free, in the way [*Pixar’s
//! OpenSubdiv*](https://graphics.pixar.com/opensubdiv/) does in its
//! tessellation shaders.
//!
//! Adaptive refinement leaves patches of different depth next to each other.
//! An edge of a patch that borders a coarser neighbor is a *transition
//! edge*: the neighbor sees it as half of one of its own edges. Both sides
//! compute their levels independently and must still agree on every sample
//! along the shared edge. The crate does this in three steps:
//!
//! 1. An [`OuterLevelSource`](osd::OuterLevelSource) produces raw Lo/Hi
//!    levels for the two halves of each edge.
//! 2. [`combine_levels()`](osd::combine_levels()) rounds them according to
//!    the [`Spacing`](osd::Spacing) mode into outer and inner levels.
//! 3. [`tess_parameterization()`](osd::tess_parameterization()) moves the
//!    samples the tessellator generated on transition edges to where the
//!    neighbor expects them.
//!
//! All functions are pure and take their settings from an immutable
//! [`TessConfig`](osd::TessConfig), so patches can be processed in any
//! order and in parallel.
//!
//! ```
//! use petite_tess::far::{Edge, PatchParam};
//! use petite_tess::osd::{tess_levels, RefinedPoints, Spacing, TessConfig};
//! use ultraviolet::Vec3;
//!
//! let config = TessConfig::builder()
//!     .tess_level(2.0)
//!     .spacing(Spacing::FractionalEven)
//!     .build()?;
//!
//! let control_points: [Vec3; 16] =
//!     std::array::from_fn(|i| Vec3::new((i % 4) as f32, (i / 4) as f32, 0.0));
//! let param = PatchParam::new(1, Edge::Bottom.transition_bit());
//!
//! let levels = tess_levels(&RefinedPoints(&control_points), param, &config);
//! let uv = levels.parameterization([0.5, 0.0], config.spacing());
//! assert_eq!(uv, [0.5, 0.0]);
//! # Ok::<(), petite_tess::Error>(())
//! ```
//!
//! ## Cargo Features
#![doc = document_features::document_features!()]

pub mod error;
pub mod far;
pub mod osd;

pub use error::{Error, Result};
