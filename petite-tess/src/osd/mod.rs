//! # OpenSubdiv Tessellation
//! `osd` contains the functions a tessellation pipeline runs per patch to
//! draw adaptively refined subdivision surfaces crack free:
//! * **Outer Level Assembly**
//!
//!   Compute raw Lo/Hi levels for each patch edge from uniform refinement,
//!   refined B-spline points or limit surface Bezier points
//!   ([`OuterLevelSource`]).
//! * **Level Combination**
//!
//!   Round and sum the halves of each edge per [`Spacing`] mode into the
//!   outer and inner levels the tessellator consumes ([`combine_levels()`]).
//! * **Parameterization Correction**
//!
//!   Map tessellator samples on transition edges back to their true
//!   positions ([`tess_parameterization()`]) so that two patches sharing an
//!   edge agree on every boundary sample.
//!
//! All functions are pure. Global state a shader would read from uniforms
//! is passed in through a [`TessConfig`].
pub mod batch;
pub use batch::*;

pub mod bezier;
pub use bezier::*;

pub mod combine;
pub use combine::*;

pub mod config;
pub use config::*;

pub mod outer_levels;
pub use outer_levels::*;

pub mod parameterization;
pub use parameterization::*;

pub mod screen_space;
pub use screen_space::*;

pub mod split;
pub use split::*;
