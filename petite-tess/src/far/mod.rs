//! # Feature Adaptive Representation
//! `far` holds the per-patch descriptors produced by adaptive refinement and
//! consumed by the tessellation functions in [`osd`](crate::osd).
pub mod patch_param;
pub use patch_param::*;
