//! Error types for the petite-tess crate.
//!
//! Only configuration can fail. Per-patch tessellation functions saturate
//! instead of returning errors.

use thiserror::Error;

/// Main error type for petite-tess operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A configuration value is out of range.
    #[error("Invalid tessellation config: {0}")]
    InvalidConfig(String),

    /// A raw spacing mode value does not name a known mode.
    #[error("Invalid spacing mode: {0}")]
    InvalidSpacing(u32),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
