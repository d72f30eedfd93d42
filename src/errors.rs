//! Error Types
//!
//! The retargeting pipeline has exactly two caller-visible failure modes;
//! everything else (unmapped source bones, optional target bones that are
//! absent) is an expected per-track outcome and is skipped, not reported
//! as an error.
//!
//! All public APIs return [`Result<T>`], an alias for
//! `std::result::Result<T, RetargetError>`.

use thiserror::Error;

/// The error type for retargeting operations.
#[derive(Error, Debug)]
pub enum RetargetError {
    /// The requested clip name is absent from the source asset's animation set.
    #[error("Animation clip not found: {0}")]
    ClipNotFound(String),

    /// Every source track was dropped during retargeting. The caller gets an
    /// explicit absence rather than an empty clip that silently plays nothing.
    #[error("No usable animation tracks after retargeting")]
    NoUsableTracks,
}

/// Alias for `Result<T, RetargetError>`.
pub type Result<T> = std::result::Result<T, RetargetError>;
