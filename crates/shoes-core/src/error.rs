//! Shared error type.
//!
//! Sub-crates define their own error enums and wrap `ShoesError` as one
//! variant via `#[from]`.

use thiserror::Error;

/// The base error type for `shoes-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum ShoesError {
    /// An input outside its documented domain (negative time, sensitivity
    /// above 100, unknown mode code, …).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for all `shoes-*` crates.
pub type ShoesResult<T> = Result<T, ShoesError>;
