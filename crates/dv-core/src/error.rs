//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `DvError` as one variant.

use thiserror::Error;

/// The base error type for `dv-core` and a common variant for sub-crates.
#[derive(Debug, Error)]
pub enum DvError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `dv-core`.
pub type DvResult<T> = Result<T, DvError>;
