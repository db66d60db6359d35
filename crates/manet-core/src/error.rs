//! Core error type.
//!
//! Sub-crates define their own error enums and either convert into
//! `CoreError` via `From` or wrap it as one variant — whichever keeps the
//! error sites clean.

use thiserror::Error;

/// The base error type for `manet-core` and its consumers.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("unknown selector name: {0:?}")]
    UnknownSelector(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for `manet-*` crates.
pub type CoreResult<T> = Result<T, CoreError>;
