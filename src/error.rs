//! Error types for term-query parameter sources.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by term list loading, source creation, and index refresh.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading the term list file failed.
    #[error("failed to read term list {path}: {source}")]
    TermsIo {
        /// Path that was being read.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The term list file produced no usable terms.
    #[error("term list {path} contains no terms")]
    EmptyTermList {
        /// Path that was read.
        path: PathBuf,
    },

    /// No param source is registered under the requested name.
    #[error("unknown param source '{0}'")]
    UnknownSource(String),

    /// The index refresh call failed (transport or non-2xx status).
    #[error("index refresh failed: {0}")]
    Refresh(#[source] Box<ureq::Error>),
}
