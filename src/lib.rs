//! Pluggable term-query parameter sources for search benchmarking.
//!
//! Each source reads a static, pre-shuffled place-name list once, then builds
//! one query body per call: the full term list plus a random cache-buster
//! token, wrapped in one of four query shapes (flat terms, traced terms, and
//! two boolean variants). A refresh helper issues the single passthrough call
//! that forces an index refresh between benchmark phases.
//!
//! ```no_run
//! use std::sync::Arc;
//! use termsource::{register, Registry, SourceParams, TermList};
//!
//! # fn main() -> termsource::Result<()> {
//! let terms = Arc::new(TermList::load("data/terms.txt")?);
//! let mut registry = Registry::new();
//! register(&mut registry);
//!
//! let mut source = registry.create(
//!     "pure-terms-query-source",
//!     terms,
//!     SourceParams::default(),
//! )?;
//! let request = source.params();
//! # let _ = request;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod refresh;
pub mod registry;
pub mod source;
pub mod sources;
pub mod terms;

pub use error::{Error, Result};
pub use refresh::{refresh, HttpRefreshClient, RefreshClient};
pub use registry::{register, Registry, SourceFactory};
pub use source::{ParamSource, QueryParams, SourceParams};
pub use sources::{
    FilteredTermsQuerySource, ProhibitedTermsQuerySource, PureTermsQuerySource,
    TracedTermsQuerySource,
};
pub use terms::TermList;
