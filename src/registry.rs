//! Param source registration.
//!
//! The harness hands this crate a [`Registry`] at plugin-load time; the crate
//! installs its built-in sources via [`register`]. Sources are created by
//! name, all sharing the term list loaded once at startup.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::source::{ParamSource, SourceParams};
use crate::sources::{
    FilteredTermsQuerySource, ProhibitedTermsQuerySource, PureTermsQuerySource,
    TracedTermsQuerySource,
};
use crate::terms::TermList;

/// Factory producing a boxed source from the shared term list and the
/// harness-supplied params.
pub type SourceFactory = Box<dyn Fn(Arc<TermList>, SourceParams) -> Box<dyn ParamSource> + Send + Sync>;

/// Name → factory map for param sources.
#[derive(Default)]
pub struct Registry {
    factories: HashMap<String, SourceFactory>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Registry::default()
    }

    /// Register a source factory under `name`, replacing any existing entry.
    pub fn register_param_source(&mut self, name: impl Into<String>, factory: SourceFactory) {
        self.factories.insert(name.into(), factory);
    }

    /// Create the source registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSource`] if nothing is registered under `name`.
    pub fn create(
        &self,
        name: &str,
        terms: Arc<TermList>,
        params: SourceParams,
    ) -> Result<Box<dyn ParamSource>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| Error::UnknownSource(name.to_string()))?;
        Ok(factory(terms, params))
    }

    /// Registered source names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

/// Install the built-in sources under their canonical names.
pub fn register(registry: &mut Registry) {
    registry.register_param_source(
        PureTermsQuerySource::NAME,
        Box::new(|terms, params| Box::new(PureTermsQuerySource::new(terms, params))),
    );
    registry.register_param_source(
        TracedTermsQuerySource::NAME,
        Box::new(|terms, params| Box::new(TracedTermsQuerySource::new(terms, params))),
    );
    registry.register_param_source(
        FilteredTermsQuerySource::NAME,
        Box::new(|terms, params| Box::new(FilteredTermsQuerySource::new(terms, params))),
    );
    registry.register_param_source(
        ProhibitedTermsQuerySource::NAME,
        Box::new(|terms, params| Box::new(ProhibitedTermsQuerySource::new(terms, params))),
    );
}
