//! Flat terms-query source.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::json;

use super::source_rng;
use crate::source::{ParamSource, QueryParams, SourceParams};
use crate::terms::TermList;

/// Upper bound (inclusive) for the cache-buster token.
///
/// A small range is enough: the token only has to differ from the previous
/// request often enough to keep the request cache cold.
const CACHE_BUSTER_MAX: u32 = 100;

/// Produces a flat `terms` query over `name.raw` with every loaded term plus
/// one random token.
pub struct PureTermsQuerySource {
    terms: Arc<TermList>,
    params: SourceParams,
    rng: StdRng,
}

impl PureTermsQuerySource {
    /// Name this source registers under.
    pub const NAME: &'static str = "pure-terms-query-source";

    /// Create a source over a shared term list.
    pub fn new(terms: Arc<TermList>, params: SourceParams) -> Self {
        let rng = source_rng(params.seed);
        PureTermsQuerySource { terms, params, rng }
    }

    /// Term list copy with the next cache-buster token appended.
    fn query_terms(&mut self) -> Vec<String> {
        let token = self.rng.gen_range(1..=CACHE_BUSTER_MAX).to_string();
        self.terms.terms_with_cache_buster(token)
    }
}

impl ParamSource for PureTermsQuerySource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&mut self) -> QueryParams {
        let body = json!({
            "query": {
                "terms": {
                    "name.raw": self.query_terms()
                }
            }
        });
        QueryParams::new(body, &self.params)
    }

    fn partition(
        self: Box<Self>,
        _partition_index: usize,
        _total_partitions: usize,
    ) -> Box<dyn ParamSource> {
        self
    }
}
