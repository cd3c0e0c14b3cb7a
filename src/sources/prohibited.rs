//! Prohibited terms-query source.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::json;

use super::source_rng;
use crate::source::{ParamSource, QueryParams, SourceParams};
use crate::terms::TermList;

/// Upper bound (inclusive) for the cache-buster token.
const CACHE_BUSTER_MAX: u32 = 1000;

/// Produces a bool query that keeps administrative features (`feature_class`
/// `"A"`: countries, regions) while excluding every loaded term plus one
/// random token.
pub struct ProhibitedTermsQuerySource {
    terms: Arc<TermList>,
    params: SourceParams,
    rng: StdRng,
}

impl ProhibitedTermsQuerySource {
    /// Name this source registers under.
    pub const NAME: &'static str = "prohibited-terms-query-source";

    /// Create a source over a shared term list.
    pub fn new(terms: Arc<TermList>, params: SourceParams) -> Self {
        let rng = source_rng(params.seed);
        ProhibitedTermsQuerySource { terms, params, rng }
    }
}

impl ParamSource for ProhibitedTermsQuerySource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&mut self) -> QueryParams {
        let token = self.rng.gen_range(1..=CACHE_BUSTER_MAX).to_string();
        let query_terms = self.terms.terms_with_cache_buster(token);

        let body = json!({
            "query": {
                "bool": {
                    "must": [
                        {
                            "match": {
                                "feature_class.raw": "A"
                            }
                        }
                    ],
                    "must_not": [
                        {
                            "terms": {
                                "name.raw": query_terms
                            }
                        }
                    ]
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
