//! Filtered terms-query source.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::Rng;
use serde_json::json;

use super::source_rng;
use crate::source::{ParamSource, QueryParams, SourceParams};
use crate::terms::TermList;

/// Upper bound (inclusive) for the cache-buster token.
const CACHE_BUSTER_MAX: u32 = 1000;

/// Produces a bool query that keeps hypsographic features (`feature_class`
/// `"T"`: mountains, hills, rocks) and filters them down to the loaded terms
/// plus one random token.
pub struct FilteredTermsQuerySource {
    terms: Arc<TermList>,
    params: SourceParams,
    rng: StdRng,
}

impl FilteredTermsQuerySource {
    /// Name this source registers under.
    pub const NAME: &'static str = "filtered-terms-query-source";

    /// Create a source over a shared term list.
    pub fn new(terms: Arc<TermList>, params: SourceParams) -> Self {
        let rng = source_rng(params.seed);
        FilteredTermsQuerySource { terms, params, rng }
    }
}

impl ParamSource for FilteredTermsQuerySource {
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
                                "feature_class.raw": "T"
                            }
                        }
                    ],
                    "filter": [
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

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> FilteredTermsQuerySource {
        let terms = Arc::new(TermList::from_terms(vec![
            "Sierra de Gata".to_string(),
            "Ben Nevis".to_string(),
        ]));
        let params = SourceParams {
            seed: Some(seed),
            ..SourceParams::default()
        };
        FilteredTermsQuerySource::new(terms, params)
    }

    #[test]
    fn test_body_shape() {
        let mut source = seeded(11);
        let qp = source.params();
        let bool_query = &qp.body["query"]["bool"];

        assert_eq!(bool_query["must"][0]["match"]["feature_class.raw"], "T");

        let terms = bool_query["filter"][0]["terms"]["name.raw"]
            .as_array()
            .unwrap();
        assert_eq!(terms.len(), 3);
        assert_eq!(terms[0], "Sierra de Gata");
    }

    #[test]
    fn test_cache_buster_in_range() {
        let mut source = seeded(11);
        for _ in 0..50 {
            let qp = source.params();
            let terms = qp.body["query"]["bool"]["filter"][0]["terms"]["name.raw"]
                .as_array()
                .unwrap();
            let token: u32 = terms.last().unwrap().as_str().unwrap().parse().unwrap();
            assert!((1..=CACHE_BUSTER_MAX).contains(&token));
        }
    }

    #[test]
    fn test_no_must_not_clause() {
        let mut source = seeded(11);
        let qp = source.params();
        assert!(qp.body["query"]["bool"].get("must_not").is_none());
    }
}
