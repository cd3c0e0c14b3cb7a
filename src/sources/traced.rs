//! Traced variant of the pure terms-query source.
//!
//! Attaches W3C trace-context headers to every request so the benchmark
//! traffic resembles a deployment with APM tooling enabled. The trace ids are
//! fake; nothing collects them unless the target stack happens to.

use std::collections::BTreeMap;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::StdRng;
use rand::Rng;

use super::{source_rng, PureTermsQuerySource};
use crate::source::{ParamSource, QueryParams, SourceParams};
use crate::terms::TermList;

/// Vendor key used in the `tracestate` header.
const TRACESTATE_VENDOR: &str = "myfakeapm";

/// A freshly generated trace/span id pair.
struct TraceContext {
    /// 32 lowercase hex digits.
    trace_id: String,
    /// 16 lowercase hex digits.
    parent_id: String,
}

impl TraceContext {
    fn generate(rng: &mut StdRng) -> Self {
        // Keep the top byte of the trace id zero so ids stay visually distinct
        // from real instrumented traffic.
        let trace_id = format!("{:032x}", rng.gen_range(0..(1u128 << 120)));
        let parent_id = format!("{:016x}", rng.gen::<u64>());
        TraceContext {
            trace_id,
            parent_id,
        }
    }

    /// `traceparent` header value, version 00, sampled flag set.
    fn traceparent(&self) -> String {
        format!("00-{}-{}-01", self.trace_id, self.parent_id)
    }

    /// `tracestate` header value: vendor-prefixed base64 of the span id.
    fn tracestate(&self) -> String {
        format!("{}-{}", TRACESTATE_VENDOR, BASE64.encode(&self.parent_id))
    }
}

/// [`PureTermsQuerySource`] plus trace headers and an opaque request id.
pub struct TracedTermsQuerySource {
    inner: PureTermsQuerySource,
    rng: StdRng,
}

impl TracedTermsQuerySource {
    /// Name this source registers under.
    pub const NAME: &'static str = "pure-terms-query-source-traced";

    /// Create a source over a shared term list.
    pub fn new(terms: Arc<TermList>, params: SourceParams) -> Self {
        let rng = source_rng(params.seed);
        TracedTermsQuerySource {
            inner: PureTermsQuerySource::new(terms, params),
            rng,
        }
    }
}

impl ParamSource for TracedTermsQuerySource {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn params(&mut self) -> QueryParams {
        let mut query_params = self.inner.params();

        let trace = TraceContext::generate(&mut self.rng);
        let mut headers = BTreeMap::new();
        headers.insert("traceparent".to_string(), trace.traceparent());
        headers.insert("tracestate".to_string(), trace.tracestate());

        query_params.headers = Some(headers);
        query_params.opaque_id = Some(trace.trace_id);
        query_params
    }

    fn partition(
        self: Box<Self>,
        _partition_index: usize,
        _total_partitions: usize,
    ) -> Box<dyn ParamSource> {
        self
    }
}
