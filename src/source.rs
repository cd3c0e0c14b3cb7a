//! Param source plugin interface.
//!
//! The harness drives each registered source through [`ParamSource`]: it may
//! call `partition` once per worker (a no-op hook here), then calls `params`
//! once per request to obtain the next query body.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-source configuration supplied by the harness.
///
/// The harness passes a free-form dictionary; fields this crate does not
/// understand are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceParams {
    /// Target index; forwarded verbatim into [`QueryParams::index`] and used
    /// by the refresh helper. `None` means "let the harness decide" for
    /// queries and `_all` for refresh.
    #[serde(default)]
    pub index: Option<String>,

    /// Request-cache override forwarded into [`QueryParams::cache`] when set.
    #[serde(default)]
    pub cache: Option<bool>,

    /// RNG seed for reproducible workloads. Unseeded sources draw from OS
    /// entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// One generated request, in the wire shape the harness forwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryParams {
    /// Query body sent to the search endpoint.
    pub body: serde_json::Value,

    /// Target index. Always serialized; `null` when unset.
    pub index: Option<String>,

    /// Request-cache override, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache: Option<bool>,

    /// Extra HTTP headers (trace propagation), omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,

    /// Opaque request id for server-side task tracking, omitted when unset.
    #[serde(rename = "opaque-id", skip_serializing_if = "Option::is_none")]
    pub opaque_id: Option<String>,
}

impl QueryParams {
    /// A request with the given body, index/cache taken from `params`, and no
    /// trace metadata.
    pub fn new(body: serde_json::Value, params: &SourceParams) -> Self {
        QueryParams {
            body,
            index: params.index.clone(),
            cache: params.cache,
            headers: None,
            opaque_id: None,
        }
    }
}

/// A pluggable generator producing the body of one benchmark request per call.
pub trait ParamSource: Send {
    /// Name the source is registered under.
    fn name(&self) -> &'static str;

    /// Whether the source can produce an unbounded stream of requests.
    /// Every built-in source is infinite.
    fn infinite(&self) -> bool {
        true
    }

    /// Build the next request.
    fn params(&mut self) -> QueryParams;

    /// Partitioning hook required by the harness plugin interface.
    ///
    /// The built-in sources hold no per-worker state, so the same generator
    /// instance serves every partition.
    fn partition(
        self: Box<Self>,
        partition_index: usize,
        total_partitions: usize,
    ) -> Box<dyn ParamSource>;
}
