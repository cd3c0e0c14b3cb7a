//! Index refresh passthrough.
//!
//! Between benchmark phases the harness forces a refresh so queries see every
//! indexed document. This is a single passthrough call: pick the index from
//! the source params (defaulting to `_all`) and hit the refresh endpoint.

use std::time::Duration;

use crate::error::{Error, Result};
use crate::source::SourceParams;

/// Index refreshed when the params name none.
const ALL_INDICES: &str = "_all";

/// Request timeout for the refresh call.
const REFRESH_TIMEOUT: Duration = Duration::from_secs(30);

/// Client seam for the refresh call, mockable in tests.
pub trait RefreshClient {
    /// Force a refresh of `index`.
    fn refresh(&self, index: &str) -> Result<()>;
}

/// Blocking HTTP refresh client for an Elasticsearch-compatible endpoint.
pub struct HttpRefreshClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpRefreshClient {
    /// Create a client for the engine at `base_url` (scheme + host + port).
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(REFRESH_TIMEOUT)
            .build();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        HttpRefreshClient { agent, base_url }
    }
}

impl RefreshClient for HttpRefreshClient {
    fn refresh(&self, index: &str) -> Result<()> {
        let url = format!("{}/{}/_refresh", self.base_url, index);
        self.agent
            .post(&url)
            .call()
            .map_err(|e| Error::Refresh(Box::new(e)))?;

        tracing::debug!(target: "termsource::refresh", index, "index refreshed");
        Ok(())
    }
}

/// Refresh the index named in `params`, or all indices when none is named.
pub fn refresh(client: &dyn RefreshClient, params: &SourceParams) -> Result<()> {
    client.refresh(params.index.as_deref().unwrap_or(ALL_INDICES))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct RecordingClient {
        refreshed: RefCell<Vec<String>>,
    }

    impl RecordingClient {
        fn new() -> Self {
            RecordingClient {
                refreshed: RefCell::new(Vec::new()),
            }
        }
    }

    impl RefreshClient for RecordingClient {
        fn refresh(&self, index: &str) -> Result<()> {
            self.refreshed.borrow_mut().push(index.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_refresh_uses_params_index() {
        let client = RecordingClient::new();
        let params = SourceParams {
            index: Some("geonames".to_string()),
            ..SourceParams::default()
        };

        refresh(&client, &params).unwrap();
        assert_eq!(client.refreshed.borrow().as_slice(), ["geonames"]);
    }

    #[test]
    fn test_refresh_defaults_to_all() {
        let client = RecordingClient::new();
        refresh(&client, &SourceParams::default()).unwrap();
        assert_eq!(client.refreshed.borrow().as_slice(), ["_all"]);
    }

    #[test]
    fn test_http_client_strips_trailing_slash() {
        let client = HttpRefreshClient::new("http://localhost:9200/");
        assert_eq!(client.base_url, "http://localhost:9200");
    }
}
