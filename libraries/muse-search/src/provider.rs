//! The provider abstraction and its result type.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A single hit from a provider, already normalized to the shape the
/// rest of the system understands. `stream_url` is playable (or at
/// least resolvable) as-is; `source` names the provider it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub artist: String,
    pub stream_url: String,
    pub thumbnail: String,
    pub source: String,
}

/// One upstream music catalog.
///
/// Implementations must be cheap to share; the aggregator holds them
/// behind `Arc` and queries them concurrently.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Stable provider name, used as the `source` of its results and in
    /// log output.
    fn name(&self) -> &'static str;

    /// Run `query` against the upstream API and normalize the hits.
    async fn search(&self, query: &str) -> Result<Vec<SearchResult>>;
}
