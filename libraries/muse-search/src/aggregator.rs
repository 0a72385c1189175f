//! Fan-out across providers with failure isolation.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, warn};

use crate::provider::{SearchProvider, SearchResult};

const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Queries every registered provider concurrently and concatenates
/// their results in registration order. One slow or broken provider
/// cannot fail or unorder the overall search; it just contributes an
/// empty slice.
pub struct SearchAggregator {
    providers: Vec<Arc<dyn SearchProvider>>,
    provider_timeout: Duration,
}

impl SearchAggregator {
    pub fn new(providers: Vec<Arc<dyn SearchProvider>>) -> Self {
        Self {
            providers,
            provider_timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Override the per-provider timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.provider_timeout = timeout;
        self
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Run `query` against all providers.
    pub async fn search(&self, query: &str) -> Vec<SearchResult> {
        let queries = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            let query = query.to_string();
            let timeout = self.provider_timeout;
            async move {
                match tokio::time::timeout(timeout, provider.search(&query)).await {
                    Ok(Ok(results)) => {
                        debug!(
                            provider = provider.name(),
                            count = results.len(),
                            "provider search completed"
                        );
                        results
                    }
                    Ok(Err(err)) => {
                        warn!(provider = provider.name(), error = %err, "provider search failed");
                        Vec::new()
                    }
                    Err(_) => {
                        warn!(
                            provider = provider.name(),
                            timeout_ms = timeout.as_millis() as u64,
                            "provider search timed out"
                        );
                        Vec::new()
                    }
                }
            }
        });

        // join_all preserves input order, so results come back grouped
        // by provider in registration order regardless of completion
        // order.
        join_all(queries).await.into_iter().flatten().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Result;
    use async_trait::async_trait;

    struct FixedProvider {
        name: &'static str,
        delay: Duration,
        fail: bool,
    }

    #[async_trait]
    impl SearchProvider for FixedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
            tokio::time::sleep(self.delay).await;
            if self.fail {
                return Err(crate::SearchError::Status(500));
            }
            Ok(vec![SearchResult {
                title: query.to_string(),
                artist: "artist".to_string(),
                stream_url: format!("https://example.com/{}", self.name),
                thumbnail: String::new(),
                source: self.name.to_string(),
            }])
        }
    }

    fn provider(name: &'static str, delay: Duration, fail: bool) -> Arc<dyn SearchProvider> {
        Arc::new(FixedProvider { name, delay, fail })
    }

    #[tokio::test]
    async fn results_keep_registration_order() {
        // The first provider responds slower than the second; its
        // results still come first.
        let aggregator = SearchAggregator::new(vec![
            provider("first", Duration::from_millis(50), false),
            provider("second", Duration::ZERO, false),
        ]);

        let results = aggregator.search("q").await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].source, "first");
        assert_eq!(results[1].source, "second");
    }

    #[tokio::test]
    async fn failing_provider_is_isolated() {
        let aggregator = SearchAggregator::new(vec![
            provider("broken", Duration::ZERO, true),
            provider("working", Duration::ZERO, false),
        ]);

        let results = aggregator.search("q").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source, "working");
    }

    #[tokio::test]
    async fn slow_provider_times_out() {
        let aggregator = SearchAggregator::new(vec![
            provider("slow", Duration::from_secs(5), false),
            provider("fast", Duration::ZERO, false),
        ])
        .with_timeout(Duration::from_millis(50));

        let results = aggregator.search("q").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].source, "fast");
    }

    #[tokio::test]
    async fn no_providers_is_empty() {
        let aggregator = SearchAggregator::new(Vec::new());
        assert!(aggregator.search("q").await.is_empty());
    }
}
