//! Audius track search. No credentials required; stream URLs are
//! derived from the track id.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::RESULT_LIMIT;
use crate::provider::{SearchProvider, SearchResult};
use crate::{Result, SearchError};

const API_BASE: &str = "https://api.audius.co/v1";

pub struct AudiusProvider {
    http: Client,
    app_name: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<TrackHit>,
}

#[derive(Deserialize)]
struct TrackHit {
    id: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    user: Option<TrackUser>,
    #[serde(default)]
    artwork: Option<Artwork>,
}

#[derive(Deserialize)]
struct TrackUser {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Deserialize)]
struct Artwork {
    #[serde(rename = "150x150", default)]
    small: Option<String>,
}

impl AudiusProvider {
    pub fn new(http: Client, app_name: impl Into<String>) -> Self {
        Self {
            http,
            app_name: app_name.into(),
            base_url: API_BASE.to_string(),
        }
    }

    /// Point the provider at a different API host (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl SearchProvider for AudiusProvider {
    fn name(&self) -> &'static str {
        "audius"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .http
            .get(format!("{}/tracks/search", self.base_url))
            .query(&[("query", query), ("app_name", &self.app_name)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        let base_url = self.base_url.clone();
        Ok(body
            .data
            .into_iter()
            .filter_map(|hit| {
                // Hits without an id have no derivable stream URL.
                let id = hit.id?;
                Some(SearchResult {
                    title: hit.title.unwrap_or_else(|| "Unknown Title".to_string()),
                    artist: hit
                        .user
                        .and_then(|u| u.name)
                        .unwrap_or_else(|| "Unknown Artist".to_string()),
                    stream_url: format!("{base_url}/tracks/{id}/stream"),
                    thumbnail: hit.artwork.and_then(|a| a.small).unwrap_or_default(),
                    source: self.name().to_string(),
                })
            })
            .take(RESULT_LIMIT)
            .collect())
    }
}
