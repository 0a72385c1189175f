//! Jamendo track search (Creative Commons music).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::RESULT_LIMIT;
use crate::provider::{SearchProvider, SearchResult};
use crate::{Result, SearchError};

const API_BASE: &str = "https://api.jamendo.com/v3.0";

pub struct JamendoProvider {
    http: Client,
    client_id: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<TrackHit>,
}

#[derive(Deserialize)]
struct TrackHit {
    name: String,
    artist_name: String,
    /// Direct mp3 stream URL.
    audio: String,
    #[serde(default)]
    album_image: String,
}

impl JamendoProvider {
    pub fn new(http: Client, client_id: impl Into<String>) -> Self {
        Self {
            http,
            client_id: client_id.into(),
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
impl SearchProvider for JamendoProvider {
    fn name(&self) -> &'static str {
        "jamendo"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .http
            .get(format!("{}/tracks", self.base_url))
            .query(&[
                ("client_id", self.client_id.as_str()),
                ("format", "json"),
                ("limit", "5"),
                ("search", query),
                ("audioformat", "mp31"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SearchError::Status(response.status().as_u16()));
        }

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| SearchError::Parse(e.to_string()))?;

        Ok(body
            .results
            .into_iter()
            .map(|hit| SearchResult {
                title: hit.name,
                artist: hit.artist_name,
                stream_url: hit.audio,
                thumbnail: hit.album_image,
                source: self.name().to_string(),
            })
            .take(RESULT_LIMIT)
            .collect())
    }
}
