//! Mixcloud cloudcast search. No credentials required.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::RESULT_LIMIT;
use crate::provider::{SearchProvider, SearchResult};
use crate::{Result, SearchError};

const API_BASE: &str = "https://api.mixcloud.com";

pub struct MixcloudProvider {
    http: Client,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Cloudcast>,
}

#[derive(Deserialize)]
struct Cloudcast {
    name: String,
    user: CloudcastUser,
    url: String,
    pictures: Pictures,
}

#[derive(Deserialize)]
struct CloudcastUser {
    name: String,
}

#[derive(Deserialize)]
struct Pictures {
    #[serde(default)]
    thumbnail: String,
}

impl MixcloudProvider {
    pub fn new(http: Client) -> Self {
        Self {
            http,
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
impl SearchProvider for MixcloudProvider {
    fn name(&self) -> &'static str {
        "mixcloud"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .http
            .get(format!("{}/search/", self.base_url))
            .query(&[("q", query), ("type", "cloudcast")])
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
            .data
            .into_iter()
            .map(|cast| SearchResult {
                title: cast.name,
                artist: cast.user.name,
                stream_url: cast.url,
                thumbnail: cast.pictures.thumbnail,
                source: self.name().to_string(),
            })
            .take(RESULT_LIMIT)
            .collect())
    }
}
