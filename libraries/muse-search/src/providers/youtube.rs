//! YouTube Data API v3 video search.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::RESULT_LIMIT;
use crate::provider::{SearchProvider, SearchResult};
use crate::{Result, SearchError};

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

pub struct YoutubeProvider {
    http: Client,
    api_key: String,
    base_url: String,
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    id: ItemId,
    snippet: Snippet,
}

#[derive(Deserialize)]
struct ItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Deserialize)]
struct Snippet {
    title: String,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    thumbnails: Thumbnails,
}

#[derive(Deserialize)]
struct Thumbnails {
    default: Thumbnail,
}

#[derive(Deserialize)]
struct Thumbnail {
    url: String,
}

impl YoutubeProvider {
    pub fn new(http: Client, api_key: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
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
impl SearchProvider for YoutubeProvider {
    fn name(&self) -> &'static str {
        "youtube"
    }

    async fn search(&self, query: &str) -> Result<Vec<SearchResult>> {
        let response = self
            .http
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("key", &self.api_key),
                ("maxResults", "5"),
                ("type", "video"),
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
            .items
            .into_iter()
            .filter_map(|item| {
                let video_id = item.id.video_id?;
                Some(SearchResult {
                    title: item.snippet.title,
                    artist: item.snippet.channel_title,
                    stream_url: format!("https://www.youtube.com/watch?v={video_id}"),
                    thumbnail: item.snippet.thumbnails.default.url,
                    source: self.name().to_string(),
                })
            })
            .take(RESULT_LIMIT)
            .collect())
    }
}
