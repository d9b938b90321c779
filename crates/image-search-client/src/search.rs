//! DuckDuckGo image search.
//!
//! Two requests per query: the HTML search page yields a `vqd` token, then `i.js` returns the
//! image results as JSON. Only the first result is used.

use std::str::FromStr;
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, info, instrument};

pub const DEFAULT_BASE_URL: &str = "https://duckduckgo.com";
pub const DEFAULT_REGION: &str = "ru-ru";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64; rv:128.0) Gecko/20100101 Firefox/128.0";

static VQD_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"vqd=["']?([\w-]+)"#).ok());

/// First image found for a query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageHit {
    /// Direct link to the image file.
    pub image_url: String,
    /// Page the image was found on.
    pub source_url: String,
    pub title: String,
}

/// Finds a picture for a short text query.
#[async_trait]
pub trait ImageSearch: Send + Sync {
    /// `Ok(None)` when the search ran but found nothing.
    async fn search_image(&self, query: &str) -> Result<Option<ImageHit>, anyhow::Error>;
}

/// Safe search level, `IMAGE_SEARCH_SAFESEARCH` = `off` | `moderate` | `on`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeSearch {
    #[default]
    Off,
    Moderate,
    On,
}

impl SafeSearch {
    /// Value of the `p` query parameter.
    fn param(self) -> &'static str {
        match self {
            SafeSearch::Off => "-1",
            SafeSearch::Moderate | SafeSearch::On => "1",
        }
    }
}

impl FromStr for SafeSearch {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "off" => Ok(SafeSearch::Off),
            "moderate" => Ok(SafeSearch::Moderate),
            "on" => Ok(SafeSearch::On),
            other => Err(anyhow!(
                "invalid safesearch level {other:?}, expected off, moderate or on"
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ImageResults {
    #[serde(default)]
    results: Vec<ImageResult>,
}

#[derive(Debug, Deserialize)]
struct ImageResult {
    image: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    title: String,
}

/// [`ImageSearch`] over the public DuckDuckGo endpoints.
#[derive(Debug, Clone)]
pub struct DuckDuckGoImageSearch {
    client: reqwest::Client,
    base_url: String,
    region: String,
    safesearch: SafeSearch,
}

impl DuckDuckGoImageSearch {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Client whose requests each fail after `timeout`.
    pub fn with_timeout(timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            base_url: DEFAULT_BASE_URL.to_string(),
            region: DEFAULT_REGION.to_string(),
            safesearch: SafeSearch::default(),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_safesearch(mut self, safesearch: SafeSearch) -> Self {
        self.safesearch = safesearch;
        self
    }

    async fn fetch_vqd(&self, query: &str) -> Result<String, anyhow::Error> {
        let page = self
            .client
            .get(format!("{}/", self.base_url))
            .query(&[("q", query)])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        extract_vqd(&page).ok_or_else(|| anyhow!("vqd token not found in search page"))
    }
}

fn extract_vqd(page: &str) -> Option<String> {
    VQD_RE
        .as_ref()?
        .captures(page)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

#[async_trait]
impl ImageSearch for DuckDuckGoImageSearch {
    #[instrument(skip(self), fields(region = %self.region))]
    async fn search_image(&self, query: &str) -> Result<Option<ImageHit>, anyhow::Error> {
        let vqd = self.fetch_vqd(query).await?;
        debug!(vqd = %vqd, "step: image search token received");

        let response: ImageResults = self
            .client
            .get(format!("{}/i.js", self.base_url))
            .header(reqwest::header::REFERER, format!("{}/", self.base_url))
            .query(&[
                ("l", self.region.as_str()),
                ("o", "json"),
                ("q", query),
                ("vqd", vqd.as_str()),
                ("f", ",,,type:photo,,"),
                ("p", self.safesearch.param()),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let hit = response.results.into_iter().next().map(|r| ImageHit {
            image_url: r.image,
            source_url: r.url,
            title: r.title,
        });
        info!(
            found = hit.is_some(),
            image_url = ?hit.as_ref().map(|h| h.image_url.as_str()),
            "step: image search done"
        );
        Ok(hit)
    }
}
