//! Image download and decoding.

use std::time::Duration;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use tracing::{info, instrument};

use crate::search::DEFAULT_TIMEOUT;

/// A downloaded picture that decoded successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedImage {
    /// Raw file bytes as served.
    pub bytes: Vec<u8>,
    /// Lowercase format name: `jpeg`, `png` or `webp`.
    pub format: String,
    pub width: u32,
    pub height: u32,
}

/// Downloads an image by URL.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, anyhow::Error>;
}

/// [`ImageFetcher`] over plain HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpImageFetcher {
    client: reqwest::Client,
}

impl HttpImageFetcher {
    pub fn new() -> Result<Self, anyhow::Error> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

/// Detects the format from the magic bytes and decodes the whole image.
pub fn decode_image(bytes: Vec<u8>) -> Result<FetchedImage, anyhow::Error> {
    let format = image::guess_format(&bytes).context("unrecognized image format")?;
    let decoded = image::load_from_memory_with_format(&bytes, format)
        .map_err(|e| anyhow!("failed to decode {format:?} image: {e}"))?;
    Ok(FetchedImage {
        format: format!("{format:?}").to_lowercase(),
        width: decoded.width(),
        height: decoded.height(),
        bytes,
    })
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    #[instrument(skip(self))]
    async fn fetch_image(&self, url: &str) -> Result<FetchedImage, anyhow::Error> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec();
        let image = decode_image(bytes)?;
        info!(
            format = %image.format,
            width = image.width,
            height = image.height,
            size = image.bytes.len(),
            "step: image downloaded"
        );
        Ok(image)
    }
}
