//! # Image Search Client
//!
//! Finds a food picture on the web and downloads it.
//!
//! - [`ImageSearch`] / [`DuckDuckGoImageSearch`]: query text to the first image hit (image URL,
//!   source page, title)
//! - [`ImageFetcher`] / [`HttpImageFetcher`]: image URL to decoded bytes with format and size
//!
//! Both are traits so the agent can run against stubs in tests.
//!
//! ## External interactions
//!
//! - **DuckDuckGo**: `GET /?q=` for the `vqd` token, then `GET /i.js` for JSON results
//! - **Image hosts**: arbitrary URLs returned by the search

mod fetch;
mod search;

pub use fetch::{decode_image, FetchedImage, HttpImageFetcher, ImageFetcher};
pub use search::{
    DuckDuckGoImageSearch, ImageHit, ImageSearch, SafeSearch, DEFAULT_BASE_URL, DEFAULT_REGION,
    DEFAULT_TIMEOUT,
};
