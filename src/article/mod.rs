//! Article retrieval and paragraph extraction.

mod api;
mod extract;

pub use extract::{ArticleText, extract_paragraphs};

use crate::core::{FetchError, SentimentClient};

/// Fetches the raw HTML of an article page.
///
/// Only `http` and `https` URLs are requested. There is no retry; the client's timeout
/// (if any) applies.
///
/// # Errors
///
/// Returns [`FetchError::InvalidUrl`] for URLs that cannot be requested,
/// [`FetchError::NotFound`] for a 404, and [`FetchError::Status`] or [`FetchError::Http`]
/// for any other failure.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_article(client: &SentimentClient, url: &str) -> Result<Vec<u8>, FetchError> {
    api::fetch_article(client, url).await
}
