mod api;
mod model;
mod wire;

pub use model::FeedEntry;

use crate::core::{FeedError, SentimentClient, Source};

/// Fetches the headline feed for `ticker` from `source`.
///
/// # Errors
///
/// Returns [`FeedError::NotFound`] when the backend answers 404, [`FeedError::Status`] or
/// [`FeedError::Http`] for any other failed request, and [`FeedError::Malformed`] when the
/// body is not a syndication document.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(client), err))]
pub async fn fetch_feed(
    client: &SentimentClient,
    ticker: &str,
    source: Source,
) -> Result<Vec<FeedEntry>, FeedError> {
    api::fetch_feed(client, ticker, source).await
}

/// A builder for fetching the headline feed of a specific ticker.
pub struct FeedBuilder {
    client: SentimentClient,
    ticker: String,
    source: Source,
}

impl FeedBuilder {
    /// Creates a new `FeedBuilder` for a given ticker, using the default source.
    pub fn new(client: &SentimentClient, ticker: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            ticker: ticker.into(),
            source: Source::default(),
        }
    }

    /// Sets the news source to query.
    #[must_use]
    pub const fn source(mut self, source: Source) -> Self {
        self.source = source;
        self
    }

    /// Executes the request and returns the feed entries in document order.
    ///
    /// # Errors
    ///
    /// See [`fetch_feed`].
    pub async fn fetch(self) -> Result<Vec<FeedEntry>, FeedError> {
        fetch_feed(&self.client, &self.ticker, self.source).await
    }
}
