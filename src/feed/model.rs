use serde::{Deserialize, Serialize};

/// One headline/link pair from a syndication feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// The headline of the article.
    pub title: String,
    /// The link to the article page, exactly as it appeared in the feed.
    pub url: String,
}
