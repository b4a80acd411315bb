use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::core::{ConfigError, SentimentClient};

/// A news provider the feed retriever knows how to query.
///
/// The set is closed: unknown names are rejected by [`Source::from_str`] with
/// [`ConfigError::UnsupportedSource`] while configuration is parsed, never mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Source {
    /// Yahoo Finance headline RSS.
    #[default]
    Yahoo,
}

impl Source {
    /// Lowercase name accepted on the command line.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yahoo => "yahoo",
        }
    }

    /// Builds the source-specific feed URL for `ticker`.
    pub(crate) fn feed_url(self, client: &SentimentClient, ticker: &str) -> Url {
        match self {
            Self::Yahoo => {
                let mut url = client.base_yahoo_feed().clone();
                url.query_pairs_mut().append_pair("s", ticker);
                url
            }
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yahoo => f.write_str("Yahoo"),
        }
    }
}

impl FromStr for Source {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yahoo" => Ok(Self::Yahoo),
            _ => Err(ConfigError::UnsupportedSource(s.to_string())),
        }
    }
}
