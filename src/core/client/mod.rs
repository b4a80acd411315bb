//! Public client surface + builder.
//! Defaults live in `constants`.

pub(crate) mod constants;

use crate::core::ConfigError;
use constants::{DEFAULT_BASE_YAHOO_FEED, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// Shared HTTP state for feed and article retrieval.
///
/// Cloning is cheap; every clone shares the same connection pool.
#[derive(Debug, Clone)]
pub struct SentimentClient {
    http: Client,
    base_yahoo_feed: Url,
}

impl Default for SentimentClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl SentimentClient {
    /// Create a new builder.
    pub fn builder() -> SentimentClientBuilder {
        SentimentClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_yahoo_feed(&self) -> &Url {
        &self.base_yahoo_feed
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SentimentClientBuilder {
    user_agent: Option<String>,
    base_yahoo_feed: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl SentimentClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the Yahoo headline feed (e.g., `https://feeds.finance.yahoo.com/rss/2.0/headline`).
    pub fn base_yahoo_feed(mut self, url: Url) -> Self {
        self.base_yahoo_feed = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: none, the transport default applies.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    pub fn build(self) -> Result<SentimentClient, ConfigError> {
        let base_yahoo_feed = match self.base_yahoo_feed {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_YAHOO_FEED)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(SentimentClient {
            http,
            base_yahoo_feed,
        })
    }
}
