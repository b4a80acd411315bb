use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Article title to summed sentiment score, for one ticker.
///
/// Articles keep feed order. Titles are keys: a second article with the same title
/// overwrites the first in place.
pub type ArticleSentiment = IndexMap<String, f64>;

/// Running total of paragraph scores for the article being scored.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleAggregator {
    title: String,
    total: f64,
}

impl ArticleAggregator {
    /// Starts a new article with a total of zero.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            total: 0.0,
        }
    }

    /// Adds one paragraph score.
    pub fn add(&mut self, score: f64) {
        self.total += score;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Records the finished article into `articles`, overwriting any same-titled entry.
    /// Returns the final total.
    pub fn commit(self, articles: &mut ArticleSentiment) -> f64 {
        articles.insert(self.title, self.total);
        self.total
    }
}

/// Ticker symbol to that ticker's [`ArticleSentiment`]. The final output of a run.
///
/// Tickers keep the order they were first committed in. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickerReport {
    tickers: IndexMap<String, ArticleSentiment>,
}

impl TickerReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// The articles committed for `ticker`, if any.
    pub fn get(&self, ticker: &str) -> Option<&ArticleSentiment> {
        self.tickers.get(ticker)
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.tickers.contains_key(ticker)
    }

    /// Number of tickers in the report.
    pub fn len(&self) -> usize {
        self.tickers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickers.is_empty()
    }

    /// Iterates tickers in commit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ArticleSentiment)> {
        self.tickers.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> IndexMap<String, ArticleSentiment> {
        self.tickers
    }
}

impl From<IndexMap<String, ArticleSentiment>> for TickerReport {
    fn from(tickers: IndexMap<String, ArticleSentiment>) -> Self {
        Self { tickers }
    }
}

/// Owns the [`TickerReport`] while a run is in progress.
#[derive(Debug, Default)]
pub struct ResultStore {
    report: TickerReport,
}

impl ResultStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves a finished ticker's articles into the report. A repeated ticker replaces the
    /// earlier entry.
    pub fn commit_ticker(&mut self, ticker: impl Into<String>, articles: ArticleSentiment) {
        self.report.tickers.insert(ticker.into(), articles);
    }

    pub fn get_report(&self) -> &TickerReport {
        &self.report
    }

    pub fn into_report(self) -> TickerReport {
        self.report
    }
}
