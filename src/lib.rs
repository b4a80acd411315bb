//! stock-sentiment: per-ticker news sentiment.
//!
//! Headlines come from a syndication feed per ticker, each linked article is fetched and
//! split into paragraphs, every paragraph is scored by an injected classifier, and the
//! signed scores are summed per article and collected per ticker.
//!
//! ```no_run
//! # use stock_sentiment::{ConsoleObserver, LexiconClassifier, Pipeline, SentimentClient, Source};
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = SentimentClient::default();
//! let pipeline = Pipeline::new(client, LexiconClassifier::default(), Source::Yahoo);
//! let report = pipeline
//!     .run(["AAPL", "MSFT"], &mut ConsoleObserver)
//!     .await;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok(())
//! # }
//! ```

pub mod article;
pub mod classify;
pub mod core;
pub mod dedup;
pub mod feed;
pub mod pipeline;
pub mod report;

pub use article::{ArticleText, extract_paragraphs, fetch_article};
pub use classify::{
    Classification, InferenceClassifier, LexiconClassifier, SentimentClassifier, SentimentLabel,
    paragraph_score,
};
pub use crate::core::{
    ClassifyError, ConfigError, FeedError, FeedErrorKind, FetchError, FetchErrorKind, ReportError,
    SentimentClient, SentimentClientBuilder, SentimentError, Source,
};
pub use dedup::VisitedSet;
pub use feed::{FeedBuilder, FeedEntry, fetch_feed};
pub use pipeline::{ConsoleObserver, NoopObserver, Pipeline, PipelineObserver, TickerRun};
pub use report::{ArticleAggregator, ArticleSentiment, ReportPath, ResultStore, TickerReport};
