//! The pipeline driver: feed → dedup → fetch → extract → score → aggregate, per ticker.
//!
//! Work is strictly sequential. A feed failure skips the ticker, a fetch or classification
//! failure skips the article, and a repeated URL is skipped silently. Nothing is retried.

use crate::{
    article::{extract_paragraphs, fetch_article},
    classify::{SentimentClassifier, paragraph_score},
    core::{
        ClassifyError, FeedError, FeedErrorKind, FetchError, FetchErrorKind, SentimentClient,
        Source,
    },
    dedup::VisitedSet,
    feed::{FeedEntry, fetch_feed},
    report::{ArticleAggregator, ArticleSentiment, ResultStore, TickerReport},
};

/// Progress callbacks. Every method defaults to doing nothing.
pub trait PipelineObserver {
    /// The ticker's feed could not be used; the ticker is skipped.
    fn ticker_skipped(&mut self, _ticker: &str, _error: &FeedError) {}

    /// An entry repeated a URL already handled for this ticker.
    fn duplicate_skipped(&mut self, _ticker: &str, _entry: &FeedEntry) {}

    /// The article page could not be fetched; the article is skipped.
    fn article_skipped(&mut self, _ticker: &str, _entry: &FeedEntry, _error: &FetchError) {}

    /// A paragraph could not be classified; the article is skipped.
    fn classification_failed(
        &mut self,
        _ticker: &str,
        _entry: &FeedEntry,
        _error: &ClassifyError,
    ) {
    }

    /// An article finished scoring and was recorded.
    fn article_scored(&mut self, _ticker: &str, _title: &str, _score: f64) {}

    /// The ticker's articles were committed to the report.
    fn ticker_committed(&mut self, _ticker: &str, _articles: &ArticleSentiment) {}
}

/// Discards all progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {}

/// Prints progress and diagnostics to stdout: each scored article as its title followed
/// by its score, each skip as a one-line diagnostic.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleObserver;

impl PipelineObserver for ConsoleObserver {
    fn ticker_skipped(&mut self, ticker: &str, error: &FeedError) {
        match error.kind() {
            FeedErrorKind::NotFound => println!("No ticker {ticker}. Proceeding.. \n"),
            FeedErrorKind::Transient => {
                println!("Unknown error for {ticker} ({error}). Proceeding.. \n")
            }
            FeedErrorKind::Malformed => {
                println!("Error parsing RSS feed for {ticker}. Proceeding.. \n")
            }
        }
    }

    fn article_skipped(&mut self, _ticker: &str, entry: &FeedEntry, error: &FetchError) {
        match error.kind() {
            FetchErrorKind::InvalidUrl => println!(
                "Invalid article URL for \"{}\": {}. Proceeding.. \n",
                entry.title, entry.url
            ),
            FetchErrorKind::NotFound => {
                println!("Article not found: \"{}\". Proceeding.. \n", entry.title)
            }
            FetchErrorKind::Transient => println!(
                "Unknown error for article \"{}\" ({error}). Proceeding.. \n",
                entry.title
            ),
        }
    }

    fn classification_failed(&mut self, _ticker: &str, entry: &FeedEntry, error: &ClassifyError) {
        println!("Could not score article \"{}\" ({error}). Proceeding.. \n", entry.title);
    }

    fn article_scored(&mut self, _ticker: &str, title: &str, score: f64) {
        println!("{title}");
        println!("{score}\n");
    }
}

/// What one ticker produced: its committed articles and the URLs it visited.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickerRun {
    pub articles: ArticleSentiment,
    pub visited: VisitedSet,
}

/// Sequences feed retrieval, deduplication, fetching, extraction and scoring per ticker.
///
/// The classifier is injected at construction and reused for every paragraph.
pub struct Pipeline<C> {
    client: SentimentClient,
    classifier: C,
    source: Source,
}

impl<C: SentimentClassifier> Pipeline<C> {
    pub fn new(client: SentimentClient, classifier: C, source: Source) -> Self {
        Self {
            client,
            classifier,
            source,
        }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// Processes every ticker in order and returns the finished report.
    ///
    /// Tickers are upper-cased before use. A ticker whose feed fails has no entry in the
    /// report; a repeated ticker replaces its earlier entry when it succeeds again.
    pub async fn run<I, S, O>(&self, tickers: I, observer: &mut O) -> TickerReport
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        O: PipelineObserver + ?Sized,
    {
        let mut store = ResultStore::new();
        for ticker in tickers {
            let ticker = ticker.as_ref().trim().to_ascii_uppercase();
            match self.process_ticker(&ticker, observer).await {
                Ok(run) => {
                    observer.ticker_committed(&ticker, &run.articles);
                    store.commit_ticker(ticker, run.articles);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(ticker = %ticker, error = %e, "skipping ticker");
                    observer.ticker_skipped(&ticker, &e);
                }
            }
        }
        store.into_report()
    }

    /// Processes one ticker with a fresh [`VisitedSet`] and [`ArticleSentiment`].
    ///
    /// # Errors
    ///
    /// Returns the [`FeedError`] if the ticker's feed cannot be retrieved or parsed.
    /// Article level failures are reported to `observer` and never returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, observer), err))]
    pub async fn process_ticker<O>(
        &self,
        ticker: &str,
        observer: &mut O,
    ) -> Result<TickerRun, FeedError>
    where
        O: PipelineObserver + ?Sized,
    {
        let entries = fetch_feed(&self.client, ticker, self.source).await?;

        let mut run = TickerRun::default();
        for entry in &entries {
            if !run.visited.first_visit(&entry.url) {
                #[cfg(feature = "tracing")]
                tracing::debug!(url = %entry.url, "duplicate url");
                observer.duplicate_skipped(ticker, entry);
                continue;
            }

            let html = match fetch_article(&self.client, &entry.url).await {
                Ok(html) => html,
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(url = %entry.url, error = %e, "skipping article");
                    observer.article_skipped(ticker, entry, &e);
                    continue;
                }
            };

            let paragraphs = extract_paragraphs(&html);
            match self.score_article(&entry.title, &paragraphs).await {
                Ok(article) => {
                    let score = article.commit(&mut run.articles);
                    observer.article_scored(ticker, &entry.title, score);
                }
                Err(e) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(url = %entry.url, error = %e, "classification failed");
                    observer.classification_failed(ticker, entry, &e);
                }
            }
        }

        Ok(run)
    }

    async fn score_article(
        &self,
        title: &str,
        paragraphs: &[String],
    ) -> Result<ArticleAggregator, ClassifyError> {
        let mut article = ArticleAggregator::new(title);
        for paragraph in paragraphs {
            let classification = self.classifier.classify(paragraph).await?;
            article.add(paragraph_score(&classification));
        }
        Ok(article)
    }
}
