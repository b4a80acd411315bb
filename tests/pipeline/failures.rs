use httpmock::MockServer;
use stock_sentiment::{FeedErrorKind, FetchErrorKind, Pipeline, SentimentLabel, Source};

use crate::common::{
    FakeClassifier, RecordingObserver, client_for, mock_feed, mock_feed_status, mock_page,
    mock_page_status, page, rss,
};

#[tokio::test]
async fn unknown_ticker_is_skipped_and_the_run_continues() {
    let server = MockServer::start();
    let url = server.url("/news/a");
    let missing = mock_feed_status(&server, "ZZZZ", 404);
    let acme = mock_feed(&server, "ACME", rss(&[("Story", url.as_str())]));
    let _a = mock_page(&server, "/news/a", page(&["text"]));

    let pipeline = Pipeline::new(client_for(&server), FakeClassifier::new(), Source::Yahoo);
    let mut observer = RecordingObserver::default();
    let report = pipeline.run(["ZZZZ", "ACME"], &mut observer).await;

    missing.assert();
    acme.assert();
    assert!(!report.contains("ZZZZ"));
    assert!(report.contains("ACME"));
    assert_eq!(
        observer.skipped_tickers,
        [("ZZZZ".to_string(), FeedErrorKind::NotFound)]
    );
}

#[tokio::test]
async fn transient_and_malformed_feeds_skip_their_ticker() {
    let server = MockServer::start();
    let _busy = mock_feed_status(&server, "BUSY", 503);
    let _broken = mock_feed(&server, "BRKN", "<html>maintenance</html>".to_string());

    let pipeline = Pipeline::new(client_for(&server), FakeClassifier::new(), Source::Yahoo);
    let mut observer = RecordingObserver::default();
    let report = pipeline.run(["BUSY", "BRKN"], &mut observer).await;

    assert!(report.is_empty());
    assert_eq!(
        observer.skipped_tickers,
        [
            ("BUSY".to_string(), FeedErrorKind::Transient),
            ("BRKN".to_string(), FeedErrorKind::Malformed),
        ]
    );
    assert!(observer.committed.is_empty());
}

#[tokio::test]
async fn one_failed_article_of_three_leaves_two_entries() {
    let server = MockServer::start();
    let a = server.url("/news/a");
    let gone = server.url("/news/gone");
    let c = server.url("/news/c");
    let _feed = mock_feed(
        &server,
        "ACME",
        rss(&[
            ("Story A", a.as_str()),
            ("Story Gone", gone.as_str()),
            ("Story C", c.as_str()),
        ]),
    );
    let _a = mock_page(&server, "/news/a", page(&["good"]));
    let _gone = mock_page_status(&server, "/news/gone", 404);
    let _c = mock_page(&server, "/news/c", page(&["good"]));

    let classifier = FakeClassifier::new().with("good", SentimentLabel::Positive, 0.5);
    let pipeline = Pipeline::new(client_for(&server), classifier, Source::Yahoo);
    let mut observer = RecordingObserver::default();
    let report = pipeline.run(["ACME"], &mut observer).await;

    let articles = report.get("ACME").unwrap();
    assert_eq!(articles.len(), 2);
    assert!(!articles.contains_key("Story Gone"));
    assert_eq!(
        observer.skipped_articles,
        [("Story Gone".to_string(), FetchErrorKind::NotFound)]
    );
}

#[tokio::test]
async fn invalid_and_erroring_article_urls_are_skipped() {
    let server = MockServer::start();
    let ok = server.url("/news/ok");
    let flaky = server.url("/news/flaky");
    let _feed = mock_feed(
        &server,
        "ACME",
        rss(&[
            ("No scheme", "finance.example.com/news/x"),
            ("Flaky", flaky.as_str()),
            ("Fine", ok.as_str()),
        ]),
    );
    let _flaky = mock_page_status(&server, "/news/flaky", 500);
    let _ok = mock_page(&server, "/news/ok", page(&["text"]));

    let pipeline = Pipeline::new(client_for(&server), FakeClassifier::new(), Source::Yahoo);
    let mut observer = RecordingObserver::default();
    let run = pipeline.process_ticker("ACME", &mut observer).await.unwrap();

    assert_eq!(run.articles.len(), 1);
    assert!(run.articles.contains_key("Fine"));
    assert_eq!(run.visited.len(), 3);
    assert_eq!(
        observer.skipped_articles,
        [
            ("No scheme".to_string(), FetchErrorKind::InvalidUrl),
            ("Flaky".to_string(), FetchErrorKind::Transient),
        ]
    );
}

#[tokio::test]
async fn classification_failure_skips_only_that_article() {
    let server = MockServer::start();
    let a = server.url("/news/a");
    let b = server.url("/news/b");
    let _feed = mock_feed(
        &server,
        "ACME",
        rss(&[("Unscorable", a.as_str()), ("Scorable", b.as_str())]),
    );
    let _a = mock_page(&server, "/news/a", page(&["fine", "poison", "fine"]));
    let _b = mock_page(&server, "/news/b", page(&["fine"]));

    let classifier = FakeClassifier::new()
        .with("fine", SentimentLabel::Positive, 0.25)
        .failing_on("poison");
    let pipeline = Pipeline::new(client_for(&server), classifier, Source::Yahoo);
    let mut observer = RecordingObserver::default();
    let report = pipeline.run(["ACME"], &mut observer).await;

    let articles = report.get("ACME").unwrap();
    assert_eq!(articles.len(), 1);
    assert_eq!(articles["Scorable"], 0.25);
    assert_eq!(observer.classify_failures, ["Unscorable"]);
    // Scoring stops at the failing paragraph.
    assert_eq!(pipeline.classifier().calls(), 3);
}
