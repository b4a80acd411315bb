use httpmock::MockServer;
use stock_sentiment::{FetchError, FetchErrorKind, SentimentClient, fetch_article};

use crate::common::{mock_page, mock_page_status, page};

#[tokio::test]
async fn fetch_returns_raw_page_bytes() {
    let server = MockServer::start();
    let body = page(&["Hello"]);
    let mock = mock_page(&server, "/news/hello", body.clone());

    let client = SentimentClient::default();
    let bytes = fetch_article(&client, &server.url("/news/hello")).await.unwrap();

    mock.assert();
    assert_eq!(bytes, body.as_bytes());
}

#[tokio::test]
async fn fetch_404_maps_to_not_found() {
    let server = MockServer::start();
    let mock = mock_page_status(&server, "/news/missing", 404);
    let url = server.url("/news/missing");

    let err = fetch_article(&SentimentClient::default(), &url).await.unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), FetchErrorKind::NotFound);
    match err {
        FetchError::NotFound { url: got } => assert_eq!(got, url),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_other_status_is_transient() {
    let server = MockServer::start();
    let mock = mock_page_status(&server, "/news/busy", 502);

    let err = fetch_article(&SentimentClient::default(), &server.url("/news/busy"))
        .await
        .unwrap_err();
    mock.assert();

    assert_eq!(err.kind(), FetchErrorKind::Transient);
    assert!(matches!(err, FetchError::Status { status: 502, .. }));
}

#[tokio::test]
async fn url_without_scheme_is_invalid() {
    let err = fetch_article(&SentimentClient::default(), "www.example.com/news/a")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::InvalidUrl);
    match err {
        FetchError::InvalidUrl { url, .. } => assert_eq!(url, "www.example.com/news/a"),
        other => panic!("expected InvalidUrl, got {other:?}"),
    }
}

#[tokio::test]
async fn non_http_scheme_is_invalid() {
    let err = fetch_article(&SentimentClient::default(), "ftp://example.com/news/a")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), FetchErrorKind::InvalidUrl);
}
