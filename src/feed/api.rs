use reqwest::StatusCode;

use crate::{
    core::{FeedError, SentimentClient, Source, net},
    feed::{model::FeedEntry, wire},
};

pub(super) async fn fetch_feed(
    client: &SentimentClient,
    ticker: &str,
    source: Source,
) -> Result<Vec<FeedEntry>, FeedError> {
    let url = source.feed_url(client, ticker);

    let resp = client.http().get(url.clone()).send().await?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FeedError::NotFound {
            ticker: ticker.to_string(),
            url: url.to_string(),
        });
    }
    if !status.is_success() {
        return Err(FeedError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    let endpoint = format!("feed_{}", source.as_str());
    let body = net::get_bytes(resp, &endpoint, ticker, "xml").await?;
    let text = String::from_utf8_lossy(&body);

    wire::parse_feed(&text).map_err(|reason| FeedError::Malformed {
        ticker: ticker.to_string(),
        reason,
    })
}
