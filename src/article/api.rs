use reqwest::StatusCode;
use url::Url;

use crate::core::{FetchError, SentimentClient, net};

fn parse_article_url(raw: &str) -> Result<Url, FetchError> {
    let url = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::InvalidUrl {
            url: raw.to_string(),
            reason: format!("unsupported scheme `{other}`"),
        }),
    }
}

pub(super) async fn fetch_article(
    client: &SentimentClient,
    raw_url: &str,
) -> Result<Vec<u8>, FetchError> {
    let url = parse_article_url(raw_url)?;

    let resp = client.http().get(url).send().await?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound {
            url: raw_url.to_string(),
        });
    }
    if !status.is_success() {
        return Err(FetchError::Status {
            status: status.as_u16(),
            url: raw_url.to_string(),
        });
    }

    Ok(net::get_bytes(resp, "article", raw_url, "html").await?)
}
