#[cfg(feature = "test-mode")]
use std::env;

/// Read the response body as raw bytes.
/// In `test-mode`, if `SENTIMENT_RECORD=1`, the body is saved as a fixture via `core::fixtures`.
pub(crate) async fn get_bytes(
    resp: reqwest::Response,
    _endpoint: &str,
    _key: &str,
    _ext: &str,
) -> Result<Vec<u8>, reqwest::Error> {
    let bytes = resp.bytes().await?.to_vec();

    #[cfg(feature = "test-mode")]
    {
        if env::var("SENTIMENT_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _key, _ext, &bytes)
        {
            eprintln!("SENTIMENT_RECORD: failed to write fixture for {_key}: {e}");
        }
    }

    Ok(bytes)
}
