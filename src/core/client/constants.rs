//! Centralized constants for default endpoints and UA.

/// Default desktop UA to avoid trivial bot blocking by article hosts.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Yahoo Finance headline RSS (ticker is passed as the `s` query parameter).
pub(crate) const DEFAULT_BASE_YAHOO_FEED: &str =
    "https://feeds.finance.yahoo.com/rss/2.0/headline";

/// Hosted text-classification endpoint for the financial sentiment model.
pub(crate) const DEFAULT_INFERENCE_ENDPOINT: &str =
    "https://router.huggingface.co/hf-inference/models/ahmedrachid/FinancialBERT-Sentiment-Analysis";
