use thiserror::Error;

/// A fatal configuration problem, raised before any network activity.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested news source is not one of the supported sources.
    #[error("unsupported news source `{0}` (supported: yahoo)")]
    UnsupportedSource(String),

    /// The output file does not end in `.json` or `.txt`.
    #[error("invalid output file `{0}`: expected a .txt or .json extension")]
    OutputExtension(String),

    /// A configured endpoint could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The HTTP client could not be constructed.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),
}

/// The coarse category of a feed failure, used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedErrorKind {
    /// The backend does not know the ticker.
    NotFound,
    /// Any other unsuccessful response or transport failure.
    Transient,
    /// The body is not a valid syndication document.
    Malformed,
}

/// Failure to retrieve or parse a ticker's news feed. Recovered by skipping the ticker.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The backend answered 404 for the ticker's feed.
    #[error("no feed for ticker {ticker} at {url}")]
    NotFound {
        /// The ticker symbol.
        ticker: String,
        /// The feed URL that was requested.
        url: String,
    },

    /// The backend returned an unsuccessful status other than 404.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The feed URL that was requested.
        url: String,
    },

    /// The request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The feed body could not be parsed as RSS, RDF or Atom.
    #[error("malformed feed for ticker {ticker}: {reason}")]
    Malformed {
        /// The ticker symbol.
        ticker: String,
        /// What the parser rejected.
        reason: String,
    },
}

impl FeedError {
    /// Returns the failure category.
    pub fn kind(&self) -> FeedErrorKind {
        match self {
            Self::NotFound { .. } => FeedErrorKind::NotFound,
            Self::Status { .. } | Self::Http(_) => FeedErrorKind::Transient,
            Self::Malformed { .. } => FeedErrorKind::Malformed,
        }
    }
}

/// The coarse category of an article fetch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchErrorKind {
    /// The URL cannot be requested at all.
    InvalidUrl,
    /// The article page answered 404.
    NotFound,
    /// Any other unsuccessful response or transport failure.
    Transient,
}

/// Failure to retrieve an article page. Recovered by skipping the article.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL is structurally unusable (unparseable, or not http/https).
    #[error("invalid article URL `{url}`: {reason}")]
    InvalidUrl {
        /// The offending URL as it appeared in the feed.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The article page answered 404.
    #[error("article not found at {url}")]
    NotFound {
        /// The article URL.
        url: String,
    },

    /// The article page returned an unsuccessful status other than 404.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The article URL.
        url: String,
    },

    /// The request could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl FetchError {
    /// Returns the failure category.
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            Self::InvalidUrl { .. } => FetchErrorKind::InvalidUrl,
            Self::NotFound { .. } => FetchErrorKind::NotFound,
            Self::Status { .. } | Self::Http(_) => FetchErrorKind::Transient,
        }
    }
}

/// Failure of a classifier call.
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// The request to the classification endpoint could not be completed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The classification endpoint returned an unsuccessful status.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The endpoint URL.
        url: String,
    },

    /// The classifier answered with something other than a label/score list.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),
}

/// Failure to persist or load a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Reading or writing the report file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The report could not be encoded or decoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Umbrella error for callers that drive the whole tool.
#[derive(Debug, Error)]
pub enum SentimentError {
    /// See [`ConfigError`].
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// See [`FeedError`].
    #[error(transparent)]
    Feed(#[from] FeedError),
    /// See [`FetchError`].
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// See [`ClassifyError`].
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    /// See [`ReportError`].
    #[error(transparent)]
    Report(#[from] ReportError),
}
