//! Core components shared by every stage of the pipeline.
//!
//! - The HTTP [`SentimentClient`] and its builder.
//! - The error types for each failure domain.
//! - The closed [`Source`] selector.
//! - Internal networking helpers.

/// The HTTP client (`SentimentClient`), builder, and default endpoints.
pub mod client;
/// Error types, one per failure domain, plus the umbrella `SentimentError`.
pub mod error;
/// The supported news sources.
pub mod source;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

pub use client::{SentimentClient, SentimentClientBuilder};
pub use error::{
    ClassifyError, ConfigError, FeedError, FeedErrorKind, FetchError, FetchErrorKind,
    ReportError, SentimentError,
};
pub use source::Source;
