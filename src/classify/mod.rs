//! The sentiment classifier boundary.
//!
//! The pipeline only sees [`SentimentClassifier`]: text in, a [`Classification`] out. The
//! mapping from a classification to a signed paragraph score lives here, in
//! [`paragraph_score`], and is the same whichever classifier is injected.

mod inference;
mod lexicon;
mod wire;

pub use inference::{InferenceClassifier, InferenceClassifierBuilder};
pub use lexicon::LexiconClassifier;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::ClassifyError;

/// The label half of a classifier result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Negative,
    /// Neutral, or any label the classifier emits that is neither positive nor negative.
    #[serde(other)]
    Neutral,
}

impl SentimentLabel {
    /// Maps a classifier's label string; matching is case-insensitive and anything
    /// unrecognised is [`SentimentLabel::Neutral`].
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("positive") {
            Self::Positive
        } else if label.eq_ignore_ascii_case("negative") {
            Self::Negative
        } else {
            Self::Neutral
        }
    }
}

/// A classifier's verdict on one block of text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
}

impl Classification {
    pub const fn new(label: SentimentLabel, confidence: f64) -> Self {
        Self { label, confidence }
    }
}

/// Signed contribution of one paragraph: `+c` for positive, `-c` for negative, `0` otherwise.
pub fn paragraph_score(c: &Classification) -> f64 {
    match c.label {
        SentimentLabel::Positive => c.confidence,
        SentimentLabel::Negative => -c.confidence,
        SentimentLabel::Neutral => 0.0,
    }
}

/// A boxed classification future, so the trait stays object safe.
pub type ClassifyFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Classification, ClassifyError>> + Send + 'a>>;

/// A text classifier the pipeline can call once per paragraph.
///
/// Implementations own their model lifecycle; the pipeline receives an instance at
/// construction and never creates one itself. Tests substitute a deterministic fake.
pub trait SentimentClassifier: Send + Sync {
    /// Classifies one block of text, which may be empty.
    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a>;
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Arc<T> {
    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a> {
        (**self).classify(text)
    }
}

impl<T: SentimentClassifier + ?Sized> SentimentClassifier for Box<T> {
    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a> {
        (**self).classify(text)
    }
}
