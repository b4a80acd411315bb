//! Offline financial word-list classifier.

use std::collections::HashMap;
use std::future;

use crate::classify::{Classification, ClassifyFuture, SentimentClassifier, SentimentLabel};

const POSITIVE: &[(&str, f64)] = &[
    ("bullish", 0.8),
    ("surge", 0.7),
    ("surged", 0.7),
    ("surges", 0.7),
    ("rally", 0.7),
    ("rallied", 0.7),
    ("soar", 0.8),
    ("soared", 0.8),
    ("soars", 0.8),
    ("gain", 0.5),
    ("gains", 0.5),
    ("gained", 0.5),
    ("profit", 0.6),
    ("profits", 0.6),
    ("profitable", 0.6),
    ("growth", 0.6),
    ("grew", 0.5),
    ("rise", 0.5),
    ("rises", 0.5),
    ("rose", 0.5),
    ("increase", 0.5),
    ("increased", 0.5),
    ("improve", 0.5),
    ("improved", 0.5),
    ("outperform", 0.7),
    ("outperformed", 0.7),
    ("beat", 0.6),
    ("beats", 0.6),
    ("exceed", 0.6),
    ("exceeded", 0.6),
    ("strong", 0.5),
    ("stronger", 0.5),
    ("optimistic", 0.6),
    ("confident", 0.5),
    ("record", 0.6),
    ("upgrade", 0.6),
    ("upgraded", 0.6),
    ("recovery", 0.5),
    ("rebound", 0.5),
    ("dividend", 0.3),
    ("buyback", 0.4),
];

const NEGATIVE: &[(&str, f64)] = &[
    ("bearish", -0.8),
    ("crash", -0.9),
    ("crashed", -0.9),
    ("plunge", -0.8),
    ("plunged", -0.8),
    ("plunges", -0.8),
    ("drop", -0.6),
    ("dropped", -0.6),
    ("drops", -0.6),
    ("fall", -0.5),
    ("fell", -0.5),
    ("falls", -0.5),
    ("decline", -0.6),
    ("declined", -0.6),
    ("declines", -0.6),
    ("loss", -0.6),
    ("losses", -0.6),
    ("decrease", -0.5),
    ("decreased", -0.5),
    ("weak", -0.5),
    ("weaker", -0.5),
    ("pessimistic", -0.6),
    ("concern", -0.5),
    ("concerns", -0.5),
    ("worry", -0.5),
    ("fear", -0.6),
    ("fears", -0.6),
    ("downgrade", -0.6),
    ("downgraded", -0.6),
    ("miss", -0.6),
    ("missed", -0.6),
    ("lawsuit", -0.5),
    ("layoffs", -0.6),
    ("recession", -0.7),
    ("bankruptcy", -0.9),
    ("default", -0.7),
];

const NEGATIONS: &[&str] = &["not", "no", "never", "without", "hardly"];

/// A deterministic classifier that needs no network or model files.
///
/// The label is the sign of the summed weights of matched words (a negation directly
/// before a word flips it). Confidence is the mean absolute weight of matched words,
/// capped at 1. Text without any match is neutral with confidence 0.
#[derive(Debug, Clone)]
pub struct LexiconClassifier {
    words: HashMap<&'static str, f64>,
}

impl Default for LexiconClassifier {
    fn default() -> Self {
        Self {
            words: POSITIVE.iter().chain(NEGATIVE).copied().collect(),
        }
    }
}

impl LexiconClassifier {
    /// Scores `text` synchronously.
    pub fn score(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();
        let tokens = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty());

        let mut sum = 0.0;
        let mut magnitude = 0.0;
        let mut matched = 0usize;
        let mut negate = false;

        for token in tokens {
            if NEGATIONS.iter().any(|n| *n == token) {
                negate = true;
                continue;
            }
            if let Some(&weight) = self.words.get(token) {
                sum += if negate { -weight } else { weight };
                magnitude += weight.abs();
                matched += 1;
            }
            negate = false;
        }

        if matched == 0 {
            return Classification::new(SentimentLabel::Neutral, 0.0);
        }

        let confidence = (magnitude / matched as f64).min(1.0);
        let label = if sum > 0.0 {
            SentimentLabel::Positive
        } else if sum < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        };
        Classification::new(label, confidence)
    }
}

impl SentimentClassifier for LexiconClassifier {
    fn classify<'a>(&'a self, text: &'a str) -> ClassifyFuture<'a> {
        Box::pin(future::ready(Ok(self.score(text))))
    }
}
