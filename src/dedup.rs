use std::collections::HashSet;

/// Article URLs already handled for the ticker being processed.
///
/// One set lives for exactly one ticker. The first occurrence of a URL is processed, every
/// later occurrence within the same ticker is skipped. URLs are compared verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `url` was already marked.
    pub fn seen(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Records `url` as handled.
    pub fn mark(&mut self, url: impl Into<String>) {
        self.urls.insert(url.into());
    }

    /// Marks `url` and reports whether it was new.
    pub fn first_visit(&mut self, url: &str) -> bool {
        if self.seen(url) {
            return false;
        }
        self.mark(url);
        true
    }

    /// Number of distinct URLs recorded.
    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
