//! Article and ticker level aggregation, plus report persistence.

mod io;
mod model;

pub use io::{OutputFormat, ReportPath};
pub use model::{ArticleAggregator, ArticleSentiment, ResultStore, TickerReport};
