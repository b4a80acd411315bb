use std::sync::LazyLock;

use scraper::{Html, Selector};

static PARAGRAPH: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("p").expect("static paragraph selector"));

/// A parsed article page.
///
/// Parsing happens once; [`ArticleText::paragraphs`] walks the document lazily and can be
/// called any number of times with the same result.
pub struct ArticleText {
    document: Html,
}

impl ArticleText {
    /// Parses raw HTML bytes. Invalid UTF-8 is replaced rather than rejected.
    pub fn parse(html: &[u8]) -> Self {
        let source = String::from_utf8_lossy(html);
        Self {
            document: Html::parse_document(&source),
        }
    }

    /// Yields the plain text of every `<p>` element in document order.
    ///
    /// Paragraphs that are empty once markup is stripped are still yielded.
    pub fn paragraphs(&self) -> impl Iterator<Item = String> + '_ {
        self.document
            .select(&PARAGRAPH)
            .map(|p| p.text().collect::<String>())
    }
}

/// Eager form of [`ArticleText::paragraphs`].
pub fn extract_paragraphs(html: &[u8]) -> Vec<String> {
    ArticleText::parse(html).paragraphs().collect()
}
