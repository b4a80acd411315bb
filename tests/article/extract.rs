use stock_sentiment::{ArticleText, extract_paragraphs};

use crate::common::fixture;

#[test]
fn paragraphs_are_plain_text_in_document_order() {
    let html = fixture("article", "acme-beats", "html");
    let paragraphs = extract_paragraphs(html.as_bytes());

    assert_eq!(
        paragraphs,
        [
            "Acme Corp. reported third-quarter revenue of $4.2 billion, ahead of estimates.",
            "Shares rose 6% in early trading.",
            "",
            "The company will report again in January.",
            "© 2026 Yahoo. All rights reserved.",
        ]
    );
}

#[test]
fn empty_paragraphs_are_kept() {
    let paragraphs = extract_paragraphs(b"<p></p><p><span></span></p><p>text</p>");
    assert_eq!(paragraphs, ["", "", "text"]);
}

#[test]
fn extraction_is_repeatable() {
    let html = fixture("article", "acme-beats", "html");

    let parsed = ArticleText::parse(html.as_bytes());
    let first: Vec<String> = parsed.paragraphs().collect();
    let second: Vec<String> = parsed.paragraphs().collect();
    assert_eq!(first, second);

    assert_eq!(
        extract_paragraphs(html.as_bytes()),
        extract_paragraphs(html.as_bytes())
    );
}

#[test]
fn pages_without_paragraphs_yield_nothing() {
    let paragraphs = extract_paragraphs(b"<html><body><div>Only a div</div></body></html>");
    assert!(paragraphs.is_empty());
}

#[test]
fn invalid_utf8_is_replaced() {
    let paragraphs = extract_paragraphs(b"<p>caf\xe9 prices</p>");
    assert_eq!(paragraphs, ["caf\u{fffd} prices"]);
}

#[test]
fn entities_are_decoded() {
    let paragraphs = extract_paragraphs(b"<p>Procter &amp; Gamble&nbsp;rallied</p>");
    assert_eq!(paragraphs, ["Procter & Gamble\u{a0}rallied"]);
}
