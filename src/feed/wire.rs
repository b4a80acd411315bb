//! Syndication parsing: RSS 2.0 `<item>`, RDF `<item>` and Atom `<entry>`.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::feed::model::FeedEntry;

#[derive(Clone, Copy)]
enum Field {
    Title,
    Link,
}

#[derive(Default)]
struct Pending {
    /// Nesting depth of the `<item>`/`<entry>` element itself.
    depth: usize,
    title: String,
    link: String,
}

impl Pending {
    fn at(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Whether an element opened at `depth` is a direct child of the entry.
    fn is_child(&self, depth: usize) -> bool {
        depth == self.depth + 1
    }

    fn push(&mut self, field: Field, text: &str) {
        match field {
            Field::Title => self.title.push_str(text),
            Field::Link => self.link.push_str(text),
        }
    }

    fn finish(self) -> Option<FeedEntry> {
        let title = self.title.trim();
        let url = self.link.trim();
        if title.is_empty() || url.is_empty() {
            return None;
        }
        Some(FeedEntry {
            title: title.to_string(),
            url: url.to_string(),
        })
    }
}

/// Atom links carry the target in `href`; only alternate (or untyped) links point at the article.
fn link_href(e: &BytesStart<'_>) -> Result<Option<String>, String> {
    let mut href = None;
    for attr in e.attributes() {
        let attr = attr.map_err(|e| e.to_string())?;
        let value = attr.unescape_value().map_err(|e| e.to_string())?;
        match attr.key.local_name().as_ref() {
            b"rel" if value != "alternate" => return Ok(None),
            b"href" => href = Some(value.into_owned()),
            _ => {}
        }
    }
    Ok(href)
}

/// Parses a feed body into entries in document order.
///
/// Only unprefixed `title` and `link` elements that are direct children of an entry are
/// read, so extension elements such as `media:title` or `atom:link` never leak into it.
/// Entries missing a title or a link are dropped. The error string describes why the
/// document was rejected.
pub(crate) fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut entries = Vec::new();
    let mut saw_root = false;
    let mut depth = 0usize;
    let mut pending: Option<Pending> = None;
    let mut field: Option<Field> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                field = None;
                let level = depth;
                depth += 1;
                if matches!(e.local_name().as_ref(), b"rss" | b"RDF" | b"feed") {
                    saw_root = true;
                }
                let name = e.name();
                match pending.as_mut() {
                    None if matches!(name.as_ref(), b"item" | b"entry") => {
                        pending = Some(Pending::at(level));
                    }
                    Some(p) if p.is_child(level) => match name.as_ref() {
                        b"title" => field = Some(Field::Title),
                        b"link" if p.link.is_empty() => match link_href(&e)? {
                            Some(href) => p.link = href,
                            None => field = Some(Field::Link),
                        },
                        _ => {}
                    },
                    _ => {}
                }
            }
            Ok(Event::Empty(e)) => {
                if e.name().as_ref() == b"link"
                    && let Some(p) = pending.as_mut()
                    && p.is_child(depth)
                    && p.link.is_empty()
                    && let Some(href) = link_href(&e)?
                {
                    p.link = href;
                }
            }
            Ok(Event::End(_)) => {
                field = None;
                depth = depth.saturating_sub(1);
                if pending.as_ref().is_some_and(|p| p.depth == depth)
                    && let Some(entry) = pending.take().and_then(Pending::finish)
                {
                    entries.push(entry);
                }
            }
            Ok(Event::Text(t)) => {
                if let (Some(p), Some(f)) = (pending.as_mut(), field) {
                    let text = t.unescape().map_err(|e| e.to_string())?;
                    p.push(f, &text);
                }
            }
            Ok(Event::CData(c)) => {
                if let (Some(p), Some(f)) = (pending.as_mut(), field) {
                    p.push(f, &String::from_utf8_lossy(&c));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(format!("at byte {}: {e}", reader.error_position())),
            _ => {}
        }
    }

    if !saw_root {
        return Err("no rss, RDF or feed root element".to_string());
    }
    Ok(entries)
}
