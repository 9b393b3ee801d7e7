//! H1 title extraction from markdown sources.

use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

/// Extract the document title from the first H1 heading.
///
/// Inline text and code spans are concatenated; other inline markup is
/// ignored. Returns `None` if the document has no H1 or the heading is
/// empty.
#[must_use]
pub fn extract_title(markdown: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut title = String::new();

    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = title.trim();
                return (!title.is_empty()).then(|| title.to_owned());
            }
            Event::Text(text) | Event::Code(text) if in_h1 => title.push_str(&text),
            _ => {}
        }
    }

    None
}
