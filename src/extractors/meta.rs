//! Document head metadata: title, description, keywords, language and Open Graph tags.

use crate::error::ExtractError;
use crate::extractors::{attr, find, select_all, text};
use crate::results::MetaRecord;
use crate::utils::short_title;
use scraper::ElementRef;
use serde_json::{Map, Value};

/// Extract metadata from `head`; `root` is the `<html>` element carrying `lang`
///
/// Every field here is optional: a missing node yields `None`, never an error.
pub fn extract_meta(
    head: ElementRef<'_>,
    root: ElementRef<'_>,
) -> Result<MetaRecord, ExtractError> {
    let title = find(head, "title")?.map(|node| short_title(&text(node)).to_string());

    let description =
        find(head, r#"meta[name="description"]"#)?.map(|node| content(node).to_string());

    let keywords = find(head, r#"meta[name="keywords"]"#)?
        .map(|node| content(node).split(", ").map(str::to_string).collect());

    let language = attr(root, "lang")
        .filter(|lang| !lang.is_empty())
        .map(str::to_string);

    let opengraph = extract_opengraph(head)?;

    Ok(MetaRecord {
        title,
        description,
        keywords,
        language,
        opengraph,
    })
}

/// Collect `og:*` meta tags into a map keyed by the unprefixed property name
pub fn extract_opengraph(head: ElementRef<'_>) -> Result<Map<String, Value>, ExtractError> {
    let tags = select_all(head, r#"meta[property^="og:"]"#)?;
    ::log::debug!("Found {} Open Graph tags", tags.len());

    Ok(tags.into_iter().fold(Map::new(), |mut acc, tag| {
        let key = attr(tag, "property")
            .and_then(|property| property.strip_prefix("og:"))
            .unwrap_or_default();
        let value = match attr(tag, "content") {
            Some(content) if key == "title" => Value::String(short_title(content).to_string()),
            Some(content) => Value::String(content.to_string()),
            None => Value::Null,
        };
        acc.insert(key.to_string(), value);
        acc
    }))
}

// Reflects the `content` property: an absent attribute reads as empty.
fn content(node: ElementRef<'_>) -> &str {
    attr(node, "content").unwrap_or_default()
}
