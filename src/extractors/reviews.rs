use crate::error::ExtractError;
use crate::extractors::{attr, select_all, select_one, text_of};
use crate::results::{ReviewAuthor, ReviewRecord};
use crate::utils::resolve_url;
use scraper::ElementRef;
use url::Url;

const CONTEXT: &str = "review";

// Exact attribute match, so `class="author verified"` is not an author block.
const AUTHOR_NAME: &str = r#"div[class="author"] span"#;
const AUTHOR_DATE: &str = r#"div[class="author"] i"#;

/// Extract review cards, keeping their order
pub fn extract_reviews(
    cards: &[ElementRef<'_>],
    base: Option<&Url>,
) -> Result<Vec<ReviewRecord>, ExtractError> {
    cards.iter().map(|card| extract_review(*card, base)).collect()
}

fn extract_review(card: ElementRef<'_>, base: Option<&Url>) -> Result<ReviewRecord, ExtractError> {
    let rating = select_all(card, "span.filled")?.len();

    let avatar = attr(select_one(card, "img", CONTEXT)?, "src")
        .map(|src| resolve_url(base, src))
        .unwrap_or_default();
    let name = text_of(card, AUTHOR_NAME, CONTEXT)?;

    Ok(ReviewRecord {
        rating,
        author: ReviewAuthor { avatar, name },
        title: text_of(card, "h3", CONTEXT)?,
        description: text_of(card, "div p", CONTEXT)?,
        date: text_of(card, AUTHOR_DATE, CONTEXT)?.replace('/', "."),
    })
}
