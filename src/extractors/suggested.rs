use crate::error::ExtractError;
use crate::extractors::price::split_symbol;
use crate::extractors::{attr, select_one, text_of};
use crate::results::{Currency, SuggestedItem};
use crate::utils::resolve_url;
use scraper::ElementRef;
use url::Url;

const CONTEXT: &str = "suggested product";

/// Summarise suggested product cards, keeping their order
pub fn extract_suggested(
    cards: &[ElementRef<'_>],
    base: Option<&Url>,
) -> Result<Vec<SuggestedItem>, ExtractError> {
    cards.iter().map(|card| extract_card(*card, base)).collect()
}

fn extract_card(card: ElementRef<'_>, base: Option<&Url>) -> Result<SuggestedItem, ExtractError> {
    let name = text_of(card, "h3", CONTEXT)?;
    let description = text_of(card, "p", CONTEXT)?;
    let image = attr(select_one(card, "img", CONTEXT)?, "src")
        .map(|src| resolve_url(base, src))
        .unwrap_or_default();

    // Price stays textual here, only the symbol is split off
    let price_text = text_of(card, "b", CONTEXT)?;
    let (symbol, price) = split_symbol(&price_text);

    Ok(SuggestedItem {
        name,
        description,
        image,
        price: price.to_string(),
        currency: symbol.and_then(Currency::from_symbol),
    })
}
