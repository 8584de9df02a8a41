//! Field extractors for the product page layout
//!
//! Each extractor is a pure function of the nodes it is handed. Lookups come in
//! two flavours: [`find`] for fields the page may legitimately omit, and
//! [`select_one`] for structure the layout guarantees, which fails the whole
//! extraction when the node is missing.

pub mod meta;
pub mod price;
pub mod product;
pub mod reviews;
pub mod suggested;

#[cfg(test)]
mod tests;

pub use meta::extract_meta;
pub use price::{PriceData, parse_price, parse_price_text};
pub use product::extract_product;
pub use reviews::extract_reviews;
pub use suggested::extract_suggested;

use crate::error::ExtractError;
use scraper::{ElementRef, Selector};

/// Compile a CSS selector
pub(crate) fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::InvalidSelector {
        selector: css.to_string(),
        message: e.to_string(),
    })
}

/// First descendant of `scope` matching `css`, if any
pub(crate) fn find<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<Option<ElementRef<'a>>, ExtractError> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).next())
}

/// First descendant of `scope` matching `css`; its absence is a layout mismatch
pub(crate) fn select_one<'a>(
    scope: ElementRef<'a>,
    css: &str,
    context: &'static str,
) -> Result<ElementRef<'a>, ExtractError> {
    find(scope, css)?.ok_or_else(|| ExtractError::MissingElement {
        selector: css.to_string(),
        context,
    })
}

/// All descendants of `scope` matching `css`, in document order
pub(crate) fn select_all<'a>(
    scope: ElementRef<'a>,
    css: &str,
) -> Result<Vec<ElementRef<'a>>, ExtractError> {
    let selector = selector(css)?;
    Ok(scope.select(&selector).collect())
}

/// Direct element children of `element`
pub(crate) fn child_elements<'a>(element: ElementRef<'a>) -> Vec<ElementRef<'a>> {
    element.children().filter_map(ElementRef::wrap).collect()
}

/// Concatenated text content, trimmed
pub(crate) fn text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Trimmed text of the first descendant matching `css`, which must exist
pub(crate) fn text_of(
    scope: ElementRef<'_>,
    css: &str,
    context: &'static str,
) -> Result<String, ExtractError> {
    select_one(scope, css, context).map(text)
}

/// Value of an attribute, if present
pub(crate) fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

/// Whether `element` carries `class` in its class list
pub(crate) fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element.value().classes().any(|c| c == class)
}
