//! The primary product block.

use crate::error::ExtractError;
use crate::extractors::price::parse_price;
use crate::extractors::{attr, child_elements, has_class, select_all, select_one, text, text_of};
use crate::results::{ImageRef, ProductRecord, TagKind};
use crate::utils::{discount_percent, resolve_url};
use scraper::ElementRef;
use serde_json::{Map, Value};
use url::Url;

const CONTEXT: &str = "product";

/// Markup left over from page templating, stripped from descriptions
const UNUSED_CLASS: &str = r#" class="unused""#;

/// Extract the product rooted at `node`
///
/// Every sub-element here is required; the first one missing aborts the
/// extraction with [`ExtractError::MissingElement`].
pub fn extract_product(
    node: ElementRef<'_>,
    base: Option<&Url>,
) -> Result<ProductRecord, ExtractError> {
    let id = attr(node, "data-id")
        .ok_or(ExtractError::MissingAttribute {
            attribute: "data-id",
            context: CONTEXT,
        })?
        .to_string();

    let name = text_of(node, ".title", CONTEXT)?;
    let is_liked = has_class(select_one(node, ".like", CONTEXT)?, "active");
    let tags = extract_tags(select_one(node, ".tags", CONTEXT)?);

    let price = parse_price(select_one(node, "div .price", CONTEXT)?)?;

    let properties = extract_properties(node)?;
    let description = extract_description(node)?;
    let images = extract_images(node, base)?;

    ::log::debug!(
        "Product {}: {} tag groups, {} properties, {} images",
        id,
        tags.len(),
        properties.len(),
        images.len()
    );

    Ok(ProductRecord {
        id,
        name,
        is_liked,
        tags,
        price: price.price,
        old_price: price.old_price,
        discount: price.old_price - price.price,
        discount_percent: discount_percent(price.price, price.old_price),
        currency: price.currency,
        properties,
        description,
        images,
    })
}

/// Group the children of the tags container by the category their marker class names
///
/// Children without a known marker are dropped.
pub fn extract_tags(container: ElementRef<'_>) -> Map<String, Value> {
    child_elements(container)
        .into_iter()
        .fold(Map::new(), |mut acc, tag| {
            let Some(kind) = tag.value().classes().find_map(TagKind::from_marker) else {
                ::log::warn!(
                    "Dropping tag `{}` with unknown marker `{}`",
                    text(tag),
                    attr(tag, "class").unwrap_or_default()
                );
                return acc;
            };

            let value = Value::String(text(tag));
            match acc.get_mut(kind.as_str()) {
                Some(Value::Array(values)) => values.push(value),
                _ => {
                    acc.insert(kind.as_str().to_string(), Value::Array(vec![value]));
                }
            }
            acc
        })
}

/// Key/value rows of the properties list
pub fn extract_properties(node: ElementRef<'_>) -> Result<Map<String, Value>, ExtractError> {
    select_all(node, "ul.properties li")?
        .into_iter()
        .try_fold(Map::new(), |mut acc, row| {
            let cells = child_elements(row);
            let [key, value, ..] = cells.as_slice() else {
                return Err(ExtractError::MalformedProperty(cells.len()));
            };
            acc.insert(text(*key), Value::String(text(*value)));
            Ok(acc)
        })
}

fn extract_description(node: ElementRef<'_>) -> Result<String, ExtractError> {
    let description = select_one(node, ".description", CONTEXT)?;
    Ok(description.inner_html().trim().replace(UNUSED_CLASS, ""))
}

fn extract_images(node: ElementRef<'_>, base: Option<&Url>) -> Result<Vec<ImageRef>, ExtractError> {
    Ok(select_all(node, "nav button img")?
        .into_iter()
        .map(|img| ImageRef {
            preview: attr(img, "src")
                .map(|src| resolve_url(base, src))
                .unwrap_or_default(),
            full: attr(img, "data-src").map(str::to_string),
            alt: attr(img, "alt").unwrap_or_default().to_string(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::find;
    use scraper::Html;
    use serde_json::json;

    const PRODUCT: &str = r#"
        <section data-id="product1">
            <h2 class="title"> Running Shoes </h2>
            <button class="like active">Like</button>
            <div class="tags">
                <span class="green">Shoes</span>
                <span class="red">-20%</span>
                <span class="green"> New </span>
            </div>
            <div><span class="price">$80 $100</span></div>
            <ul class="properties">
                <li><span>Color</span><b>Black</b></li>
                <li><span>Size</span><b>42</b></li>
                <li><span>Color</span><b>White</b></li>
            </ul>
            <div class="description">
                <h3 class="unused">About</h3>
                <p class="unused">Light and fast.</p>
            </div>
            <nav>
                <button><img src="img/1.png" data-src="img/1-full.png" alt="Front"></button>
                <button><img src="img/2.png" data-src="img/2-full.png" alt="Side"></button>
            </nav>
        </section>
    "#;

    fn with_product<T>(html: &str, f: impl FnOnce(ElementRef<'_>) -> T) -> T {
        let doc = Html::parse_document(html);
        let node = find(doc.root_element(), "[data-id]").unwrap().unwrap();
        f(node)
    }

    #[test]
    fn test_extract_product() {
        let product = with_product(PRODUCT, |node| extract_product(node, None).unwrap());

        assert_eq!(product.id, "product1");
        assert_eq!(product.name, "Running Shoes");
        assert!(product.is_liked);
        assert_eq!(product.price, 80.0);
        assert_eq!(product.old_price, 100.0);
        assert_eq!(product.discount, 20.0);
        assert_eq!(product.discount_percent, "20.00%");
        assert_eq!(product.currency.map(|c| c.code()), Some("USD"));
        assert_eq!(product.images.len(), 2);
        assert_eq!(product.images[1].preview, "img/2.png");
        assert_eq!(product.images[1].full.as_deref(), Some("img/2-full.png"));
        assert_eq!(product.images[1].alt, "Side");
    }

    #[test]
    fn test_tags_grouped_in_document_order() {
        let product = with_product(PRODUCT, |node| extract_product(node, None).unwrap());
        assert_eq!(
            Value::Object(product.tags.clone()),
            json!({ "category": ["Shoes", "New"], "discount": ["-20%"] })
        );
        assert_eq!(product.tags_of(TagKind::Category), vec!["Shoes", "New"]);
        assert!(product.tags_of(TagKind::Label).is_empty());
    }

    #[test]
    fn test_unknown_tag_marker_is_dropped() {
        let html =
            r#"<div class="tags"><span class="blue">Hit</span><span class="yellow">?</span></div>"#;
        let tags = with_product(
            &format!(r#"<div data-id="x">{html}</div>"#),
            |node| extract_tags(find(node, ".tags").unwrap().unwrap()),
        );
        assert_eq!(Value::Object(tags), json!({ "label": ["Hit"] }));
    }

    #[test]
    fn test_properties_last_wins() {
        let product = with_product(PRODUCT, |node| extract_product(node, None).unwrap());
        assert_eq!(product.properties.len(), 2);
        assert_eq!(product.property("Color"), Some("White"));
        assert_eq!(product.property("Size"), Some("42"));
    }

    #[test]
    fn test_description_drops_unused_class() {
        let product = with_product(PRODUCT, |node| extract_product(node, None).unwrap());
        assert!(product.description.starts_with("<h3>About</h3>"));
        assert!(product.description.ends_with("<p>Light and fast.</p>"));
        assert!(!product.description.contains("unused"));
    }

    #[test]
    fn test_image_sources_resolved_against_base() {
        let base = Url::parse("https://shop.example/item/").unwrap();
        let product =
            with_product(PRODUCT, |node| extract_product(node, Some(&base)).unwrap());
        assert_eq!(product.images[0].preview, "https://shop.example/item/img/1.png");
        assert_eq!(product.images[0].full.as_deref(), Some("img/1-full.png"));
    }

    #[test]
    fn test_missing_description_fails() {
        let html = PRODUCT.replace("class=\"description\"", "class=\"summary\"");
        let err = with_product(&html, |node| extract_product(node, None).unwrap_err());
        assert!(matches!(
            err,
            ExtractError::MissingElement { ref selector, context: "product" }
                if selector == ".description"
        ));
    }

    #[test]
    fn test_property_row_without_value_fails() {
        let html = PRODUCT.replace(
            "<li><span>Size</span><b>42</b></li>",
            "<li><span>Size</span></li>",
        );
        let err = with_product(&html, |node| extract_product(node, None).unwrap_err());
        assert!(matches!(err, ExtractError::MalformedProperty(1)));
    }

    #[test]
    fn test_unliked_product() {
        let html = PRODUCT.replace("like active", "like");
        let product = with_product(&html, |node| extract_product(node, None).unwrap());
        assert!(!product.is_liked);
    }

    #[test]
    fn test_missing_data_id_fails() {
        let html = PRODUCT.replace(r#"<section data-id="product1">"#, r#"<section class="item">"#);
        let doc = Html::parse_document(&html);
        let node = find(doc.root_element(), "section.item").unwrap().unwrap();
        let err = extract_product(node, None).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingAttribute {
                attribute: "data-id",
                context: "product"
            }
        ));
    }
}
