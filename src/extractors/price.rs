//! Parsing of `"<symbol><price> <symbol><old price>"` price blocks.

use crate::error::ExtractError;
use crate::results::Currency;
use scraper::ElementRef;

/// Current price, previous price and currency of a price block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceData {
    pub price: f64,
    pub old_price: f64,
    pub currency: Option<Currency>,
}

/// Parse the rendered text of a price node
pub fn parse_price(node: ElementRef<'_>) -> Result<PriceData, ExtractError> {
    let rendered = node.text().collect::<String>();
    parse_price_text(&rendered)
}

/// Parse price text such as `"$19.99 $29.99"`
///
/// Amounts that are not numeric come back as `NaN`. The currency is taken
/// from the first token only and is `None` for unknown symbols.
pub fn parse_price_text(text: &str) -> Result<PriceData, ExtractError> {
    let mut tokens = text.split_whitespace();
    let (Some(price_token), Some(old_price_token)) = (tokens.next(), tokens.next()) else {
        return Err(ExtractError::MalformedPrice(text.trim().to_string()));
    };

    let (symbol, price) = split_symbol(price_token);
    let (_, old_price) = split_symbol(old_price_token);

    let currency = symbol.and_then(Currency::from_symbol);
    if currency.is_none() {
        ::log::warn!("Unknown currency symbol in price `{}`", price_token);
    }

    Ok(PriceData {
        price: parse_amount(price),
        old_price: parse_amount(old_price),
        currency,
    })
}

/// Split a token into its leading currency symbol and the rest
pub fn split_symbol(token: &str) -> (Option<char>, &str) {
    let mut chars = token.chars();
    let symbol = chars.next();
    (symbol, chars.as_str())
}

fn parse_amount(amount: &str) -> f64 {
    amount.parse::<f64>().unwrap_or_else(|_| {
        ::log::warn!("Price amount `{}` is not numeric", amount);
        f64::NAN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::{Html, Selector};

    #[test]
    fn test_parse_usd() {
        let data = parse_price_text("$19.99 $29.99").unwrap();
        assert_eq!(data.price, 19.99);
        assert_eq!(data.old_price, 29.99);
        assert_eq!(data.currency, Some(Currency::Usd));
    }

    #[test]
    fn test_parse_eur_and_rub() {
        let data = parse_price_text("€5 €10").unwrap();
        assert_eq!(data.price, 5.0);
        assert_eq!(data.old_price, 10.0);
        assert_eq!(data.currency, Some(Currency::Eur));

        let data = parse_price_text("₽1500 ₽2000").unwrap();
        assert_eq!(data.price, 1500.0);
        assert_eq!(data.currency, Some(Currency::Rub));
    }

    #[test]
    fn test_unknown_symbol_has_no_currency() {
        let data = parse_price_text("£3 £4").unwrap();
        assert_eq!(data.price, 3.0);
        assert_eq!(data.old_price, 4.0);
        assert_eq!(data.currency, None);
    }

    #[test]
    fn test_non_numeric_amount_is_nan() {
        let data = parse_price_text("$abc $10").unwrap();
        assert!(data.price.is_nan());
        assert_eq!(data.old_price, 10.0);
    }

    #[test]
    fn test_single_token_is_malformed() {
        let err = parse_price_text("$19.99").unwrap_err();
        assert!(matches!(err, ExtractError::MalformedPrice(text) if text == "$19.99"));
    }

    #[test]
    fn test_parse_price_node_with_markup() {
        let doc = Html::parse_fragment(
            "<div class=\"price\">\n  $19.99\n  <s>$29.99</s>\n</div>",
        );
        let selector = Selector::parse(".price").unwrap();
        let node = doc.select(&selector).next().unwrap();

        let data = parse_price(node).unwrap();
        assert_eq!(data.price, 19.99);
        assert_eq!(data.old_price, 29.99);
    }
}
