use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Everything extracted from one product page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub meta: MetaRecord,
    pub product: ProductRecord,
    pub suggested: Vec<SuggestedItem>,
    pub reviews: Vec<ReviewRecord>,
}

/// Document head metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MetaRecord {
    /// Page title, shortened to the part before the first ` — `
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<Vec<String>>,

    /// `lang` of the root element, `null` when empty or missing
    pub language: Option<String>,

    /// Open Graph properties keyed without their `og:` prefix, in document order
    pub opengraph: Map<String, Value>,
}

/// The primary product on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub name: String,
    pub is_liked: bool,

    /// Tag values grouped by category (`category`, `label`, `discount`)
    pub tags: Map<String, Value>,

    pub price: f64,
    pub old_price: f64,
    pub discount: f64,
    pub discount_percent: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    pub properties: Map<String, Value>,

    /// Inner HTML of the description block
    pub description: String,

    pub images: Vec<ImageRef>,
}

impl ProductRecord {
    /// Tag values recorded under `kind`, in document order
    pub fn tags_of(&self, kind: TagKind) -> Vec<&str> {
        self.tags
            .get(kind.as_str())
            .and_then(Value::as_array)
            .map(|values| values.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Value of a named product property
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }
}

/// One entry of the product gallery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub preview: String,

    /// Full resolution source from `data-src`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<String>,

    pub alt: String,
}

/// Summary of a suggested product card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedItem {
    pub name: String,
    pub description: String,
    pub image: String,

    /// Price text with the currency symbol stripped
    pub price: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

/// A customer review
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Number of filled stars
    pub rating: usize,
    pub author: ReviewAuthor,
    pub title: String,
    pub description: String,

    /// Review date with `/` separators replaced by `.`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewAuthor {
    pub avatar: String,
    pub name: String,
}

/// Currencies recognised by their leading symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Usd,
    Eur,
}

impl Currency {
    /// Map a currency symbol to its code
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '₽' => Some(Currency::Rub),
            '$' => Some(Currency::Usd),
            '€' => Some(Currency::Eur),
            _ => None,
        }
    }

    /// ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
        }
    }
}

/// Semantic category of a product tag, derived from its colour marker class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Category,
    Label,
    Discount,
}

impl TagKind {
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "green" => Some(TagKind::Category),
            "blue" => Some(TagKind::Label),
            "red" => Some(TagKind::Discount),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TagKind::Category => "category",
            TagKind::Label => "label",
            TagKind::Discount => "discount",
        }
    }
}
