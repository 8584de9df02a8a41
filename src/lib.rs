//! Structured data extraction for a fixed e-commerce product page layout.
//!
//! [`PageExtractor`] walks an already parsed [`scraper::Html`] document and maps
//! the head metadata, the product block, suggested products and reviews onto a
//! [`PageRecord`].

pub mod config;
pub mod error;
pub mod extractors;
pub mod results;
pub mod utils;

pub use error::{ConfigError, ExtractError};
pub use results::{
    Currency, ImageRef, MetaRecord, PageRecord, ProductRecord, ReviewAuthor, ReviewRecord,
    SuggestedItem, TagKind,
};

use config::ExtractorConfig;
use scraper::Html;
use std::path::Path;
use url::Url;

/// Extract a page using the default layout configuration
pub fn extract_page(document: &Html) -> Result<PageRecord, ExtractError> {
    PageExtractor::new().extract(document)
}

/// Builder and entry point for page extraction
///
/// Holds only immutable configuration, so one extractor can serve any number
/// of documents.
#[derive(Debug, Clone, Default)]
pub struct PageExtractor {
    config: ExtractorConfig,
    base_url: Option<Url>,
}

impl PageExtractor {
    /// Create an extractor for the default page layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a configuration after validating it
    ///
    /// A config without `base_url` keeps the base URL already set on the builder.
    pub fn with_config(mut self, mut config: ExtractorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        match config.parsed_base_url()? {
            Some(base_url) => self.base_url = Some(base_url),
            None => config.base_url = self.config.base_url.take(),
        }
        self.config = config;
        Ok(self)
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config = ExtractorConfig::from_file(path)?;
        self.with_config(config)
    }

    /// Load configuration from a JSON string
    pub fn with_config_str(self, json: &str) -> Result<Self, ConfigError> {
        let config = ExtractorConfig::from_json(json)?;
        self.with_config(config)
    }

    /// Resolve image sources against `base_url`
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.config.base_url = Some(base_url.to_string());
        self.base_url = Some(base_url);
        self
    }

    /// Override the selector locating the product node
    pub fn with_product_selector(mut self, selector: impl Into<String>) -> Self {
        self.config.product_selector = selector.into();
        self
    }

    /// The active configuration
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Parse `html` and extract it
    pub fn extract_str(&self, html: &str) -> Result<PageRecord, ExtractError> {
        let document = Html::parse_document(html);
        self.extract(&document)
    }

    /// Extract every section of the page
    ///
    /// Fails as a whole on the first required element that is missing.
    pub fn extract(&self, document: &Html) -> Result<PageRecord, ExtractError> {
        let root = document.root_element();
        let base = self.base_url.as_ref();

        let head = extractors::select_one(root, "head", "document")?;
        let meta = extractors::extract_meta(head, root)?;

        let product_node = extractors::select_one(root, &self.config.product_selector, "document")?;
        let product = extractors::extract_product(product_node, base)?;

        let suggested_cards = extractors::select_all(root, &self.config.suggested_selector)?;
        let suggested = extractors::extract_suggested(&suggested_cards, base)?;

        let review_cards = extractors::select_all(root, &self.config.reviews_selector)?;
        let reviews = extractors::extract_reviews(&review_cards, base)?;

        ::log::debug!(
            "Extracted product {} with {} suggested items and {} reviews",
            product.id,
            suggested.len(),
            reviews.len()
        );

        Ok(PageRecord {
            meta,
            product,
            suggested,
            reviews,
        })
    }
}
