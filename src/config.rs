use crate::error::ConfigError;
use scraper::Selector;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Locators for the page regions the extractor reads, plus URL resolution settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Selector for the primary product node
    #[serde(default = "default_product_selector")]
    pub product_selector: String,

    /// Selector for each suggested product card
    #[serde(default = "default_suggested_selector")]
    pub suggested_selector: String,

    /// Selector for each review card
    #[serde(default = "default_reviews_selector")]
    pub reviews_selector: String,

    /// Base URL image `src` attributes are resolved against (kept verbatim when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every selector compiles and the base URL, if any, parses
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, selector) in [
            ("product_selector", &self.product_selector),
            ("suggested_selector", &self.suggested_selector),
            ("reviews_selector", &self.reviews_selector),
        ] {
            if Selector::parse(selector).is_err() {
                return Err(ConfigError::InvalidSelector {
                    field,
                    selector: selector.clone(),
                });
            }
        }

        self.parsed_base_url()?;
        Ok(())
    }

    /// The configured base URL, parsed
    pub fn parsed_base_url(&self) -> Result<Option<Url>, ConfigError> {
        self.base_url
            .as_deref()
            .map(|raw| {
                Url::parse(raw).map_err(|source| ConfigError::InvalidBaseUrl {
                    url: raw.to_string(),
                    source,
                })
            })
            .transpose()
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            product_selector: default_product_selector(),
            suggested_selector: default_suggested_selector(),
            reviews_selector: default_reviews_selector(),
            base_url: None,
        }
    }
}

fn default_product_selector() -> String {
    r#"[data-id="product1"]"#.to_string()
}

fn default_suggested_selector() -> String {
    ".suggested article".to_string()
}

fn default_reviews_selector() -> String {
    ".reviews article".to_string()
}
