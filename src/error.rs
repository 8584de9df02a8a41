use thiserror::Error;

/// Errors raised while mapping a document onto a [`crate::PageRecord`]
#[derive(Debug, Error)]
pub enum ExtractError {
    /// A CSS selector failed to compile
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// A node the page layout requires is not present
    #[error("required element `{selector}` not found in {context}")]
    MissingElement {
        selector: String,
        context: &'static str,
    },

    /// A required attribute is absent from an element that was found
    #[error("required attribute `{attribute}` missing on {context}")]
    MissingAttribute {
        attribute: &'static str,
        context: &'static str,
    },

    /// Price text did not contain a current and an old price
    #[error("malformed price text `{0}`, expected `<symbol><price> <symbol><old price>`")]
    MalformedPrice(String),

    /// A properties row without both a key and a value element
    #[error("property row has {0} child elements, expected at least 2")]
    MalformedProperty(usize),
}

/// Errors raised while loading or validating an [`crate::config::ExtractorConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config field `{field}` holds an invalid selector `{selector}`")]
    InvalidSelector {
        field: &'static str,
        selector: String,
    },

    #[error("invalid base url `{url}`: {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}
