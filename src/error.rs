use thiserror::Error;

use crate::types::Capability;

#[derive(Error, Debug)]
pub enum CatmanError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("role '{role}' is not allowed to {capability} categories")]
    PermissionDenied {
        role: String,
        capability: Capability,
    },

    #[error("category {0} not found")]
    CategoryNotFound(u64),

    #[error("invalid category type '{0}', expected 'goods' or 'service'")]
    InvalidCategoryKind(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl CatmanError {
    /// True for failures that came back from (or on the way to) the remote API
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            CatmanError::Api { .. } | CatmanError::Http(_) | CatmanError::CategoryNotFound(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CatmanError>;
