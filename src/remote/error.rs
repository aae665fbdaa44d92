//! Mapping of non-success HTTP responses to `CatmanError`.

use std::fmt;

use reqwest::StatusCode;
use serde::Deserialize;

use crate::error::CatmanError;

/// Error body shape returned by the category API
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// A failed API response, before it is turned into a `CatmanError`
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status code
    pub status: StatusCode,
    /// Human-readable error message
    pub message: String,
    /// Category the request targeted, if any
    pub category_id: Option<u64>,
}

impl ApiError {
    /// Build from a status and the raw response body.
    ///
    /// Uses the body's `message` field when present, otherwise the
    /// canonical reason phrase for the status.
    pub fn from_body(status: StatusCode, body: &str, category_id: Option<u64>) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.message)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        Self {
            status,
            message,
            category_id,
        }
    }

    /// Convert this error to a `CatmanError`
    pub fn into_catman_error(self) -> CatmanError {
        if self.status == StatusCode::NOT_FOUND
            && let Some(id) = self.category_id
        {
            return CatmanError::CategoryNotFound(id);
        }

        CatmanError::Api {
            status: self.status.as_u16(),
            message: self.message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl From<ApiError> for CatmanError {
    fn from(error: ApiError) -> Self {
        error.into_catman_error()
    }
}
