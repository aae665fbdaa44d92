//! HTTP implementation of the category gateway using reqwest.
//!
//! # Security Note - Logging
//!
//! The bearer token is marked as a sensitive header value, so reqwest and
//! hyper redact it from their debug output. The token itself is held in a
//! `SecretString` and is never passed to `tracing`.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::{Client, RequestBuilder, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{CatmanError, Result};
use crate::types::{Category, CategoryDraft, CategoryPatch};

use super::error::ApiError;
use super::{Ack, CategoryGateway, MaybeWrapped, Saved};

const CATEGORIES_PATH: &str = "categories";

/// Category gateway backed by the REST API
pub struct HttpGateway {
    client: Client,
    base_url: Url,
    token: Option<SecretString>,
}

impl fmt::Debug for HttpGateway {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpGateway")
            .field("base_url", &self.base_url.as_str())
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl HttpGateway {
    /// Create a gateway for `base_url`, e.g. `https://shop.example.com/api`
    pub fn new(base_url: &str, token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let token = token.map(SecretString::from);

        let mut headers = HeaderMap::new();
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(token) = &token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|_| {
                    CatmanError::Config("API token contains invalid characters".to_string())
                })?;
            value.set_sensitive(true);
            headers.insert(header::AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// Create a gateway from configuration (env overrides included)
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(
            &config.base_url(),
            config.api_token(),
            config.api.timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// URL of the collection resource
    pub fn collection_url(&self) -> Result<Url> {
        Ok(self.base_url.join(CATEGORIES_PATH)?)
    }

    /// URL of a single category
    pub fn record_url(&self, id: u64) -> Result<Url> {
        Ok(self.base_url.join(&format!("{CATEGORIES_PATH}/{id}"))?)
    }

    /// Send a request, turning non-success statuses into errors
    async fn send(
        &self,
        request: RequestBuilder,
        method: &'static str,
        url: &Url,
        category_id: Option<u64>,
    ) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("{method} {} failed: {e}", url.path());
            CatmanError::Http(e)
        })?;

        let status = response.status();
        tracing::debug!("{method} {} -> {}", url.path(), status.as_u16());

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_body(status, &body, category_id);
        tracing::warn!("{method} {} rejected: {error}", url.path());
        Err(error.into())
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        Ok(response.json::<T>().await?)
    }
}

/// Parse the base URL and make sure it ends with a slash so joins append
fn normalize_base_url(base_url: &str) -> Result<Url> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(CatmanError::Config("API base URL is empty".to_string()));
    }
    Ok(Url::parse(&format!("{trimmed}/"))?)
}

#[async_trait]
impl CategoryGateway for HttpGateway {
    async fn list_all(&self) -> Result<Vec<Category>> {
        let url = self.collection_url()?;
        let response = self
            .send(self.client.get(url.clone()), "GET", &url, None)
            .await?;
        let body: MaybeWrapped<Vec<Category>> = Self::decode(response).await?;
        Ok(body.into_inner())
    }

    async fn get_by_id(&self, id: u64) -> Result<Category> {
        let url = self.record_url(id)?;
        let response = self
            .send(self.client.get(url.clone()), "GET", &url, Some(id))
            .await?;
        let body: MaybeWrapped<Category> = Self::decode(response).await?;
        Ok(body.into_inner())
    }

    async fn create(&self, draft: &CategoryDraft) -> Result<Saved> {
        let url = self.collection_url()?;
        let request = self.client.post(url.clone()).json(draft);
        let response = self.send(request, "POST", &url, None).await?;
        Self::decode(response).await
    }

    async fn update(&self, id: u64, patch: &CategoryPatch) -> Result<Saved> {
        let url = self.record_url(id)?;
        let request = self.client.put(url.clone()).json(patch);
        let response = self.send(request, "PUT", &url, Some(id)).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: u64) -> Result<Ack> {
        let url = self.record_url(id)?;
        let response = self
            .send(self.client.delete(url.clone()), "DELETE", &url, Some(id))
            .await?;
        // 204 No Content carries no message
        let body = response.text().await?;
        if body.trim().is_empty() {
            return Ok(Ack::default());
        }
        Ok(serde_json::from_str(&body)?)
    }
}
