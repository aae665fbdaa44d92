//! Remote category gateway.
//!
//! This module defines the `CategoryGateway` contract for the `/categories`
//! REST resource along with its HTTP implementation and an in-memory fake.
//! Gateways are stateless per call: no retries, no caching, no pagination.

pub mod error;
pub mod http;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Category, CategoryDraft, CategoryPatch};

pub use http::HttpGateway;
pub use memory::{GatewayCall, InMemoryGateway};

/// Response to a create or update: a confirmation message plus the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Saved {
    #[serde(default)]
    pub message: String,
    pub data: Category,
}

/// Response to a delete
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub message: String,
}

/// Body that some servers wrap in `{"data": ...}` and some send bare
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum MaybeWrapped<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> MaybeWrapped<T> {
    pub(crate) fn into_inner(self) -> T {
        match self {
            MaybeWrapped::Wrapped { data } => data,
            MaybeWrapped::Bare(value) => value,
        }
    }
}

/// Common interface for category backends
#[async_trait]
pub trait CategoryGateway: Send + Sync {
    /// Fetch every category, in server order
    async fn list_all(&self) -> Result<Vec<Category>>;

    /// Fetch a single category
    async fn get_by_id(&self, id: u64) -> Result<Category>;

    /// Create a category from a draft
    async fn create(&self, draft: &CategoryDraft) -> Result<Saved>;

    /// Apply a partial update
    async fn update(&self, id: u64, patch: &CategoryPatch) -> Result<Saved>;

    /// Remove a category; deleting a missing id is an error
    async fn delete(&self, id: u64) -> Result<Ack>;
}
