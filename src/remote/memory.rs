//! In-process category gateway.
//!
//! Behaves like a well-mannered server: sequential ids, server-side
//! validation, 404s for unknown ids. Every call is counted per verb and a
//! failure can be queued for the next call of a given verb, which makes
//! it the substitute transport for screen and command tests.

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::error::{CatmanError, Result};
use crate::types::{Category, CategoryDraft, CategoryPatch};

use super::{Ack, CategoryGateway, Saved};

/// Gateway verbs, used for call counting and failure injection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayCall {
    List,
    Get,
    Create,
    Update,
    Delete,
}

#[derive(Default)]
struct Inner {
    records: Vec<Category>,
    next_id: u64,
    calls: HashMap<GatewayCall, usize>,
    failures: HashMap<GatewayCall, CatmanError>,
}

#[derive(Default)]
pub struct InMemoryGateway {
    inner: Mutex<Inner>,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Seed with existing records; new ids continue after the highest one
    pub fn with_records(records: Vec<Category>) -> Self {
        let next_id = records.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        Self {
            inner: Mutex::new(Inner {
                records,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// Number of times `call` has been made
    pub fn calls(&self, call: GatewayCall) -> usize {
        self.inner.lock().calls.get(&call).copied().unwrap_or(0)
    }

    /// Total calls across all verbs
    pub fn total_calls(&self) -> usize {
        self.inner.lock().calls.values().sum()
    }

    /// Make the next `call` fail with `error`
    pub fn fail_next(&self, call: GatewayCall, error: CatmanError) {
        self.inner.lock().failures.insert(call, error);
    }

    /// Snapshot of the stored records
    pub fn records(&self) -> Vec<Category> {
        self.inner.lock().records.clone()
    }

    /// Count the call and return any queued failure for it
    fn begin(&self, call: GatewayCall) -> Result<()> {
        let mut inner = self.inner.lock();
        *inner.calls.entry(call).or_default() += 1;
        match inner.failures.remove(&call) {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

fn now() -> String {
    jiff::Timestamp::now().to_string()
}

fn unprocessable(message: &str) -> CatmanError {
    CatmanError::Api {
        status: 422,
        message: message.to_string(),
    }
}

#[async_trait]
impl CategoryGateway for InMemoryGateway {
    async fn list_all(&self) -> Result<Vec<Category>> {
        self.begin(GatewayCall::List)?;
        Ok(self.records())
    }

    async fn get_by_id(&self, id: u64) -> Result<Category> {
        self.begin(GatewayCall::Get)?;
        self.inner
            .lock()
            .records
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(CatmanError::CategoryNotFound(id))
    }

    async fn create(&self, draft: &CategoryDraft) -> Result<Saved> {
        self.begin(GatewayCall::Create)?;
        draft
            .validate()
            .map_err(|e| unprocessable(&e.to_string()))?;

        let mut inner = self.inner.lock();
        if inner.records.iter().any(|c| c.code == draft.code) {
            return Err(unprocessable("The code has already been taken."));
        }

        let id = inner.next_id;
        inner.next_id += 1;
        let timestamp = now();
        let category = Category {
            id,
            code: draft.code.clone(),
            name: draft.name.clone(),
            kind: draft.kind,
            products_count: 0,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };
        inner.records.push(category.clone());

        Ok(Saved {
            message: "Category created successfully".to_string(),
            data: category,
        })
    }

    async fn update(&self, id: u64, patch: &CategoryPatch) -> Result<Saved> {
        self.begin(GatewayCall::Update)?;

        let mut inner = self.inner.lock();
        if !inner.records.iter().any(|c| c.id == id) {
            return Err(CatmanError::CategoryNotFound(id));
        }

        // Reject the whole patch before touching the record
        if patch.code.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(unprocessable("The code field is required."));
        }
        if patch.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(unprocessable("The name field is required."));
        }
        if let Some(code) = &patch.code
            && inner.records.iter().any(|c| c.id != id && &c.code == code)
        {
            return Err(unprocessable("The code has already been taken."));
        }

        let category = inner
            .records
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(CatmanError::CategoryNotFound(id))?;
        if let Some(code) = &patch.code {
            category.code = code.clone();
        }
        if let Some(name) = &patch.name {
            category.name = name.clone();
        }
        if let Some(kind) = patch.kind {
            category.kind = kind;
        }
        category.updated_at = now();

        Ok(Saved {
            message: "Category updated successfully".to_string(),
            data: category.clone(),
        })
    }

    async fn delete(&self, id: u64) -> Result<Ack> {
        self.begin(GatewayCall::Delete)?;

        let mut inner = self.inner.lock();
        let before = inner.records.len();
        inner.records.retain(|c| c.id != id);
        if inner.records.len() == before {
            return Err(CatmanError::CategoryNotFound(id));
        }

        Ok(Ack {
            message: "Category deleted successfully".to_string(),
        })
    }
}
