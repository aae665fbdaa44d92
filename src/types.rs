use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatmanError, Result};

/// Kind of catalog items a category groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    #[default]
    Goods,
    Service,
}

impl CategoryKind {
    pub const ALL: [CategoryKind; 2] = [CategoryKind::Goods, CategoryKind::Service];

    /// Cycle to the other kind (used by the form's type selector)
    pub fn next(self) -> Self {
        match self {
            CategoryKind::Goods => CategoryKind::Service,
            CategoryKind::Service => CategoryKind::Goods,
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryKind::Goods => write!(f, "goods"),
            CategoryKind::Service => write!(f, "service"),
        }
    }
}

impl FromStr for CategoryKind {
    type Err = CatmanError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "goods" => Ok(CategoryKind::Goods),
            "service" => Ok(CategoryKind::Service),
            _ => Err(CatmanError::InvalidCategoryKind(s.to_string())),
        }
    }
}

pub const VALID_KINDS: &[&str] = &["goods", "service"];

/// A category record as the server returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    #[serde(default)]
    pub products_count: u64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

/// Client-side working copy of the editable category fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDraft {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
}

impl CategoryDraft {
    pub fn new(code: impl Into<String>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            kind,
        }
    }

    /// Check the required fields, reporting the first one that is blank
    pub fn validate(&self) -> Result<()> {
        if self.code.trim().is_empty() {
            return Err(CatmanError::Validation("code is required".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(CatmanError::Validation("name is required".to_string()));
        }
        Ok(())
    }

    /// Every field, as a patch
    pub fn to_patch(&self) -> CategoryPatch {
        CategoryPatch {
            code: Some(self.code.clone()),
            name: Some(self.name.clone()),
            kind: Some(self.kind),
        }
    }
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            code: category.code.clone(),
            name: category.name.clone(),
            kind: category.kind,
        }
    }
}

/// Partial update; omitted fields stay unchanged on the server
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<CategoryKind>,
}

impl CategoryPatch {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none() && self.kind.is_none()
    }

    /// Fields that are present must not be blank
    pub fn validate(&self) -> Result<()> {
        if self.is_empty() {
            return Err(CatmanError::Validation(
                "nothing to update, pass at least one of --code, --name, --type".to_string(),
            ));
        }
        if self.code.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(CatmanError::Validation("code cannot be empty".to_string()));
        }
        if self.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
            return Err(CatmanError::Validation("name cannot be empty".to_string()));
        }
        Ok(())
    }
}

/// A permission checked before state-changing actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Edit,
    Delete,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capability::Edit => write!(f, "edit"),
            Capability::Delete => write!(f, "delete"),
        }
    }
}

/// The acting user's role, supplied from configuration
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    Account,
    Other(String),
    #[default]
    Guest,
}

impl Role {
    pub fn can(&self, capability: Capability) -> bool {
        match capability {
            Capability::Edit | Capability::Delete => {
                matches!(self, Role::Admin | Role::Account)
            }
        }
    }

    /// Fail with a permission error unless the role grants `capability`
    pub fn require(&self, capability: Capability) -> Result<()> {
        if self.can(capability) {
            Ok(())
        } else {
            Err(CatmanError::PermissionDenied {
                role: self.to_string(),
                capability,
            })
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Account => write!(f, "account"),
            Role::Guest => write!(f, "guest"),
            Role::Other(s) => write!(f, "{}", s),
        }
    }
}

/// Only the exact literals `admin` and `account` are privileged; any other
/// spelling is kept verbatim as a read-only role.
impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            "admin" => Role::Admin,
            "account" => Role::Account,
            "guest" | "" => Role::Guest,
            other => Role::Other(other.to_string()),
        }
    }
}
