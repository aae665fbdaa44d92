//! Application configuration.
//!
//! Configuration is stored as YAML (`config.yaml` in the platform config
//! directory, or wherever `CATMAN_CONFIG` points) and includes:
//! - The category API base URL and optional bearer token
//! - An optional client timeout
//! - The acting role used for capability checks
//!
//! `CATMAN_API_URL`, `CATMAN_API_TOKEN` and `CATMAN_ROLE` override the file.

use std::env;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CatmanError, Result};
use crate::types::Role;

pub const CONFIG_ENV: &str = "CATMAN_CONFIG";
pub const API_URL_ENV: &str = "CATMAN_API_URL";
pub const API_TOKEN_ENV: &str = "CATMAN_API_TOKEN";
pub const ROLE_ENV: &str = "CATMAN_ROLE";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Category API connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Role of the acting user (admin and account may edit and delete)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// Category API connection settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Client-side timeout in seconds; unset means transport defaults
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            timeout_secs: None,
        }
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV)
            && !path.is_empty()
        {
            return Ok(PathBuf::from(path));
        }

        let dirs = directories::ProjectDirs::from("com", "catman", "catman").ok_or_else(|| {
            CatmanError::Config("could not determine a configuration directory".to_string())
        })?;
        Ok(dirs.config_dir().join("config.yaml"))
    }

    /// Load configuration from file, or return default if not found
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: Config = serde_yaml_ng::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    /// Base URL from environment variable or config file
    pub fn base_url(&self) -> String {
        if let Ok(url) = env::var(API_URL_ENV)
            && !url.is_empty()
        {
            return url;
        }
        self.api.base_url.clone()
    }

    /// API token from environment variable or config file
    pub fn api_token(&self) -> Option<String> {
        if let Ok(token) = env::var(API_TOKEN_ENV)
            && !token.is_empty()
        {
            return Some(token);
        }
        self.api.token.clone()
    }

    /// Acting role from environment variable or config file
    pub fn role(&self) -> Role {
        if let Ok(role) = env::var(ROLE_ENV)
            && !role.is_empty()
        {
            return Role::from(role.as_str());
        }
        self.role
            .as_deref()
            .map(Role::from)
            .unwrap_or_default()
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        url::Url::parse(&url)?;
        self.api.base_url = url;
        Ok(())
    }

    pub fn set_api_token(&mut self, token: String) {
        self.api.token = Some(token);
    }

    pub fn set_timeout_secs(&mut self, secs: Option<u64>) {
        self.api.timeout_secs = secs;
    }

    pub fn set_role(&mut self, role: String) {
        self.role = Some(role);
    }
}
