//! Configuration commands.
//!
//! - `config show`: Display current configuration
//! - `config get`: Read one value (the token is masked)
//! - `config set`: Write one value

use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use crate::cli::OutputOptions;
use crate::config::Config;
use crate::error::{CatmanError, Result};

const VALID_KEYS: &str = "api.base_url, api.token, api.timeout_secs, role";

/// Reject unknown keys, suggesting dot notation for underscore typos
fn validate_config_key(key: &str) -> Result<&str> {
    match key {
        "api.base_url" | "api.token" | "api.timeout_secs" | "role" => Ok(key),
        _ if key.starts_with("api_") => {
            let dot_version = key.replacen('_', ".", 1);
            Err(CatmanError::Config(format!(
                "invalid config key '{key}'. Use dot notation: '{dot_version}'"
            )))
        }
        _ => Err(unknown_key(key)),
    }
}

fn unknown_key(key: &str) -> CatmanError {
    CatmanError::Config(format!(
        "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
    ))
}

/// Mask a sensitive value by showing only the first 2 and last 2 characters
fn mask_sensitive_value(value: &str) -> String {
    let char_count = value.chars().count();
    if char_count > 4 {
        let first: String = value.chars().take(2).collect();
        let last: String = value.chars().skip(char_count - 2).collect();
        format!("{first}...{last}")
    } else {
        "****".to_string()
    }
}

/// Show current configuration (environment overrides applied)
pub fn cmd_config_show(output: OutputOptions) -> Result<()> {
    let config = Config::load()?;
    let path = Config::config_path()?;

    let token = config.api_token();
    let timeout = config.api.timeout_secs;

    let json_output = json!({
        "api": {
            "base_url": config.base_url(),
            "token_configured": token.is_some(),
            "timeout_secs": timeout,
        },
        "role": config.role().to_string(),
        "config_file": path.to_string_lossy(),
    });

    let token_status = match &token {
        Some(t) => mask_sensitive_value(t).green().to_string(),
        None => "not configured".dimmed().to_string(),
    };
    let timeout_status = match timeout {
        Some(secs) => format!("{secs}s"),
        None => "transport default".dimmed().to_string(),
    };

    let mut text_output = String::new();
    text_output.push_str(&format!("{}\n\n", "Configuration:".cyan().bold()));
    text_output.push_str(&format!("{}:\n", "api".cyan()));
    text_output.push_str(&format!("  base_url: {}\n", config.base_url()));
    text_output.push_str(&format!("  token: {token_status}\n"));
    text_output.push_str(&format!("  timeout_secs: {timeout_status}\n\n"));
    text_output.push_str(&format!("{}: {}\n\n", "role".cyan(), config.role()));
    text_output.push_str(&format!(
        "{}",
        format!("Config file: {}", path.display()).dimmed()
    ));

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;

    // The token is never echoed back
    let shown: serde_json::Value = match key {
        "api.base_url" => {
            config.set_base_url(value.to_string())?;
            json!(value)
        }
        "api.token" => {
            config.set_api_token(value.to_string());
            json!(mask_sensitive_value(value))
        }
        "api.timeout_secs" => {
            let secs = match value {
                "" | "none" => None,
                _ => Some(value.parse::<u64>().map_err(|_| {
                    CatmanError::Config(format!(
                        "invalid value '{value}' for api.timeout_secs. Expected a whole number of seconds or 'none'"
                    ))
                })?),
            };
            config.set_timeout_secs(secs);
            json!(secs)
        }
        "role" => {
            config.set_role(value.to_string());
            json!(value)
        }
        _ => return Err(unknown_key(key)),
    };
    config.save()?;

    let text = match &shown {
        serde_json::Value::Null => format!("Set {} to none", key.cyan()),
        serde_json::Value::String(s) => format!("Set {} to {s}", key.cyan()),
        other => format!("Set {} to {other}", key.cyan()),
    };

    CommandOutput::new(json!({
        "action": "config_set",
        "key": key,
        "value": shown,
        "success": true,
    }))
    .with_text(text)
    .print(output)
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output: OutputOptions) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;

    let (json_output, text_output) = match key {
        "api.base_url" => {
            let value = config.base_url();
            (json!({ "key": key, "value": value }), value)
        }
        "api.token" => {
            let Some(token) = config.api_token() else {
                return Err(CatmanError::Config("api.token not set".to_string()));
            };
            let masked = mask_sensitive_value(&token);
            let json = json!({
                "key": key,
                "value": masked,
                "configured": true,
                "masked": true,
            });
            let text = format!("{masked} (masked - showing first 2 and last 2 characters)");
            (json, text)
        }
        "api.timeout_secs" => {
            let Some(secs) = config.api.timeout_secs else {
                return Err(CatmanError::Config("api.timeout_secs not set".to_string()));
            };
            (json!({ "key": key, "value": secs }), secs.to_string())
        }
        "role" => {
            let role = config.role().to_string();
            (json!({ "key": key, "value": role }), role)
        }
        _ => return Err(unknown_key(key)),
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
