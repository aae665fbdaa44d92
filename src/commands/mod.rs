mod browse;
mod config;
mod create;
mod delete;
pub mod interactive;
mod ls;
mod show;
mod update;

pub use browse::cmd_browse;
pub use config::{cmd_config_get, cmd_config_set, cmd_config_show};
pub use create::cmd_create;
pub use delete::cmd_delete;
pub use ls::cmd_ls;
pub use show::cmd_show;
pub use update::cmd_update;

use owo_colors::OwoColorize;
use serde_json::{Value, json};

use crate::cli::OutputOptions;
use crate::error::Result;
use crate::types::{Category, CategoryKind};

/// Result of a command, printed as JSON or text depending on `--json`
pub struct CommandOutput {
    json: Value,
    text: Option<String>,
}

impl CommandOutput {
    pub fn new(json: Value) -> Self {
        Self { json, text: None }
    }

    /// Human-readable form; without it the JSON is printed either way
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn print(self, output: OutputOptions) -> Result<()> {
        match self.text {
            Some(text) if !output.json => println!("{text}"),
            _ => println!("{}", serde_json::to_string_pretty(&self.json)?),
        }
        Ok(())
    }
}

/// JSON shape of a category in command output
pub fn category_to_json(category: &Category) -> Value {
    json!({
        "id": category.id,
        "code": category.code,
        "name": category.name,
        "type": category.kind.to_string(),
        "products_count": category.products_count,
        "created_at": category.created_at,
        "updated_at": category.updated_at,
    })
}

/// Colored category kind, matching the TUI theme
pub fn format_kind(kind: CategoryKind) -> String {
    match kind {
        CategoryKind::Goods => kind.to_string().green().to_string(),
        CategoryKind::Service => kind.to_string().magenta().to_string(),
    }
}

/// Single-line summary: `[id] CODE - Name (kind)`
pub fn format_category_line(category: &Category) -> String {
    format!(
        "{} {} - {} ({})",
        format!("[{}]", category.id).cyan(),
        category.code.bold(),
        category.name,
        format_kind(category.kind)
    )
}
