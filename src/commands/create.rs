use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, category_to_json, format_category_line};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::CategoryGateway;
use crate::types::CategoryDraft;

/// Create a category after checking the required fields locally
pub async fn cmd_create(
    gateway: &dyn CategoryGateway,
    draft: CategoryDraft,
    output: OutputOptions,
) -> Result<()> {
    draft.validate()?;

    let saved = gateway.create(&draft).await?;
    tracing::debug!("created category {}", saved.data.id);

    CommandOutput::new(json!({
        "action": "created",
        "message": saved.message,
        "category": category_to_json(&saved.data),
    }))
    .with_text(format!(
        "{} {}",
        "Created".green(),
        format_category_line(&saved.data)
    ))
    .print(output)
}
