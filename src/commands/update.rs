use owo_colors::OwoColorize;
use serde_json::json;

use super::{CommandOutput, category_to_json, format_category_line};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::CategoryGateway;
use crate::types::{Capability, CategoryPatch, Role};

/// Update the given fields of a category. Fields left out are unchanged.
pub async fn cmd_update(
    gateway: &dyn CategoryGateway,
    role: &Role,
    id: u64,
    patch: CategoryPatch,
    output: OutputOptions,
) -> Result<()> {
    role.require(Capability::Edit)?;
    patch.validate()?;

    let saved = gateway.update(id, &patch).await?;

    CommandOutput::new(json!({
        "action": "updated",
        "message": saved.message,
        "category": category_to_json(&saved.data),
    }))
    .with_text(format!(
        "{} {}",
        "Updated".green(),
        format_category_line(&saved.data)
    ))
    .print(output)
}
