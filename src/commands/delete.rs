use owo_colors::OwoColorize;
use serde_json::json;

use super::CommandOutput;
use super::interactive::confirm;
use crate::cli::OutputOptions;
use crate::error::{CatmanError, Result};
use crate::remote::CategoryGateway;
use crate::types::{Capability, Role};

/// Delete a category, asking first unless `yes` is set
pub async fn cmd_delete(
    gateway: &dyn CategoryGateway,
    role: &Role,
    id: u64,
    yes: bool,
    output: OutputOptions,
) -> Result<()> {
    role.require(Capability::Delete)?;

    if !yes {
        if output.json {
            return Err(CatmanError::Other(
                "refusing to prompt in JSON mode, pass --yes to delete".to_string(),
            ));
        }
        if !confirm(&format!("Delete category {id}"))? {
            return CommandOutput::new(json!({
                "action": "delete_cancelled",
                "id": id,
            }))
            .with_text("Aborted".dimmed().to_string())
            .print(output);
        }
    }

    let ack = gateway.delete(id).await?;

    CommandOutput::new(json!({
        "action": "deleted",
        "id": id,
        "message": ack.message,
    }))
    .with_text(format!("{} category {}", "Deleted".red(), id.to_string().cyan()))
    .print(output)
}
