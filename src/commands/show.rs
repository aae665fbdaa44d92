use owo_colors::OwoColorize;

use super::{CommandOutput, category_to_json, format_kind};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::CategoryGateway;
use crate::types::Category;

/// Render a server timestamp in local-independent form, or verbatim if it
/// does not parse
fn format_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    raw.parse::<jiff::Timestamp>()
        .map(|ts| ts.strftime("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

fn render(category: &Category) -> String {
    let field = |label: &str, value: String| format!("{:<10} {}", format!("{label}:").cyan(), value);
    [
        field("id", category.id.to_string()),
        field("code", category.code.bold().to_string()),
        field("name", category.name.clone()),
        field("type", format_kind(category.kind)),
        field("products", category.products_count.to_string()),
        field("created", format_timestamp(&category.created_at)),
        field("updated", format_timestamp(&category.updated_at)),
    ]
    .join("\n")
}

/// Show a single category
pub async fn cmd_show(gateway: &dyn CategoryGateway, id: u64, output: OutputOptions) -> Result<()> {
    let category = gateway.get_by_id(id).await?;

    CommandOutput::new(category_to_json(&category))
        .with_text(render(&category))
        .print(output)
}
