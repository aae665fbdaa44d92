use owo_colors::OwoColorize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::{CommandOutput, category_to_json};
use crate::cli::OutputOptions;
use crate::error::Result;
use crate::remote::CategoryGateway;
use crate::tui::categories::filter_categories;

/// A row in the category table
#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Products")]
    products: u64,
}

/// List categories, optionally filtered by a search term
pub async fn cmd_ls(
    gateway: &dyn CategoryGateway,
    search: Option<&str>,
    output: OutputOptions,
) -> Result<()> {
    let categories = gateway.list_all().await?;
    let matched = filter_categories(&categories, search.unwrap_or(""));

    let json_output = json!(matched.iter().map(|c| category_to_json(c)).collect::<Vec<_>>());

    let text_output = if matched.is_empty() {
        match search {
            Some(term) if !term.is_empty() => {
                format!("No categories match '{term}'").dimmed().to_string()
            }
            _ => "No categories".dimmed().to_string(),
        }
    } else {
        let rows: Vec<CategoryRow> = matched
            .iter()
            .map(|c| CategoryRow {
                id: c.id,
                code: c.code.clone(),
                name: c.name.clone(),
                kind: c.kind.to_string(),
                products: c.products_count,
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        format!(
            "{table}\n{}",
            format!("{} of {} categories", matched.len(), categories.len()).dimmed()
        )
    };

    CommandOutput::new(json_output)
        .with_text(text_output)
        .print(output)
}
