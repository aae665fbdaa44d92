//! Rendering pieces of the category screen

use iocraft::prelude::*;

use crate::tui::components::{ModalFrame, ModalOverlay, ModalTone};
use crate::tui::theme::theme;
use crate::types::{Category, CategoryDraft, CategoryKind};

use super::model::FormField;

/// Pad or cut `text` to exactly `width` characters
fn fit(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let cut: String = text.chars().take(width.saturating_sub(1)).collect();
        format!("{cut}…")
    } else {
        format!("{text:<width$}")
    }
}

/// Props for the CategoryList component
#[derive(Default, Props)]
pub struct CategoryListProps {
    /// Rows currently scrolled into view
    pub rows: Vec<Category>,
    /// Index of the first row in `rows` within the filtered list
    pub offset: usize,
    /// Highlighted index within the filtered list
    pub selected_index: usize,
    /// Length of the filtered list
    pub total: usize,
    pub loading: bool,
    pub query: String,
}

/// Table of categories with a highlighted row
#[component]
pub fn CategoryList(props: &CategoryListProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    let placeholder = if props.loading && props.total == 0 {
        Some("Loading categories...".to_string())
    } else if props.total == 0 && !props.query.is_empty() {
        Some(format!("No categories match '{}'", props.query))
    } else if props.total == 0 {
        Some("No categories yet. Press 'n' to add one.".to_string())
    } else {
        None
    };

    element! {
        View(
            width: 100pct,
            flex_grow: 1.0,
            flex_direction: FlexDirection::Column,
            border_style: BorderStyle::Round,
            border_color: theme.border_focused,
        ) {
            View(width: 100pct, padding_left: 1, flex_direction: FlexDirection::Row) {
                Text(
                    content: format!(
                        "  {} {} {} {} {}",
                        fit("ID", 6),
                        fit("CODE", 14),
                        fit("NAME", 30),
                        fit("TYPE", 8),
                        "PRODUCTS"
                    ),
                    color: theme.text_dimmed,
                    weight: Weight::Bold,
                )
            }
            #(placeholder.map(|message| element! {
                View(
                    flex_grow: 1.0,
                    width: 100pct,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                ) {
                    Text(content: message, color: theme.text_dimmed)
                }
            }))
            #(props.rows.iter().enumerate().map(|(i, category)| {
                let is_selected = props.offset + i == props.selected_index;
                let indicator = if is_selected { ">" } else { " " };
                element! {
                    View(
                        width: 100pct,
                        padding_left: 1,
                        flex_direction: FlexDirection::Row,
                        background_color: if is_selected { Some(theme.highlight) } else { None },
                    ) {
                        Text(content: format!("{indicator} "), color: theme.text)
                        Text(content: format!("{} ", fit(&category.id.to_string(), 6)), color: theme.id_color)
                        Text(content: format!("{} ", fit(&category.code, 14)), color: theme.text, weight: Weight::Bold)
                        Text(content: format!("{} ", fit(&category.name, 30)), color: theme.text)
                        Text(content: format!("{} ", fit(&category.kind.to_string(), 8)), color: theme.kind_color(category.kind))
                        Text(content: category.products_count.to_string(), color: theme.text_dimmed)
                    }
                }
            }))
        }
    }
}

/// Props for the SearchLine component
#[derive(Default, Props)]
pub struct SearchLineProps {
    pub query: String,
    pub focused: bool,
}

/// One-line search prompt above the list
#[component]
pub fn SearchLine(props: &SearchLineProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let cursor = if props.focused { "_" } else { "" };
    let (text, color) = if props.query.is_empty() && !props.focused {
        ("press / to search by code or name".to_string(), theme.text_dimmed)
    } else {
        (format!("{}{cursor}", props.query), theme.text)
    };

    element! {
        View(width: 100pct, height: 1, padding_left: 1, flex_direction: FlexDirection::Row) {
            Text(
                content: "/ ",
                color: if props.focused { theme.border_focused } else { theme.text_dimmed },
            )
            Text(content: text, color)
        }
    }
}

/// Props for the CategoryForm component
#[derive(Default, Props)]
pub struct CategoryFormProps {
    pub draft: CategoryDraft,
    pub focus: FormField,
    /// Editing an existing record rather than composing a new one
    pub editing: bool,
    pub error: Option<String>,
    pub saving: bool,
}

/// Add/edit form modal
#[component]
pub fn CategoryForm(props: &CategoryFormProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let title = if props.editing {
        "Edit category"
    } else {
        "New category"
    };

    let input = |label: &str, value: String, which: FormField| {
        let focused = props.focus == which;
        let marker = if focused { "_" } else { "" };
        element! {
            View(flex_direction: FlexDirection::Row, margin_bottom: 1) {
                Text(content: fit(label, 8), color: if focused { theme.border_focused } else { theme.text_dimmed }, weight: Weight::Bold)
                View(
                    flex_grow: 1.0,
                    border_edges: Edges::Bottom,
                    border_style: BorderStyle::Single,
                    border_color: if focused { theme.border_focused } else { theme.border },
                ) {
                    Text(content: format!("{value}{marker}"), color: theme.text)
                }
            }
        }
    };

    let kind_focused = props.focus == FormField::Kind;
    let footer = if props.saving {
        "Saving...".to_string()
    } else {
        "Enter save · Tab next field · Esc cancel".to_string()
    };

    element! {
        ModalOverlay {
            ModalFrame(title: title.to_string(), tone: ModalTone::Focused, footer_text: Some(footer)) {
                #(Some(input("Code", props.draft.code.clone(), FormField::Code)))
                #(Some(input("Name", props.draft.name.clone(), FormField::Name)))
                View(flex_direction: FlexDirection::Row) {
                    Text(content: fit("Type", 8), color: if kind_focused { theme.border_focused } else { theme.text_dimmed }, weight: Weight::Bold)
                    #(CategoryKind::ALL.iter().map(|kind| {
                        let chosen = *kind == props.draft.kind;
                        element! {
                            Text(
                                content: if chosen { format!("({kind}) ") } else { format!(" {kind}  ") },
                                color: if chosen { theme.kind_color(*kind) } else { theme.text_dimmed },
                                weight: if chosen { Weight::Bold } else { Weight::Normal },
                            )
                        }
                    }))
                }
                #(props.error.clone().map(|error| element! {
                    View(margin_top: 1) {
                        Text(content: error, color: theme.danger)
                    }
                }))
            }
        }
    }
}

/// Props for the CategoryDetail component
#[derive(Default, Props)]
pub struct CategoryDetailProps {
    pub category: Option<Category>,
}

/// Read-only detail modal
#[component]
pub fn CategoryDetail(props: &CategoryDetailProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(category) = props.category.clone() else {
        return element!(View).into_any();
    };

    let rows = vec![
        ("ID", category.id.to_string(), theme.id_color),
        ("Code", category.code.clone(), theme.text),
        ("Name", category.name.clone(), theme.text),
        ("Type", category.kind.to_string(), theme.kind_color(category.kind)),
        ("Products", category.products_count.to_string(), theme.text),
        ("Created", display_timestamp(&category.created_at), theme.text_dimmed),
        ("Updated", display_timestamp(&category.updated_at), theme.text_dimmed),
    ];

    element! {
        ModalOverlay {
            ModalFrame(title: format!("Category {}", category.code), tone: ModalTone::Info) {
                #(rows.into_iter().map(|(label, value, color)| element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(content: fit(label, 10), color: theme.text_dimmed, weight: Weight::Bold)
                        Text(content: value, color)
                    }
                }))
            }
        }
    }
    .into_any()
}

/// Props for the ConfirmDelete component
#[derive(Default, Props)]
pub struct ConfirmDeleteProps {
    pub category: Option<Category>,
    pub saving: bool,
}

/// Delete confirmation modal
#[component]
pub fn ConfirmDelete(props: &ConfirmDeleteProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();
    let Some(category) = props.category.clone() else {
        return element!(View).into_any();
    };

    let footer = if props.saving {
        "Deleting..."
    } else {
        "y delete · n cancel"
    };

    element! {
        ModalOverlay {
            ModalFrame(
                title: "Delete category".to_string(),
                tone: ModalTone::Danger,
                width: Some(50u32),
                footer_text: Some(footer.to_string()),
            ) {
                Text(
                    content: format!("Delete {} ({})?", category.code, category.name),
                    color: theme.text,
                )
                #((category.products_count > 0).then(|| element! {
                    Text(
                        content: format!("It still has {} product(s).", category.products_count),
                        color: theme.danger,
                    )
                }))
            }
        }
    }
    .into_any()
}

/// Format a server timestamp for display, falling back to the raw text
pub fn display_timestamp(raw: &str) -> String {
    if raw.is_empty() {
        return "-".to_string();
    }
    match raw.parse::<jiff::Timestamp>() {
        Ok(ts) => ts.strftime("%Y-%m-%d %H:%M UTC").to_string(),
        Err(_) => raw.to_string(),
    }
}
