//! Keyboard shortcuts bar component
//!
//! Displays the keys available in the current mode at the bottom of the screen.

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// A single keyboard shortcut entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    /// The key or key combination (e.g., "q", "C-s", "Tab")
    pub key: String,
    /// Description of the action
    pub action: String,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// Props for the Footer component
#[derive(Default, Props)]
pub struct FooterProps {
    pub shortcuts: Vec<Shortcut>,
}

/// Keyboard shortcuts bar at the bottom of the screen
#[component]
pub fn Footer(props: &FooterProps) -> impl Into<AnyElement<'static>> {
    let theme = theme();

    element! {
        View(
            width: 100pct,
            min_height: 1,
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::Wrap,
            flex_shrink: 0.0,
            padding_left: 1,
            padding_right: 1,
            column_gap: 2,
            background_color: theme.border,
        ) {
            #(props.shortcuts.iter().map(|shortcut| {
                element! {
                    View(flex_direction: FlexDirection::Row) {
                        Text(
                            content: format!("[{}]", shortcut.key),
                            color: theme.highlight,
                            weight: Weight::Bold,
                        )
                        Text(
                            content: format!(" {}", shortcut.action),
                            color: theme.text,
                        )
                    }
                }
            }))
        }
    }
}

fn shortcuts(pairs: &[(&str, &str)]) -> Vec<Shortcut> {
    pairs.iter().map(|(k, a)| Shortcut::new(*k, *a)).collect()
}

/// Shortcuts for the category list. Edit and delete are only offered to
/// roles that can use them.
pub fn list_shortcuts(can_edit: bool, can_delete: bool) -> Vec<Shortcut> {
    let mut list = shortcuts(&[
        ("j/k", "Up/Down"),
        ("g/G", "Top/Bottom"),
        ("/", "Search"),
        ("n", "New"),
        ("Enter", "View"),
    ]);
    if can_edit {
        list.push(Shortcut::new("e", "Edit"));
    }
    if can_delete {
        list.push(Shortcut::new("d", "Delete"));
    }
    list.extend(shortcuts(&[("r", "Refresh"), ("q", "Quit")]));
    list
}

/// Shortcuts while typing in the search box
pub fn search_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[
        ("Enter", "Apply Search"),
        ("Tab", "Exit Search"),
        ("Esc", "Clear & Exit"),
        ("C-q", "Quit"),
    ])
}

/// Shortcuts for the add/edit form
pub fn form_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[
        ("Tab", "Next Field"),
        ("S-Tab", "Prev Field"),
        ("Space", "Cycle Type"),
        ("Enter", "Save"),
        ("Esc", "Cancel"),
    ])
}

/// Shortcuts for the detail view
pub fn detail_shortcuts(can_edit: bool, can_delete: bool) -> Vec<Shortcut> {
    let mut list = vec![Shortcut::new("Esc", "Close")];
    if can_edit {
        list.push(Shortcut::new("e", "Edit"));
    }
    if can_delete {
        list.push(Shortcut::new("d", "Delete"));
    }
    list
}

/// Shortcuts for the delete confirmation
pub fn confirm_shortcuts() -> Vec<Shortcut> {
    shortcuts(&[("y", "Delete"), ("n/Esc", "Cancel")])
}
