//! Category management screen component
//!
//! Thin iocraft shell around `CategoryScreen`. Keys are mapped to
//! `ScreenAction`s, any resulting `Effect` is run on an async handler, and
//! its follow-ups (the reload after a mutation) are chained there.

#![allow(clippy::clone_on_copy)]

use std::sync::Arc;

use iocraft::prelude::*;

use crate::remote::CategoryGateway;
use crate::tui::components::{
    Footer, Shortcut, confirm_shortcuts, detail_shortcuts, form_shortcuts, list_shortcuts,
    render_toast, search_shortcuts,
};
use crate::tui::theme::theme;
use crate::types::{Capability, Category, Role};

use super::components::{CategoryDetail, CategoryForm, CategoryList, ConfirmDelete, SearchLine};
use super::effects::Effect;
use super::keymap::{KeyMode, key_to_action};
use super::model::{CategoryScreen, Dialog};

/// Rows taken by everything except the list body: header, search line,
/// table border and column header, footer
const CHROME_ROWS: u16 = 6;
const TOAST_ROWS: u16 = 3;

/// Props for the CategoryManager component
#[derive(Default, Props)]
pub struct CategoryManagerProps {
    pub gateway: Option<Arc<dyn CategoryGateway>>,
    pub role: Role,
    /// Where the categories come from, shown in the header
    pub source: String,
}

/// Full-screen category manager
#[component]
pub fn CategoryManager<'a>(
    props: &CategoryManagerProps,
    mut hooks: Hooks,
) -> impl Into<AnyElement<'a>> {
    let (width, height) = hooks.use_terminal_size();
    let mut system = hooks.use_context_mut::<SystemContext>();
    let theme = theme();

    let role = props.role.clone();
    let mut screen = hooks.use_state(move || CategoryScreen::new(role));

    let effect_handler: Handler<Effect> = hooks.use_async_handler({
        let gateway = props.gateway.clone();
        let screen = screen.clone();

        move |effect: Effect| {
            let gateway = gateway.clone();
            let mut screen = screen.clone();

            async move {
                let Some(gateway) = gateway else {
                    tracing::error!("category screen started without a gateway");
                    return;
                };
                let mut next = Some(effect);
                while let Some(effect) = next.take() {
                    let outcome = effect.run(gateway.as_ref()).await;
                    next = screen.write().resolve(outcome);
                }
            }
        }
    });

    // Initial load
    let mut load_started = hooks.use_state(|| false);
    if !load_started.get() {
        load_started.set(true);
        let effect = screen.write().start_load();
        effect_handler.clone()(effect);
    }

    let has_toast = screen.read().toast.is_some();
    let list_height = height
        .saturating_sub(CHROME_ROWS)
        .saturating_sub(if has_toast { TOAST_ROWS } else { 0 }) as usize;
    if screen.read().cursor.height != list_height {
        screen.write().set_list_height(list_height);
    }

    hooks.use_terminal_events({
        let effect_handler = effect_handler.clone();
        move |event| match event {
            TerminalEvent::Key(KeyEvent {
                code,
                kind,
                modifiers,
                ..
            }) if kind != KeyEventKind::Release => {
                let snapshot = screen.read().keymap_snapshot();
                let Some(action) = key_to_action(code, modifiers, &snapshot) else {
                    return;
                };
                let effect = screen.write().dispatch(action);
                if let Some(effect) = effect {
                    effect_handler.clone()(effect);
                }
            }
            _ => {}
        }
    });

    let state = screen.read().clone();
    if state.should_exit {
        system.exit();
    }

    let visible: Vec<Category> = state.visible().into_iter().cloned().collect();
    let total = visible.len();
    let start = state.cursor.offset.min(total);
    let end = (start + list_height.max(1)).min(total);
    let rows = visible[start..end].to_vec();

    let can_edit = state.role.can(Capability::Edit);
    let can_delete = state.role.can(Capability::Delete);
    let shortcuts: Vec<Shortcut> = match state.keymap_snapshot().mode {
        KeyMode::List => list_shortcuts(can_edit, can_delete),
        KeyMode::Search => search_shortcuts(),
        KeyMode::Form => form_shortcuts(),
        KeyMode::Detail => detail_shortcuts(can_edit, can_delete),
        KeyMode::Confirm => confirm_shortcuts(),
    };

    let status = if state.loading {
        "loading...".to_string()
    } else {
        format!("{} of {} categories", total, state.categories.len())
    };

    let modal = match &state.dialog {
        Dialog::Idle => None,
        Dialog::Composing | Dialog::Editing(_) => Some(
            element! {
                CategoryForm(
                    draft: state.draft.clone(),
                    focus: state.form_field,
                    editing: matches!(state.dialog, Dialog::Editing(_)),
                    error: state.form_error.clone(),
                    saving: state.saving,
                )
            }
            .into_any(),
        ),
        Dialog::Viewing(category) => Some(
            element! {
                CategoryDetail(category: Some(category.clone()))
            }
            .into_any(),
        ),
        Dialog::ConfirmingDelete(category) => Some(
            element! {
                ConfirmDelete(category: Some(category.clone()), saving: state.saving)
            }
            .into_any(),
        ),
    };

    element! {
        View(
            width,
            height,
            flex_direction: FlexDirection::Column,
            background_color: theme.background,
        ) {
            // Header
            View(
                width: 100pct,
                height: 1,
                flex_direction: FlexDirection::Row,
                flex_shrink: 0.0,
                justify_content: JustifyContent::SpaceBetween,
                padding_left: 1,
                padding_right: 1,
                background_color: theme.highlight,
            ) {
                Text(
                    content: format!("catman - categories [{}]", props.source),
                    color: theme.text,
                    weight: Weight::Bold,
                )
                Text(
                    content: format!("{status} · role: {}", state.role),
                    color: theme.text,
                )
            }

            SearchLine(query: state.search.query.clone(), focused: state.search.focused)

            CategoryList(
                rows,
                offset: start,
                selected_index: state.cursor.index,
                total,
                loading: state.loading,
                query: state.search.query.clone(),
            )

            Footer(shortcuts)

            #(render_toast(&state.toast))

            #(modal)
        }
    }
}
