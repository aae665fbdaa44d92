//! Modal building blocks
//!
//! `ModalOverlay` centers its children over the whole screen and
//! `ModalFrame` draws the bordered box with a title and a hint line.
//!
//! ```ignore
//! element! {
//!     ModalOverlay {
//!         ModalFrame(title: "Delete category".to_string(), tone: ModalTone::Danger) {
//!             Text(content: "Are you sure?")
//!         }
//!     }
//! }
//! ```

use iocraft::prelude::*;

use crate::tui::theme::theme;

/// Backdrop color shown behind modals
pub const MODAL_BACKDROP: Color = Color::Rgb {
    r: 30,
    g: 30,
    b: 30,
};

/// Props for the ModalOverlay component
#[derive(Default, Props)]
pub struct ModalOverlayProps<'a> {
    pub children: Vec<AnyElement<'a>>,
}

/// Full-screen layer that centers its children on a backdrop
#[component]
pub fn ModalOverlay<'a>(props: &mut ModalOverlayProps<'a>) -> impl Into<AnyElement<'a>> {
    element! {
        View(
            width: 100pct,
            height: 100pct,
            position: Position::Absolute,
            top: 0,
            left: 0,
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            background_color: MODAL_BACKDROP,
        ) {
            #(std::mem::take(&mut props.children))
        }
    }
}

/// Border accent of a modal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModalTone {
    #[default]
    Focused,
    Danger,
    Info,
}

impl ModalTone {
    pub fn color(self) -> Color {
        match self {
            Self::Focused => theme().border_focused,
            Self::Danger => theme().danger,
            Self::Info => Color::Cyan,
        }
    }
}

/// Props for the ModalFrame component
#[derive(Default, Props)]
pub struct ModalFrameProps<'a> {
    pub title: String,
    pub tone: ModalTone,
    /// Width in columns (default 60)
    pub width: Option<u32>,
    /// Dimmed line under the content
    pub footer_text: Option<String>,
    pub children: Vec<AnyElement<'a>>,
}

/// Bordered modal box with a title row and optional footer
#[component]
pub fn ModalFrame<'a>(props: &mut ModalFrameProps<'a>) -> impl Into<AnyElement<'a>> {
    let theme = theme();
    let accent = props.tone.color();
    let footer = props.footer_text.clone();

    element! {
        View(
            width: Size::Length(props.width.unwrap_or(60)),
            background_color: theme.background,
            border_style: BorderStyle::Double,
            border_color: accent,
            padding: 1,
            flex_direction: FlexDirection::Column,
        ) {
            View(
                width: 100pct,
                padding_bottom: 1,
                border_edges: Edges::Bottom,
                border_style: BorderStyle::Single,
                border_color: theme.border,
            ) {
                Text(content: props.title.clone(), color: accent, weight: Weight::Bold)
            }

            View(
                width: 100pct,
                padding_top: 1,
                flex_direction: FlexDirection::Column,
            ) {
                #(std::mem::take(&mut props.children))
            }

            #(footer.map(|text| element! {
                View(
                    width: 100pct,
                    margin_top: 1,
                    border_edges: Edges::Top,
                    border_style: BorderStyle::Single,
                    border_color: theme.border,
                ) {
                    Text(content: text, color: theme.text_dimmed)
                }
            }))
        }
    }
}
