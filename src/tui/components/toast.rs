//! Toast notifications
//!
//! One-line messages shown above the footer after an operation finishes.

use iocraft::prelude::*;

/// Severity level for toast notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Error,
    Success,
}

/// A toast notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Error)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, ToastLevel::Success)
    }

    pub fn is_error(&self) -> bool {
        self.level == ToastLevel::Error
    }

    /// Get the color associated with this toast's level
    pub fn color(&self) -> Color {
        match self.level {
            ToastLevel::Error => Color::Red,
            ToastLevel::Success => Color::Green,
        }
    }
}

/// Render a toast bar, or nothing when there is no toast
pub fn render_toast(toast: &Option<Toast>) -> Option<AnyElement<'static>> {
    toast.as_ref().map(|t| {
        let hint = if t.is_error() { "  (Esc to dismiss)" } else { "" };
        element! {
            View(
                width: 100pct,
                height: 3,
                flex_shrink: 0.0,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                background_color: Color::Black,
                border_edges: Edges::Top,
                border_style: BorderStyle::Single,
                border_color: t.color(),
            ) {
                Text(content: format!("{}{}", t.message, hint), color: t.color())
            }
        }
        .into_any()
    })
}
