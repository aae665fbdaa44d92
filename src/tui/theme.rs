//! Theme system for TUI colors and styles
//!
//! Kind colors match the `ls` table output (commands/mod.rs).

use iocraft::prelude::Color;

use crate::types::CategoryKind;

const GREY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Kind colors
    pub kind_goods: Color,
    pub kind_service: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub danger: Color,
    pub id_color: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            kind_goods: Color::Green,
            kind_service: Color::Magenta,

            border: GREY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GREY,
            highlight: Color::Blue,
            danger: Color::Red,
            id_color: Color::Cyan,
        }
    }
}

impl Theme {
    /// Get the color for a category kind
    pub fn kind_color(&self, kind: CategoryKind) -> Color {
        match kind {
            CategoryKind::Goods => self.kind_goods,
            CategoryKind::Service => self.kind_service,
        }
    }
}

/// Global theme instance
pub static THEME: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::default);

/// Get a reference to the global theme
pub fn theme() -> &'static Theme {
    &THEME
}
