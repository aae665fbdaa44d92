//! Interactive terminal interface
//!
//! `categories` is the category management screen; `components` holds the
//! pieces it shares (footer, modals, toasts).

pub mod categories;
pub mod components;
pub mod theme;

pub use categories::{CategoryManager, CategoryManagerProps, CategoryScreen};
pub use theme::Theme;
