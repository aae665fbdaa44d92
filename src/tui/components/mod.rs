//! Shared TUI components

pub mod footer;
pub mod modal;
pub mod toast;

pub use footer::{
    Footer, FooterProps, Shortcut, confirm_shortcuts, detail_shortcuts, form_shortcuts,
    list_shortcuts, search_shortcuts,
};
pub use modal::{ModalFrame, ModalFrameProps, ModalOverlay, ModalOverlayProps, ModalTone};
pub use toast::{Toast, ToastLevel, render_toast};
