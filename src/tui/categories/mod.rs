//! Category management screen
//!
//! `model` is the headless state machine, `effects` runs gateway calls on
//! its behalf, and `view` renders it with iocraft.

mod components;
pub mod effects;
pub mod filter;
pub mod keymap;
pub mod model;
mod view;

#[cfg(test)]
mod tests;

pub use effects::{Effect, Outcome};
pub use filter::filter_categories;
pub use keymap::{KeyMode, KeymapSnapshot, key_to_action};
pub use model::{CategoryScreen, Dialog, FormField, ListCursor, ScreenAction, SearchUi};
pub use view::{CategoryManager, CategoryManagerProps};
