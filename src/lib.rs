pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod remote;
pub mod telemetry;
pub mod tui;
pub mod types;

pub use config::Config;
pub use error::{CatmanError, Result};
pub use remote::{Ack, CategoryGateway, HttpGateway, InMemoryGateway, Saved};
pub use tui::categories::{CategoryScreen, Dialog, Effect, Outcome, ScreenAction};
pub use types::{Capability, Category, CategoryDraft, CategoryKind, CategoryPatch, Role};
