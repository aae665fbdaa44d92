use std::sync::Arc;

use iocraft::prelude::*;

use crate::error::{CatmanError, Result};
use crate::remote::CategoryGateway;
use crate::tui::CategoryManager;
use crate::types::Role;

/// Full-screen category manager
pub async fn cmd_browse(gateway: Arc<dyn CategoryGateway>, role: Role, source: String) -> Result<()> {
    tracing::debug!("starting category manager against {source} as {role}");

    element!(CategoryManager(
        gateway: Some(gateway),
        role,
        source,
    ))
    .fullscreen()
    .await
    .map_err(|e| CatmanError::Other(format!("TUI error: {e}")))
}
