use clap::{Parser, Subcommand};

use crate::types::{CategoryKind, VALID_KINDS};

#[derive(Parser)]
#[command(name = "catman")]
#[command(about = "Manage product and service categories")]
#[command(version)]
pub struct Cli {
    /// Act as this role for one invocation (admin, account, guest, ...)
    #[arg(long, global = true)]
    pub role: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn output(&self) -> OutputOptions {
        OutputOptions { json: self.json }
    }
}

/// How command results are printed
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List categories
    #[command(visible_alias = "l")]
    Ls {
        /// Only show categories whose code or name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one category
    #[command(visible_alias = "s")]
    Show {
        /// Category ID
        id: u64,
    },

    /// Create a category
    #[command(visible_alias = "c")]
    Create {
        /// Short unique code (e.g. CAT-001)
        #[arg(long)]
        code: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Type: goods or service (default: goods)
        #[arg(short = 't', long = "type", default_value = "goods", value_parser = parse_kind)]
        kind: CategoryKind,
    },

    /// Update fields of a category (requires an editing role)
    Update {
        /// Category ID
        id: u64,

        /// New code
        #[arg(long)]
        code: Option<String>,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New type: goods or service
        #[arg(short = 't', long = "type", value_parser = parse_kind)]
        kind: Option<CategoryKind>,
    },

    /// Delete a category (requires a deleting role)
    #[command(visible_alias = "rm")]
    Delete {
        /// Category ID
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive category manager
    #[command(visible_alias = "b")]
    Browse,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (api.base_url, api.token, api.timeout_secs, role)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (api.base_url, api.token, api.timeout_secs, role)
        key: String,
    },
}

fn parse_kind(s: &str) -> Result<CategoryKind, String> {
    s.parse()
        .map_err(|_| format!("Invalid type. Must be one of: {}", VALID_KINDS.join(", ")))
}
