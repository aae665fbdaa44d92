use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use catman::cli::{Cli, Commands, ConfigAction};
use catman::commands::{
    cmd_browse, cmd_config_get, cmd_config_set, cmd_config_show, cmd_create, cmd_delete, cmd_ls,
    cmd_show, cmd_update,
};
use catman::config::Config;
use catman::error::Result;
use catman::remote::HttpGateway;
use catman::telemetry::{self, BROWSE_LEVEL, DEFAULT_LEVEL};
use catman::types::{CategoryDraft, CategoryPatch, Role};

async fn run(cli: Cli) -> Result<()> {
    let output = cli.output();

    // Config commands work without a reachable API
    if let Commands::Config { action } = &cli.command {
        return match action {
            ConfigAction::Show => cmd_config_show(output),
            ConfigAction::Set { key, value } => cmd_config_set(key, value, output),
            ConfigAction::Get { key } => cmd_config_get(key, output),
        };
    }

    let config = Config::load()?;
    let role = cli
        .role
        .as_deref()
        .map(Role::from)
        .unwrap_or_else(|| config.role());
    let gateway = HttpGateway::from_config(&config)?;
    tracing::debug!(?gateway, %role, "gateway ready");

    match cli.command {
        Commands::Ls { search } => cmd_ls(&gateway, search.as_deref(), output).await,
        Commands::Show { id } => cmd_show(&gateway, id, output).await,
        Commands::Create { code, name, kind } => {
            cmd_create(&gateway, CategoryDraft::new(code, name, kind), output).await
        }
        Commands::Update {
            id,
            code,
            name,
            kind,
        } => cmd_update(&gateway, &role, id, CategoryPatch { code, name, kind }, output).await,
        Commands::Delete { id, yes } => cmd_delete(&gateway, &role, id, yes, output).await,
        Commands::Browse => {
            let source = gateway.base_url().to_string();
            cmd_browse(Arc::new(gateway), role, source).await
        }
        Commands::Config { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.command {
        Commands::Browse => BROWSE_LEVEL,
        _ => DEFAULT_LEVEL,
    };
    telemetry::init_tracing(level);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
