// Easy Prompt - CLI Entry Point

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use easy_prompt::cli::{
    run_list_fields, run_list_personas, run_list_templates, run_render, run_session, Cli,
    Commands,
};
use easy_prompt::storage::ConfigService;
use easy_prompt::utils::paths::ensure_data_dir;
use easy_prompt::AppState;

/// Log to stderr; stdout carries prompt text only.
fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = ensure_data_dir(cli.data_dir.as_deref())
        .context("Failed to prepare data directory")?;
    let config = ConfigService::new(&data_dir).context("Failed to load configuration")?;
    init_logging(&config.get_config().log_level);

    match cli.command {
        Some(Commands::Render { file, stats }) => {
            run_render(file.as_deref(), stats).context("Failed to render prompt")?;
        }
        Some(Commands::Fields) => {
            run_list_fields(&mut io::stdout().lock())?;
        }
        Some(Commands::Templates) => {
            let state = AppState::open(&data_dir, config)?;
            run_list_templates(&state, &mut io::stdout().lock())?;
        }
        Some(Commands::Personas) => {
            let state = AppState::open(&data_dir, config)?;
            run_list_personas(&state, &mut io::stdout().lock())?;
        }
        None | Some(Commands::Session) => {
            let state = AppState::open(&data_dir, config)?;
            eprintln!("easy-prompt session - type 'help' for commands");
            let stdin = io::stdin();
            run_session(&state, stdin.lock(), &mut io::stdout()).await?;
        }
    }

    Ok(())
}
