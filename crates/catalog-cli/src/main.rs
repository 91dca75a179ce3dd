mod cli;
mod context;
mod handlers;
mod output;

use catalog_core::AppConfig;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use context::CliContext;

fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("CATALOG_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    match cli.command {
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "catalog", &mut std::io::stdout());
        }
        Commands::Fields => handlers::fields::handle()?,
        Commands::View(args) => {
            let Some(file_path) = cli.file else {
                output::output_error("--file is required to view cards");
            };

            let ctx = match CliContext::load(&file_path, AppConfig::load()) {
                Ok(ctx) => ctx,
                Err(e) => output::output_error(&e.to_string()),
            };
            handlers::view::handle(ctx, args)?;
        }
    }

    Ok(())
}
