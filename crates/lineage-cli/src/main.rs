//! Lineage CLI - browse a family tree from the terminal.

use clap::Parser;
use lineage_browser::FamilyBrowser;
use lineage_cli::commands;
use lineage_cli::repl;
use lineage_cli::{Cli, Command, Config, Formatter};
use lineage_store::DataPaths;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> lineage_cli::Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit --config must load; the default location falls back to defaults
    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            warn!("Ignoring configuration: {}", e);
            Config::default()
        }),
    };

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    let data_dir = config.resolve_data_dir(cli.data_dir.as_deref());
    debug!("Using data directory {}", data_dir.display());

    match cli.command {
        Some(Command::Import(args)) => {
            commands::execute_import(args, &data_dir, &formatter).await?;
        }
        command => {
            let mut browser = FamilyBrowser::load(&DataPaths::in_dir(&data_dir), &config.browser).await?;

            match command {
                None | Some(Command::Repl) => {
                    repl::run_repl(&mut browser, &config, &formatter)?;
                }
                Some(Command::Tree(args)) => {
                    commands::execute_tree(args, &mut browser, &formatter)?;
                }
                Some(Command::List(args)) => {
                    commands::execute_list(args, &mut browser, &formatter)?;
                }
                Some(Command::Search(args)) => {
                    commands::execute_search(args, &mut browser, &formatter)?;
                }
                Some(Command::Profile(args)) => {
                    commands::execute_profile(args, &mut browser, &formatter)?;
                }
                Some(Command::Import(_)) => {}
            }
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries command output only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}
