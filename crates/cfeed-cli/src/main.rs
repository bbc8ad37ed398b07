use std::io::stdout;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cfeed_cli::commands::{generate, teams};
use cfeed_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so the feed can be piped from stdout
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Some(Commands::Generate {
            status_file,
            standings_file,
            feed_file,
            unofficial,
        }) => {
            let config = load_config(&cli)?;
            let stats = generate::run(
                &config.feed_config(*unofficial),
                status_file,
                standings_file,
                feed_file.as_deref(),
            )?;
            tracing::info!(?stats, "done");
        }
        Some(Commands::Teams {
            standings_file,
            unofficial,
            json,
        }) => {
            let config = load_config(&cli)?;
            teams::run(
                &mut stdout().lock(),
                &config.feed_config(*unofficial),
                standings_file,
                *json,
            )?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(config)
}
