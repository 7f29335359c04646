use anyhow::Context;
use clap::Parser;
use msync_registry::ModelClient;

mod bootstrap;
mod checklist;
mod cli;
mod commands;
mod output;
mod progress;
mod ui;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("msync error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse_from(cli::normalize_args(std::env::args_os()));
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();
    let prefs = ui::UiPrefs::detect(&flags);

    let config = bootstrap::load_config(&flags)?;
    let client = ModelClient::new(&config).context("failed to build HTTP client")?;

    commands::dispatch(cli.mode(), &client, &flags, &prefs).await
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("MSYNC_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
