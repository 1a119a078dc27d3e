//! Charforge Player - command line composition root.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use charforge_player::cli::Cli;
use charforge_player::runner::{run, RunnerDeps};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charforge_player=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    tracing::debug!(engine_url = %cli.engine_url, store = ?cli.store, "Starting Charforge Player");

    let deps = RunnerDeps::from_cli(&cli)?;
    let mut stdout = std::io::stdout().lock();
    run(&deps, &cli.command, &mut stdout).await?;
    Ok(())
}
