use anyhow::Context;
use park_cli::{build_system, Console};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "park_cli=info,park_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = park_config::Config::load().context("Failed to load config")?;
    tracing::info!(
        capacity = config.lot.capacity,
        strategy = ?config.pricing.strategy,
        "Starting parking console"
    );

    let system = build_system(&config).context("Invalid pricing configuration")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(system, stdin.lock(), stdout.lock());
    console.run()?;

    tracing::info!("Parking console closed");
    Ok(())
}
