//! Runs an event file against the restaurant.
//!
//! ```bash
//! RUST_LOG=info restaurant --config restaurant.toml events.txt
//! ```

use clap::Parser;
use ledger_actor::tracing::setup_tracing;
use restaurant::config::RestaurantConfig;
use restaurant::lifecycle::boot;
use std::path::PathBuf;
use tracing::{info, Instrument};

#[derive(Parser, Debug)]
#[command(name = "restaurant", about = "Replay restaurant events against the kitchen ledgers")]
struct Args {
    /// TOML configuration file; defaults apply when it does not exist
    #[arg(short, long, default_value = "restaurant.toml")]
    config: PathBuf,

    /// Event file to replay (overrides `files.events`)
    events: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();
    let args = Args::parse();

    let config = RestaurantConfig::load(&args.config)
        .await
        .map_err(|e| e.to_string())?;
    let events_path = args.events.unwrap_or_else(|| config.files.events.clone());

    info!(config = %args.config.display(), "Opening restaurant");
    let (mut restaurant, system) = boot(&config).await.map_err(|e| e.to_string())?;

    let events = tokio::fs::read_to_string(&events_path)
        .await
        .map_err(|e| format!("cannot read events {}: {}", events_path.display(), e))?;

    let span = tracing::info_span!("replay", file = %events_path.display());
    let summary = restaurant.replay(&events).instrument(span).await;

    match system.inventory_client.report().await {
        Ok(report) => info!("Closing inventory:\n{}", report.trim_end()),
        Err(e) => tracing::warn!(error = %e, "Could not fetch closing inventory"),
    }

    drop(restaurant);
    system.shutdown().await?;

    if summary.failed > 0 {
        info!(failed = summary.failed, "Some events could not be applied");
    }
    Ok(())
}
