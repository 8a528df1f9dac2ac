//! SortBench - Application Entry Point
//!
//! Runs the default benchmark plan and writes the results file.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sortbench::{
    benchmark::{SystemProbe, TrackingAllocator},
    config::{Config, LogFormat},
    BenchmarkPlan, BenchmarkService,
};

#[global_allocator]
static GLOBAL: TrackingAllocator = TrackingAllocator;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    let registry = tracing_subscriber::registry().with(config.logging.env_filter()?);
    match config.logging.format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    tracing::info!("Rust Sorting Algorithms Benchmark");
    tracing::info!("Reading test data from {}", config.storage.data_dir.display());

    let mut service =
        BenchmarkService::new(BenchmarkPlan::default(), config.storage, SystemProbe::new());

    service.run_and_save().await?;

    Ok(())
}
