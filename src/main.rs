use std::sync::Arc;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_dispatch::metrics::Metrics;
use order_dispatch::services::{FrontService, LoggingBackService};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    // Logs go to stderr; stdout only carries the dispatch trace line.
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(true),
        )
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,order_dispatch=debug"))
        )
        .init();

    let metrics = Arc::new(Metrics::new()?);

    let front_service = FrontService::new(Arc::new(LoggingBackService::new()))
        .with_metrics(metrics.clone());
    front_service.execute()?;

    tracing::debug!(metrics = %metrics.render()?, "Dispatch complete");

    Ok(())
}
