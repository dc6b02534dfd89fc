//! # FT Node
//!
//! Runs the file transfer API gateway.
//!
//! Configuration comes from `FT_CONFIG` (a JSON file) and the `FT_*`
//! environment overrides; log filtering from `RUST_LOG` (default `info`).

mod config;

use anyhow::Result;
use ft_api_gateway::ApiGatewayService;
use std::future::Future;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = config::load_config()?;
    info!(
        version = ft_api_gateway::VERSION,
        addr = %config.http_addr(),
        "Starting FT node"
    );

    let service = ApiGatewayService::new(config).await?;
    info!("Node is running. Press Ctrl+C to stop.");
    run(service, tokio::signal::ctrl_c()).await
}

/// Serve until `signal` resolves or the server stops on its own.
async fn run<F>(mut service: ApiGatewayService, signal: F) -> Result<()>
where
    F: Future<Output = std::io::Result<()>>,
{
    let stop = service.shutdown_handle();
    let mut server = tokio::spawn(async move { service.start().await });

    tokio::select! {
        result = signal => {
            result?;
            info!("Shutdown signal received");
            if let Some(stop) = stop {
                let _ = stop.send(());
            }
            (&mut server).await??;
        }
        result = &mut server => {
            // Server exited on its own; surface the reason
            if let Err(e) = result? {
                error!(error = %e, "gateway stopped");
                return Err(e.into());
            }
        }
    }

    Ok(())
}
