//! signal-display entry point.
//!
//! Connects to the signal device and mirrors its status frames onto the
//! indicator board until the device closes the socket or Ctrl-C is pressed.

use anyhow::Context;

use signal_display::client::DisplayClient;
use signal_display::config::DisplayConfig;
use signal_display::domain::IndicatorBoard;
use signal_display::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = DisplayConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    telemetry::init(config.log_format).context("initializing tracing")?;

    tracing::info!(
        host = %config.device_host,
        port = config.device_port,
        policy = ?config.status_policy,
        "starting signal-display"
    );

    let mut board = IndicatorBoard::new();
    let mut client = DisplayClient::connect(&config)
        .await
        .context("connecting to signal device")?;

    let stats = client.run(&mut board, shutdown_signal()).await?;

    let snapshot = serde_json::to_string(&board.snapshot())?;
    tracing::info!(
        end = ?stats.end,
        received = stats.frames_received,
        applied = stats.frames_applied,
        skipped = stats.frames_skipped,
        board = %snapshot,
        "display stopped"
    );

    client.close().await?;
    Ok(())
}

/// Resolves on Ctrl-C. If the handler cannot be installed, never resolves.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
}
