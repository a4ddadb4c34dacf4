#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use args::{Args, Command};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use voxdrop_config::Config;
use voxdrop_handler::Handler;
use voxdrop_server::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command.unwrap_or_else(Command::detect) {
        Command::Lambda => run_lambda().await,
        Command::Serve { config, listen } => run_server(config, listen).await,
    }
}

async fn run_lambda() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let telemetry = Arc::new(voxdrop_telemetry::init(&config.telemetry)?);

    let handler = Arc::new(Handler::from_config(&config).await?);

    voxdrop_handler::lambda::run(handler, telemetry).await
}

async fn run_server(config_path: Option<PathBuf>, listen: Option<SocketAddr>) -> anyhow::Result<()> {
    let mut config = match config_path {
        Some(ref path) => Config::load(path)?,
        None => Config::from_env()?,
    };

    if listen.is_some() {
        config.server.listen_address = listen;
    }

    let _telemetry_guard = voxdrop_telemetry::init(&config.telemetry)?;

    tracing::info!(
        config_path = ?config_path.as_deref().map(std::path::Path::display),
        "starting voxdrop"
    );

    let handler = Arc::new(Handler::from_config(&config).await?);
    let server = Server::new(&config, handler);

    // Set up graceful shutdown
    let shutdown = CancellationToken::new();
    let shutdown_clone = shutdown.clone();

    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown_clone.cancel();
    });

    server.serve(shutdown).await?;

    tracing::info!("voxdrop stopped");
    Ok(())
}

/// Wait for a shutdown signal (`SIGINT` or `SIGTERM`)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
