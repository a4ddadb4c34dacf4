//! Local HTTP surface for the speech file handler
//!
//! Production traffic arrives through Lambda; this server exposes the same
//! handler for development and end-to-end tests.

#![allow(clippy::must_use_candidate)]

mod health;
mod speech;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing};
use tower_http::trace::TraceLayer;
use voxdrop_config::Config;
use voxdrop_handler::Handler;

/// Path of the speech file endpoint
pub const SPEECH_FILES_PATH: &str = "/v1/speech-files";

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server around an already constructed handler
    pub fn new(config: &Config, handler: Arc<Handler>) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

        let mut app = Router::new().route(
            SPEECH_FILES_PATH,
            routing::post(speech::create_speech_file).with_state(handler),
        );

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, routing::get(health::health_handler));
        }

        app = app.layer(TraceLayer::new_for_http());

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    #[must_use]
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
