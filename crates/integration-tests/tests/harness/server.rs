//! Test server wrapper that starts voxdrop on a random port

use std::net::SocketAddr;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use voxdrop_config::Config;
use voxdrop_handler::Handler;
use voxdrop_server::{SPEECH_FILES_PATH, Server};

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to port 0 for automatic port assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let handler = Arc::new(Handler::from_config(&config).await?);
        let server = Server::new(&config, handler);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        // Bind the listener here so we know the actual port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST a JSON body to the speech file endpoint
    pub async fn create_speech_file(&self, body: &serde_json::Value) -> (u16, serde_json::Value) {
        let response = self
            .client
            .post(self.url(SPEECH_FILES_PATH))
            .json(body)
            .send()
            .await
            .expect("request should reach the test server");

        let status = response.status().as_u16();
        let json = response.json().await.expect("response body should be JSON");

        (status, json)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
