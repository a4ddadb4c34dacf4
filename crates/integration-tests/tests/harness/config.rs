//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use secrecy::SecretString;
use url::Url;
use voxdrop_config::{Config, ServerConfig, StorageConfig, TelemetryConfig, TtsConfig};

use super::backends::{BUCKET, Backends};

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Configuration pointing both collaborators at the mock backends
    pub fn new(backends: &Backends) -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    ..ServerConfig::default()
                },
                tts: TtsConfig {
                    api_key: Some(SecretString::from("sk-integration")),
                    base_url: Some(Url::parse(&backends.tts_base_url()).expect("valid URL")),
                    ..TtsConfig::default()
                },
                storage: StorageConfig {
                    bucket: Some(BUCKET.to_owned()),
                    region: Some("us-east-1".to_owned()),
                    endpoint: Some(Url::parse(&backends.s3_endpoint()).expect("valid URL")),
                    force_path_style: true,
                    access_key_id: Some(SecretString::from("AKIDINTEGRATION")),
                    secret_access_key: Some(SecretString::from("integration-secret-key")),
                    ..StorageConfig::default()
                },
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    /// Drop the provider API key
    pub fn without_api_key(mut self) -> Self {
        self.config.tts.api_key = None;
        self
    }

    /// Drop the bucket name
    pub fn without_bucket(mut self) -> Self {
        self.config.storage.bucket = None;
        self
    }

    /// Set the download link lifetime
    pub fn with_url_ttl(mut self, seconds: u64) -> Self {
        self.config.storage.url_ttl_seconds = seconds;
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
