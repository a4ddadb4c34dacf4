#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod server;
pub mod storage;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use health::*;
pub use server::*;
pub use storage::*;
pub use telemetry::{LogFormat, TelemetryConfig};
pub use tts::*;

/// Top-level voxdrop configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Local HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech synthesis provider configuration
    #[serde(default)]
    pub tts: TtsConfig,
    /// Object storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
    /// Logging and telemetry configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
