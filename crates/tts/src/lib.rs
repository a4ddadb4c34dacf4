#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod http_client;
mod provider;
mod types;
mod voice;

use std::sync::Arc;

pub use error::{Result, TtsError};
pub use provider::{TtsProvider, openai_tts::OpenAiTtsProvider};
pub use types::{OUTPUT_CONTENT_TYPE, OUTPUT_FORMAT, SpeechRequest, SpeechResponse};
pub use voice::Voice;

/// Build the speech provider from configuration
///
/// Returns `None` when no API key is configured; the handler then fails
/// every request closed instead of refusing to start.
pub fn build_provider(config: &voxdrop_config::TtsConfig) -> Result<Option<Arc<dyn TtsProvider>>> {
    let Some(ref api_key) = config.api_key else {
        tracing::warn!("no TTS API key configured, speech requests will be rejected");
        return Ok(None);
    };

    let provider = OpenAiTtsProvider::new(api_key.clone(), config.base_url.clone(), config.model.clone())?;

    tracing::debug!(model = %config.model, "TTS provider initialized");

    Ok(Some(Arc::new(provider)))
}
