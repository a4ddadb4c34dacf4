use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Default `OpenAI` speech model
pub const DEFAULT_TTS_MODEL: &str = "tts-1";

/// Speech synthesis provider configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TtsConfig {
    /// Provider API key; requests fail closed while this is unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (e.g. an OpenAI-compatible proxy)
    #[serde(default)]
    pub base_url: Option<Url>,
    /// Model used for every synthesis call
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: None,
            model: default_model(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_TTS_MODEL.to_string()
}
