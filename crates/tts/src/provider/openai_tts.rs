use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use url::Url;

use crate::{
    error::TtsError,
    http_client::build_http_client,
    types::{OUTPUT_FORMAT, SpeechRequest, SpeechResponse},
};

use super::TtsProvider;

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` speech provider (`POST /audio/speech`)
pub struct OpenAiTtsProvider {
    client: Client,
    endpoint: String,
    api_key: SecretString,
    model: String,
}

impl OpenAiTtsProvider {
    pub fn new(api_key: SecretString, base_url: Option<Url>, model: String) -> crate::error::Result<Self> {
        let base_url = base_url.map_or_else(|| DEFAULT_OPENAI_API_URL.to_owned(), |url| url.to_string());
        let endpoint = format!("{}/audio/speech", base_url.trim_end_matches('/'));

        Ok(Self {
            client: build_http_client()?,
            endpoint,
            api_key,
            model,
        })
    }
}

#[derive(serde::Serialize)]
struct OpenAiTtsRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

#[derive(Deserialize)]
struct OpenAiErrorBody {
    error: OpenAiErrorDetail,
}

#[derive(Deserialize)]
struct OpenAiErrorDetail {
    message: String,
}

/// Pull the human readable message out of an `OpenAI` error body
fn provider_message(body: &str) -> String {
    serde_json::from_str::<OpenAiErrorBody>(body).map_or_else(|_| body.to_owned(), |parsed| parsed.error.message)
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(&self, request: &SpeechRequest) -> crate::error::Result<SpeechResponse> {
        tracing::debug!(
            model = %self.model,
            voice = %request.voice,
            input_len = request.input.chars().count(),
            "OpenAI TTS request"
        );

        let body = OpenAiTtsRequest {
            model: &self.model,
            input: &request.input,
            voice: request.voice.as_ref(),
            response_format: OUTPUT_FORMAT,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI TTS request failed: {e}");
                TtsError::ConnectionError(format!("Failed to send request to OpenAI TTS: {e}"))
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            let message = provider_message(&error_text);

            tracing::error!("OpenAI TTS API error ({status}): {message}");

            return Err(match status.as_u16() {
                401 | 403 => TtsError::AuthenticationFailed(message),
                400 => TtsError::InvalidRequest(message),
                code => TtsError::ProviderApiError { status: code, message },
            });
        }

        let audio = response.bytes().await.map_err(|e| {
            tracing::error!("Failed to read OpenAI TTS response body: {e}");
            TtsError::InternalError
        })?;

        if audio.is_empty() {
            tracing::error!("OpenAI TTS returned an empty body");
            return Err(TtsError::EmptyAudio);
        }

        tracing::debug!("OpenAI TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse { audio })
    }
}
