use std::{sync::Arc, time::Duration, time::Instant};

use bytes::Bytes;
use http::StatusCode;
use serde_json::{Map, Value};
use storage::ObjectStore;
use tts::{OUTPUT_CONTENT_TYPE, SpeechRequest, TtsProvider, Voice};
use voxdrop_config::{Config, DEFAULT_URL_TTL_SECONDS};
use voxdrop_core::HttpError;
use voxdrop_telemetry::RequestMetrics;

use crate::{
    error::{HandlerError, ValidationError},
    event::ProxyEvent,
    request::SpeechFileRequest,
    response::{ProxyResponse, respond},
};

const SUCCESS_MESSAGE: &str = "Upload file succeeded";

/// Turns speech file requests into stored audio and a download link
///
/// Collaborators are injected once per process and shared read-only. A
/// missing collaborator means the matching credential or bucket was not
/// configured, and every request then fails closed.
pub struct Handler {
    synthesizer: Option<Arc<dyn TtsProvider>>,
    store: Option<Arc<dyn ObjectStore>>,
    url_ttl: Duration,
    metrics: RequestMetrics,
}

impl Handler {
    pub fn new(synthesizer: Option<Arc<dyn TtsProvider>>, store: Option<Arc<dyn ObjectStore>>) -> Self {
        Self {
            synthesizer,
            store,
            url_ttl: Duration::from_secs(DEFAULT_URL_TTL_SECONDS),
            metrics: RequestMetrics::new(),
        }
    }

    /// Override the lifetime of generated download links
    #[must_use]
    pub const fn with_url_ttl(mut self, url_ttl: Duration) -> Self {
        self.url_ttl = url_ttl;
        self
    }

    /// Build the handler and its collaborators from configuration
    pub async fn from_config(config: &Config) -> Result<Self, HandlerError> {
        let synthesizer = tts::build_provider(&config.tts)?;
        let store = storage::build_store(&config.storage).await;

        Ok(Self::new(synthesizer, store).with_url_ttl(Duration::from_secs(config.storage.url_ttl_seconds)))
    }

    /// Handle an API Gateway proxy event
    pub async fn handle_event(&self, event: &ProxyEvent) -> ProxyResponse {
        match event.decoded_body() {
            Ok(body) => self.handle(body.as_ref()).await,
            Err(e) => self.reject(e),
        }
    }

    /// Answer a body that could not be decoded before validation
    ///
    /// A missing credential or bucket still takes precedence over the
    /// body problem.
    pub fn reject(&self, error: ValidationError) -> ProxyResponse {
        let start = Instant::now();
        let result = self.check_environment().and(Err(error.into()));
        self.finish(result, start)
    }

    /// Handle a raw request body
    ///
    /// `body` is a JSON-encoded string or an already decoded object.
    pub async fn handle(&self, body: Option<&Value>) -> ProxyResponse {
        let start = Instant::now();
        let result = self.process(body).await;
        self.finish(result, start)
    }

    /// validate → synthesize → store → sign, stopping at the first failure
    async fn process(&self, body: Option<&Value>) -> Result<Option<String>, HandlerError> {
        let request = self.validate(body).await?;
        let key = request.object_key();
        tracing::Span::current().record("key", key.as_str());

        tracing::debug!(key = %key, voice = %request.voice, "speech file request accepted");

        let audio = self.synthesize(&request.text_to_read, request.voice).await?;
        self.store(audio, &key).await?;

        Ok(self.sign(&key).await)
    }

    fn finish(&self, result: Result<Option<String>, HandlerError>, start: Instant) -> ProxyResponse {
        let response = match result {
            Ok(file_url) => {
                let mut extras = Map::new();
                extras.insert("file_url".to_owned(), file_url.map_or(Value::Null, Value::String));
                respond(StatusCode::OK, SUCCESS_MESSAGE, extras)
            }
            Err(e) => {
                let status = e.status_code();
                if status.is_server_error() {
                    tracing::error!(error = %e, error_type = e.error_type(), "speech file request failed");
                } else {
                    tracing::warn!(error = %e, error_type = e.error_type(), "speech file request rejected");
                }
                respond(status, &e.client_message(), Map::new())
            }
        };

        self.metrics.record(response.status_code, start);

        response
    }

    /// Check environment readiness, the payload, and bucket reachability
    ///
    /// Configuration is checked first so a misconfigured deployment fails
    /// closed regardless of input.
    pub async fn validate(&self, body: Option<&Value>) -> Result<SpeechFileRequest, HandlerError> {
        self.check_environment()?;

        let request = SpeechFileRequest::from_body(body)?;

        self.object_store()?.check_available().await?;

        Ok(request)
    }

    /// Request audio for `text` read with `voice`
    pub async fn synthesize(&self, text: &str, voice: Voice) -> Result<Bytes, HandlerError> {
        let request = SpeechRequest {
            input: text.to_owned(),
            voice,
        };

        let response = self.synthesizer()?.synthesize(&request).await?;

        Ok(response.audio)
    }

    /// Write audio under `key` in the configured bucket
    pub async fn store(&self, audio: Bytes, key: &str) -> Result<(), HandlerError> {
        let store = self.object_store()?;
        let size = audio.len();

        store.put_object(key, audio, OUTPUT_CONTENT_TYPE).await?;

        tracing::info!(bucket = store.bucket(), key, size, "audio file stored");

        Ok(())
    }

    /// Presigned download link for `key`
    ///
    /// Signing problems are logged and yield `None`; the upload already
    /// succeeded, so the request does not fail.
    pub async fn sign(&self, key: &str) -> Option<String> {
        let store = self.store.as_deref()?;

        match store.presigned_get_url(key, self.url_ttl).await {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::error!(error = %e, key, "failed to sign download URL");
                None
            }
        }
    }

    fn check_environment(&self) -> Result<(), HandlerError> {
        self.synthesizer()?;
        self.object_store()?;
        Ok(())
    }

    fn synthesizer(&self) -> Result<&dyn TtsProvider, HandlerError> {
        self.synthesizer
            .as_deref()
            .ok_or(HandlerError::Configuration("OPENAI_API_KEY is not set"))
    }

    fn object_store(&self) -> Result<&dyn ObjectStore, HandlerError> {
        self.store
            .as_deref()
            .ok_or(HandlerError::Configuration("S3_BUCKET_NAME is not set"))
    }
}
