//! Mock speech provider and S3 endpoint for integration tests
//!
//! Both run on `wiremock`; the S3 mock answers path-style requests for a
//! single bucket.

use wiremock::matchers::{header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bucket every test stores into
pub const BUCKET: &str = "voice-files";

/// Audio returned by the mock speech provider
pub const AUDIO: &[u8] = b"ID3\x04\x00\x00mock-mp3-frames";

/// A mock speech provider and a mock S3 endpoint
pub struct Backends {
    pub tts: MockServer,
    pub s3: MockServer,
}

impl Backends {
    /// Start both mock servers with no expectations mounted
    pub async fn start() -> Self {
        Self {
            tts: MockServer::start().await,
            s3: MockServer::start().await,
        }
    }

    /// Start both mock servers with a fully working happy path
    pub async fn healthy() -> Self {
        let backends = Self::start().await;
        backends.speech_returns(200).await;
        backends.bucket_returns(200).await;
        backends.put_returns(200).await;
        backends
    }

    /// Base URL for the speech provider, including `/v1`
    pub fn tts_base_url(&self) -> String {
        format!("{}/v1", self.tts.uri())
    }

    /// Endpoint of the S3 mock
    pub fn s3_endpoint(&self) -> String {
        self.s3.uri()
    }

    /// Answer speech requests with `status` (audio on 200)
    pub async fn speech_returns(&self, status: u16) {
        let response = if status == 200 {
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/mpeg")
                .set_body_bytes(AUDIO.to_vec())
        } else {
            ResponseTemplate::new(status).set_body_json(serde_json::json!({
                "error": { "message": "mock provider failure", "type": "server_error" }
            }))
        };

        Mock::given(method("POST"))
            .and(path("/v1/audio/speech"))
            .and(header("authorization", "Bearer sk-integration"))
            .respond_with(response)
            .mount(&self.tts)
            .await;
    }

    /// Answer `HeadBucket` with `status`
    pub async fn bucket_returns(&self, status: u16) {
        Mock::given(method("HEAD"))
            .and(path_regex(format!("^/{BUCKET}/?$")))
            .respond_with(ResponseTemplate::new(status))
            .mount(&self.s3)
            .await;
    }

    /// Answer every `PutObject` with `status`
    pub async fn put_returns(&self, status: u16) {
        let response = if status == 200 {
            ResponseTemplate::new(200)
        } else {
            ResponseTemplate::new(status).set_body_string(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                 <Error><Code>AccessDenied</Code><Message>Access Denied</Message></Error>",
            )
        };

        Mock::given(method("PUT"))
            .respond_with(response)
            .mount(&self.s3)
            .await;
    }

    /// Number of speech requests the provider received
    pub async fn speech_calls(&self) -> usize {
        self.tts.received_requests().await.unwrap_or_default().len()
    }

    /// Paths of every object written to the S3 mock
    pub async fn stored_paths(&self) -> Vec<String> {
        self.s3
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.method.as_str() == "PUT")
            .map(|request| request.url.path().to_owned())
            .collect()
    }
}
