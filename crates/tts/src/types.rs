use bytes::Bytes;

use crate::voice::Voice;

/// Audio container produced for every request
pub const OUTPUT_FORMAT: &str = "mp3";

/// Content type of [`OUTPUT_FORMAT`]
pub const OUTPUT_CONTENT_TYPE: &str = "audio/mpeg";

/// Text to synthesize and the voice to read it with
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub input: String,
    pub voice: Voice,
}

/// Raw audio returned by a provider
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    /// Audio bytes, never empty
    pub audio: Bytes,
}
