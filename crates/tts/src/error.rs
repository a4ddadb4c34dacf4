use http::StatusCode;
use thiserror::Error;
use voxdrop_core::HttpError;

pub type Result<T> = std::result::Result<T, TtsError>;

/// Speech synthesis errors
#[derive(Debug, Error)]
pub enum TtsError {
    /// Requested voice is not one of the fixed presets
    #[error("invalid voice_type `{given}`, it must be one of: {allowed}")]
    InvalidVoice { given: String, allowed: String },

    /// Provider rejected our API key
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Provider rejected the request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Provider API returned an error
    #[error("Provider API error ({status}): {message}")]
    ProviderApiError { status: u16, message: String },

    /// Network or connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Provider answered 2xx without any audio
    #[error("provider returned an empty audio body")]
    EmptyAudio,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Internal error, details are only logged
    #[error("Internal server error")]
    InternalError,
}

impl HttpError for TtsError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidVoice { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::InvalidVoice { .. } => "validation_error",
            Self::AuthenticationFailed(_) => "authentication_error",
            Self::InvalidRequest(_) | Self::ProviderApiError { .. } | Self::EmptyAudio => "api_error",
            Self::ConnectionError(_) => "connection_error",
            Self::ConfigError(_) | Self::InternalError => "internal_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::InvalidVoice { .. } => self.to_string(),
            _ => "Unable to synthesize audio".to_owned(),
        }
    }
}
