use http::StatusCode;
use storage::StorageError;
use thiserror::Error;
use tts::TtsError;
use voxdrop_core::HttpError;

/// Problems with the caller's payload
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Body absent, not JSON, or not a JSON object
    #[error("{0}")]
    MalformedBody(String),

    /// One or more required fields absent or null
    #[error("Include in request body output_name, text_to_read, voice_type (missing: {})", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    /// Field present with the wrong JSON type
    #[error("`{field}` must be a string")]
    NotAString { field: &'static str },

    /// Field present but empty or whitespace
    #[error("`{field}` must not be empty")]
    Empty { field: &'static str },

    /// Field longer than allowed
    #[error("`{field}` must be at most {max} characters, got {len}")]
    TooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    /// Voice outside the fixed preset list
    #[error(transparent)]
    InvalidVoice(TtsError),
}

impl HttpError for ValidationError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) | Self::MissingFields(_) => StatusCode::BAD_REQUEST,
            Self::NotAString { .. } | Self::Empty { .. } | Self::TooLong { .. } | Self::InvalidVoice(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }

    fn error_type(&self) -> &str {
        "validation_error"
    }

    fn client_message(&self) -> String {
        self.to_string()
    }
}

/// Every way a speech file request can fail
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Required credential or bucket missing from the environment
    #[error("configuration error: {0}")]
    Configuration(&'static str),

    #[error(transparent)]
    Synthesis(#[from] TtsError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl HttpError for HandlerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(e) => e.status_code(),
            Self::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Synthesis(e) => e.status_code(),
            Self::Storage(e) => e.status_code(),
        }
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Validation(e) => e.error_type(),
            Self::Configuration(_) => "configuration_error",
            Self::Synthesis(e) => e.error_type(),
            Self::Storage(e) => e.error_type(),
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Validation(e) => e.client_message(),
            Self::Configuration(_) => "Service is not configured".to_owned(),
            Self::Synthesis(e) => e.client_message(),
            Self::Storage(e) => e.client_message(),
        }
    }
}
