use http::StatusCode;
use thiserror::Error;
use voxdrop_core::HttpError;

pub type Result<T> = std::result::Result<T, StorageError>;

/// Object storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Bucket missing or not accessible with our credentials
    #[error("bucket `{bucket}` is not reachable: {message}")]
    Unavailable { bucket: String, message: String },

    /// Store rejected the write
    #[error("failed to upload `{key}`: {message}")]
    Upload { key: String, message: String },

    /// Presigned URL could not be generated
    #[error("failed to sign URL for `{key}`: {message}")]
    Signing { key: String, message: String },
}

impl HttpError for StorageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_type(&self) -> &str {
        match self {
            Self::Unavailable { .. } => "storage_unavailable",
            Self::Upload { .. } => "upload_error",
            Self::Signing { .. } => "signing_error",
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Unavailable { .. } => "Storage bucket is not reachable".to_owned(),
            Self::Upload { .. } => "Unable to upload to S3, check permissions".to_owned(),
            Self::Signing { .. } => "Unable to generate a download link".to_owned(),
        }
    }
}
