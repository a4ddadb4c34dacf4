use http::StatusCode;

/// Trait for domain errors that end up in a response envelope
///
/// Implemented by each feature crate's error type. The handler converts
/// these into envelopes, keeping collaborator errors decoupled from the
/// delivery surface (Lambda or HTTP).
pub trait HttpError: std::error::Error {
    /// HTTP status code for this error
    fn status_code(&self) -> StatusCode;

    /// Machine-readable error type (e.g. `validation_error`)
    fn error_type(&self) -> &str;

    /// Message safe to expose to API consumers
    fn client_message(&self) -> String;
}
