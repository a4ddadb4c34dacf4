use std::sync::Arc;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use http::{StatusCode, header};
use serde_json::Value;
use voxdrop_handler::{Handler, ProxyResponse, ValidationError};

/// `POST /v1/speech-files`
///
/// Hands the raw body to the handler as a string, the way API Gateway
/// delivers it, so malformed JSON gets the same envelope as on Lambda.
#[tracing::instrument(name = "speech_file", skip_all, fields(key = tracing::field::Empty))]
pub async fn create_speech_file(State(handler): State<Arc<Handler>>, body: Bytes) -> Response {
    let envelope = if body.is_empty() {
        handler.handle(None).await
    } else {
        match String::from_utf8(body.to_vec()) {
            Ok(text) => handler.handle(Some(&Value::String(text))).await,
            Err(_) => handler.reject(ValidationError::MalformedBody(
                "request body is not valid UTF-8".to_owned(),
            )),
        }
    };

    into_http_response(envelope)
}

/// Unwrap a proxy envelope into a plain HTTP response
fn into_http_response(envelope: ProxyResponse) -> Response {
    let status = StatusCode::from_u16(envelope.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, [(header::CONTENT_TYPE, "application/json")], envelope.body).into_response()
}
