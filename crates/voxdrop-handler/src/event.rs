use base64::Engine;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;

/// The parts of an API Gateway proxy event the handler reads
///
/// Direct invocations may send just `{ "body": { ... } }`.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyEvent {
    #[serde(default)]
    pub body: Option<Value>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyEvent {
    /// Body with any base64 transfer encoding removed
    pub fn decoded_body(&self) -> Result<Option<Value>, ValidationError> {
        if !self.is_base64_encoded {
            return Ok(self.body.clone());
        }

        let Some(Value::String(ref encoded)) = self.body else {
            return Err(ValidationError::MalformedBody(
                "base64 encoded body must be a string".to_owned(),
            ));
        };

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| ValidationError::MalformedBody(format!("request body is not valid base64: {e}")))?;

        let text = String::from_utf8(bytes)
            .map_err(|_| ValidationError::MalformedBody("request body is not valid UTF-8".to_owned()))?;

        Ok(Some(Value::String(text)))
    }
}
