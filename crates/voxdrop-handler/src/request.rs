use serde_json::{Map, Value};
use tts::Voice;

use crate::error::ValidationError;

/// Longest accepted `output_name`, in characters
pub const MAX_OUTPUT_NAME_CHARS: usize = 30;

/// Longest accepted `text_to_read`, in characters
pub const MAX_TEXT_CHARS: usize = 250;

/// Extension of every stored object
const OBJECT_EXTENSION: &str = "mp3";

const REQUIRED_FIELDS: [&str; 3] = ["output_name", "text_to_read", "voice_type"];

/// A validated speech file request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpeechFileRequest {
    pub output_name: String,
    pub text_to_read: String,
    pub voice: Voice,
}

impl SpeechFileRequest {
    /// Validate a raw event body
    ///
    /// The body is either the JSON-encoded string an API Gateway proxy
    /// delivers or an already decoded object from a direct invocation.
    pub fn from_body(body: Option<&Value>) -> Result<Self, ValidationError> {
        let decoded;
        let object = match body {
            None | Some(Value::Null) => {
                return Err(ValidationError::MalformedBody("request body is required".to_owned()));
            }
            Some(Value::String(raw)) => {
                decoded = serde_json::from_str::<Value>(raw)
                    .map_err(|e| ValidationError::MalformedBody(format!("request body is not valid JSON: {e}")))?;
                as_object(&decoded)?
            }
            Some(value) => as_object(value)?,
        };

        Self::from_object(object)
    }

    fn from_object(object: &Map<String, Value>) -> Result<Self, ValidationError> {
        let missing: Vec<&'static str> = REQUIRED_FIELDS
            .into_iter()
            .filter(|field| object.get(*field).is_none_or(Value::is_null))
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let output_name = string_field(object, "output_name")?;
        let text_to_read = string_field(object, "text_to_read")?;
        let voice_type = string_field(object, "voice_type")?;

        check_text(output_name, "output_name", MAX_OUTPUT_NAME_CHARS)?;
        check_text(text_to_read, "text_to_read", MAX_TEXT_CHARS)?;

        let voice = Voice::parse(voice_type).map_err(ValidationError::InvalidVoice)?;

        Ok(Self {
            output_name: output_name.to_owned(),
            text_to_read: text_to_read.to_owned(),
            voice,
        })
    }

    /// Storage key of the generated file
    pub fn object_key(&self) -> String {
        format!("{}.{OBJECT_EXTENSION}", self.output_name)
    }
}

fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value
        .as_object()
        .ok_or_else(|| ValidationError::MalformedBody("request body must be a JSON object".to_owned()))
}

fn string_field<'a>(object: &'a Map<String, Value>, field: &'static str) -> Result<&'a str, ValidationError> {
    object
        .get(field)
        .and_then(Value::as_str)
        .ok_or(ValidationError::NotAString { field })
}

fn check_text(value: &str, field: &'static str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    let len = value.chars().count();
    if len > max {
        return Err(ValidationError::TooLong { field, max, len });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use http::StatusCode;
    use serde_json::json;
    use voxdrop_core::HttpError;

    use super::*;

    fn valid() -> Value {
        json!({
            "output_name": "demo",
            "text_to_read": "Hello world",
            "voice_type": "alloy"
        })
    }

    fn status_of(body: &Value) -> StatusCode {
        SpeechFileRequest::from_body(Some(body)).unwrap_err().status_code()
    }

    #[test]
    fn accepts_object_body() {
        let request = SpeechFileRequest::from_body(Some(&valid())).unwrap();

        assert_eq!(request.output_name, "demo");
        assert_eq!(request.text_to_read, "Hello world");
        assert_eq!(request.voice, Voice::Alloy);
    }

    #[test]
    fn accepts_json_encoded_string_body() {
        let body = Value::String(valid().to_string());
        let request = SpeechFileRequest::from_body(Some(&body)).unwrap();

        assert_eq!(request.output_name, "demo");
    }

    #[test]
    fn object_key_appends_mp3() {
        let request = SpeechFileRequest::from_body(Some(&valid())).unwrap();
        assert_eq!(request.object_key(), "demo.mp3");
    }

    #[test]
    fn each_missing_field_is_a_bad_request() {
        for field in REQUIRED_FIELDS {
            let mut body = valid();
            body.as_object_mut().unwrap().remove(field);

            let err = SpeechFileRequest::from_body(Some(&body)).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST, "{field}");
            assert!(err.to_string().contains(field));
        }
    }

    #[test]
    fn null_field_counts_as_missing() {
        let mut body = valid();
        body["voice_type"] = Value::Null;
        assert_eq!(status_of(&body), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn all_missing_fields_are_listed() {
        let err = SpeechFileRequest::from_body(Some(&json!({}))).unwrap_err();
        match err {
            ValidationError::MissingFields(fields) => assert_eq!(fields, REQUIRED_FIELDS.to_vec()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn missing_or_malformed_body_is_a_bad_request() {
        for body in [None, Some(Value::Null)] {
            let err = SpeechFileRequest::from_body(body.as_ref()).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        }

        assert_eq!(status_of(&Value::String("{not json".to_owned())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(&json!(["demo"])), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(&Value::String("42".to_owned())), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unknown_voice_is_unprocessable() {
        let mut body = valid();
        body["voice_type"] = json!("robot");

        let err = SpeechFileRequest::from_body(Some(&body)).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.to_string().contains("alloy, echo, fable, onyx, nova, shimmer"));
    }

    #[test]
    fn wrong_type_is_unprocessable() {
        let mut body = valid();
        body["output_name"] = json!(5);
        assert_eq!(status_of(&body), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn blank_values_are_unprocessable() {
        let mut body = valid();
        body["text_to_read"] = json!("   ");
        assert_eq!(status_of(&body), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn length_limits_count_characters() {
        let mut body = valid();
        body["output_name"] = json!("é".repeat(MAX_OUTPUT_NAME_CHARS));
        assert!(SpeechFileRequest::from_body(Some(&body)).is_ok());

        body["output_name"] = json!("a".repeat(MAX_OUTPUT_NAME_CHARS + 1));
        assert_eq!(status_of(&body), StatusCode::UNPROCESSABLE_ENTITY);

        let mut body = valid();
        body["text_to_read"] = json!("a".repeat(MAX_TEXT_CHARS));
        assert!(SpeechFileRequest::from_body(Some(&body)).is_ok());

        body["text_to_read"] = json!("a".repeat(MAX_TEXT_CHARS + 1));
        let err = SpeechFileRequest::from_body(Some(&body)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { field: "text_to_read", max: 250, len: 251 }));
    }
}
