use std::collections::HashMap;

use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// API Gateway proxy response envelope
///
/// Headers stay empty; the fields exist because the proxy integration
/// requires them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub is_base64_encoded: bool,
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub multi_value_headers: HashMap<String, Vec<String>>,
    /// JSON-encoded response body
    pub body: String,
}

impl ProxyResponse {
    /// Decode the JSON body
    pub fn body_json(&self) -> serde_json::Result<Value> {
        serde_json::from_str(&self.body)
    }
}

/// Shape a response envelope
///
/// The body always carries `message` and `success` (true only for 200);
/// `extras` are merged into the top level of the body.
pub fn respond(status: StatusCode, message: &str, extras: Map<String, Value>) -> ProxyResponse {
    let mut body = Map::new();
    body.insert("message".to_owned(), Value::from(message));
    body.insert("success".to_owned(), Value::Bool(status == StatusCode::OK));
    body.extend(extras);

    ProxyResponse {
        is_base64_encoded: false,
        status_code: status.as_u16(),
        headers: HashMap::new(),
        multi_value_headers: HashMap::new(),
        body: Value::Object(body).to_string(),
    }
}
