//! Direct invocations of the handler with API Gateway proxy events

mod harness;

use harness::backends::Backends;
use harness::config::ConfigBuilder;
use serde_json::json;
use voxdrop_handler::{Handler, ProxyEvent};

async fn handler_for(backends: &Backends) -> Handler {
    Handler::from_config(&ConfigBuilder::new(backends).build())
        .await
        .unwrap()
}

#[tokio::test]
async fn api_gateway_event_produces_envelope() {
    let backends = Backends::healthy().await;
    let handler = handler_for(&backends).await;

    let event: ProxyEvent = serde_json::from_value(json!({
        "resource": "/speech-files",
        "path": "/speech-files",
        "httpMethod": "POST",
        "headers": { "content-type": "application/json" },
        "requestContext": { "requestId": "c6af9ac6-7b61-11e6-9a41-93e8deadbeef" },
        "body": "{\"output_name\":\"greeting\",\"text_to_read\":\"Good morning\",\"voice_type\":\"alloy\"}",
        "isBase64Encoded": false
    }))
    .unwrap();

    let response = handler.handle_event(&event).await;

    assert_eq!(response.status_code, 200);
    assert!(!response.is_base64_encoded);

    let envelope = serde_json::to_value(&response).unwrap();
    assert_eq!(envelope["headers"], json!({}));
    assert_eq!(envelope["multiValueHeaders"], json!({}));

    let body = response.body_json().unwrap();
    assert_eq!(body["success"], true);
    assert!(body["file_url"].as_str().unwrap().contains("/voice-files/greeting.mp3"));
    assert_eq!(backends.stored_paths().await, vec!["/voice-files/greeting.mp3".to_owned()]);
}

#[tokio::test]
async fn direct_invocation_accepts_object_body() {
    let backends = Backends::healthy().await;
    let handler = handler_for(&backends).await;

    let event = ProxyEvent {
        body: Some(json!({
            "output_name": "direct",
            "text_to_read": "Invoked without API Gateway",
            "voice_type": "shimmer"
        })),
        is_base64_encoded: false,
    };

    let response = handler.handle_event(&event).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(backends.stored_paths().await, vec!["/voice-files/direct.mp3".to_owned()]);
}

#[tokio::test]
async fn event_without_body_is_bad_request() {
    let backends = Backends::healthy().await;
    let handler = handler_for(&backends).await;

    let event: ProxyEvent = serde_json::from_value(json!({ "httpMethod": "POST" })).unwrap();
    let response = handler.handle_event(&event).await;

    assert_eq!(response.status_code, 400);
    assert_eq!(response.body_json().unwrap()["success"], false);
    assert_eq!(backends.speech_calls().await, 0);
}
