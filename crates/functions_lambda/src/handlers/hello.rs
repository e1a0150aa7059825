//! Minimal hello function over the HTTP API v2 event shape.

use functions_core::response::{plain_response, ApiResponse};
use serde_json::{json, Value};

pub fn handle_hello_event(event: &Value) -> ApiResponse {
    let path = event.get("rawPath").and_then(Value::as_str).unwrap_or("/");
    let method = event
        .pointer("/requestContext/http/method")
        .and_then(Value::as_str)
        .unwrap_or("UNKNOWN");

    if method == "GET" && path == "/hello" {
        plain_response(
            200,
            json!({"statusCode": 200, "message": "Hello from Lambda"}),
        )
    } else {
        plain_response(
            400,
            json!({
                "statusCode": 400,
                "message": format!(
                    "Bad request syntax or unsupported method. Request path: {path}. HTTP method: {method}"
                ),
            }),
        )
    }
}
