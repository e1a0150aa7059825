use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Response envelope returned to the invoking gateway.
///
/// Formatting is pure and never fails for well-formed payloads; the body is
/// always a JSON-encoded string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Response with the plain header profile.
pub fn plain_response(status_code: u16, payload: impl Serialize) -> ApiResponse {
    ApiResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serialize_body(payload),
    }
}

/// Response for browser-facing endpoints: plain profile plus permissive
/// cross-origin headers.
pub fn cors_response(status_code: u16, payload: impl Serialize) -> ApiResponse {
    ApiResponse {
        status_code,
        headers: json!({
            "Access-Control-Allow-Origin": "*",
            "Access-Control-Allow-Headers": "Content-Type,Authorization",
            "Access-Control-Allow-Methods": "OPTIONS,POST,GET",
            "Content-Type": "application/json",
        }),
        body: serialize_body(payload),
    }
}

fn serialize_body(payload: impl Serialize) -> String {
    serde_json::to_string(&payload).expect("response payload should serialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_response_serializes_body_as_text() {
        let response = plain_response(201, json!({"statusCode": 201, "ok": true}));

        assert_eq!(response.status_code, 201);
        assert_eq!(response.headers["Content-Type"], "application/json");
        let body: Value = serde_json::from_str(&response.body).expect("body should be JSON text");
        assert_eq!(body["statusCode"], 201);
    }

    #[test]
    fn cors_response_carries_permissive_headers() {
        let response = cors_response(200, json!({"message": "ok"}));

        assert_eq!(response.headers["Access-Control-Allow-Origin"], "*");
        assert_eq!(
            response.headers["Access-Control-Allow-Headers"],
            "Content-Type,Authorization"
        );
        assert_eq!(
            response.headers["Access-Control-Allow-Methods"],
            "OPTIONS,POST,GET"
        );
        assert_eq!(response.headers["Content-Type"], "application/json");
    }

    #[test]
    fn response_envelope_uses_gateway_field_names() {
        let response = plain_response(404, json!({"message": "Not Found"}));
        let raw = serde_json::to_value(&response).expect("envelope should serialize");

        assert_eq!(raw["statusCode"], 404);
        assert!(raw["body"].is_string());
    }
}
