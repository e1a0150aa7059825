//! Inbound event envelope parsing.
//!
//! Two envelope shapes arrive from the platform: the HTTP-style gateway
//! event (method, resource template, path parameters, optional
//! caller-identity claims, body) and the batch envelope (an ordered
//! `Records` list from a queue or notification topic).
//!
//! The caller-identity claim is asserted by the upstream gateway after its
//! own authentication check. This component trusts it as-is and performs no
//! token verification of its own.

use serde_json::{json, Value};

use crate::validation::ValidationError;

/// Method and resource template of a gateway event. Absent fields yield
/// empty strings, which never match a registered route.
pub fn method_and_resource(event: &Value) -> (&str, &str) {
    let method = event.get("httpMethod").and_then(Value::as_str).unwrap_or("");
    let resource = event.get("resource").and_then(Value::as_str).unwrap_or("");
    (method, resource)
}

/// Resolve the request body to a JSON object.
///
/// A string body is decoded as JSON; an already-structured object passes
/// through; a null body becomes an empty object. When no `body` field is
/// present the event itself is the payload (direct invocation).
pub fn normalize_body(event: &Value) -> Result<Value, ValidationError> {
    let Some(object) = event.as_object() else {
        return Err(ValidationError::new("Request payload must be a JSON object"));
    };

    let Some(body) = object.get("body") else {
        return Ok(event.clone());
    };

    match body {
        Value::Null => Ok(json!({})),
        Value::Object(_) => Ok(body.clone()),
        Value::String(text) => serde_json::from_str(text)
            .map_err(|_| ValidationError::new("Invalid JSON format in request body")),
        _ => Err(ValidationError::new("Request body must be a JSON object")),
    }
}

/// Username claim asserted by the upstream authorizer, when present.
pub fn caller_username(event: &Value) -> Option<&str> {
    event
        .pointer("/requestContext/authorizer/claims/cognito:username")
        .and_then(Value::as_str)
        .filter(|claim| !claim.is_empty())
}

/// A named path parameter supplied by the gateway.
pub fn path_parameter<'a>(event: &'a Value, name: &str) -> Option<&'a str> {
    event
        .get("pathParameters")
        .and_then(|parameters| parameters.get(name))
        .and_then(Value::as_str)
}

/// Records of a batch envelope, in delivery order. A missing or non-array
/// `Records` field yields an empty batch.
pub fn batch_records(event: &Value) -> Vec<&Value> {
    event
        .get("Records")
        .and_then(Value::as_array)
        .map(|records| records.iter().collect())
        .unwrap_or_default()
}

/// The message body of a queued record, rendered as text. Non-string bodies
/// are rendered as their JSON encoding.
pub fn queue_message_body(record: &Value) -> Option<String> {
    record.get("body").map(render_payload)
}

/// The notification payload of a topic record, rendered as text.
pub fn notification_message(record: &Value) -> Option<String> {
    record.pointer("/Sns/Message").map(render_payload)
}

fn render_payload(payload: &Value) -> String {
    match payload {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_method_and_resource() {
        let event = json!({"httpMethod": "GET", "resource": "/tables/{tableId}"});
        assert_eq!(method_and_resource(&event), ("GET", "/tables/{tableId}"));
    }

    #[test]
    fn missing_method_and_resource_yield_empty_strings() {
        let event = json!({});
        assert_eq!(method_and_resource(&event), ("", ""));
    }

    #[test]
    fn normalizes_encoded_string_body() {
        let event = json!({"body": "{\"email\":\"a@b.c\"}"});
        let body = normalize_body(&event).expect("body should parse");
        assert_eq!(body["email"], "a@b.c");
    }

    #[test]
    fn passes_structured_body_through() {
        let event = json!({"body": {"email": "a@b.c"}});
        let body = normalize_body(&event).expect("body should pass through");
        assert_eq!(body["email"], "a@b.c");
    }

    #[test]
    fn null_body_becomes_empty_object() {
        let event = json!({"body": null});
        let body = normalize_body(&event).expect("null body should normalize");
        assert_eq!(body, json!({}));
    }

    #[test]
    fn absent_body_falls_back_to_the_event_itself() {
        let event = json!({"principalId": 7, "content": "x"});
        let body = normalize_body(&event).expect("direct payload should pass");
        assert_eq!(body["principalId"], 7);
    }

    #[test]
    fn malformed_encoded_body_is_a_client_error() {
        let event = json!({"body": "{not json"});
        let error = normalize_body(&event).expect_err("malformed body should fail");
        assert_eq!(error.message(), "Invalid JSON format in request body");
    }

    #[test]
    fn non_object_body_is_a_client_error() {
        let event = json!({"body": 42});
        assert!(normalize_body(&event).is_err());
    }

    #[test]
    fn extracts_caller_username_claim() {
        let event = json!({
            "requestContext": {
                "authorizer": {"claims": {"cognito:username": "ada"}}
            }
        });
        assert_eq!(caller_username(&event), Some("ada"));
    }

    #[test]
    fn missing_or_empty_claim_is_absent() {
        assert_eq!(caller_username(&json!({})), None);

        let event = json!({
            "requestContext": {
                "authorizer": {"claims": {"cognito:username": ""}}
            }
        });
        assert_eq!(caller_username(&event), None);
    }

    #[test]
    fn reads_named_path_parameter() {
        let event = json!({"pathParameters": {"tableId": "17"}});
        assert_eq!(path_parameter(&event, "tableId"), Some("17"));
        assert_eq!(path_parameter(&event, "other"), None);
    }

    #[test]
    fn batch_records_preserve_delivery_order() {
        let event = json!({
            "Records": [
                {"body": "first"},
                {"body": "second"},
                {"body": {"n": 3}}
            ]
        });

        let bodies: Vec<String> = batch_records(&event)
            .into_iter()
            .filter_map(queue_message_body)
            .collect();
        assert_eq!(bodies, vec!["first", "second", "{\"n\":3}"]);
    }

    #[test]
    fn missing_records_field_is_an_empty_batch() {
        assert!(batch_records(&json!({})).is_empty());
    }

    #[test]
    fn extracts_notification_payload() {
        let record = json!({"Sns": {"Message": "hello"}});
        assert_eq!(notification_message(&record), Some("hello".to_string()));
        assert_eq!(notification_message(&json!({"body": "x"})), None);
    }
}
