//! Event ingestion: validate, stamp, and persist an inbound event record.

use functions_core::envelope::normalize_body;
use functions_core::response::{plain_response, ApiResponse};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::adapters::document_store::DocumentStore;
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "event_ingestor";

pub fn handle_ingest_event(
    event: &Value,
    store: &dyn DocumentStore,
    table: &str,
    now: &str,
) -> ApiResponse {
    log_info(COMPONENT, "event_received", json!({"event": event}));

    let payload = match normalize_body(event) {
        Ok(value) => value,
        Err(error) => return plain_response(400, json!({"message": error.message()})),
    };

    let Some(principal_id) = principal_id(&payload) else {
        return plain_response(
            400,
            json!({"message": "Invalid input: principalId and content are required"}),
        );
    };
    let Some(content) = payload.get("content").filter(|value| !value.is_null()) else {
        return plain_response(
            400,
            json!({"message": "Invalid input: principalId and content are required"}),
        );
    };

    let record = json!({
        "id": Uuid::new_v4().to_string(),
        "principalId": principal_id,
        "createdAt": now,
        "body": content,
    });

    match store.put_item(table, &record) {
        Ok(()) => plain_response(201, json!({"statusCode": 201, "event": record})),
        Err(error) => {
            log_error(COMPONENT, "persist_failed", json!({"error": error}));
            plain_response(500, json!({"message": "Internal Server Error"}))
        }
    }
}

/// The principal identifier as a number; numeric strings are accepted.
fn principal_id(payload: &Value) -> Option<i64> {
    match payload.get("principalId")? {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}
