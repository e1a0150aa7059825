//! Queue and notification batch consumers.
//!
//! Records are processed strictly in delivery order with no per-record
//! isolation; bodies are logged, never parsed. The response is always 200
//! once the batch is exhausted — there is no partial-failure signaling back
//! to the source.

use functions_core::envelope::{batch_records, notification_message, queue_message_body};
use serde_json::{json, Value};

use crate::logging::log_info;

/// Consume a queue batch, logging every message body. Returns the logged
/// bodies in delivery order.
pub fn handle_queue_event(event: &Value) -> Vec<String> {
    log_info("sqs_handler", "batch_received", json!({"event": event}));

    let mut bodies = Vec::new();
    for record in batch_records(event) {
        let body = queue_message_body(record).unwrap_or_default();
        log_info("sqs_handler", "message_received", json!({"body": body}));
        bodies.push(body);
    }
    bodies
}

/// Consume a notification batch, logging every payload. Returns the logged
/// payloads in delivery order.
pub fn handle_notification_event(event: &Value) -> Vec<String> {
    log_info("sns_handler", "batch_received", json!({"event": event}));

    let mut messages = Vec::new();
    for record in batch_records(event) {
        let message = notification_message(record).unwrap_or_default();
        log_info("sns_handler", "message_received", json!({"message": message}));
        messages.push(message);
    }
    messages
}

/// The fixed success response returned after any batch, regardless of
/// record content.
pub fn batch_response() -> Value {
    json!({
        "statusCode": 200,
        "body": "Messages processed successfully",
    })
}
