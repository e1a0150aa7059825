//! Fixed-size UUID batch writer.
//!
//! Failures here are not recovered locally; the caller returns them to the
//! invoking runtime.

use serde_json::json;
use uuid::Uuid;

use crate::adapters::object_store::ObjectStore;
use crate::logging::log_info;

pub const BATCH_SIZE: usize = 10;

/// Generate [`BATCH_SIZE`] UUIDs and write them as one JSON object keyed by
/// the invocation timestamp. Returns the object key.
pub fn write_uuid_batch(store: &dyn ObjectStore, timestamp: &str) -> Result<String, String> {
    let ids: Vec<String> = (0..BATCH_SIZE)
        .map(|_| Uuid::new_v4().to_string())
        .collect();

    let payload = json!({"ids": ids});
    let body = serde_json::to_string_pretty(&payload)
        .map_err(|error| format!("failed to serialize uuid batch: {error}"))?;

    store.put_object(timestamp, body.as_bytes(), "application/json")?;

    log_info(
        "uuid_generator",
        "batch_written",
        json!({"key": timestamp, "count": BATCH_SIZE}),
    );
    Ok(timestamp.to_string())
}
