use serde_json::json;

/// Structured JSON log line on stderr.
pub fn log_info(component: &str, event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

/// Structured JSON error line on stderr. Upstream error detail belongs
/// here, never in a response body.
pub fn log_error(component: &str, event: &str, details: serde_json::Value) {
    eprintln!(
        "{}",
        json!({
            "component": component,
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
