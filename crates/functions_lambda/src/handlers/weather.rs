//! External data fetch: pull a forecast document, reshape a fixed field
//! subset, and persist it.

use functions_core::response::{plain_response, ApiResponse};
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::adapters::document_store::DocumentStore;
use crate::adapters::forecast::ForecastSource;
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "weather_processor";

pub const WEATHER_API_URL: &str = "https://api.open-meteo.com/v1/forecast?latitude=50.4375&longitude=30.5&hourly=temperature_2m&timezone=auto";

/// Forecast fields carried over into the stored record; everything else in
/// the upstream payload is dropped.
const FORECAST_FIELDS: &[&str] = &[
    "elevation",
    "generationtime_ms",
    "hourly",
    "hourly_units",
    "latitude",
    "longitude",
    "timezone",
    "timezone_abbreviation",
    "utc_offset_seconds",
];

pub fn handle_weather_event(
    source: &dyn ForecastSource,
    store: &dyn DocumentStore,
    table: &str,
) -> ApiResponse {
    log_info(COMPONENT, "fetch_started", json!({"table": table}));

    match fetch_and_store(source, store, table) {
        Ok(record) => plain_response(
            200,
            json!({"message": "Weather data stored", "data": record}),
        ),
        Err(error) => {
            log_error(COMPONENT, "fetch_or_store_failed", json!({"error": error}));
            plain_response(500, json!({"error": "Failed to fetch/store weather data"}))
        }
    }
}

fn fetch_and_store(
    source: &dyn ForecastSource,
    store: &dyn DocumentStore,
    table: &str,
) -> Result<Value, String> {
    let payload = source.fetch_forecast()?;
    let record = json!({
        "id": Uuid::new_v4().to_string(),
        "forecast": reshape_forecast(&payload),
    });
    store.put_item(table, &record)?;
    Ok(record)
}

fn reshape_forecast(payload: &Value) -> Value {
    let mut forecast = Map::new();
    for field in FORECAST_FIELDS {
        if let Some(value) = payload.get(*field) {
            forecast.insert((*field).to_string(), value.clone());
        }
    }
    Value::Object(forecast)
}
