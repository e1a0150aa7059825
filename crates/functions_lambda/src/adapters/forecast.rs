use serde_json::Value;

/// Fixed external HTTP endpoint serving a forecast document.
pub trait ForecastSource {
    fn fetch_forecast(&self) -> Result<Value, String>;
}
