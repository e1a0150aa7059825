use aws_config::{BehaviorVersion, Region};
use functions_core::response::ApiResponse;
use functions_lambda::adapters::aws::{DynamoDocumentStore, HttpForecastSource};
use functions_lambda::config::HandlerConfig;
use functions_lambda::handlers::weather::{handle_weather_event, WEATHER_API_URL};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    _event: LambdaEvent<Value>,
    source: &HttpForecastSource,
    store: &DynamoDocumentStore,
    table: &str,
) -> Result<ApiResponse, Error> {
    Ok(handle_weather_event(source, store, table))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env();
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let source = HttpForecastSource::new(WEATHER_API_URL);
    let store = DynamoDocumentStore::new(aws_sdk_dynamodb::Client::new(&aws_config));

    lambda_runtime::run(service_fn(|event| {
        handle_request(event, &source, &store, &config.weather_table)
    }))
    .await
}
