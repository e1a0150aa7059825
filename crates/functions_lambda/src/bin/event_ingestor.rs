use aws_config::{BehaviorVersion, Region};
use chrono::{SecondsFormat, Utc};
use functions_core::response::ApiResponse;
use functions_lambda::adapters::aws::DynamoDocumentStore;
use functions_lambda::config::HandlerConfig;
use functions_lambda::handlers::events::handle_ingest_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &DynamoDocumentStore,
    table: &str,
) -> Result<ApiResponse, Error> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Ok(handle_ingest_event(&event.payload, store, table, &now))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env();
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let store = DynamoDocumentStore::new(aws_sdk_dynamodb::Client::new(&aws_config));

    lambda_runtime::run(service_fn(|event| {
        handle_request(event, &store, &config.events_table)
    }))
    .await
}
