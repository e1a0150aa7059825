use aws_config::{BehaviorVersion, Region};
use chrono::{SecondsFormat, Utc};
use functions_lambda::adapters::aws::S3ObjectStore;
use functions_lambda::config::HandlerConfig;
use functions_lambda::handlers::uuid_batch::write_uuid_batch;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::{json, Value};

async fn handle_request(_event: LambdaEvent<Value>, store: &S3ObjectStore) -> Result<Value, Error> {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    // No local recovery: a failed write is the invocation's failure.
    let key = write_uuid_batch(store, &timestamp).map_err(Error::from)?;
    Ok(json!({"key": key}))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env();
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let store = S3ObjectStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.uuid_bucket.clone(),
    );

    lambda_runtime::run(service_fn(|event| handle_request(event, &store))).await
}
