use aws_config::{BehaviorVersion, Region};
use chrono::{SecondsFormat, Utc};
use functions_core::response::ApiResponse;
use functions_core::routing::RouteTable;
use functions_lambda::adapters::aws::{CognitoIdentity, DynamoDocumentStore};
use functions_lambda::config::HandlerConfig;
use functions_lambda::handlers::api::{handle_api_event, ApiDependencies};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(
    event: LambdaEvent<Value>,
    deps: &ApiDependencies<'_>,
) -> Result<ApiResponse, Error> {
    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    Ok(handle_api_event(&event.payload, deps, &now))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = HandlerConfig::from_env();
    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .load()
        .await;

    let identity = CognitoIdentity::new(
        aws_sdk_cognitoidentityprovider::Client::new(&aws_config),
        config.user_pool_id.clone(),
        config.client_id.clone(),
    );
    let store = DynamoDocumentStore::new(aws_sdk_dynamodb::Client::new(&aws_config));
    let routes = RouteTable::with_registered_routes();
    let deps = ApiDependencies {
        routes: &routes,
        identity: &identity,
        store: &store,
        config: &config,
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &deps))).await
}
