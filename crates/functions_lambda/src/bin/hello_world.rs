use functions_core::response::ApiResponse;
use functions_lambda::handlers::hello::handle_hello_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

async fn handle_request(event: LambdaEvent<Value>) -> Result<ApiResponse, Error> {
    Ok(handle_hello_event(&event.payload))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    lambda_runtime::run(service_fn(handle_request)).await
}
