//! AWS implementations of the capability traits.
//!
//! The handlers are synchronous; these adapters bridge to the async SDK
//! clients by blocking in place on the ambient runtime.

use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType, MessageActionType};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_s3::primitives::ByteStream;
use serde_json::{Map, Value};

use crate::adapters::document_store::DocumentStore;
use crate::adapters::forecast::ForecastSource;
use crate::adapters::identity::{IdentityError, IdentityProvider};
use crate::adapters::object_store::ObjectStore;

fn block_on<F, T>(future: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

pub struct CognitoIdentity {
    client: aws_sdk_cognitoidentityprovider::Client,
    user_pool_id: String,
    client_id: String,
}

impl CognitoIdentity {
    pub fn new(
        client: aws_sdk_cognitoidentityprovider::Client,
        user_pool_id: String,
        client_id: String,
    ) -> Self {
        Self {
            client,
            user_pool_id,
            client_id,
        }
    }
}

fn user_attribute(name: &str, value: &str) -> Result<AttributeType, IdentityError> {
    AttributeType::builder()
        .name(name)
        .value(value)
        .build()
        .map_err(|error| IdentityError::Upstream(format!("invalid user attribute: {error}")))
}

impl IdentityProvider for CognitoIdentity {
    fn create_account(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        temporary_password: &str,
    ) -> Result<(), IdentityError> {
        let request = self
            .client
            .admin_create_user()
            .user_pool_id(&self.user_pool_id)
            .username(email)
            .user_attributes(user_attribute("given_name", first_name)?)
            .user_attributes(user_attribute("family_name", last_name)?)
            .user_attributes(user_attribute("email", email)?)
            .user_attributes(user_attribute("email_verified", "true")?)
            .temporary_password(temporary_password)
            .message_action(MessageActionType::Suppress);

        block_on(async move {
            request.send().await.map(|_| ()).map_err(|error| {
                let service_error = error.into_service_error();
                if service_error.is_username_exists_exception() {
                    IdentityError::AccountExists
                } else {
                    IdentityError::Upstream(format!("failed to create account: {service_error}"))
                }
            })
        })
    }

    fn set_permanent_password(&self, email: &str, password: &str) -> Result<(), IdentityError> {
        let request = self
            .client
            .admin_set_user_password()
            .user_pool_id(&self.user_pool_id)
            .username(email)
            .password(password)
            .permanent(true);

        block_on(async move {
            request.send().await.map(|_| ()).map_err(|error| {
                IdentityError::Upstream(format!("failed to set permanent password: {error}"))
            })
        })
    }

    fn authenticate(&self, email: &str, password: &str) -> Result<String, IdentityError> {
        let request = self
            .client
            .admin_initiate_auth()
            .auth_flow(AuthFlowType::AdminUserPasswordAuth)
            .user_pool_id(&self.user_pool_id)
            .client_id(&self.client_id)
            .auth_parameters("USERNAME", email)
            .auth_parameters("PASSWORD", password);

        block_on(async move {
            let output = request.send().await.map_err(|error| {
                let service_error = error.into_service_error();
                if service_error.is_not_authorized_exception()
                    || service_error.is_user_not_found_exception()
                {
                    IdentityError::AuthenticationFailed
                } else {
                    IdentityError::Upstream(format!("failed to authenticate: {service_error}"))
                }
            })?;

            output
                .authentication_result()
                .and_then(|result| result.id_token())
                .map(str::to_string)
                .ok_or(IdentityError::AuthenticationFailed)
        })
    }
}

pub struct DynamoDocumentStore {
    client: aws_sdk_dynamodb::Client,
}

impl DynamoDocumentStore {
    pub fn new(client: aws_sdk_dynamodb::Client) -> Self {
        Self { client }
    }
}

impl DocumentStore for DynamoDocumentStore {
    fn put_item(&self, table: &str, item: &Value) -> Result<(), String> {
        let attributes = value_to_item(item)?;
        let request = self
            .client
            .put_item()
            .table_name(table)
            .set_item(Some(attributes));

        block_on(async move {
            request
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to put item: {error}"))
        })
    }

    fn get_item(&self, table: &str, id: &str) -> Result<Option<Value>, String> {
        let request = self
            .client
            .get_item()
            .table_name(table)
            .key("id", AttributeValue::S(id.to_string()));

        block_on(async move {
            let output = request
                .send()
                .await
                .map_err(|error| format!("failed to get item: {error}"))?;
            Ok(output.item().map(item_to_value))
        })
    }

    fn scan(&self, table: &str) -> Result<Vec<Value>, String> {
        let request = self.client.scan().table_name(table);

        block_on(async move {
            let output = request
                .send()
                .await
                .map_err(|error| format!("failed to scan table: {error}"))?;
            Ok(output.items().iter().map(item_to_value).collect())
        })
    }
}

pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3ObjectStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

impl ObjectStore for S3ObjectStore {
    fn put_object(&self, key: &str, body: &[u8], content_type: &str) -> Result<(), String> {
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body.to_vec()))
            .content_type(content_type);

        block_on(async move {
            request
                .send()
                .await
                .map(|_| ())
                .map_err(|error| format!("failed to write object to s3: {error}"))
        })
    }
}

pub struct HttpForecastSource {
    client: reqwest::Client,
    url: String,
}

impl HttpForecastSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl ForecastSource for HttpForecastSource {
    fn fetch_forecast(&self) -> Result<Value, String> {
        let client = self.client.clone();
        let url = self.url.clone();

        block_on(async move {
            let response = client
                .get(&url)
                .send()
                .await
                .map_err(|error| format!("failed to fetch forecast: {error}"))?
                .error_for_status()
                .map_err(|error| format!("forecast endpoint returned an error: {error}"))?;
            response
                .json::<Value>()
                .await
                .map_err(|error| format!("failed to decode forecast payload: {error}"))
        })
    }
}

/// Convert a JSON object into a document-store item.
pub fn value_to_item(value: &Value) -> Result<HashMap<String, AttributeValue>, String> {
    let Some(object) = value.as_object() else {
        return Err("document-store items must be JSON objects".to_string());
    };

    object
        .iter()
        .map(|(name, field)| Ok((name.clone(), value_to_attribute(field)?)))
        .collect()
}

fn value_to_attribute(value: &Value) -> Result<AttributeValue, String> {
    match value {
        Value::Null => Ok(AttributeValue::Null(true)),
        Value::Bool(flag) => Ok(AttributeValue::Bool(*flag)),
        Value::Number(number) => Ok(AttributeValue::N(number.to_string())),
        Value::String(text) => Ok(AttributeValue::S(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(value_to_attribute)
            .collect::<Result<Vec<_>, _>>()
            .map(AttributeValue::L),
        Value::Object(fields) => fields
            .iter()
            .map(|(name, field)| Ok((name.clone(), value_to_attribute(field)?)))
            .collect::<Result<HashMap<_, _>, String>>()
            .map(AttributeValue::M),
    }
}

/// Convert a document-store item back into a JSON object.
pub fn item_to_value(item: &HashMap<String, AttributeValue>) -> Value {
    let mut object = Map::new();
    for (name, attribute) in item {
        object.insert(name.clone(), attribute_to_value(attribute));
    }
    Value::Object(object)
}

fn attribute_to_value(attribute: &AttributeValue) -> Value {
    match attribute {
        AttributeValue::S(text) => Value::String(text.clone()),
        AttributeValue::N(number) => parse_number(number),
        AttributeValue::Bool(flag) => Value::Bool(*flag),
        AttributeValue::Null(_) => Value::Null,
        AttributeValue::L(items) => Value::Array(items.iter().map(attribute_to_value).collect()),
        AttributeValue::M(fields) => item_to_value(fields),
        // Binary and set shapes are never written by this system.
        _ => Value::Null,
    }
}

fn parse_number(text: &str) -> Value {
    if let Ok(integer) = text.parse::<i64>() {
        return Value::from(integer);
    }
    text.parse::<f64>()
        .ok()
        .and_then(serde_json::Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(text.to_string()))
}
