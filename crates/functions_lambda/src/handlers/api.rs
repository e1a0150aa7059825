//! Gateway-facing handler: sign-up, sign-in, tables, and reservations.
//!
//! Every response from this handler carries the CORS header profile. Client
//! input faults map to 400, a missing caller claim to 401, unmatched routes
//! and absent resources to 404, and unexpected store failures to 500 with a
//! generic message (detail is logged, never exposed).

use functions_core::envelope::{
    caller_username, method_and_resource, normalize_body, path_parameter,
};
use functions_core::response::{cors_response, ApiResponse};
use functions_core::routing::{Route, RouteTable};
use functions_core::validation::require_fields;
use serde_json::{json, Map, Value};
use uuid::Uuid;

use crate::adapters::document_store::DocumentStore;
use crate::adapters::identity::{IdentityError, IdentityProvider};
use crate::config::HandlerConfig;
use crate::logging::{log_error, log_info};

const COMPONENT: &str = "api_handler";

const RESERVATION_FIELDS: &[&str] = &[
    "tableId",
    "clientName",
    "phoneNumber",
    "date",
    "slotTimeStart",
    "slotTimeEnd",
];

pub struct ApiDependencies<'a> {
    pub routes: &'a RouteTable,
    pub identity: &'a dyn IdentityProvider,
    pub store: &'a dyn DocumentStore,
    pub config: &'a HandlerConfig,
}

pub fn handle_api_event(event: &Value, deps: &ApiDependencies<'_>, now: &str) -> ApiResponse {
    let (method, resource) = method_and_resource(event);
    log_info(
        COMPONENT,
        "event_received",
        json!({"method": method, "resource": resource}),
    );

    let Some(route) = deps.routes.resolve(method, resource) else {
        return cors_response(404, json!({"message": "Not Found"}));
    };

    if route_requires_caller(route) {
        match caller_username(event) {
            Some(username) => {
                log_info(COMPONENT, "caller_authorized", json!({"username": username}));
            }
            None => {
                log_error(
                    COMPONENT,
                    "missing_caller_claim",
                    json!({"method": method, "resource": resource}),
                );
                return cors_response(401, json!({"message": "Unauthorized"}));
            }
        }
    }

    match route {
        Route::SignUp => sign_up(event, deps),
        Route::SignIn => sign_in(event, deps),
        Route::ListTables => list_tables(deps),
        Route::CreateTable => create_table(event, deps),
        Route::GetTable => get_table(event, deps),
        Route::ListReservations => list_reservations(deps),
        Route::CreateReservation => create_reservation(event, deps, now),
    }
}

fn route_requires_caller(route: Route) -> bool {
    !matches!(route, Route::SignUp | Route::SignIn)
}

fn sign_up(event: &Value, deps: &ApiDependencies<'_>) -> ApiResponse {
    let payload = match normalize_body(event) {
        Ok(value) => value,
        Err(error) => return cors_response(400, json!({"error": error.message()})),
    };

    let (Some(first_name), Some(last_name), Some(email), Some(password)) = (
        string_field(&payload, "firstName"),
        string_field(&payload, "lastName"),
        string_field(&payload, "email"),
        string_field(&payload, "password"),
    ) else {
        return cors_response(400, json!({"error": "All fields are required."}));
    };

    if let Some(violation) = deps.config.sign_up_policy.check(email, password) {
        return cors_response(400, json!({"error": violation}));
    }

    match deps
        .identity
        .create_account(email, first_name, last_name, password)
    {
        Ok(()) => {}
        Err(IdentityError::AccountExists) => {
            log_error(COMPONENT, "sign_up_duplicate", json!({"email": email}));
            return cors_response(400, json!({"error": "Email already exists."}));
        }
        Err(error) => {
            log_error(
                COMPONENT,
                "sign_up_failed",
                json!({"error": format!("{error:?}")}),
            );
            return cors_response(500, json!({"error": "Signup failed. Internal Server Error."}));
        }
    }

    if let Err(error) = deps.identity.set_permanent_password(email, password) {
        log_error(
            COMPONENT,
            "sign_up_password_promotion_failed",
            json!({"error": format!("{error:?}")}),
        );
        return cors_response(500, json!({"error": "Signup failed. Internal Server Error."}));
    }

    cors_response(200, json!({"message": "User created successfully."}))
}

fn sign_in(event: &Value, deps: &ApiDependencies<'_>) -> ApiResponse {
    let payload = match normalize_body(event) {
        Ok(value) => value,
        Err(error) => return cors_response(400, json!({"error": error.message()})),
    };

    let (Some(email), Some(password)) = (
        string_field(&payload, "email"),
        string_field(&payload, "password"),
    ) else {
        return cors_response(400, json!({"error": "Email and password are required."}));
    };

    match deps.identity.authenticate(email, password) {
        Ok(token) => cors_response(200, json!({"idToken": token})),
        // One generic message for unknown account and wrong password alike.
        Err(IdentityError::AuthenticationFailed) => {
            log_error(COMPONENT, "sign_in_rejected", json!({"email": email}));
            cors_response(400, json!({"error": "Invalid email or password."}))
        }
        Err(error) => {
            log_error(
                COMPONENT,
                "sign_in_failed",
                json!({"error": format!("{error:?}")}),
            );
            cors_response(500, json!({"error": "Sign-in failed. Internal Server Error."}))
        }
    }
}

fn list_tables(deps: &ApiDependencies<'_>) -> ApiResponse {
    match deps.store.scan(&deps.config.tables_table) {
        Ok(items) => cors_response(200, json!({"tables": items})),
        Err(error) => store_failure("list_tables_failed", &error),
    }
}

fn create_table(event: &Value, deps: &ApiDependencies<'_>) -> ApiResponse {
    let payload = match normalize_body(event) {
        Ok(value) => value,
        Err(error) => return cors_response(400, json!({"error": error.message()})),
    };
    let Some(fields) = payload.as_object() else {
        return cors_response(400, json!({"error": "Request body must be a JSON object"}));
    };

    let mut item: Map<String, Value> = fields.clone();
    let id = match item.get("id") {
        Some(value) if !value.is_null() => value.clone(),
        _ => Value::String(Uuid::new_v4().to_string()),
    };
    item.insert("id".to_string(), id.clone());
    if !item.get("minOrder").is_some_and(|value| !value.is_null()) {
        item.insert("minOrder".to_string(), json!(0));
    }

    match deps
        .store
        .put_item(&deps.config.tables_table, &Value::Object(item))
    {
        Ok(()) => cors_response(200, json!({"id": id})),
        Err(error) => store_failure("create_table_failed", &error),
    }
}

fn get_table(event: &Value, deps: &ApiDependencies<'_>) -> ApiResponse {
    let Some(table_id) = path_parameter(event, "tableId") else {
        return cors_response(400, json!({"error": "tableId is required"}));
    };

    match deps.store.get_item(&deps.config.tables_table, table_id) {
        Ok(Some(item)) => cors_response(200, item),
        Ok(None) => cors_response(404, json!({"message": "Table not found"})),
        Err(error) => store_failure("get_table_failed", &error),
    }
}

fn list_reservations(deps: &ApiDependencies<'_>) -> ApiResponse {
    match deps.store.scan(&deps.config.reservations_table) {
        Ok(items) => cors_response(200, json!({"reservations": items})),
        Err(error) => store_failure("list_reservations_failed", &error),
    }
}

fn create_reservation(event: &Value, deps: &ApiDependencies<'_>, now: &str) -> ApiResponse {
    let payload = match normalize_body(event) {
        Ok(value) => value,
        Err(error) => return cors_response(400, json!({"error": error.message()})),
    };

    if let Err(error) = require_fields(&payload, RESERVATION_FIELDS) {
        return cors_response(400, json!({"error": error.message()}));
    }

    let reservation_id = Uuid::new_v4().to_string();
    let reservation = json!({
        "id": reservation_id,
        "tableId": payload["tableId"],
        "clientName": payload["clientName"],
        "phoneNumber": payload["phoneNumber"],
        "date": payload["date"],
        "time": payload["slotTimeStart"],
        "slotTimeEnd": payload["slotTimeEnd"],
        "createdAt": now,
    });

    match deps
        .store
        .put_item(&deps.config.reservations_table, &reservation)
    {
        Ok(()) => cors_response(
            200,
            json!({
                "reservationId": reservation_id,
                "message": "Reservation created successfully",
            }),
        ),
        Err(error) => store_failure("create_reservation_failed", &error),
    }
}

fn store_failure(operation: &str, error: &str) -> ApiResponse {
    log_error(COMPONENT, operation, json!({"error": error}));
    cors_response(500, json!({"message": "Internal Server Error"}))
}

fn string_field<'a>(payload: &'a Value, name: &str) -> Option<&'a str> {
    payload
        .get(name)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
