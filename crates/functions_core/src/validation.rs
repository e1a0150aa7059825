use serde_json::Value;

/// Client-input fault. The message names the violation and is safe to
/// return in a 400 response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Assert that every named field is present and non-empty on a JSON object.
///
/// A field is missing when absent, null, or an empty string. The error
/// names the first missing field.
pub fn require_fields(payload: &Value, fields: &[&str]) -> Result<(), ValidationError> {
    let Some(object) = payload.as_object() else {
        return Err(ValidationError::new("Request body must be a JSON object"));
    };

    for field in fields {
        let present = match object.get(*field) {
            None | Some(Value::Null) => false,
            Some(Value::String(text)) => !text.is_empty(),
            Some(_) => true,
        };
        if !present {
            return Err(ValidationError::new(format!("{field} is required")));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn accepts_payload_with_all_fields() {
        let payload = json!({"email": "a@b.c", "password": "secret", "attempts": 0});
        require_fields(&payload, &["email", "password", "attempts"])
            .expect("all fields are present");
    }

    #[test]
    fn names_the_first_missing_field() {
        let payload = json!({"email": "a@b.c"});
        let error =
            require_fields(&payload, &["email", "password"]).expect_err("password is missing");
        assert_eq!(error.message(), "password is required");
    }

    #[test]
    fn treats_null_and_empty_string_as_missing() {
        let error = require_fields(&json!({"email": null}), &["email"])
            .expect_err("null should not count");
        assert_eq!(error.message(), "email is required");

        let error = require_fields(&json!({"email": ""}), &["email"])
            .expect_err("empty string should not count");
        assert_eq!(error.message(), "email is required");
    }

    #[test]
    fn rejects_non_object_payloads() {
        let error = require_fields(&json!([1, 2]), &["email"]).expect_err("arrays are not valid");
        assert_eq!(error.message(), "Request body must be a JSON object");
    }
}
