//! Environment-provided configuration with documented fallbacks.

/// Optional sign-up validation policy. Both checks default to off, in which
/// case sign-up validates field presence only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpPolicy {
    pub min_password_length: Option<usize>,
    pub require_email_shape: bool,
}

impl SignUpPolicy {
    /// First policy violation for a candidate email/password pair, if any.
    pub fn check(&self, email: &str, password: &str) -> Option<String> {
        if self.require_email_shape && !has_email_shape(email) {
            return Some("email must have the shape local@domain".to_string());
        }
        if let Some(minimum) = self.min_password_length {
            if password.chars().count() < minimum {
                return Some(format!("password must be at least {minimum} characters"));
            }
        }
        None
    }
}

fn has_email_shape(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerConfig {
    pub user_pool_id: String,
    pub client_id: String,
    pub tables_table: String,
    pub reservations_table: String,
    pub events_table: String,
    pub weather_table: String,
    pub uuid_bucket: String,
    pub region: String,
    pub sign_up_policy: SignUpPolicy,
}

impl HandlerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an injected variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            user_pool_id: lookup("cup_id").unwrap_or_default(),
            client_id: lookup("cup_client_id").unwrap_or_default(),
            tables_table: lookup("tables_table").unwrap_or_else(|| "Tables".to_string()),
            reservations_table: lookup("reservations_table")
                .unwrap_or_else(|| "Reservations".to_string()),
            events_table: lookup("TABLE_NAME").unwrap_or_else(|| "Events".to_string()),
            weather_table: lookup("WEATHER_TABLE").unwrap_or_else(|| "Weather".to_string()),
            uuid_bucket: lookup("S3_BUCKET_NAME").unwrap_or_else(|| "uuid-storage".to_string()),
            region: lookup("AWS_REGION").unwrap_or_else(|| "eu-west-1".to_string()),
            sign_up_policy: SignUpPolicy {
                min_password_length: lookup("MIN_PASSWORD_LENGTH")
                    .and_then(|value| value.parse().ok()),
                require_email_shape: lookup("REQUIRE_EMAIL_SHAPE")
                    .map(|value| value == "true" || value == "1")
                    .unwrap_or(false),
            },
        }
    }
}
