/// Failure classes of the identity store that the response contract
/// distinguishes. Everything else collapses into `Upstream`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    /// An account with the given email already exists.
    AccountExists,
    /// The store rejected the credentials. Covers unknown account and wrong
    /// password alike; callers must not distinguish the two.
    AuthenticationFailed,
    Upstream(String),
}

/// External managed identity service: account provisioning and
/// password-based authentication.
pub trait IdentityProvider {
    /// Provision an account with a temporary credential.
    fn create_account(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        temporary_password: &str,
    ) -> Result<(), IdentityError>;

    /// Promote the temporary credential to a permanent one.
    fn set_permanent_password(&self, email: &str, password: &str) -> Result<(), IdentityError>;

    /// Exchange credentials for a session token.
    fn authenticate(&self, email: &str, password: &str) -> Result<String, IdentityError>;
}
