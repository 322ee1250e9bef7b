//! Client configuration types.

use std::time::Duration;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credential pair sent as Basic-Auth with every request
///
/// The password may also be an API key obtained from a login.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Admin login address
    pub email: String,

    /// Password or API key
    pub password: String,
}

impl Credentials {
    /// Create a credential pair
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"****")
            .finish()
    }
}
