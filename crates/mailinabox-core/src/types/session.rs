use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Status tag the API uses for a successful session exchange
pub const SESSION_OK: &str = "ok";

/// Result of a login or logout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// API key usable in place of the password
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,

    /// Logged in address
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email: String,

    /// Privileges of the logged in user
    #[serde(default, deserialize_with = "null_as_default")]
    pub privileges: Vec<String>,

    /// `ok` on success
    #[serde(default)]
    pub status: String,

    /// Explanation accompanying a failed status
    #[serde(default, alias = "msg", skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Session {
    /// Returns true if the exchange succeeded
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == SESSION_OK
    }

    /// Returns true if the session carries administrator rights
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.privileges.iter().any(|p| p == "admin")
    }
}
