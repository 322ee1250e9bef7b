use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Mailbox user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Login address
    pub email: String,

    /// Privileges granted to the user (e.g. `admin`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub privileges: Vec<String>,

    /// `active` or `inactive`
    #[serde(default)]
    pub status: String,

    /// Path of the mailbox on the box
    #[serde(default)]
    pub mailbox: String,
}

impl User {
    /// Returns true if the user holds the given privilege
    #[must_use]
    pub fn has_privilege(&self, privilege: &str) -> bool {
        self.privileges.iter().any(|p| p == privilege)
    }

    /// Returns true if the user is an administrator
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.has_privilege("admin")
    }

    /// Returns true if the mailbox is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

/// Users of one mail domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailUsers {
    /// Domain name
    pub domain: String,

    /// Users in that domain
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<User>,
}

/// Forwarding alias
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alias {
    /// Alias address (IDNA form)
    pub address: String,

    /// Alias address as shown to humans
    #[serde(default)]
    pub address_display: String,

    /// Addresses mail is forwarded to
    #[serde(default, deserialize_with = "null_as_default")]
    pub forwards_to: Vec<String>,

    /// Logins allowed to send as this alias
    #[serde(default, deserialize_with = "null_as_default")]
    pub permitted_senders: Vec<String>,

    /// System-reserved alias (postmaster, abuse, ...) that cannot be removed
    #[serde(default)]
    pub required: bool,
}

/// Aliases of one mail domain
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailAliases {
    /// Domain name
    pub domain: String,

    /// Aliases in that domain
    #[serde(default, deserialize_with = "null_as_default")]
    pub aliases: Vec<Alias>,
}
