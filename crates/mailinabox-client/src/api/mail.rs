//! Mail user and alias API endpoints.

use crate::transport::ApiRequest;
use crate::MiabClient;
use mailinabox_core::{MailAliases, MailUsers, Result};

const USERS: &str = "/admin/mail/users";
const USERS_ADD: &str = "/admin/mail/users/add";
const USERS_REMOVE: &str = "/admin/mail/users/remove";
const USERS_PASSWORD: &str = "/admin/mail/users/password";
const PRIVILEGES: &str = "/admin/mail/users/privileges";
const PRIVILEGES_ADD: &str = "/admin/mail/users/privileges/add";
const PRIVILEGES_REMOVE: &str = "/admin/mail/users/privileges/remove";
const DOMAINS: &str = "/admin/mail/domains";
const ALIASES: &str = "/admin/mail/aliases";
const ALIASES_ADD: &str = "/admin/mail/aliases/add";
const ALIASES_REMOVE: &str = "/admin/mail/aliases/remove";

/// Mail user and alias API endpoints
pub struct MailApi<'a> {
    client: &'a MiabClient,
}

impl<'a> MailApi<'a> {
    pub(crate) const fn new(client: &'a MiabClient) -> Self {
        Self { client }
    }

    /// List mail users grouped by domain
    pub async fn users(&self) -> Result<Vec<MailUsers>> {
        self.client
            .json(ApiRequest::get(USERS).query("format", "json"))
            .await
    }

    /// Create a mailbox
    ///
    /// `privileges` is sent as-is; use an empty string for a regular user.
    pub async fn add_user(&self, email: &str, password: &str, privileges: &str) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::post(USERS_ADD)
                    .form("email", email)
                    .form("password", password)
                    .form("privileges", privileges),
            )
            .await
    }

    /// Remove a mailbox
    pub async fn remove_user(&self, email: &str) -> Result<String> {
        self.client
            .status_line(ApiRequest::post(USERS_REMOVE).form("email", email))
            .await
    }

    /// Grant a privilege
    pub async fn add_user_privilege(&self, email: &str, privilege: &str) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::post(PRIVILEGES_ADD)
                    .form("email", email)
                    .form("privilege", privilege),
            )
            .await
    }

    /// Revoke a privilege
    pub async fn remove_user_privilege(&self, email: &str, privilege: &str) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::post(PRIVILEGES_REMOVE)
                    .form("email", email)
                    .form("privilege", privilege),
            )
            .await
    }

    /// Change a user's password
    pub async fn set_user_password(&self, email: &str, password: &str) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::post(USERS_PASSWORD)
                    .form("email", email)
                    .form("password", password),
            )
            .await
    }

    /// Get a user's privileges
    ///
    /// Returned exactly as the box sends it: one newline-delimited string.
    pub async fn user_privileges(&self, email: &str) -> Result<String> {
        self.client
            .text(ApiRequest::get(PRIVILEGES).query("email", email))
            .await
    }

    /// List the domains that receive mail
    pub async fn domains(&self) -> Result<Vec<String>> {
        let body = self.client.text(ApiRequest::get(DOMAINS)).await?;
        Ok(body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }

    /// List aliases grouped by domain
    pub async fn aliases(&self) -> Result<Vec<MailAliases>> {
        self.client
            .json(ApiRequest::get(ALIASES).query("format", "json"))
            .await
    }

    /// Create an alias, or update it when `update_if_exists` is set
    ///
    /// Forward targets and permitted senders are sent comma separated. An
    /// empty `permitted_senders` lets any user with a forward target send
    /// as the alias.
    pub async fn upsert_alias<F, P>(
        &self,
        update_if_exists: bool,
        address: &str,
        forwards_to: F,
        permitted_senders: P,
    ) -> Result<String>
    where
        F: IntoIterator,
        F::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        self.client
            .status_line(
                ApiRequest::post(ALIASES_ADD)
                    .form("update_if_exists", if update_if_exists { "1" } else { "0" })
                    .form("address", address)
                    .form("forwards_to", join(forwards_to))
                    .form("permitted_senders", join(permitted_senders)),
            )
            .await
    }

    /// Remove an alias
    ///
    /// The box refuses to remove required aliases; its answer is surfaced
    /// unchanged.
    pub async fn remove_alias(&self, address: &str) -> Result<String> {
        self.client
            .status_line(ApiRequest::post(ALIASES_REMOVE).form("address", address))
            .await
    }
}

fn join<I>(addresses: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    addresses
        .into_iter()
        .map(|a| a.as_ref().trim().to_string())
        .filter(|a| !a.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
