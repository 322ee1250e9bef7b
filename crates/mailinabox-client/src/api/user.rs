//! Session API endpoints.

use crate::transport::ApiRequest;
use crate::MiabClient;
use mailinabox_core::{MiabError, Result, Session};
use tracing::debug;

const LOGIN: &str = "/admin/login";
const LOGOUT: &str = "/admin/logout";

/// Login and logout endpoints
pub struct UserApi<'a> {
    client: &'a MiabClient,
}

impl<'a> UserApi<'a> {
    pub(crate) const fn new(client: &'a MiabClient) -> Self {
        Self { client }
    }

    /// Exchange the client's credentials for a session
    ///
    /// Fails with [`MiabError::Api`] when the box rejects the credentials,
    /// e.g. `invalid: Incorrect username or password`.
    pub async fn login(&self) -> Result<Session> {
        let session = self.client.json(ApiRequest::get(LOGIN)).await?;
        let session = check(session)?;
        debug!(email = %session.email, "logged in");
        Ok(session)
    }

    /// Invalidate the current session
    pub async fn logout(&self) -> Result<Session> {
        let session = self.client.json(ApiRequest::post(LOGOUT)).await?;
        check(session)
    }
}

fn check(session: Session) -> Result<Session> {
    if session.is_ok() {
        Ok(session)
    } else {
        Err(MiabError::api(
            &session.status,
            session.reason.as_deref().unwrap_or_default(),
        ))
    }
}
