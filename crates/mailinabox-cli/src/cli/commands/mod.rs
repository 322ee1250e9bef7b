//! Command implementations.

pub mod config;
pub mod dns;
pub mod mail;
pub mod session;
pub mod system;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Clone)]
pub struct Context {
    /// Base URL of the box
    pub url: Option<String>,

    /// Admin login address
    pub email: Option<String>,

    /// Admin password or API key
    pub password: Option<String>,

    /// Output format
    pub output_format: OutputFormat,

    /// Verbose output
    pub verbose: bool,
}

impl std::fmt::Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("url", &self.url)
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("output_format", &self.output_format)
            .field("verbose", &self.verbose)
            .finish()
    }
}

impl Context {
    /// Get a connection setting, returning an error if not set.
    fn require<'a>(value: Option<&'a str>, flag: &str, env: &str, key: &str) -> anyhow::Result<&'a str> {
        value.filter(|v| !v.is_empty()).ok_or_else(|| {
            anyhow::anyhow!(
                "{key} required.\n\n\
                 Set it with one of:\n  \
                 1. {flag} <VALUE>\n  \
                 2. {env} environment variable\n  \
                 3. miab config set {key} <VALUE>"
            )
        })
    }

    /// Create a client from the resolved connection settings.
    pub fn client(&self) -> anyhow::Result<mailinabox::MiabClient> {
        let url = Self::require(self.url.as_deref(), "--url", "MIAB_URL", "url")?;
        let email = Self::require(self.email.as_deref(), "--email", "MIAB_EMAIL", "email")?;
        let password =
            Self::require(self.password.as_deref(), "--password", "MIAB_PASSWORD", "password")?;

        tracing::debug!(url, email, "connecting");
        Ok(mailinabox::MiabClient::new(url, email, password)?)
    }
}
