//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::output::OutputFormat;

/// Environment variable that points at an alternative config file.
pub const CONFIG_ENV: &str = "MIAB_CONFIG";

/// CLI configuration.
///
/// The password is stored in plaintext; on Unix the file is kept readable
/// by its owner only (mode 0600).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the box.
    pub url: Option<String>,

    /// Admin login address.
    pub email: Option<String>,

    /// Admin password or API key.
    pub password: Option<String>,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let dirs = ProjectDirs::from("org", "mailinabox", "miab")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from `path`, defaulting when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to `path`, readable by the owner only.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        write_private(path, &content)
            .map_err(|e| anyhow::anyhow!("Cannot write config file {}: {}", path.display(), e))?;

        Ok(())
    }

    /// Set a value by key name.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "url" => self.url = Some(value.to_string()),
            "email" => self.email = Some(value.to_string()),
            "password" => self.password = Some(value.to_string()),
            "output_format" | "output" => self.output_format = Some(value.parse()?),
            _ => anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 url            - Base URL of the box\n  \
                 email          - Admin login address\n  \
                 password       - Admin password or API key\n  \
                 output_format  - Default output format (pretty/json/yaml)",
                key
            ),
        }
        Ok(())
    }

    /// Copy with the password replaced by a mask.
    pub fn masked(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

#[cfg(unix)]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = std::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    // `mode` only applies to newly created files
    file.set_permissions(std::fs::Permissions::from_mode(0o600))?;
    file.write_all(content.as_bytes())
}

#[cfg(not(unix))]
fn write_private(path: &Path, content: &str) -> std::io::Result<()> {
    std::fs::write(path, content)
}
