//! System API endpoints.

use crate::transport::ApiRequest;
use crate::MiabClient;
use mailinabox_core::{
    BackupConfig, BackupConfigUpdate, BackupStatus, PackageUpdate, Result, SystemStatus,
};

const STATUS: &str = "/admin/system/status";
const VERSION: &str = "/admin/system/version";
const UPSTREAM_VERSION: &str = "/admin/system/latest-upstream-version";
const UPDATES: &str = "/admin/system/updates";
const UPDATE_PACKAGES: &str = "/admin/system/update-packages";
const PRIVACY: &str = "/admin/system/privacy";
const REBOOT: &str = "/admin/system/reboot";
const BACKUP_STATUS: &str = "/admin/system/backup/status";
const BACKUP_CONFIG: &str = "/admin/system/backup/config";

/// System API endpoints
pub struct SystemApi<'a> {
    client: &'a MiabClient,
}

impl<'a> SystemApi<'a> {
    pub(crate) const fn new(client: &'a MiabClient) -> Self {
        Self { client }
    }

    /// Run the status checks
    ///
    /// This takes a while on the box side.
    pub async fn status(&self) -> Result<Vec<SystemStatus>> {
        self.client.json(ApiRequest::post(STATUS)).await
    }

    /// Installed version, e.g. `v0.46`
    pub async fn version(&self) -> Result<String> {
        self.client.text(ApiRequest::get(VERSION)).await
    }

    /// Latest released version
    pub async fn upstream_version(&self) -> Result<String> {
        self.client.text(ApiRequest::post(UPSTREAM_VERSION)).await
    }

    /// Pending OS package updates
    pub async fn updates(&self) -> Result<Vec<PackageUpdate>> {
        let body = self.client.text(ApiRequest::get(UPDATES)).await?;
        Ok(body.lines().filter_map(PackageUpdate::parse).collect())
    }

    /// Install pending package updates, returning the package manager output
    pub async fn update_packages(&self) -> Result<String> {
        self.client.text(ApiRequest::post(UPDATE_PACKAGES)).await
    }

    /// Whether the box opted out of reporting to the upstream project
    pub async fn privacy(&self) -> Result<bool> {
        self.client.json(ApiRequest::get(PRIVACY)).await
    }

    /// Opt in or out of upstream reporting
    pub async fn set_privacy(&self, private: bool) -> Result<String> {
        let value = if private { "private" } else { "off" };
        self.client
            .status_line(ApiRequest::post(PRIVACY).form("value", value))
            .await
    }

    /// Whether a reboot is pending
    pub async fn reboot_required(&self) -> Result<bool> {
        self.client.json(ApiRequest::get(REBOOT)).await
    }

    /// Ask the box to reboot
    ///
    /// When no reboot is pending the box refuses with an explanatory line.
    /// That line is returned as ordinary text, not as an error.
    pub async fn reboot(&self) -> Result<String> {
        self.client.status_line(ApiRequest::post(REBOOT)).await
    }

    /// Backup history and health
    pub async fn backup_status(&self) -> Result<BackupStatus> {
        self.client.json(ApiRequest::get(BACKUP_STATUS)).await
    }

    /// Current backup configuration
    pub async fn backup_config(&self) -> Result<BackupConfig> {
        self.client.json(ApiRequest::get(BACKUP_CONFIG)).await
    }

    /// Change the backup configuration
    pub async fn set_backup_config(&self, config: &BackupConfigUpdate) -> Result<String> {
        self.client
            .status_line(
                ApiRequest::post(BACKUP_CONFIG)
                    .form("target", config.target.as_str())
                    .form("target_user", config.target_user.as_str())
                    .form("target_pass", config.target_pass.as_str())
                    .form("min_age", config.min_age_in_days.to_string()),
            )
            .await
    }
}
