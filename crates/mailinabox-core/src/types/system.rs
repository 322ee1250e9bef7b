use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::null_as_default;

/// Timestamp format of [`Backup::date`]
pub const BACKUP_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// One line of the system status checks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemStatus {
    /// `heading`, `ok`, `warning` or `error`
    #[serde(rename = "type")]
    pub status_type: String,

    /// Headline text
    #[serde(default)]
    pub text: String,

    /// Detail lines
    #[serde(default, deserialize_with = "null_as_default")]
    pub extra: Vec<ExtraStatus>,
}

impl SystemStatus {
    /// Section heading
    #[must_use]
    pub fn is_heading(&self) -> bool {
        self.status_type == "heading"
    }

    /// Passing check
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status_type == "ok"
    }

    /// Check with a warning
    #[must_use]
    pub fn is_warning(&self) -> bool {
        self.status_type == "warning"
    }

    /// Failing check
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status_type == "error"
    }
}

/// Detail line attached to a [`SystemStatus`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraStatus {
    /// Render in a fixed-width font
    #[serde(default)]
    pub monospace: bool,

    /// Detail text
    #[serde(default)]
    pub text: String,
}

/// Pending OS package update
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PackageUpdate {
    /// Package name
    pub name: String,

    /// Version that would be installed (empty if the line carried none)
    pub version: String,
}

impl PackageUpdate {
    /// Parse a line such as `libxau6 (1:1.0.8-1ubuntu1)`
    ///
    /// Returns `None` for blank lines.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (name, version) = match line.split_once(" (") {
            Some((name, rest)) => (name.trim(), rest.strip_suffix(')').unwrap_or(rest).trim()),
            None => (line, ""),
        };

        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

impl std::fmt::Display for PackageUpdate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.version.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.version)
        }
    }
}

/// A backup set stored on the backup target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Backup {
    /// Backup time, e.g. `20200801T023706Z`
    pub date: String,

    /// Age of the backup in words
    #[serde(default)]
    pub date_delta: String,

    /// Backup time in the box's local zone
    #[serde(default)]
    pub date_str: String,

    /// When the backup will be pruned, in words
    #[serde(default)]
    pub deleted_in: String,

    /// Full (as opposed to incremental) backup
    #[serde(default)]
    pub full: bool,

    /// Size in bytes
    #[serde(default)]
    pub size: u64,

    /// Number of volumes
    #[serde(default)]
    pub volumes: u32,
}

impl Backup {
    /// Parse [`Backup::date`]
    #[must_use]
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        NaiveDateTime::parse_from_str(&self.date, BACKUP_DATE_FORMAT)
            .ok()
            .map(|naive| naive.and_utc())
    }
}

/// Backup history and health
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupStatus {
    /// Known backups, newest first
    #[serde(default, deserialize_with = "null_as_default")]
    pub backups: Vec<Backup>,

    /// Bytes on the target that belong to no backup
    #[serde(default)]
    pub unmatched_file_size: u64,

    /// Error reported by the backup tool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BackupStatus {
    /// Total bytes used by all backups
    #[must_use]
    pub fn total_size(&self) -> u64 {
        self.backups.iter().map(|b| b.size).sum()
    }
}

/// Backup configuration as reported by the box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfig {
    /// File holding the encryption passphrase
    #[serde(default)]
    pub enc_pw_file: String,

    /// Local directory used by `file://` targets
    #[serde(default)]
    pub file_target_directory: String,

    /// Minimum age before a backup may be deleted
    #[serde(default)]
    pub min_age_in_days: u32,

    /// Public key the box uses for `rsync://` targets
    #[serde(default)]
    pub ssh_pub_key: String,

    /// Target URI (`local`, `off`, `s3://...`, `rsync://...`, `b2://...`)
    #[serde(default)]
    pub target: String,

    /// Target user or access key
    #[serde(default)]
    pub target_user: String,

    /// Target password or secret key
    #[serde(default)]
    pub target_pass: String,
}

/// New backup configuration to send to the box
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupConfigUpdate {
    /// Target URI
    pub target: String,

    /// Target user or access key
    pub target_user: String,

    /// Target password or secret key
    pub target_pass: String,

    /// Minimum age before a backup may be deleted
    pub min_age_in_days: u32,
}

impl BackupConfigUpdate {
    /// Create an update
    #[must_use]
    pub fn new(
        target: impl Into<String>,
        target_user: impl Into<String>,
        target_pass: impl Into<String>,
        min_age_in_days: u32,
    ) -> Self {
        Self {
            target: target.into(),
            target_user: target_user.into(),
            target_pass: target_pass.into(),
            min_age_in_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_package_update_parse() {
        let update = PackageUpdate::parse("libxau6 (1:1.0.8-1ubuntu1)").unwrap();
        assert_eq!(update.name, "libxau6");
        assert_eq!(update.version, "1:1.0.8-1ubuntu1");
        assert_eq!(update.to_string(), "libxau6 (1:1.0.8-1ubuntu1)");

        let bare = PackageUpdate::parse("  cloud-init ").unwrap();
        assert_eq!(bare.name, "cloud-init");
        assert!(bare.version.is_empty());

        assert!(PackageUpdate::parse("   ").is_none());
    }

    #[test]
    fn test_backup_timestamp() {
        let backup = Backup {
            date: "20200801T023706Z".into(),
            ..Backup::default()
        };
        let ts = backup.timestamp().unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2020, 8, 1));
        assert_eq!((ts.hour(), ts.minute(), ts.second()), (2, 37, 6));

        let garbage = Backup {
            date: "yesterday".into(),
            ..Backup::default()
        };
        assert!(garbage.timestamp().is_none());
    }

    #[test]
    fn test_status_kinds() {
        let status: SystemStatus =
            serde_json::from_str(r#"{"type":"heading","text":"System","extra":null}"#).unwrap();
        assert!(status.is_heading());
        assert!(!status.is_error());
        assert!(status.extra.is_empty());
    }

    #[test]
    fn test_backup_status_total_size() {
        let status = BackupStatus {
            backups: vec![
                Backup {
                    size: 10,
                    ..Backup::default()
                },
                Backup {
                    size: 32,
                    ..Backup::default()
                },
            ],
            ..BackupStatus::default()
        };
        assert_eq!(status.total_size(), 42);
    }
}
