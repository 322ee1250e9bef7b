//! Command-line argument definitions using clap.

use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Command-line interface for the Mail-in-a-Box admin panel
///
/// Manage DNS records, mailboxes, aliases, backups and updates of a box.
/// Connection settings come from flags, MIAB_* environment variables or
/// the config file (see `miab config path`).
#[derive(Parser, Debug)]
#[command(name = "miab")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the box, e.g. https://box.example.com
    #[arg(short, long, env = "MIAB_URL", global = true)]
    pub url: Option<String>,

    /// Admin login address
    #[arg(short, long, env = "MIAB_EMAIL", global = true)]
    pub email: Option<String>,

    /// Admin password or API key
    #[arg(short, long, env = "MIAB_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Custom DNS records and nameservers
    Dns(DnsArgs),

    /// Mail users and aliases
    Mail(MailArgs),

    /// Status, updates, reboot and backups
    System(SystemArgs),

    /// Check the credentials and show the session
    Login,

    /// Invalidate the current session
    Logout,

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// DNS command
// ============================================================================

#[derive(Args, Debug)]
pub struct DnsArgs {
    #[command(subcommand)]
    pub command: DnsCommands,
}

#[derive(Subcommand, Debug)]
pub enum DnsCommands {
    /// Show the secondary nameservers
    Nameservers,

    /// Replace the secondary nameservers (none clears them)
    SetNameservers {
        /// Nameserver hostnames
        hostnames: Vec<String>,
    },

    /// List the zones the box serves
    Zones,

    /// Print the zone file of a zone
    ZoneFile {
        /// Zone name
        zone: String,
    },

    /// List custom records
    ///
    /// Without arguments lists every custom record. With a name only, lists
    /// its A records.
    Records {
        /// Record name
        name: Option<String>,

        /// Record type (A, AAAA, MX, TXT, CNAME, ...)
        #[arg(short = 't', long, requires = "name")]
        record_type: Option<String>,
    },

    /// Add a custom record (A if no type is given)
    Add {
        /// Record name
        name: String,

        /// Record value
        value: String,

        /// Record type
        #[arg(short = 't', long)]
        record_type: Option<String>,
    },

    /// Replace the value of the records with this name and type
    Update {
        /// Record name
        name: String,

        /// New value
        value: String,

        /// Record type
        #[arg(short = 't', long)]
        record_type: Option<String>,
    },

    /// Remove the record with exactly this name, type and value
    Remove {
        /// Record name
        name: String,

        /// Record value
        value: String,

        /// Record type
        #[arg(short = 't', long)]
        record_type: Option<String>,
    },

    /// Every zone with all published records
    Dump,

    /// Regenerate the zone files
    UpdateDns {
        /// Regenerate even if nothing changed
        #[arg(long)]
        force: bool,
    },
}

// ============================================================================
// Mail command
// ============================================================================

#[derive(Args, Debug)]
pub struct MailArgs {
    #[command(subcommand)]
    pub command: MailCommands,
}

#[derive(Subcommand, Debug)]
pub enum MailCommands {
    /// List mail users by domain
    Users,

    /// Create a mailbox
    AddUser {
        /// Mailbox address
        mailbox: String,

        /// Initial password
        user_password: String,

        /// Initial privilege (e.g. admin)
        #[arg(long, default_value = "")]
        privileges: String,
    },

    /// Delete a mailbox
    RemoveUser {
        /// Mailbox address
        mailbox: String,
    },

    /// Grant a privilege
    AddPrivilege {
        /// Mailbox address
        mailbox: String,

        /// Privilege name
        privilege: String,
    },

    /// Revoke a privilege
    RemovePrivilege {
        /// Mailbox address
        mailbox: String,

        /// Privilege name
        privilege: String,
    },

    /// Change a mailbox password
    SetPassword {
        /// Mailbox address
        mailbox: String,

        /// New password
        user_password: String,
    },

    /// Show a user's privileges
    Privileges {
        /// Mailbox address
        mailbox: String,
    },

    /// List mail domains
    Domains,

    /// List aliases by domain
    Aliases,

    /// Create or update an alias
    UpsertAlias {
        /// Alias address
        address: String,

        /// Forward target (repeatable)
        #[arg(short = 'f', long = "forward", required = true)]
        forwards_to: Vec<String>,

        /// Login allowed to send as the alias (repeatable)
        #[arg(short = 's', long = "sender")]
        permitted_senders: Vec<String>,

        /// Fail instead of updating an existing alias
        #[arg(long)]
        no_update: bool,
    },

    /// Remove an alias
    RemoveAlias {
        /// Alias address
        address: String,
    },
}

// ============================================================================
// System command
// ============================================================================

#[derive(Args, Debug)]
pub struct SystemArgs {
    #[command(subcommand)]
    pub command: SystemCommands,
}

#[derive(Subcommand, Debug)]
pub enum SystemCommands {
    /// Run the status checks
    Status,

    /// Installed version
    Version,

    /// Latest released version
    UpstreamVersion,

    /// Pending package updates
    Updates,

    /// Install pending package updates
    UpdatePackages,

    /// Show or change the privacy setting
    Privacy {
        /// New setting
        #[arg(value_enum)]
        set: Option<PrivacySetting>,
    },

    /// Whether a reboot is pending
    RebootStatus,

    /// Reboot the box
    Reboot {
        /// Confirm the reboot
        #[arg(long)]
        yes: bool,
    },

    /// Backup history
    BackupStatus,

    /// Backup configuration
    BackupConfig,

    /// Change the backup configuration
    SetBackupConfig {
        /// Target URI (local, off, s3://..., rsync://..., b2://...)
        target: String,

        /// Target user or access key
        #[arg(long, default_value = "")]
        target_user: String,

        /// Target password or secret key
        #[arg(long, default_value = "")]
        target_pass: String,

        /// Days to keep backups
        #[arg(long, default_value_t = 3)]
        min_age: u32,
    },
}

/// Upstream reporting setting
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivacySetting {
    /// Do not report to the upstream project
    Private,
    /// Allow reporting
    Off,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key (url, email, password, output_format)
        key: String,

        /// Value
        value: String,
    },

    /// Show config file path
    Path,
}
