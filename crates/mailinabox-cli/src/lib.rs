//! # mailinabox-cli
//!
//! Command-line interface for the Mail-in-a-Box admin API.
//!
//! ## Features
//!
//! - **DNS**: custom records, secondary nameservers, zone files, full dumps
//! - **Mail**: users, privileges, passwords, aliases
//! - **System**: status checks, updates, privacy, reboot, backups
//! - **Multiple output formats**: pretty text, JSON, YAML

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
