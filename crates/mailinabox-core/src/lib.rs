//! Core types and errors for the Mail-in-a-Box admin API client.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - **Types**: Strongly-typed snapshots of everything the admin API returns
//!   (DNS records and zones, mail users and aliases, system status, backups,
//!   sessions)
//! - **Errors**: The small error taxonomy in [`MiabError`]
//!
//! # Example
//!
//! ```rust
//! use mailinabox_core::Record;
//!
//! let record = Record::new("example.com", "MX", "10 box.example.com.");
//! assert_eq!(record.record_type, "MX");
//! ```

#![doc(html_root_url = "https://docs.rs/mailinabox-core/0.1.0")]

mod error;
pub mod types;

pub use error::{MiabError, Result};
pub use types::*;
