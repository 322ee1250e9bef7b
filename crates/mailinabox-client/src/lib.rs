//! HTTP client for the Mail-in-a-Box admin API.
//!
//! This crate provides the main [`MiabClient`] for managing DNS records,
//! mail users and aliases, and system operations of a Mail-in-a-Box box.
//!
//! Every call is a single Basic-Auth request. Responses come back as JSON,
//! bare text or a short HTML status line depending on the endpoint; the
//! [`decode`] module turns each of them into a typed result or a
//! [`MiabError`].

#![doc(html_root_url = "https://docs.rs/mailinabox-client/0.1.0")]

mod client;
mod config;
pub mod api;
pub mod decode;
pub mod transport;

pub use client::{MiabClient, MiabClientBuilder};
pub use config::*;
pub use decode::{Decoded, ResponseShape};
pub use mailinabox_core::{MiabError, Result};
pub use transport::{ApiRequest, RawResponse, ReqwestTransport, Transport};
