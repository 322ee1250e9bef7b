//! Typed Rust client for the Mail-in-a-Box admin API.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use mailinabox::{MiabClient, Record};
//!
//! #[tokio::main]
//! async fn main() -> mailinabox::Result<()> {
//!     let client = MiabClient::new("https://box.example.com", "admin@example.com", "secret")?;
//!
//!     // Who am I?
//!     let session = client.user().login().await?;
//!     println!("Privileges: {:?}", session.privileges);
//!
//!     // Publish a record
//!     let ack = client
//!         .dns()
//!         .add_record(&Record::new("www.example.com", "CNAME", "example.com."))
//!         .await?;
//!     println!("{ack}");
//!
//!     // Every zone with its records
//!     for zone in client.dns().dump().await? {
//!         println!("{}: {} records", zone.zone, zone.records.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/mailinabox/0.1.0")]

// Re-export core types
pub use mailinabox_core::*;

// Re-export client
pub use mailinabox_client::{
    api, decode, transport, ApiRequest, Credentials, Decoded, MiabClient, MiabClientBuilder,
    RawResponse, ReqwestTransport, ResponseShape, Transport, DEFAULT_TIMEOUT,
};
