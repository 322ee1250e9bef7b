//! API endpoint modules.

mod dns;
mod mail;
mod system;
mod user;

pub use dns::DnsApi;
pub use mail::MailApi;
pub use system::SystemApi;
pub use user::UserApi;
