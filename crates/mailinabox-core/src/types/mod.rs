mod common;
mod dns;
mod mail;
mod session;
mod system;

pub use dns::*;
pub use mail::*;
pub use session::*;
pub use system::*;
