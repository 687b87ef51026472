//! Data Transfer Objects - request/response types for the API.
//!
//! Create requests carry the required fields; update requests are partial
//! (every field optional, absent fields left untouched). Entity payloads in
//! responses serialize the domain types directly.

mod auth;
mod finance;
mod tasks;

pub use auth::*;
pub use finance::*;
pub use tasks::*;
