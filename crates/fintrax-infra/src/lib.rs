//! # Fintrax Infrastructure
//!
//! Concrete implementations of the ports defined in `fintrax-core`:
//! the rate limit gate, JWT + Argon2 authentication, in-memory
//! persistence, and mail delivery.

pub mod auth;
pub mod mailer;
pub mod rate_limit;
pub mod repository;

pub use auth::{Argon2PasswordService, JwtTokenService};
pub use mailer::LogMailer;
pub use rate_limit::{FixedWindowLimiter, GateConfigError};
pub use repository::{InMemoryUserRepository, MemoryStore};
