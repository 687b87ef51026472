//! Ports - trait abstractions implemented by the infrastructure layer.

mod auth;
mod mailer;
mod rate_limit;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use mailer::{MailError, Mailer};
pub use rate_limit::RateLimiter;
pub use repository::{Store, UserRepository};
