//! Rate limiting port.

/// Admit-or-reject gate for requests identified by a caller key.
///
/// `admit` is side-effecting: an admitted call counts against the caller's
/// quota for the current window. Rejection is a routine outcome, not an
/// error, so the decision is a plain boolean. Implementations must make
/// the decision atomic per key: two concurrent calls for the same key may
/// never both be admitted when only one slot remains.
pub trait RateLimiter: Send + Sync {
    /// Returns true if the request identified by `key` may proceed.
    fn admit(&self, key: &str) -> bool;
}
