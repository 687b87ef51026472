//! Fixed-window rate limit gate.
//!
//! Tracks per-key request counts inside a fixed time window. The window
//! boundary is a cliff: once a key's window expires, the next request
//! resets the counter to 1 and starts a fresh window. A background sweeper
//! periodically drops entries whose window has expired so memory stays
//! bounded for keys that stop sending; admission never relies on the
//! sweeper because it re-checks staleness itself.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use fintrax_core::ports::RateLimiter;

/// How often the background sweeper scans for stale entries. Decoupled
/// from any particular window length; a late sweep only delays
/// reclamation, never changes a decision.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(60);

/// Invalid `(limit, window)` configuration. Fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum GateConfigError {
    #[error("rate limit must be greater than zero")]
    ZeroLimit,

    #[error("rate limit window must be greater than zero")]
    ZeroWindow,
}

/// Request counter for one caller within its current window.
#[derive(Debug, Clone)]
struct ClientWindow {
    count: u32,
    window_start: Instant,
}

/// In-memory fixed-window rate limiter keyed by caller identity.
///
/// One coarse mutex guards the whole entry map. `admit` is a short
/// synchronous critical section with no I/O, so contention stays brief;
/// the read-modify-write for a key happens entirely under the lock, which
/// makes per-key decisions linearizable.
pub struct FixedWindowLimiter {
    entries: Mutex<HashMap<String, ClientWindow>>,
    limit: u32,
    window: Duration,
}

impl FixedWindowLimiter {
    /// Create a gate admitting at most `limit` requests per `window`.
    pub fn new(limit: u32, window: Duration) -> Result<Self, GateConfigError> {
        if limit == 0 {
            return Err(GateConfigError::ZeroLimit);
        }
        if window.is_zero() {
            return Err(GateConfigError::ZeroWindow);
        }
        Ok(Self {
            entries: Mutex::new(HashMap::new()),
            limit,
            window,
        })
    }

    /// Decide whether the request identified by `key` may proceed,
    /// counting it if admitted.
    pub fn admit(&self, key: &str) -> bool {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();

        match entries.get_mut(key) {
            Some(entry) => {
                if now.duration_since(entry.window_start) > self.window {
                    // Window expired: hard reset, the triggering request
                    // counts as the first of the new window.
                    entry.count = 1;
                    entry.window_start = now;
                    return true;
                }
                if entry.count >= self.limit {
                    return false;
                }
                entry.count += 1;
                true
            }
            None => {
                entries.insert(
                    key.to_string(),
                    ClientWindow {
                        count: 1,
                        window_start: now,
                    },
                );
                true
            }
        }
    }

    /// Remove entries whose window has expired. Returns how many were
    /// dropped. Never touches an entry still inside its window.
    pub fn sweep(&self) -> usize {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| now.duration_since(entry.window_start) <= self.window);
        before - entries.len()
    }

    /// Number of keys currently tracked.
    pub fn tracked_keys(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Start the periodic reclamation task. The task holds only a weak
    /// handle, so it winds down once the gate itself is dropped.
    pub fn spawn_sweeper(self: &Arc<Self>, every: Duration) -> tokio::task::JoinHandle<()> {
        let gate = Arc::downgrade(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            // The first tick fires immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let Some(gate) = gate.upgrade() else { break };
                let removed = gate.sweep();
                if removed > 0 {
                    tracing::debug!(removed, "reclaimed stale rate limit entries");
                }
            }
        })
    }
}

impl RateLimiter for FixedWindowLimiter {
    fn admit(&self, key: &str) -> bool {
        FixedWindowLimiter::admit(self, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: Duration = Duration::from_secs(60);

    #[test]
    fn test_zero_limit_rejected() {
        assert!(matches!(
            FixedWindowLimiter::new(0, MINUTE),
            Err(GateConfigError::ZeroLimit)
        ));
    }

    #[test]
    fn test_zero_window_rejected() {
        assert!(matches!(
            FixedWindowLimiter::new(100, Duration::ZERO),
            Err(GateConfigError::ZeroWindow)
        ));
    }

    #[test]
    fn test_first_request_always_admitted() {
        let gate = FixedWindowLimiter::new(1, MINUTE).unwrap();
        assert!(gate.admit("10.0.0.1"));
    }

    #[test]
    fn test_admits_up_to_limit_then_rejects() {
        let gate = FixedWindowLimiter::new(3, MINUTE).unwrap();
        assert!(gate.admit("10.0.0.1"));
        assert!(gate.admit("10.0.0.1"));
        assert!(gate.admit("10.0.0.1"));
        assert!(!gate.admit("10.0.0.1"));
        assert!(!gate.admit("10.0.0.1"));
    }

    #[test]
    fn test_keys_are_independent() {
        let gate = FixedWindowLimiter::new(3, MINUTE).unwrap();
        for _ in 0..3 {
            assert!(gate.admit("10.0.0.1"));
        }
        assert!(!gate.admit("10.0.0.1"));
        assert!(gate.admit("10.0.0.2"));
    }

    #[test]
    fn test_window_expiry_resets_counter() {
        let window = Duration::from_millis(40);
        let gate = FixedWindowLimiter::new(3, window).unwrap();
        for _ in 0..3 {
            assert!(gate.admit("10.0.0.1"));
        }
        assert!(!gate.admit("10.0.0.1"));

        std::thread::sleep(window + Duration::from_millis(20));

        // Fresh window: a full burst is admitted again.
        assert!(gate.admit("10.0.0.1"));
        assert!(gate.admit("10.0.0.1"));
        assert!(gate.admit("10.0.0.1"));
        assert!(!gate.admit("10.0.0.1"));
    }

    #[test]
    fn test_rejections_do_not_extend_window() {
        let window = Duration::from_millis(40);
        let gate = FixedWindowLimiter::new(1, window).unwrap();
        assert!(gate.admit("10.0.0.1"));
        for _ in 0..5 {
            assert!(!gate.admit("10.0.0.1"));
        }

        std::thread::sleep(window + Duration::from_millis(20));
        assert!(gate.admit("10.0.0.1"));
    }

    #[test]
    fn test_sweep_removes_only_stale_entries() {
        let window = Duration::from_millis(40);
        let gate = FixedWindowLimiter::new(3, window).unwrap();
        assert!(gate.admit("stale"));
        std::thread::sleep(window + Duration::from_millis(20));
        assert!(gate.admit("active"));
        assert!(gate.admit("active"));

        assert_eq!(gate.sweep(), 1);
        assert_eq!(gate.tracked_keys(), 1);

        // The surviving entry keeps its in-window count: one slot left.
        assert!(gate.admit("active"));
        assert!(!gate.admit("active"));
    }

    #[test]
    fn test_sweep_on_empty_gate() {
        let gate = FixedWindowLimiter::new(3, MINUTE).unwrap();
        assert_eq!(gate.sweep(), 0);
    }

    #[test]
    fn test_concurrent_callers_never_exceed_limit() {
        let limit = 100u32;
        let gate = Arc::new(FixedWindowLimiter::new(limit, MINUTE).unwrap());

        let mut handles = Vec::new();
        for _ in 0..8 {
            let gate = Arc::clone(&gate);
            handles.push(std::thread::spawn(move || {
                let mut admitted = 0u32;
                for _ in 0..50 {
                    if gate.admit("shared-key") {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        assert_eq!(total, limit);
    }

    #[tokio::test]
    async fn test_background_sweeper_reclaims_memory() {
        let window = Duration::from_millis(30);
        let gate = Arc::new(FixedWindowLimiter::new(3, window).unwrap());
        let handle = gate.spawn_sweeper(Duration::from_millis(20));

        assert!(gate.admit("10.0.0.1"));
        assert_eq!(gate.tracked_keys(), 1);

        tokio::time::sleep(Duration::from_millis(120)).await;
        assert_eq!(gate.tracked_keys(), 0);

        handle.abort();
    }
}
