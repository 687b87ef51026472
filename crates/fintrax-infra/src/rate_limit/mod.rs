//! Rate limiting implementation.

mod fixed_window;

pub use fixed_window::{FixedWindowLimiter, GateConfigError, DEFAULT_SWEEP_INTERVAL};
