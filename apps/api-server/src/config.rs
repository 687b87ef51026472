//! Application configuration loaded from environment variables.

use std::env;
use std::time::Duration;

/// A `(limit, window)` pair for one rate limit gate.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitSettings {
    pub limit: u32,
    pub window: Duration,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// High limit, short window - most resource routes.
    pub rate_limit_general: RateLimitSettings,
    /// Low limit, short window - login/register/password routes.
    pub rate_limit_auth: RateLimitSettings,
    /// Very low limit, longer window - one-time-code issuance.
    pub rate_limit_otp: RateLimitSettings,
    /// How often stale rate limit entries are reclaimed.
    pub rate_limit_sweep_interval: Duration,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            rate_limit_general: Self::rate_limit("GENERAL", 100, 60),
            rate_limit_auth: Self::rate_limit("AUTH", 5, 60),
            rate_limit_otp: Self::rate_limit("OTP", 3, 300),
            rate_limit_sweep_interval: Duration::from_secs(
                env_u64("RATE_LIMIT_SWEEP_INTERVAL_SECS").unwrap_or(60),
            ),
        }
    }

    /// Read one gate's settings from `RATE_LIMIT_<NAME>_LIMIT` and
    /// `RATE_LIMIT_<NAME>_WINDOW_SECS`, falling back to defaults.
    fn rate_limit(name: &str, default_limit: u32, default_window_secs: u64) -> RateLimitSettings {
        let limit = env::var(format!("RATE_LIMIT_{name}_LIMIT"))
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(default_limit);
        let window_secs = env_u64(&format!("RATE_LIMIT_{name}_WINDOW_SECS"))
            .unwrap_or(default_window_secs);
        RateLimitSettings {
            limit,
            window: Duration::from_secs(window_secs),
        }
    }
}

fn env_u64(key: &str) -> Option<u64> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
