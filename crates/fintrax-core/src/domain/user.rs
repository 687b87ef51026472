use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::UserStatus;

/// One-time codes are six digits and stay valid for ten minutes.
pub const OTP_VALIDITY_MINUTES: i64 = 10;
/// A fresh code may be requested once the previous one is this old.
pub const OTP_REGENERATION_MINUTES: i64 = 2;

/// User entity - represents an account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub status: UserStatus,
    /// Pending one-time code for email verification / password reset.
    #[serde(skip_serializing)]
    pub otp: Option<u32>,
    #[serde(skip_serializing)]
    pub otp_issued_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new unverified user with generated ID and timestamps.
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            status: UserStatus::Inactive,
            otp: None,
            otp_issued_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Store a freshly issued one-time code.
    pub fn issue_otp(&mut self, code: u32) {
        self.otp = Some(code);
        self.otp_issued_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Check whether a submitted code matches and is still within its
    /// validity window.
    pub fn otp_matches(&self, code: u32) -> bool {
        match (self.otp, self.otp_issued_at) {
            (Some(stored), Some(issued)) => {
                stored == code
                    && Utc::now().signed_duration_since(issued).num_minutes()
                        < OTP_VALIDITY_MINUTES
            }
            _ => false,
        }
    }

    /// Whether enough time has passed since the last code to issue a new one.
    pub fn can_regenerate_otp(&self) -> bool {
        match self.otp_issued_at {
            Some(issued) => {
                Utc::now().signed_duration_since(issued).num_minutes()
                    >= OTP_REGENERATION_MINUTES
            }
            None => true,
        }
    }

    /// Clear any pending code, e.g. after successful verification.
    pub fn clear_otp(&mut self) {
        self.otp = None;
        self.otp_issued_at = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
    }

    #[test]
    fn test_new_user_is_inactive() {
        let user = test_user();
        assert_eq!(user.status, UserStatus::Inactive);
        assert!(user.otp.is_none());
    }

    #[test]
    fn test_otp_matches_only_stored_code() {
        let mut user = test_user();
        user.issue_otp(123456);
        assert!(user.otp_matches(123456));
        assert!(!user.otp_matches(654321));
    }

    #[test]
    fn test_fresh_otp_blocks_regeneration() {
        let mut user = test_user();
        assert!(user.can_regenerate_otp());
        user.issue_otp(123456);
        assert!(!user.can_regenerate_otp());
    }

    #[test]
    fn test_clear_otp_invalidates_code() {
        let mut user = test_user();
        user.issue_otp(123456);
        user.clear_otp();
        assert!(!user.otp_matches(123456));
    }
}
