//! Lifecycle status enumerations.
//!
//! Every domain entity carries a [`Status`]; soft deletion is expressed by
//! tagging a row [`Status::Deleted`]. Rows are never physically erased and
//! every read path filters the deleted variant out.

use serde::{Deserialize, Serialize};

/// Shared lifecycle status for domain entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Status {
    NotStarted = 1,
    InProgress = 2,
    OnHold = 3,
    Cancelled = 4,
    Deleted = 5,
    Completed = 6,
}

impl Status {
    pub fn is_deleted(self) -> bool {
        self == Status::Deleted
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

impl From<Status> for u8 {
    fn from(status: Status) -> u8 {
        status as u8
    }
}

impl TryFrom<u8> for Status {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Status::NotStarted),
            2 => Ok(Status::InProgress),
            3 => Ok(Status::OnHold),
            4 => Ok(Status::Cancelled),
            5 => Ok(Status::Deleted),
            6 => Ok(Status::Completed),
            other => Err(format!("invalid status value: {other}")),
        }
    }
}

/// Account status for users. Registration starts users out as `Inactive`
/// until their email is verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum UserStatus {
    Inactive = 1,
    Active = 2,
    Deleted = 5,
}

impl From<UserStatus> for u8 {
    fn from(status: UserStatus) -> u8 {
        status as u8
    }
}

impl TryFrom<u8> for UserStatus {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(UserStatus::Inactive),
            2 => Ok(UserStatus::Active),
            5 => Ok(UserStatus::Deleted),
            other => Err(format!("invalid user status value: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_as_integer() {
        let json = serde_json::to_string(&Status::Deleted).unwrap();
        assert_eq!(json, "5");
    }

    #[test]
    fn test_status_deserializes_from_integer() {
        let status: Status = serde_json::from_str("2").unwrap();
        assert_eq!(status, Status::InProgress);
    }

    #[test]
    fn test_invalid_status_rejected() {
        let result: Result<Status, _> = serde_json::from_str("7");
        assert!(result.is_err());
    }

    #[test]
    fn test_is_deleted() {
        assert!(Status::Deleted.is_deleted());
        assert!(!Status::Completed.is_deleted());
    }
}
