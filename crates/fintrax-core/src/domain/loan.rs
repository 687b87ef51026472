use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Status};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Loan {
    pub id: Uuid,
    pub name: String,
    pub total_amount: f64,
    pub rate: f64,
    /// Total loan term in months.
    pub term: u32,
    /// Interval, in months, at which a premium falls due.
    pub duration: u32,
    pub premium_amount: f64,
    pub status: Status,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Loan {
    pub fn new(user_id: Uuid, name: String, total_amount: f64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            total_amount,
            rate: 0.0,
            term: 0,
            duration: 0,
            premium_amount: 0.0,
            status: Status::NotStarted,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for Loan {
    fn id(&self) -> Uuid {
        self.id
    }

    fn owner_id(&self) -> Uuid {
        self.user_id
    }

    fn status(&self) -> Status {
        self.status
    }

    fn set_status(&mut self, status: Status) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
